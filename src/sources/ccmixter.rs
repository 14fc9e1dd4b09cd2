//! ccMixter search URL builder

use crate::models::{SearchRequest, UrlInfo};

// dig.ccmixter.org has no https endpoint
const BASE_URL: &str = "http://dig.ccmixter.org/search";

pub fn audio(search: &SearchRequest) -> UrlInfo {
    UrlInfo::new(BASE_URL)
        .with_param("lic", "open")
        .with_param("searchp", search.q.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QueryValue;

    #[test]
    fn test_fixed_open_license_param() {
        let info = audio(&SearchRequest::new("drum loop"));
        assert_eq!(info.base_url, "http://dig.ccmixter.org/search");
        assert_eq!(
            info.query,
            vec![
                ("lic", QueryValue::Text("open".to_string())),
                ("searchp", QueryValue::Text("drum loop".to_string())),
            ]
        );
    }
}
