//! Open Clip Art Library search URL builder

use crate::models::{SearchRequest, UrlInfo};

const BASE_URL: &str = "http://www.openclipart.org/search/";

pub fn image(search: &SearchRequest) -> UrlInfo {
    UrlInfo::new(BASE_URL).with_param("query", search.q.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QueryValue;

    #[test]
    fn test_forwards_query_verbatim() {
        let info = image(&SearchRequest::new("anchor"));
        assert_eq!(info.base_url, "http://www.openclipart.org/search/");
        assert_eq!(
            info.query,
            vec![("query", QueryValue::Text("anchor".to_string()))]
        );
    }
}
