//! YouTube search URL builder

use crate::models::{SearchRequest, UrlInfo};

const BASE_URL: &str = "https://www.youtube.com/results";

/// Opaque filter preset restricting results to Creative Commons licensed
/// videos. Already percent-encoded; must reach the final URL byte-for-byte.
const CC_LICENSE_PRESET: &str = "EgIwAQ%3D%3D";

pub fn video(search: &SearchRequest) -> UrlInfo {
    UrlInfo::new(BASE_URL)
        .with_param("search_query", search.q.clone())
        .with_raw_param("sp", CC_LICENSE_PRESET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QueryValue;

    #[test]
    fn test_license_preset_is_raw() {
        let info = video(&SearchRequest::new("timelapse"));
        assert_eq!(info.query[1], ("sp", QueryValue::Raw("EgIwAQ%3D%3D")));
    }
}
