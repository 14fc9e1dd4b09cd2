//! SoundCloud search URL builder
//!
//! SoundCloud exposes licensing through the `filter.license` parameter.
//! The default permits sharing; the commercial filter upgrades to
//! commercial use, and the modify filter on top of it upgrades again to
//! commercial modification. The checks run in that order, last write wins.

use crate::models::{SearchRequest, UrlInfo};

const BASE_URL: &str = "https://soundcloud.com/search/sounds";

pub fn audio(search: &SearchRequest) -> UrlInfo {
    let mut license = "to_share";

    if let Some(filters) = search.filters {
        if filters.commercial {
            license = "to_use_commercially";
            if filters.modify {
                license = "to_modify_commercially";
            }
        }
    }

    UrlInfo::new(BASE_URL)
        .with_param("q", search.q.clone())
        .with_param("filter.license", license)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QueryValue, SearchFilters};

    fn license_param(search: &SearchRequest) -> QueryValue {
        audio(search).query[1].1.clone()
    }

    #[test]
    fn test_default_license_is_to_share() {
        assert_eq!(
            license_param(&SearchRequest::new("x")),
            QueryValue::Text("to_share".to_string())
        );
    }

    #[test]
    fn test_commercial_filter_upgrades_license() {
        let search = SearchRequest::new("x").with_filters(SearchFilters {
            commercial: true,
            modify: false,
        });
        assert_eq!(
            license_param(&search),
            QueryValue::Text("to_use_commercially".to_string())
        );
    }

    #[test]
    fn test_modify_filter_wins_when_both_set() {
        let search = SearchRequest::new("x").with_filters(SearchFilters {
            commercial: true,
            modify: true,
        });
        assert_eq!(
            license_param(&search),
            QueryValue::Text("to_modify_commercially".to_string())
        );
    }

    #[test]
    fn test_modify_alone_keeps_default() {
        let search = SearchRequest::new("x").with_filters(SearchFilters {
            commercial: false,
            modify: true,
        });
        assert_eq!(
            license_param(&search),
            QueryValue::Text("to_share".to_string())
        );
    }
}
