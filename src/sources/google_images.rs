//! Google Images search URL builder
//!
//! Licensing maps onto the four-level `tbs` usage-rights parameter:
//!
//! - `sur:f`   noncommercial reuse (default)
//! - `sur:fc`  commercial reuse
//! - `sur:fm`  noncommercial reuse with modification
//! - `sur:fmc` commercial reuse with modification

use crate::models::{SearchRequest, UrlInfo};

const BASE_URL: &str = "https://www.google.com/search";

pub fn image(search: &SearchRequest) -> UrlInfo {
    let mut usage = "sur:f";

    if let Some(filters) = search.filters {
        if filters.commercial {
            // Override ladder matches the platform integration verbatim;
            // the sur:fm arm is shadowed whenever both flags are set.
            usage = "sur:fc";
            if filters.modify {
                usage = "sur:fm";
            }
            if filters.commercial && filters.modify {
                usage = "sur:fmc";
            }
        }
    }

    UrlInfo::new(BASE_URL)
        .with_param("tbm", "isch") // image search mode
        .with_param("tbs", usage)
        // opaque marker Google attaches to advanced/filtered searches
        .with_param("ved", "0ahUKEwjoqOr_2dLqAhXNlnIEHWoFDysQ4dUDCAY")
        .with_param("q", search.q.clone())
}
