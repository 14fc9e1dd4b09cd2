//! Jamendo search URL builder
//!
//! Jamendo tracks are Creative Commons licensed across the board, so the
//! builder forwards the query as-is with no filter logic.

use crate::models::{SearchRequest, UrlInfo};

const BASE_URL: &str = "https://www.jamendo.com/search/tracks";

pub fn audio(search: &SearchRequest) -> UrlInfo {
    UrlInfo::new(BASE_URL).with_param("q", search.q.clone())
}
