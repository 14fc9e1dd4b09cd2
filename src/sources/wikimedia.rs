//! Wikimedia Commons search URL builders
//!
//! Commons has no licensing filter worth forwarding (everything hosted
//! there is freely licensed), so both builders only narrow by file type.

use crate::models::{SearchRequest, UrlInfo};

const BASE_URL: &str = "https://commons.wikimedia.org/w/index.php";

/// Render the `advancedSearch-current` filter state.
///
/// Commons sends this alongside the plain `filetype:` clause. The platform
/// integration uses the audio filter for video searches as well; the video
/// builder keeps that behavior so generated URLs match what the platform
/// actually accepts (see the integration tests before changing this).
fn advanced_search_filter() -> String {
    serde_json::json!({ "fields": { "filetype": "audio" } }).to_string()
}

pub fn audio(search: &SearchRequest) -> UrlInfo {
    UrlInfo::new(BASE_URL)
        .with_param("sort", "relevance")
        .with_param("search", format!("{} filetype:audio", search.q))
        .with_param("title", "Special:Search")
        .with_param("advancedSearch-current", advanced_search_filter())
}

pub fn video(search: &SearchRequest) -> UrlInfo {
    UrlInfo::new(BASE_URL)
        .with_param("sort", "relevance")
        .with_param("search", format!("{} filetype:video", search.q))
        .with_param("title", "Special:Search")
        .with_param("advancedSearch-current", advanced_search_filter())
}
