//! Europeana search URL builders
//!
//! Europeana exposes licensing through its RIGHTS facet, so the builders
//! fold the licensing filters into the query string itself: the base query
//! restricts results to Creative-Commons-licensed works, and the
//! commercial/modify filters exclude the `*nc*` and `*nd*` rights buckets.

use crate::models::{SearchRequest, UrlInfo};

const BASE_URL: &str = "https://www.europeana.eu/en/search";

/// Compose the RIGHTS-facet query for a search request
fn rights_query(search: &SearchRequest) -> String {
    // search cc licensed works
    let mut query = format!("{} AND RIGHTS:*creative*", search.q);

    if let Some(filters) = search.filters {
        if filters.commercial {
            query.push_str(" AND NOT RIGHTS:*nc*");
            if filters.modify {
                query.push_str(" AND NOT RIGHTS:*nd*");
            }
        }
    }

    query
}

pub fn audio(search: &SearchRequest) -> UrlInfo {
    UrlInfo::new(BASE_URL)
        .with_param("page", "1")
        .with_param("qf", r#"TYPE:"SOUND""#)
        .with_param("query", rights_query(search))
}

pub fn video(search: &SearchRequest) -> UrlInfo {
    UrlInfo::new(BASE_URL)
        .with_param("page", "1")
        .with_param("qf", r#"TYPE:"VIDEO""#)
        .with_param("query", rights_query(search))
}
