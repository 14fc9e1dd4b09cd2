//! URL utilities for consistent URL handling
//!
//! This module provides the query-string serializer used by the legacy
//! source resolver, plus basic URL validation helpers.

use url::Url;

use crate::models::QueryValue;

/// URL utilities for consistent URL handling
pub struct UrlUtils;

impl UrlUtils {
    /// Parse and validate a URL
    ///
    /// # Arguments
    ///
    /// * `url` - The URL string to validate
    ///
    /// # Returns
    ///
    /// * `Ok(Url)` - Successfully parsed URL
    /// * `Err(url::ParseError)` - Parse error
    pub fn parse_and_validate(url: &str) -> Result<Url, url::ParseError> {
        Url::parse(url)
    }

    /// Append a query parameter list to a base URL
    ///
    /// Plain-text values are percent-encoded; raw values are platform
    /// literals that arrive already encoded (e.g. `%3D%3D` sequences) and
    /// are appended verbatim so they are never double-encoded. Parameter
    /// order is preserved.
    ///
    /// # Arguments
    ///
    /// * `base` - The base URL to append to
    /// * `params` - Ordered `(key, value)` pairs
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The base URL with the query string appended
    /// * `Err(url::ParseError)` - The base URL is not a valid URL
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meta_search::models::QueryValue;
    /// use meta_search::utils::url::UrlUtils;
    ///
    /// let url = UrlUtils::append_query(
    ///     "https://example.com/search",
    ///     &[("q", QueryValue::Text("birds of prey".to_string()))],
    /// )
    /// .unwrap();
    /// assert_eq!(url, "https://example.com/search?q=birds%20of%20prey");
    /// ```
    pub fn append_query(
        base: &str,
        params: &[(&'static str, QueryValue)],
    ) -> Result<String, url::ParseError> {
        Self::parse_and_validate(base)?;

        if params.is_empty() {
            return Ok(base.to_string());
        }

        let query_string = params
            .iter()
            .map(|(key, value)| match value {
                QueryValue::Text(text) => {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(text))
                }
                QueryValue::Raw(raw) => format!("{}={}", urlencoding::encode(key), raw),
            })
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{base}?{query_string}"))
    }

    /// Check if a URL is valid
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to check
    ///
    /// # Returns
    ///
    /// `true` if the URL is valid, `false` otherwise
    pub fn is_valid(url: &str) -> bool {
        Self::parse_and_validate(url).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_query_encodes_text_values() {
        let url = UrlUtils::append_query(
            "https://example.com/search",
            &[
                ("q", QueryValue::Text("red pandas AND NOT *nc*".to_string())),
                ("page", QueryValue::Text("1".to_string())),
            ],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://example.com/search?q=red%20pandas%20AND%20NOT%20%2Anc%2A&page=1"
        );
    }

    #[test]
    fn test_append_query_leaves_raw_values_untouched() {
        let url = UrlUtils::append_query(
            "https://example.com/results",
            &[("sp", QueryValue::Raw("EgIwAQ%3D%3D"))],
        )
        .unwrap();
        assert_eq!(url, "https://example.com/results?sp=EgIwAQ%3D%3D");
        assert!(!url.contains("%253D"));
    }

    #[test]
    fn test_append_query_without_params_returns_base() {
        let url = UrlUtils::append_query("https://example.com/search", &[]).unwrap();
        assert_eq!(url, "https://example.com/search");
    }

    #[test]
    fn test_append_query_rejects_invalid_base() {
        assert!(UrlUtils::append_query("not-a-url", &[]).is_err());
    }

    #[test]
    fn test_append_query_encodes_json_literals() {
        let url = UrlUtils::append_query(
            "https://example.com/w/index.php",
            &[(
                "advancedSearch-current",
                QueryValue::Text(r#"{"fields":{"filetype":"audio"}}"#.to_string()),
            )],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://example.com/w/index.php?advancedSearch-current=%7B%22fields%22%3A%7B%22filetype%22%3A%22audio%22%7D%7D"
        );
    }

    #[test]
    fn test_is_valid() {
        assert!(UrlUtils::is_valid("https://example.com"));
        assert!(UrlUtils::is_valid("http://example.com/path?query=value"));
        assert!(!UrlUtils::is_valid("not-a-url"));
        assert!(!UrlUtils::is_valid(""));
    }
}
