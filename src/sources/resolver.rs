//! Legacy source URL resolver
//!
//! The resolver is the public entry point: bound to one media type at
//! construction, it validates the search request, looks up the builder for
//! the requested source, and serializes the builder's output into a final
//! URL string. All failures surface as typed errors; nothing is retried
//! and no partial URL is ever returned.

use tracing::debug;

use crate::errors::{SourceUrlError, SourceUrlResult};
use crate::models::{MediaType, SearchRequest};
use crate::utils::url::UrlUtils;

use super::registry::LegacySourceRegistry;

/// Resolves legacy source search URLs for one media type
///
/// # Examples
///
/// ```rust
/// use meta_search::models::{MediaType, SearchRequest};
/// use meta_search::sources::LegacySourceUrlResolver;
///
/// let resolver = LegacySourceUrlResolver::new(MediaType::Audio);
/// let search = SearchRequest::new("field recordings");
/// let url = resolver.resolve("Jamendo", Some(&search)).unwrap();
/// assert!(url.starts_with("https://www.jamendo.com/search/tracks"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LegacySourceUrlResolver {
    media_type: MediaType,
}

impl LegacySourceUrlResolver {
    /// Create a resolver bound to the given media type
    pub fn new(media_type: MediaType) -> Self {
        Self { media_type }
    }

    /// The media type this resolver is bound to
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Resolve a search URL for the named legacy source
    ///
    /// # Errors
    ///
    /// - [`SourceUrlError::InvalidQuery`] when `search` is `None`
    /// - [`SourceUrlError::UnknownSource`] when the source is not registered
    /// - [`SourceUrlError::UnsupportedMediaType`] when the source exists but
    ///   has no builder for this resolver's media type
    pub fn resolve(
        &self,
        source_name: &str,
        search: Option<&SearchRequest>,
    ) -> SourceUrlResult<String> {
        let search = search
            .ok_or_else(|| SourceUrlError::invalid_query(source_name, self.media_type))?;

        let registry = LegacySourceRegistry::global();
        if !registry.contains_source(source_name) {
            return Err(SourceUrlError::unknown_source(source_name));
        }

        let builder = registry
            .builder_for(source_name, self.media_type)
            .ok_or_else(|| {
                SourceUrlError::unsupported_media_type(source_name, self.media_type)
            })?;

        let info = builder(search);
        let url = UrlUtils::append_query(info.base_url, &info.query).map_err(|source| {
            SourceUrlError::InvalidBaseUrl {
                url: info.base_url.to_string(),
                source,
            }
        })?;

        debug!(
            source = source_name,
            media_type = %self.media_type,
            url = %url,
            "built legacy source search url"
        );

        Ok(url)
    }
}

/// Resolve a search URL without constructing a resolver first
pub fn get_legacy_source_url(
    media_type: MediaType,
    source_name: &str,
    search: Option<&SearchRequest>,
) -> SourceUrlResult<String> {
    LegacySourceUrlResolver::new(media_type).resolve(source_name, search)
}
