//! Error type definitions for legacy source URL resolution
//!
//! Three error kinds cover the resolution pipeline: a missing search
//! request, an unknown source name, and a source that exists but does not
//! offer the requested media type. A fourth variant surfaces registry
//! base-URL violations from the serializer instead of panicking.

use thiserror::Error;

use crate::models::MediaType;

/// Errors raised while resolving a legacy source search URL
#[derive(Error, Debug)]
pub enum SourceUrlError {
    /// No search request was provided for the resolution attempt
    #[error("please provide a valid query to search {source_name} for {media_type} files")]
    InvalidQuery {
        source_name: String,
        media_type: MediaType,
    },

    /// The source name has no entry in the legacy source registry
    #[error("no data available for provided legacy source: {source_name}")]
    UnknownSource { source_name: String },

    /// The source exists but has no builder for the requested media type
    #[error("{source_name} does not offer meta search for {media_type} content")]
    UnsupportedMediaType {
        source_name: String,
        media_type: MediaType,
    },

    /// A registry entry carried a base URL that failed to parse
    #[error("invalid base url in source registry: {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Convenience constructors for the common resolution failures
impl SourceUrlError {
    /// Create an invalid query error
    pub fn invalid_query<S: Into<String>>(source_name: S, media_type: MediaType) -> Self {
        Self::InvalidQuery {
            source_name: source_name.into(),
            media_type,
        }
    }

    /// Create an unknown source error
    pub fn unknown_source<S: Into<String>>(source_name: S) -> Self {
        Self::UnknownSource {
            source_name: source_name.into(),
        }
    }

    /// Create an unsupported media type error
    pub fn unsupported_media_type<S: Into<String>>(source_name: S, media_type: MediaType) -> Self {
        Self::UnsupportedMediaType {
            source_name: source_name.into(),
            media_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_source_and_type() {
        let err = SourceUrlError::invalid_query("SoundCloud", MediaType::Audio);
        assert_eq!(
            err.to_string(),
            "please provide a valid query to search SoundCloud for audio files"
        );

        let err = SourceUrlError::unknown_source("NotASource");
        assert_eq!(
            err.to_string(),
            "no data available for provided legacy source: NotASource"
        );

        let err = SourceUrlError::unsupported_media_type("Jamendo", MediaType::Video);
        assert_eq!(
            err.to_string(),
            "Jamendo does not offer meta search for video content"
        );
    }
}
