//! Core data model for legacy source meta search
//!
//! A search request is an immutable caller-owned value: a free-text query
//! plus optional licensing filters. Builders turn a request into a
//! [`UrlInfo`], the intermediate base-URL-plus-query shape consumed by the
//! serializer in `utils::url`.

use serde::{Deserialize, Serialize};

use anyhow::Result;

/// The media type a meta search targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Audio,
    Video,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Audio => write!(f, "audio"),
            MediaType::Video => write!(f, "video"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "image" => Ok(MediaType::Image),
            "audio" => Ok(MediaType::Audio),
            "video" => Ok(MediaType::Video),
            _ => Err(anyhow::anyhow!("Invalid media type: {}", s)),
        }
    }
}

/// Licensing filters narrowing a search by reuse permissions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    /// Restrict to results usable commercially
    #[serde(default)]
    pub commercial: bool,
    /// Restrict to results that may be modified or adapted
    #[serde(default)]
    pub modify: bool,
}

/// A meta search request for a legacy source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query
    pub q: String,
    /// Optional licensing filters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,
}

impl SearchRequest {
    /// Create a request with no filters
    pub fn new<S: Into<String>>(q: S) -> Self {
        Self {
            q: q.into(),
            filters: None,
        }
    }

    /// Attach licensing filters
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = Some(filters);
        self
    }
}

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Plain text, percent-encoded during serialization
    Text(String),
    /// Pre-encoded platform literal, appended verbatim by the serializer
    Raw(&'static str),
}

/// Intermediate result produced by a source URL builder
///
/// Holds the platform base URL and an ordered list of query parameters.
/// Not persisted; consumed immediately by `UrlUtils::append_query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlInfo {
    pub base_url: &'static str,
    pub query: Vec<(&'static str, QueryValue)>,
}

impl UrlInfo {
    /// Create URL info for a base URL with no parameters yet
    pub fn new(base_url: &'static str) -> Self {
        Self {
            base_url,
            query: Vec::new(),
        }
    }

    /// Append a plain-text query parameter
    pub fn with_param<V: Into<String>>(mut self, key: &'static str, value: V) -> Self {
        self.query.push((key, QueryValue::Text(value.into())));
        self
    }

    /// Append a pre-encoded query parameter that must not be re-encoded
    pub fn with_raw_param(mut self, key: &'static str, value: &'static str) -> Self {
        self.query.push((key, QueryValue::Raw(value)));
        self
    }
}
