//! Legacy source registry
//!
//! Central authoritative mapping of source display name → media type →
//! URL builder function. The registry is built once behind a `OnceLock`
//! and is read-only afterwards; adding a platform means adding its
//! builder module and one entry here.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{MediaType, SearchRequest, UrlInfo};

use super::{ccmixter, europeana, google_images, jamendo, openclipart, soundcloud, wikimedia, youtube};

/// A pure function mapping a search request to URL info for one platform
pub type SourceUrlBuilder = fn(&SearchRequest) -> UrlInfo;

/// Static registry of legacy source URL builders
pub struct LegacySourceRegistry {
    entries: HashMap<&'static str, HashMap<MediaType, SourceUrlBuilder>>,
}

impl LegacySourceRegistry {
    fn new() -> Self {
        let mut entries: HashMap<&'static str, HashMap<MediaType, SourceUrlBuilder>> =
            HashMap::new();

        entries.insert(
            "Europeana",
            HashMap::from([
                (MediaType::Audio, europeana::audio as SourceUrlBuilder),
                (MediaType::Video, europeana::video as SourceUrlBuilder),
            ]),
        );
        entries.insert(
            "Wikimedia Commons",
            HashMap::from([
                (MediaType::Audio, wikimedia::audio as SourceUrlBuilder),
                (MediaType::Video, wikimedia::video as SourceUrlBuilder),
            ]),
        );
        entries.insert(
            "Jamendo",
            HashMap::from([(MediaType::Audio, jamendo::audio as SourceUrlBuilder)]),
        );
        entries.insert(
            "ccMixter",
            HashMap::from([(MediaType::Audio, ccmixter::audio as SourceUrlBuilder)]),
        );
        entries.insert(
            "SoundCloud",
            HashMap::from([(MediaType::Audio, soundcloud::audio as SourceUrlBuilder)]),
        );
        entries.insert(
            "YouTube",
            HashMap::from([(MediaType::Video, youtube::video as SourceUrlBuilder)]),
        );
        entries.insert(
            "Google Images",
            HashMap::from([(MediaType::Image, google_images::image as SourceUrlBuilder)]),
        );
        entries.insert(
            "Open Clip Art Library",
            HashMap::from([(MediaType::Image, openclipart::image as SourceUrlBuilder)]),
        );

        Self { entries }
    }

    /// Global singleton accessor (no external dependency on once_cell).
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<LegacySourceRegistry> = OnceLock::new();
        REGISTRY.get_or_init(LegacySourceRegistry::new)
    }

    /// Whether any entry exists for the given source name
    pub fn contains_source(&self, source_name: &str) -> bool {
        self.entries.contains_key(source_name)
    }

    /// Look up the builder for a `(source, media type)` pair
    pub fn builder_for(
        &self,
        source_name: &str,
        media_type: MediaType,
    ) -> Option<SourceUrlBuilder> {
        self.entries
            .get(source_name)
            .and_then(|by_type| by_type.get(&media_type))
            .copied()
    }

    /// Whether a `(source, media type)` pair has a registered builder
    pub fn is_supported(&self, source_name: &str, media_type: MediaType) -> bool {
        self.builder_for(source_name, media_type).is_some()
    }

    /// All registered source names offering the given media type, sorted
    /// for stable output
    pub fn supported_sources(&self, media_type: MediaType) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .entries
            .iter()
            .filter(|(_, by_type)| by_type.contains_key(&media_type))
            .map(|(name, _)| *name)
            .collect();
        names.sort_unstable();
        names
    }

    /// All registered source names, sorted
    pub fn source_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
