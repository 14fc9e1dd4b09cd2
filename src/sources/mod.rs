//! Legacy Source URL Builders
//!
//! Each legacy source is a third-party media platform without a unified
//! search API. This module holds one submodule per platform with its pure
//! URL builder functions, a static registry mapping source name → media
//! type → builder, and the resolver that validates inputs and serializes
//! the chosen builder's output into a final URL string.
//!
//! # Architecture
//!
//! - **Registry Pattern**: a two-level lookup table of function pointers,
//!   built once behind a `OnceLock` and read-only afterwards
//! - **Strategy Pattern**: each platform encodes its own query semantics
//!   in an isolated builder function
//! - **Resolver**: one entry point bound to a media type, resolving
//!   `(source name, search request)` to a URL string
//!
//! The URLs reproduce the query conventions of each platform's public
//! search page, including fixed filter presets and pre-encoded literals.

pub mod ccmixter;
pub mod europeana;
pub mod google_images;
pub mod jamendo;
pub mod openclipart;
pub mod registry;
pub mod resolver;
pub mod soundcloud;
pub mod wikimedia;
pub mod youtube;

pub use registry::{LegacySourceRegistry, SourceUrlBuilder};
pub use resolver::{LegacySourceUrlResolver, get_legacy_source_url};
