//! Centralized error handling for legacy source URL resolution
//!
//! All failures are raised synchronously and surfaced directly to the
//! caller. There is no retry or recovery: any failure aborts URL
//! construction entirely and no partial URL is ever returned.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using SourceUrlError
pub type SourceUrlResult<T> = Result<T, SourceUrlError>;
