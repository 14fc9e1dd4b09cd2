//! Utility modules for the meta-search crate
//!
//! This module contains reusable utilities that can be used
//! across different parts of the system.

pub mod url;
