//! Foundation types for the Syster index layer.
//!
//! This module provides the identifiers every other layer is keyed on:
//! - [`ResourceUri`] - Fragment-aware resource identifiers
//! - [`QualifiedName`] - `::`-separated names of exported symbols
//! - [`ObjectKind`] - Kind tags for exported symbols
//!
//! This module has NO dependencies on other syster modules.

mod name;
mod uri;


pub use name::{ObjectKind, QualifiedName};
pub use uri::{ResourceUri, UriError};

// Re-export url types for convenience
pub use url;
