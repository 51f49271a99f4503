//! # syster-index
//!
//! Visibility-filtering containers over the Syster resource description index.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generator   → Three-phase generation hook and driver
//!   ↓
//! containers  → Container states, lazy visibility filters, containers
//!   ↓
//! index       → Resource descriptions and the backing index contract
//!   ↓
//! base        → Primitives (ResourceUri, QualifiedName, ObjectKind)
//! ```

// ============================================================================
// MODULES (dependency order: base → index → containers → generator)
// ============================================================================

/// Foundation types: ResourceUri, QualifiedName, ObjectKind
pub mod base;

/// Resource descriptions and the backing index contract
pub mod index;

/// Containers: the part of the index visible from one context
pub mod containers;

/// Generation hook: prepare, generate, cleanup
pub mod generator;

// Re-export foundation types
pub use base::{ObjectKind, QualifiedName, ResourceUri, UriError};

// Re-export the query surface
pub use containers::{
    Container, ContainerState, DescriptionsContainer, SharedContainerState, StateBasedContainer,
    UriSetState,
};
pub use index::{ExportedObject, ResourceDescription, ResourceDescriptionIndex, ResourceDescriptions};
