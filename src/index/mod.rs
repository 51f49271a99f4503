//! Resource description index: what each source unit exports.
//!
//! ## Key Types
//!
//! - [`ResourceDescription`] - Exported symbols of one resource
//! - [`ExportedObject`] - One exported symbol (name, kind, element URI)
//! - [`ResourceDescriptions`] - The backing index contract queried by containers
//! - [`ResourceDescriptionIndex`] - In-memory, insertion-ordered implementation
//!
//! ## Query Layers
//!
//! ```text
//! ResourceDescriptions          ← backing index: every known resource
//!     │
//!     ▼
//! Container (crate::containers) ← the subset visible from one context
//! ```

mod description;
mod descriptions;
mod store;


pub use description::{ExportedObject, ResourceDescription};
pub use descriptions::{DescriptionIter, ObjectIter, ResourceDescriptions};
pub use store::ResourceDescriptionIndex;
