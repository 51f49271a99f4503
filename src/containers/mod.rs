//! Containers: the part of the index visible from one compilation context.
//!
//! A container answers the same questions as the backing index
//! ([`ResourceDescriptions`](crate::index::ResourceDescriptions)) but only
//! about the resources it holds.
//!
//! ## Key Types
//!
//! - [`Container`] - Query interface shared by all containers
//! - [`ContainerState`] - Which resources are visible (owned by the build layer)
//! - [`StateBasedContainer`] - Filters a backing index through a state
//! - [`DescriptionsContainer`] - Exposes a backing index unfiltered
//! - [`StateFiltered`] - Lazy filtering iterator with a per-traversal snapshot
//!
//! ## Usage
//!
//! ```ignore
//! let state = project_state.snapshot();
//! let container = StateBasedContainer::new(&index, &state);
//!
//! for object in container.exported_objects_by_type(&ObjectKind::from("PartDef")) {
//!     println!("{}", object.qualified_name());
//! }
//! ```

mod descriptions_based;
mod filter;
mod state;
mod state_based;


use crate::base::{ObjectKind, QualifiedName, ResourceUri};
use crate::index::{DescriptionIter, ObjectIter, ResourceDescription};

pub use descriptions_based::DescriptionsContainer;
pub use filter::{ResourceKey, StateContains, StateFiltered, filter_visible};
pub use state::{ContainerState, SharedContainerState, UriSetState};
pub use state_based::StateBasedContainer;

/// Read-only queries over the resources a container holds.
///
/// Lookups of unknown or invisible resources return `None` or an empty
/// sequence; they are never errors. Enumerations are lazy.
pub trait Container {
    fn has_resource_description(&self, uri: &ResourceUri) -> bool;

    fn resource_description_count(&self) -> usize;

    fn is_empty(&self) -> bool;

    fn resource_description(&self, uri: &ResourceUri) -> Option<&ResourceDescription>;

    fn resource_descriptions(&self) -> DescriptionIter<'_>;

    fn exported_objects(&self) -> ObjectIter<'_>;

    fn exported_objects_by_type(&self, kind: &ObjectKind) -> ObjectIter<'_>;

    /// Objects whose element URI (fragment included) equals `object`.
    fn exported_objects_by_object(&self, object: &ResourceUri) -> ObjectIter<'_>;

    fn exported_objects_named(
        &self,
        kind: &ObjectKind,
        name: &QualifiedName,
        ignore_case: bool,
    ) -> ObjectIter<'_>;
}
