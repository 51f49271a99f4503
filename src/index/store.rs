//! In-memory resource description index.

use indexmap::IndexMap;

use crate::base::ResourceUri;

use super::{DescriptionIter, ResourceDescription, ResourceDescriptions};

/// An insertion-ordered index of resource descriptions.
///
/// Keyed by the fragment-less resource URI. Replacing a description keeps its
/// original position (IndexMap preserves insertion order).
#[derive(Clone, Debug, Default)]
pub struct ResourceDescriptionIndex {
    descriptions: IndexMap<ResourceUri, ResourceDescription>,
}

impl ResourceDescriptionIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the description of a resource.
    ///
    /// Returns the previous description, if any.
    pub fn add(&mut self, description: ResourceDescription) -> Option<ResourceDescription> {
        let previous = self
            .descriptions
            .insert(description.uri().clone(), description);
        if let Some(ref old) = previous {
            tracing::trace!("[INDEX] replaced description of {}", old.uri());
        }
        previous
    }

    /// Remove the description of a resource. A fragment on `uri` is ignored.
    pub fn remove(&mut self, uri: &ResourceUri) -> Option<ResourceDescription> {
        self.descriptions.shift_remove(uri.resource_part())
    }

    /// Get the number of indexed resources.
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    /// Indexed URIs in insertion order.
    pub fn uris(&self) -> impl Iterator<Item = &ResourceUri> {
        self.descriptions.keys()
    }
}

impl ResourceDescriptions for ResourceDescriptionIndex {
    /// Lookup ignores any fragment on `uri`.
    fn resource_description(&self, uri: &ResourceUri) -> Option<&ResourceDescription> {
        self.descriptions.get(uri.resource_part())
    }

    fn all_resource_descriptions(&self) -> DescriptionIter<'_> {
        Box::new(self.descriptions.values())
    }

    fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    fn resource_description_count(&self) -> usize {
        self.descriptions.len()
    }
}

impl FromIterator<ResourceDescription> for ResourceDescriptionIndex {
    fn from_iter<T: IntoIterator<Item = ResourceDescription>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl Extend<ResourceDescription> for ResourceDescriptionIndex {
    fn extend<T: IntoIterator<Item = ResourceDescription>>(&mut self, iter: T) {
        for description in iter {
            self.add(description);
        }
    }
}
