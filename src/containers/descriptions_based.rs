//! A container holding everything in its backing index.

use std::fmt;

use crate::base::{ObjectKind, QualifiedName, ResourceUri};
use crate::index::{DescriptionIter, ObjectIter, ResourceDescription, ResourceDescriptions};

use super::Container;

/// Exposes a whole backing index through the [`Container`] interface.
pub struct DescriptionsContainer<'a, I: ResourceDescriptions + ?Sized> {
    descriptions: &'a I,
}

impl<'a, I: ResourceDescriptions + ?Sized> DescriptionsContainer<'a, I> {
    pub fn new(descriptions: &'a I) -> Self {
        Self { descriptions }
    }

    pub fn descriptions(&self) -> &'a I {
        self.descriptions
    }
}

impl<I: ResourceDescriptions + ?Sized> Clone for DescriptionsContainer<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ResourceDescriptions + ?Sized> Copy for DescriptionsContainer<'_, I> {}

impl<I: ResourceDescriptions + ?Sized> Container for DescriptionsContainer<'_, I> {
    fn has_resource_description(&self, uri: &ResourceUri) -> bool {
        self.descriptions.resource_description(uri).is_some()
    }

    fn resource_description_count(&self) -> usize {
        self.descriptions.resource_description_count()
    }

    fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    fn resource_description(&self, uri: &ResourceUri) -> Option<&ResourceDescription> {
        self.descriptions.resource_description(uri)
    }

    fn resource_descriptions(&self) -> DescriptionIter<'_> {
        self.descriptions.all_resource_descriptions()
    }

    fn exported_objects(&self) -> ObjectIter<'_> {
        self.descriptions.exported_objects()
    }

    fn exported_objects_by_type(&self, kind: &ObjectKind) -> ObjectIter<'_> {
        self.descriptions.exported_objects_by_type(kind)
    }

    fn exported_objects_by_object(&self, object: &ResourceUri) -> ObjectIter<'_> {
        self.descriptions.exported_objects_by_object(object)
    }

    fn exported_objects_named(
        &self,
        kind: &ObjectKind,
        name: &QualifiedName,
        ignore_case: bool,
    ) -> ObjectIter<'_> {
        self.descriptions
            .exported_objects_named(kind, name, ignore_case)
    }
}

impl<I: ResourceDescriptions + ?Sized> fmt::Display for DescriptionsContainer<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[DescriptionsContainer] {} resource(s)",
            self.descriptions.resource_description_count()
        )
    }
}
