//! The backing index contract.

use crate::base::{ObjectKind, QualifiedName, ResourceUri};

use super::{ExportedObject, ResourceDescription};

/// Lazy sequence of descriptions borrowed from an index.
pub type DescriptionIter<'a> = Box<dyn Iterator<Item = &'a ResourceDescription> + 'a>;

/// Lazy sequence of exported objects borrowed from an index.
pub type ObjectIter<'a> = Box<dyn Iterator<Item = &'a ExportedObject> + 'a>;

/// A keyed store of resource descriptions.
///
/// Only [`resource_description`](Self::resource_description) and
/// [`all_resource_descriptions`](Self::all_resource_descriptions) are required;
/// every other query has a lazy default built on top of them. Unknown URIs are
/// never an error, just `None` or an empty sequence.
///
/// The trait is object-safe, containers accept `&dyn ResourceDescriptions`.
pub trait ResourceDescriptions {
    /// Look up the description of one resource.
    fn resource_description(&self, uri: &ResourceUri) -> Option<&ResourceDescription>;

    /// Every description in the index.
    fn all_resource_descriptions(&self) -> DescriptionIter<'_>;

    fn is_empty(&self) -> bool {
        self.all_resource_descriptions().next().is_none()
    }

    fn resource_description_count(&self) -> usize {
        self.all_resource_descriptions().count()
    }

    /// All exported objects of all descriptions, description by description.
    fn exported_objects(&self) -> ObjectIter<'_> {
        Box::new(
            self.all_resource_descriptions()
                .flat_map(|d| d.exported_objects().iter()),
        )
    }

    fn exported_objects_by_type(&self, kind: &ObjectKind) -> ObjectIter<'_> {
        let kind = kind.clone();
        Box::new(self.all_resource_descriptions().flat_map(move |d| {
            let kind = kind.clone();
            d.exported_objects()
                .iter()
                .filter(move |o| *o.kind() == kind)
        }))
    }

    /// Objects whose element URI equals `object`.
    ///
    /// Only the description owning `object` is consulted.
    fn exported_objects_by_object(&self, object: &ResourceUri) -> ObjectIter<'_> {
        let resource = object.trim_fragment();
        let object = object.clone();
        Box::new(
            self.resource_description(&resource)
                .into_iter()
                .flat_map(move |d| {
                    let object = object.clone();
                    d.exported_objects()
                        .iter()
                        .filter(move |o| *o.object_uri() == object)
                }),
        )
    }

    fn exported_objects_named(
        &self,
        kind: &ObjectKind,
        name: &QualifiedName,
        ignore_case: bool,
    ) -> ObjectIter<'_> {
        let kind = kind.clone();
        let name = name.clone();
        Box::new(self.all_resource_descriptions().flat_map(move |d| {
            let kind = kind.clone();
            let name = name.clone();
            d.exported_objects().iter().filter(move |o| {
                *o.kind() == kind && o.qualified_name().matches(&name, ignore_case)
            })
        }))
    }
}
