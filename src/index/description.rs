//! Resource and exported-object descriptions.

use crate::base::{ObjectKind, QualifiedName, ResourceUri};

/// One exported symbol of a resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedObject {
    qualified_name: QualifiedName,
    kind: ObjectKind,
    /// URI of the element, including the fragment that addresses it.
    object_uri: ResourceUri,
}

impl ExportedObject {
    pub fn new(qualified_name: QualifiedName, kind: ObjectKind, object_uri: ResourceUri) -> Self {
        Self {
            qualified_name,
            kind,
            object_uri,
        }
    }

    pub fn qualified_name(&self) -> &QualifiedName {
        &self.qualified_name
    }

    /// Simple name (last qualified name segment).
    pub fn name(&self) -> &str {
        self.qualified_name.last()
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn object_uri(&self) -> &ResourceUri {
        &self.object_uri
    }

    /// The serialized URI of the resource that owns this object.
    pub fn resource_part(&self) -> &str {
        self.object_uri.resource_part()
    }
}

/// Summary of everything one resource exports.
///
/// Built once by whoever populates the index, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescription {
    uri: ResourceUri,
    exported: Vec<ExportedObject>,
}

impl ResourceDescription {
    /// Create an empty description. Any fragment on `uri` is dropped.
    pub fn new(uri: ResourceUri) -> Self {
        Self {
            uri: uri.trim_fragment(),
            exported: Vec::new(),
        }
    }

    /// Add an exported object whose element URI is this resource plus `fragment`.
    pub fn with_export(
        mut self,
        qualified_name: impl Into<QualifiedName>,
        kind: impl Into<ObjectKind>,
        fragment: &str,
    ) -> Self {
        let object_uri = self.uri.with_fragment(fragment);
        self.exported.push(ExportedObject::new(
            qualified_name.into(),
            kind.into(),
            object_uri,
        ));
        self
    }

    /// Add a prebuilt exported object.
    ///
    /// The object's URI is taken as-is; callers are expected to point it into
    /// this resource.
    pub fn with_object(mut self, object: ExportedObject) -> Self {
        self.exported.push(object);
        self
    }

    pub fn uri(&self) -> &ResourceUri {
        &self.uri
    }

    /// All exported objects, in declaration order.
    pub fn exported_objects(&self) -> &[ExportedObject] {
        &self.exported
    }

    pub fn exported_objects_by_type<'s>(
        &'s self,
        kind: &'s ObjectKind,
    ) -> impl Iterator<Item = &'s ExportedObject> + 's {
        self.exported.iter().filter(move |o| o.kind() == kind)
    }

    /// Objects whose element URI (fragment included) equals `object`.
    pub fn exported_objects_by_object<'s>(
        &'s self,
        object: &'s ResourceUri,
    ) -> impl Iterator<Item = &'s ExportedObject> + 's {
        self.exported.iter().filter(move |o| o.object_uri() == object)
    }

    pub fn exported_objects_named<'s>(
        &'s self,
        kind: &'s ObjectKind,
        name: &'s QualifiedName,
        ignore_case: bool,
    ) -> impl Iterator<Item = &'s ExportedObject> + 's {
        self.exported
            .iter()
            .filter(move |o| o.kind() == kind && o.qualified_name().matches(name, ignore_case))
    }
}
