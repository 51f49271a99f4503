//! Fixture builders for URIs, descriptions and states.

use syster_index::{ResourceDescription, ResourceDescriptionIndex, ResourceUri, UriSetState};

/// Parse a URI, panicking on invalid fixtures.
pub fn uri(s: &str) -> ResourceUri {
    ResourceUri::parse(s).unwrap_or_else(|e| panic!("bad fixture URI '{}': {}", s, e))
}

/// A state holding exactly `uris`, in order.
pub fn state_of(uris: &[&str]) -> UriSetState {
    uris.iter().map(|s| uri(s)).collect()
}

/// A description exporting `(qualified_name, kind)` pairs, each addressed by
/// its qualified name as fragment.
pub fn description(resource: &str, exports: &[(&str, &str)]) -> ResourceDescription {
    exports
        .iter()
        .fold(ResourceDescription::new(uri(resource)), |desc, (name, kind)| {
            desc.with_export(*name, *kind, name)
        })
}

/// An index holding `descriptions`, in order.
pub fn index_of(descriptions: impl IntoIterator<Item = ResourceDescription>) -> ResourceDescriptionIndex {
    descriptions.into_iter().collect()
}

/// The X/Y/Z scenario: X exports `foo: TypeA`, Y exports `bar: TypeB`,
/// Z exports both kinds but is never visible.
pub fn xyz_index() -> ResourceDescriptionIndex {
    index_of([
        description("scheme://X", &[("foo", "TypeA")]),
        description("scheme://Y", &[("bar", "TypeB")]),
        description("scheme://Z", &[("zed", "TypeA"), ("zap", "TypeB")]),
    ])
}

/// Qualified names of a sequence of exported objects.
pub fn names<'a>(objects: impl Iterator<Item = &'a syster_index::ExportedObject>) -> Vec<String> {
    objects
        .map(|o| o.qualified_name().as_str().to_string())
        .collect()
}

/// URIs of a sequence of descriptions.
pub fn uris<'a>(descriptions: impl Iterator<Item = &'a ResourceDescription>) -> Vec<String> {
    descriptions.map(|d| d.uri().as_str().to_string()).collect()
}
