//! Visibility of a state-based container over a shared index.

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use syster_index::{
    Container, ObjectKind, QualifiedName, ResourceDescriptions, StateBasedContainer, UriSetState,
};

use crate::helpers::counting_index::CountingIndex;
use crate::helpers::fixtures::{description, index_of, names, state_of, uri, uris, xyz_index};

// ============================================================================
// LOOKUPS
// ============================================================================

// W is listed by the state but unknown to the index; Z is indexed but hidden.
#[rstest]
#[case("scheme://X", true, true)]
#[case("scheme://Y", true, true)]
#[case("scheme://Z", false, false)]
#[case("scheme://W", true, false)]
fn test_has_resource_description_follows_state(
    #[case] resource: &str,
    #[case] member: bool,
    #[case] resolvable: bool,
) {
    let index = xyz_index();
    let state = state_of(&["scheme://X", "scheme://Y", "scheme://W"]);
    let container = StateBasedContainer::new(&index, &state);

    assert_eq!(container.has_resource_description(&uri(resource)), member);
    assert_eq!(
        container.resource_description(&uri(resource)).is_some(),
        resolvable
    );
}

#[test]
fn test_invisible_resource_is_hidden_even_if_indexed() {
    let index = xyz_index();
    let state = state_of(&["scheme://X"]);
    let container = StateBasedContainer::new(&index, &state);

    assert!(index.resource_description(&uri("scheme://Z")).is_some());
    assert!(container.resource_description(&uri("scheme://Z")).is_none());
    assert!(!container.has_resource_description(&uri("scheme://Z")));
}

#[rstest]
#[case("scheme://X#foo")]
#[case("scheme://X#")]
#[case("scheme://X#some/deep/path")]
fn test_lookup_ignores_fragment(#[case] with_fragment: &str) {
    let index = xyz_index();
    let state = state_of(&["scheme://X"]);
    let container = StateBasedContainer::new(&index, &state);

    let found = container.resource_description(&uri(with_fragment)).unwrap();
    assert_eq!(found.uri().as_str(), "scheme://X");
    assert!(container.has_resource_description(&uri(with_fragment)));
}

#[test]
fn test_state_built_from_element_uris_keeps_resources_only() {
    let index = xyz_index();
    let state = state_of(&["scheme://X#foo", "scheme://X#other", "scheme://Y#bar"]);
    let container = StateBasedContainer::new(&index, &state);

    assert_eq!(container.resource_description_count(), 2);
    assert_eq!(
        uris(container.resource_descriptions()),
        ["scheme://X", "scheme://Y"]
    );
}

// ============================================================================
// EMPTY STATE
// ============================================================================

#[test]
fn test_empty_state_never_touches_the_index() {
    let index = CountingIndex::new(xyz_index());
    let state = UriSetState::new();
    let container = StateBasedContainer::new(&index, &state);
    let type_a = ObjectKind::from("TypeA");

    assert!(container.is_empty());
    assert_eq!(container.resource_description_count(), 0);
    assert_eq!(container.resource_descriptions().count(), 0);
    assert_eq!(container.exported_objects().count(), 0);
    assert_eq!(container.exported_objects_by_type(&type_a).count(), 0);
    assert_eq!(
        container
            .exported_objects_by_object(&uri("scheme://X#foo"))
            .count(),
        0
    );
    assert_eq!(
        container
            .exported_objects_named(&type_a, &QualifiedName::from("foo"), false)
            .count(),
        0
    );

    assert_eq!(index.accesses(), 0);
}

// ============================================================================
// COUNT AND ORDER
// ============================================================================

#[test]
fn test_count_includes_resources_unknown_to_the_index() {
    let index = index_of([description("scheme://A", &[])]);
    let state = state_of(&["scheme://A", "scheme://Missing"]);
    let container = StateBasedContainer::new(&index, &state);

    // The count reports the state's size while enumeration only returns what
    // the index resolves. Callers relying on the two agreeing get a mismatch.
    assert_eq!(container.resource_description_count(), 2);
    assert_eq!(container.resource_descriptions().count(), 1);
}

#[test]
fn test_descriptions_follow_state_order() {
    let index = index_of([
        description("scheme://C", &[]),
        description("scheme://A", &[]),
    ]);
    let state = state_of(&["scheme://A", "scheme://B", "scheme://C"]);
    let container = StateBasedContainer::new(&index, &state);

    assert_eq!(
        uris(container.resource_descriptions()),
        ["scheme://A", "scheme://C"]
    );
}

// ============================================================================
// OBJECT QUERIES
// ============================================================================

#[test]
fn test_xyz_scenario() {
    let index = xyz_index();
    let state = state_of(&["scheme://X", "scheme://Y"]);
    let container = StateBasedContainer::new(&index, &state);

    assert_eq!(
        uris(container.resource_descriptions()),
        ["scheme://X", "scheme://Y"]
    );
    assert_eq!(names(container.exported_objects()), ["foo", "bar"]);
    assert_eq!(
        names(container.exported_objects_by_type(&ObjectKind::from("TypeA"))),
        ["foo"]
    );
    assert_eq!(
        names(container.exported_objects_by_type(&ObjectKind::from("TypeB"))),
        ["bar"]
    );
    assert!(container.resource_description(&uri("scheme://Z")).is_none());
}

#[test]
fn test_exported_objects_by_object_is_filtered() {
    let index = xyz_index();
    let state = state_of(&["scheme://X"]);
    let container = StateBasedContainer::new(&index, &state);

    assert_eq!(
        names(container.exported_objects_by_object(&uri("scheme://X#foo"))),
        ["foo"]
    );
    assert_eq!(
        container
            .exported_objects_by_object(&uri("scheme://Z#zed"))
            .count(),
        0
    );
    assert_eq!(index.exported_objects_by_object(&uri("scheme://Z#zed")).count(), 1);
}

#[rstest]
#[case("foo", false, &["foo"])]
#[case("FOO", false, &[])]
#[case("FOO", true, &["foo"])]
#[case("zed", false, &[])]
fn test_exported_objects_named_is_filtered(
    #[case] name: &str,
    #[case] ignore_case: bool,
    #[case] expected: &[&str],
) {
    let index = xyz_index();
    let state = state_of(&["scheme://X", "scheme://Y"]);
    let container = StateBasedContainer::new(&index, &state);

    let found = names(container.exported_objects_named(
        &ObjectKind::from("TypeA"),
        &QualifiedName::from(name),
        ignore_case,
    ));
    assert_eq!(found, expected);
}

#[test]
fn test_qualified_names_match_by_full_path() {
    let index = index_of([description(
        "scheme://Lib",
        &[("Lib::Vehicle", "PartDef"), ("Lib::Wheel", "PartDef")],
    )]);
    let state = state_of(&["scheme://Lib"]);
    let container = StateBasedContainer::new(&index, &state);
    let part_def = ObjectKind::from("PartDef");

    let found = names(container.exported_objects_named(
        &part_def,
        &QualifiedName::from_segments(["Lib", "Wheel"]),
        false,
    ));
    assert_eq!(found, ["Lib::Wheel"]);
    assert_eq!(
        container
            .exported_objects_named(&part_def, &QualifiedName::from("Wheel"), false)
            .count(),
        0
    );
}

// ============================================================================
// DYNAMIC DISPATCH
// ============================================================================

#[test]
fn test_works_behind_dyn_container_and_dyn_index() {
    let index = xyz_index();
    let dyn_index: &dyn ResourceDescriptions = &index;
    let state = state_of(&["scheme://Y"]);
    let container = StateBasedContainer::new(dyn_index, &state);
    let container: &dyn Container = &container;

    assert_eq!(names(container.exported_objects()), ["bar"]);
    assert_eq!(container.resource_description_count(), 1);
}
