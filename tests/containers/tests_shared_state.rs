//! Containers built per session over a state its owner keeps updating.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use syster_index::{
    Container, ContainerState, DescriptionsContainer, ObjectKind, ResourceDescriptionIndex,
    SharedContainerState, StateBasedContainer,
};

use crate::helpers::fixtures::{description, names, uri, uris, xyz_index};

#[test]
fn test_session_snapshot_is_isolated_from_updates() {
    let index = xyz_index();
    let project = SharedContainerState::new("project");
    project.replace([uri("scheme://X"), uri("scheme://Y")]);

    let session = project.snapshot();
    let container = StateBasedContainer::new(&index, &session);

    project.remove(&uri("scheme://X"));
    project.insert(&uri("scheme://Z"));

    assert_eq!(names(container.exported_objects()), ["foo", "bar"]);
    assert!(container.resource_description(&uri("scheme://Z")).is_none());

    let next_session = project.snapshot();
    let next = StateBasedContainer::new(&index, &next_session);
    assert_eq!(
        uris(next.resource_descriptions()),
        ["scheme://Y", "scheme://Z"]
    );
}

#[test]
fn test_container_over_shared_state_sees_updates_between_traversals() {
    let index = xyz_index();
    let project = Arc::new(SharedContainerState::new("project"));
    project.insert(&uri("scheme://X"));
    let container = StateBasedContainer::new(&index, &project);
    let type_a = ObjectKind::from("TypeA");

    assert_eq!(names(container.exported_objects_by_type(&type_a)), ["foo"]);

    // Filtering snapshots on each traversal, so the next one sees Z.
    project.insert(&uri("scheme://Z#zed"));
    assert_eq!(names(container.exported_objects_by_type(&type_a)), ["foo", "zed"]);
    assert_eq!(container.resource_description_count(), 2);
}

#[test]
fn test_every_query_reflects_a_removal_between_calls() {
    let index = xyz_index();
    let project = Arc::new(SharedContainerState::new("project"));
    project.replace([uri("scheme://X"), uri("scheme://Y")]);
    let container = StateBasedContainer::new(&index, &project);

    assert_eq!(
        uris(container.resource_descriptions()),
        ["scheme://X", "scheme://Y"]
    );

    project.remove(&uri("scheme://X"));

    assert!(!container.has_resource_description(&uri("scheme://X")));
    assert_eq!(container.resource_description_count(), 1);
    for description in container.resource_descriptions() {
        assert!(
            project.contains(description.uri()),
            "{} is no longer visible",
            description.uri()
        );
    }
    assert_eq!(uris(container.resource_descriptions()), ["scheme://Y"]);
    assert_eq!(names(container.exported_objects()), ["bar"]);
}

#[test]
fn test_clones_share_one_set() {
    let project = SharedContainerState::new("project");
    let handle = project.clone();

    handle.insert(&uri("scheme://A"));
    assert!(project.contains(&uri("scheme://A#element")));
    assert!(!handle.insert(&uri("scheme://A#other")));

    project.clear();
    assert!(handle.is_empty());
    assert_eq!(project.to_string(), "'project' (0 resource(s))");
}

#[test]
fn test_index_updates_are_visible_through_an_unchanged_state() {
    let mut index = ResourceDescriptionIndex::new();
    index.add(description("scheme://A", &[("old", "TypeA")]));
    let project = SharedContainerState::new("project");
    project.insert(&uri("scheme://A"));
    let session = project.snapshot();

    {
        let container = StateBasedContainer::new(&index, &session);
        assert_eq!(names(container.exported_objects()), ["old"]);
    }

    index.add(description("scheme://A", &[("new", "TypeA")]));
    let container = StateBasedContainer::new(&index, &session);
    assert_eq!(names(container.exported_objects()), ["new"]);

    // The unfiltered view of the same index.
    let all = DescriptionsContainer::new(&index);
    assert_eq!(all.resource_description_count(), 1);
}
