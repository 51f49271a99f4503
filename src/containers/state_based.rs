//! Container filtered through a [`ContainerState`].

use std::fmt;
use std::iter;

use indexmap::IndexMap;

use crate::base::{ObjectKind, QualifiedName, ResourceUri};
use crate::index::{DescriptionIter, ObjectIter, ResourceDescription, ResourceDescriptions};

use super::{Container, ContainerState, StateFiltered};

/// The resources of a backing index that a [`ContainerState`] declares visible.
///
/// Built per query session around a long-lived index and a lightweight state.
/// Every description or object it returns belongs to a resource in the state's
/// contents at query time. The state may list resources the index does not
/// know; those are counted by
/// [`resource_description_count`](Container::resource_description_count) but
/// never returned.
///
/// Nothing is cached across queries. Enumerations are lazy: each one takes its
/// own snapshot of the state's contents on first advancement, so the state may
/// change between traversals but not while one is in progress.
pub struct StateBasedContainer<'a, I, S>
where
    I: ResourceDescriptions + ?Sized,
    S: ContainerState + ?Sized,
{
    descriptions: &'a I,
    state: &'a S,
}

impl<'a, I, S> StateBasedContainer<'a, I, S>
where
    I: ResourceDescriptions + ?Sized,
    S: ContainerState + ?Sized,
{
    pub fn new(descriptions: &'a I, state: &'a S) -> Self {
        Self { descriptions, state }
    }

    pub fn state(&self) -> &'a S {
        self.state
    }

    /// The backing index, unfiltered.
    pub fn descriptions(&self) -> &'a I {
        self.descriptions
    }

    /// Visible resources the backing index can resolve, in state order.
    ///
    /// Built from the state's current contents on every call.
    pub fn uri_to_description(&self) -> IndexMap<ResourceUri, &'a ResourceDescription> {
        let descriptions = self.descriptions;
        let contents = self.state.contents();
        let visible = contents.len();
        let map: IndexMap<_, _> = contents
            .into_iter()
            .filter_map(|uri| {
                let description = descriptions.resource_description(&uri)?;
                Some((uri, description))
            })
            .collect();
        tracing::debug!(
            "[CONTAINER] resolved {} of {} visible resource(s)",
            map.len(),
            visible
        );
        map
    }

    /// Keep only the items whose resource is visible.
    fn filter_by_uri<'i>(&self, unfiltered: ObjectIter<'i>) -> ObjectIter<'i>
    where
        'a: 'i,
    {
        Box::new(StateFiltered::new(unfiltered, self.state))
    }
}

impl<I, S> Container for StateBasedContainer<'_, I, S>
where
    I: ResourceDescriptions + ?Sized,
    S: ContainerState + ?Sized,
{
    fn has_resource_description(&self, uri: &ResourceUri) -> bool {
        self.state.contains(uri)
    }

    fn resource_description_count(&self) -> usize {
        self.state.contents().len()
    }

    fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn resource_description(&self, uri: &ResourceUri) -> Option<&ResourceDescription> {
        if self.state.contains(uri) {
            return self.descriptions.resource_description(uri);
        }
        None
    }

    fn resource_descriptions(&self) -> DescriptionIter<'_> {
        if self.is_empty() {
            return Box::new(iter::empty());
        }
        let descriptions = self.descriptions;
        Box::new(
            iter::once(self.state)
                .flat_map(|state| state.contents())
                .filter_map(move |uri| descriptions.resource_description(&uri)),
        )
    }

    fn exported_objects(&self) -> ObjectIter<'_> {
        if self.is_empty() {
            return Box::new(iter::empty());
        }
        self.filter_by_uri(self.descriptions.exported_objects())
    }

    fn exported_objects_by_type(&self, kind: &ObjectKind) -> ObjectIter<'_> {
        if self.is_empty() {
            return Box::new(iter::empty());
        }
        // Filter whole descriptions first so invisible ones are never scanned.
        let kind = kind.clone();
        let visible = StateFiltered::new(self.descriptions.all_resource_descriptions(), self.state);
        Box::new(visible.flat_map(move |description| {
            let kind = kind.clone();
            description
                .exported_objects()
                .iter()
                .filter(move |o| *o.kind() == kind)
        }))
    }

    fn exported_objects_by_object(&self, object: &ResourceUri) -> ObjectIter<'_> {
        if self.is_empty() {
            return Box::new(iter::empty());
        }
        self.filter_by_uri(self.descriptions.exported_objects_by_object(object))
    }

    fn exported_objects_named(
        &self,
        kind: &ObjectKind,
        name: &QualifiedName,
        ignore_case: bool,
    ) -> ObjectIter<'_> {
        if self.is_empty() {
            return Box::new(iter::empty());
        }
        self.filter_by_uri(
            self.descriptions
                .exported_objects_named(kind, name, ignore_case),
        )
    }
}

impl<I, S> fmt::Display for StateBasedContainer<'_, I, S>
where
    I: ResourceDescriptions + ?Sized,
    S: ContainerState + fmt::Display + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[StateBasedContainer] {}", self.state)
    }
}
