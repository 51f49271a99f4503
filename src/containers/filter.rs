//! Lazy visibility filtering against a container state.
//!
//! A [`StateContains`] predicate asks its state for `contents()` on the first
//! membership test and reuses that snapshot for every later test. Each
//! [`StateFiltered`] iterator owns its own predicate, so one traversal sees one
//! snapshot and a new traversal takes a fresh one.

use std::fmt;

use indexmap::IndexSet;

use crate::base::ResourceUri;
use crate::index::{ExportedObject, ResourceDescription};

use super::ContainerState;

/// Anything that belongs to exactly one resource.
pub trait ResourceKey {
    /// The fragment-less serialized URI of the owning resource.
    fn resource_key(&self) -> &str;
}

impl ResourceKey for ExportedObject {
    fn resource_key(&self) -> &str {
        self.resource_part()
    }
}

impl ResourceKey for ResourceDescription {
    fn resource_key(&self) -> &str {
        self.uri().resource_part()
    }
}

impl ResourceKey for ResourceUri {
    fn resource_key(&self) -> &str {
        self.resource_part()
    }
}

impl<T: ResourceKey + ?Sized> ResourceKey for &T {
    fn resource_key(&self) -> &str {
        (**self).resource_key()
    }
}

/// Membership predicate with a snapshot taken on first use.
pub struct StateContains<'s, S: ContainerState + ?Sized> {
    state: &'s S,
    contents: Option<IndexSet<ResourceUri>>,
}

impl<'s, S: ContainerState + ?Sized> StateContains<'s, S> {
    pub fn new(state: &'s S) -> Self {
        Self {
            state,
            contents: None,
        }
    }

    /// Has the snapshot been taken yet?
    pub fn is_primed(&self) -> bool {
        self.contents.is_some()
    }

    pub fn test(&mut self, item: &(impl ResourceKey + ?Sized)) -> bool {
        let state = self.state;
        let contents = self.contents.get_or_insert_with(|| {
            let contents = state.contents();
            tracing::trace!("[CONTAINER] state snapshot: {} resource(s)", contents.len());
            contents
        });
        contents.contains(item.resource_key())
    }
}

impl<S: ContainerState + ?Sized> fmt::Debug for StateContains<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateContains")
            .field("primed", &self.is_primed())
            .finish()
    }
}

/// Iterator adapter yielding only items whose resource is visible.
///
/// Nothing is pulled from the inner iterator until the first `next()`.
pub struct StateFiltered<'s, I, S: ContainerState + ?Sized> {
    inner: I,
    predicate: StateContains<'s, S>,
}

impl<'s, I, S: ContainerState + ?Sized> StateFiltered<'s, I, S> {
    pub fn new(inner: I, state: &'s S) -> Self {
        Self {
            inner,
            predicate: StateContains::new(state),
        }
    }
}

impl<I, S> Iterator for StateFiltered<'_, I, S>
where
    I: Iterator,
    I::Item: ResourceKey,
    S: ContainerState + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.inner.find(|item| predicate.test(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I, S: ContainerState + ?Sized> fmt::Debug for StateFiltered<'_, I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateFiltered")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}

/// Filter `items` down to those visible in `state`.
pub fn filter_visible<'s, I, S>(items: I, state: &'s S) -> StateFiltered<'s, I::IntoIter, S>
where
    I: IntoIterator,
    I::Item: ResourceKey,
    S: ContainerState + ?Sized,
{
    StateFiltered::new(items.into_iter(), state)
}
