//! Container states: which resources are visible right now.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::RwLock;

use crate::base::ResourceUri;

/// Decides which resources a container holds.
///
/// Implementations are owned by whoever tracks the build configuration
/// (projects, dependency closures). Containers only read them, and a state
/// must not change while a query against it is in flight.
///
/// Invariant: `contains(uri) == contents().contains(uri)`.
pub trait ContainerState {
    /// Is the resource visible? `uri` is expected to be fragment-less.
    fn contains(&self, uri: &ResourceUri) -> bool;

    /// All visible resources, fragment-less, in the state's own order.
    fn contents(&self) -> IndexSet<ResourceUri>;

    /// Implementations should override this with a check that does not build
    /// the full content set.
    fn is_empty(&self) -> bool {
        self.contents().is_empty()
    }
}

impl<S: ContainerState + ?Sized> ContainerState for &S {
    fn contains(&self, uri: &ResourceUri) -> bool {
        (**self).contains(uri)
    }

    fn contents(&self) -> IndexSet<ResourceUri> {
        (**self).contents()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<S: ContainerState + ?Sized> ContainerState for Arc<S> {
    fn contains(&self, uri: &ResourceUri) -> bool {
        (**self).contains(uri)
    }

    fn contents(&self) -> IndexSet<ResourceUri> {
        (**self).contents()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

// ============================================================================
// FIXED SET
// ============================================================================

/// A fixed set of visible resources.
///
/// Clones share the underlying set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UriSetState {
    uris: Arc<IndexSet<ResourceUri>>,
}

impl UriSetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceUri> {
        self.uris.iter()
    }

    /// Do both states read the very same set (not merely an equal one)?
    pub fn shares_set_with(&self, other: &UriSetState) -> bool {
        Arc::ptr_eq(&self.uris, &other.uris)
    }
}

impl FromIterator<ResourceUri> for UriSetState {
    /// Fragments are trimmed; duplicates keep their first position.
    fn from_iter<T: IntoIterator<Item = ResourceUri>>(iter: T) -> Self {
        Self {
            uris: Arc::new(iter.into_iter().map(|uri| uri.trim_fragment()).collect()),
        }
    }
}

impl ContainerState for UriSetState {
    fn contains(&self, uri: &ResourceUri) -> bool {
        self.uris.contains(uri.resource_part())
    }

    fn contents(&self) -> IndexSet<ResourceUri> {
        (*self.uris).clone()
    }

    fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

impl fmt::Display for UriSetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} resource(s)", self.uris.len())
    }
}

// ============================================================================
// SHARED, UPDATABLE STATE
// ============================================================================

/// A visible set that its owner can update between query sessions.
///
/// Clones share the same set. [`snapshot`](Self::snapshot) shares the current
/// set without copying it. The first update made while a snapshot is alive
/// copies the set once, so snapshots never see later updates. Use a snapshot
/// per query session; reading the shared state directly while the owner
/// mutates it gives unspecified results.
#[derive(Clone, Default)]
pub struct SharedContainerState {
    name: Arc<str>,
    uris: Arc<RwLock<Arc<IndexSet<ResourceUri>>>>,
}

impl SharedContainerState {
    /// Create an empty state labelled `name` (e.g. a project name).
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            uris: Arc::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the whole visible set.
    pub fn replace(&self, uris: impl IntoIterator<Item = ResourceUri>) {
        let next: IndexSet<ResourceUri> = uris.into_iter().map(|uri| uri.trim_fragment()).collect();
        tracing::debug!("[STATE] '{}' now holds {} resource(s)", self.name, next.len());
        *self.uris.write() = Arc::new(next);
    }

    /// Make one more resource visible. Returns `false` if it already was.
    pub fn insert(&self, uri: &ResourceUri) -> bool {
        let mut guard = self.uris.write();
        if guard.contains(uri.resource_part()) {
            return false;
        }
        Arc::make_mut(&mut *guard).insert(uri.trim_fragment())
    }

    /// Hide a resource, keeping the order of the others.
    pub fn remove(&self, uri: &ResourceUri) -> bool {
        let mut guard = self.uris.write();
        if !guard.contains(uri.resource_part()) {
            return false;
        }
        Arc::make_mut(&mut *guard).shift_remove(uri.resource_part())
    }

    pub fn clear(&self) {
        *self.uris.write() = Arc::default();
    }

    /// Freeze the current visible set for one query session.
    pub fn snapshot(&self) -> UriSetState {
        UriSetState {
            uris: Arc::clone(&*self.uris.read()),
        }
    }
}

impl ContainerState for SharedContainerState {
    fn contains(&self, uri: &ResourceUri) -> bool {
        self.uris.read().contains(uri.resource_part())
    }

    fn contents(&self) -> IndexSet<ResourceUri> {
        (**self.uris.read()).clone()
    }

    fn is_empty(&self) -> bool {
        self.uris.read().is_empty()
    }
}

impl fmt::Display for SharedContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({} resource(s))", self.name, self.uris.read().len())
    }
}

impl fmt::Debug for SharedContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedContainerState")
            .field("name", &self.name)
            .field("uris", &self.uris.read().len())
            .finish()
    }
}
