//! Names and kind tags of exported symbols.

use std::fmt;
use std::sync::Arc;

/// Separator between qualified name segments.
pub const SEPARATOR: &str = "::";

/// A qualified name like `Vehicles::Car::engine`.
///
/// Stored as a single `Arc<str>` (cheap clones); segments are split on demand.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName(Arc<str>);

impl QualifiedName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Join segments with `::`.
    pub fn from_segments<'s>(segments: impl IntoIterator<Item = &'s str>) -> Self {
        let joined = segments.into_iter().collect::<Vec<_>>().join(SEPARATOR);
        Self(Arc::from(joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    pub fn first(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// The simple name (last segment).
    pub fn last(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or_default()
    }

    /// Compare against `other`, optionally ignoring case.
    pub fn matches(&self, other: &QualifiedName, ignore_case: bool) -> bool {
        if ignore_case {
            self.0.to_lowercase() == other.0.to_lowercase()
        } else {
            self.0 == other.0
        }
    }
}

impl From<&str> for QualifiedName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for QualifiedName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of an exported symbol (e.g. `PartDef`, `Package`).
///
/// Kinds are compared exactly; there is no subtype relation between them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectKind(Arc<str>);

impl ObjectKind {
    pub fn new(kind: impl Into<Arc<str>>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectKind {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
