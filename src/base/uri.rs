//! Resource identifiers.
//!
//! A [`ResourceUri`] names one source unit. Element-level identifiers carry a
//! fragment (`file:///model/Vehicle.sysml#Vehicle::engine`); container
//! membership is always decided on the fragment-less part.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use url::{Position, Url};

/// Errors produced when building a [`ResourceUri`].
#[derive(Debug, Error)]
pub enum UriError {
    /// The text is not an absolute URI.
    #[error("invalid resource URI '{uri}': {source}")]
    Parse {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// File URIs can only be built from absolute paths.
    #[error("path is not absolute: {}", .0.display())]
    NotAbsolute(PathBuf),

    /// URIs like `mailto:` have no hierarchy to address resources in.
    #[error("URI cannot be used as a resource locator: {0}")]
    CannotBeABase(String),
}

/// An immutable, cheap-to-clone resource identifier.
///
/// Equality, ordering and hashing use the serialized form, so a `ResourceUri`
/// can be looked up in sets and maps by `&str` (see [`Borrow`]).
#[derive(Clone)]
pub struct ResourceUri(Arc<Url>);

impl ResourceUri {
    /// Parse an absolute URI.
    pub fn parse(uri: &str) -> Result<Self, UriError> {
        let url = Url::parse(uri).map_err(|source| UriError::Parse {
            uri: uri.to_string(),
            source,
        })?;
        Self::from_url(url)
    }

    /// Wrap an already parsed URL.
    pub fn from_url(url: Url) -> Result<Self, UriError> {
        if url.cannot_be_a_base() {
            return Err(UriError::CannotBeABase(url.into()));
        }
        Ok(Self(Arc::new(url)))
    }

    /// Build a `file:` URI from an absolute path.
    pub fn from_file_path(path: impl AsRef<Path>) -> Result<Self, UriError> {
        let path = path.as_ref();
        let url = Url::from_file_path(path).map_err(|()| UriError::NotAbsolute(path.into()))?;
        Ok(Self(Arc::new(url)))
    }

    /// The full serialized URI, fragment included.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The underlying URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// The fragment addressing an element inside the resource, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.0.fragment()
    }

    pub fn has_fragment(&self) -> bool {
        self.0.fragment().is_some()
    }

    /// The serialized URI without its `#fragment`.
    ///
    /// This is the key container membership is tested on.
    pub fn resource_part(&self) -> &str {
        let url: &Url = &self.0;
        &url[..Position::AfterQuery]
    }

    /// Returns the identifier of the resource this URI points into.
    pub fn trim_fragment(&self) -> ResourceUri {
        if !self.has_fragment() {
            return self.clone();
        }
        let mut url = (*self.0).clone();
        url.set_fragment(None);
        Self(Arc::new(url))
    }

    /// Returns a URI addressing `fragment` inside this resource.
    pub fn with_fragment(&self, fragment: &str) -> ResourceUri {
        let mut url = (*self.0).clone();
        url.set_fragment(Some(fragment));
        Self(Arc::new(url))
    }
}

impl PartialEq for ResourceUri {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ResourceUri {}

impl PartialOrd for ResourceUri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResourceUri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

// Must agree with `Borrow<str>`: hash exactly what `str` would.
impl Hash for ResourceUri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for ResourceUri {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for ResourceUri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ResourceUri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ResourceUri {
    type Error = UriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceUri({})", self.as_str())
    }
}
