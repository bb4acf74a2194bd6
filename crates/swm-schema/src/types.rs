//! Core newtypes for the tool boundary: [`SoftwareName`] and [`Version`].

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// A canonical software name.
///
/// Construction trims surrounding whitespace and lowercases the input, so
/// `"  Python "` and `"python"` name the same software everywhere: catalog
/// lookups, registry keys, and the persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SoftwareName(String);

impl SoftwareName {
    /// Create a new software name, canonicalizing the input (trim + lowercase).
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// Return the canonical name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SoftwareName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for SoftwareName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for SoftwareName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SoftwareName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SoftwareName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.trim().to_lowercase()
    }
}

impl PartialEq<&str> for SoftwareName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.trim().to_lowercase()
    }
}

impl From<&str> for SoftwareName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SoftwareName {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

/// An opaque version string.
///
/// Versions are compared for equality only; there is no ordering. The
/// lifecycle rules never need "newer than", only "equal to latest".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version(String);

impl Version {
    /// Create a new version from the given string (stored as-is).
    pub fn new(v: &str) -> Self {
        Self(v.to_string())
    }

    /// Return the version string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for Version {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
