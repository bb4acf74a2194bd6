//! The persisted registry document.
//!
//! On disk this is a single JSON object:
//!
//! ```json
//! { "installed_software": { "<name>": { "version": "...", "installed_date": "...", "auto_update": false } } }
//! ```
//!
//! Entries are kept in an ordered map so re-serialization is deterministic.

use crate::types::{SoftwareName, Version};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Installed-state record for one piece of software.
///
/// Records are value types: mutation replaces the whole record rather than
/// editing it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstalledRecord {
    /// The installed version.
    pub version: Version,
    /// When the software was installed (RFC 3339 on the wire).
    pub installed_date: DateTime<Utc>,
    /// Whether automatic updates are enabled for this software.
    pub auto_update: bool,
}

impl InstalledRecord {
    /// A fresh record installed now at `version`, auto-update off.
    pub fn installed_now(version: Version) -> Self {
        Self {
            version,
            installed_date: Utc::now(),
            auto_update: false,
        }
    }
}

/// Mapping from software name to installed-state record.
///
/// This is both the in-memory registry and the persisted document shape.
/// The map operations here never touch disk; loading and saving are the
/// store's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    /// Installed software keyed by canonical name.
    #[serde(default)]
    pub installed_software: BTreeMap<SoftwareName, InstalledRecord>,
}

impl Registry {
    /// An empty registry, the valid initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the installed record for `name`.
    pub fn get(&self, name: &SoftwareName) -> Option<&InstalledRecord> {
        self.installed_software.get(name)
    }

    /// Insert or replace the record for `name`.
    pub fn put(&mut self, name: SoftwareName, record: InstalledRecord) {
        self.installed_software.insert(name, record);
    }

    /// Remove the record for `name`, returning it if present.
    pub fn remove(&mut self, name: &SoftwareName) -> Option<InstalledRecord> {
        self.installed_software.remove(name)
    }

    /// Iterate over records in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&SoftwareName, &InstalledRecord)> {
        self.installed_software.iter()
    }

    /// Number of installed records.
    pub fn len(&self) -> usize {
        self.installed_software.len()
    }

    /// Whether nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.installed_software.is_empty()
    }
}
