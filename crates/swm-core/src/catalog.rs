//! Fixed reference data describing known software.
//!
//! The catalog is read-only and known at process start. Absence of a name
//! here is not an error at this layer; callers decide the error kind.

use std::collections::BTreeMap;
use swm_schema::{SoftwareName, Version};

/// Known software: (name, latest version, category, description).
const KNOWN_SOFTWARE: &[(&str, &str, &str, &str)] = &[
    ("python", "3.11.0", "language", "Python programming language"),
    ("git", "2.43.0", "devtools", "Version control system"),
    ("vscode", "1.87.2", "editor", "Visual Studio Code editor"),
    ("nodejs", "21.6.0", "runtime", "JavaScript runtime environment"),
    ("docker", "25.0.1", "container", "Container platform"),
    ("java", "21.0.1", "language", "Java development kit"),
    ("mysql", "8.3.0", "database", "MySQL database server"),
    ("postgresql", "16.1", "database", "PostgreSQL database server"),
];

/// Task-based software recommendations.
const TASK_RECOMMENDATIONS: &[(&str, &[&str])] = &[
    ("web development", &["python", "nodejs", "vscode", "git"]),
    ("data science", &["python", "nodejs", "git"]),
    ("database", &["mysql", "postgresql", "git"]),
    ("containerization", &["docker", "git"]),
    ("java development", &["java", "vscode", "git"]),
    ("full stack", &["python", "nodejs", "mysql", "docker", "vscode", "git"]),
];

/// Metadata for one piece of known software.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Canonical name, the lookup key.
    pub name: SoftwareName,
    /// One-line description.
    pub description: &'static str,
    /// The newest version the catalog knows about.
    pub latest_version: Version,
    /// Coarse grouping (language, database, ...).
    pub category: &'static str,
}

/// Read-only mapping from software name to its metadata.
#[derive(Debug)]
pub struct Catalog {
    entries: BTreeMap<SoftwareName, CatalogEntry>,
}

impl Catalog {
    /// Build the catalog from the compiled-in software table.
    pub fn builtin() -> Self {
        let entries = KNOWN_SOFTWARE
            .iter()
            .map(|&(name, latest, category, description)| {
                let name = SoftwareName::new(name);
                let entry = CatalogEntry {
                    name: name.clone(),
                    description,
                    latest_version: Version::new(latest),
                    category,
                };
                (name, entry)
            })
            .collect();

        Self { entries }
    }

    /// Look up a catalog entry by canonical name.
    pub fn lookup(&self, name: &SoftwareName) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Iterate over all entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Recommended software names for a canonical task string, if known.
    pub fn recommend(&self, task: &str) -> Option<&'static [&'static str]> {
        TASK_RECOMMENDATIONS
            .iter()
            .find(|(t, _)| *t == task)
            .map(|&(_, names)| names)
    }

    /// All recognized recommendation tasks, in table order.
    pub fn tasks(&self) -> impl Iterator<Item = &'static str> {
        TASK_RECOMMENDATIONS.iter().map(|&(t, _)| t)
    }
}
