//! Durable storage for the installed-software registry.
//!
//! The registry lives in a single JSON document. Saving rewrites the whole
//! document atomically: serialize to a sibling temp file, then rename over
//! the target, so readers never observe a partially written registry and a
//! failed save leaves the previous copy intact.

use std::fs;
use std::path::{Path, PathBuf};

use swm_schema::Registry;
use thiserror::Error;
use tracing::debug;

/// Errors reading or writing the registry document.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The document could not be read or replaced.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document exists but does not parse, or a registry failed to
    /// serialize.
    #[error("Malformed registry document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Exclusive owner of the persisted registry document.
#[derive(Debug)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    /// Create a store backed by the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted registry.
    ///
    /// A missing document is the valid initial state and loads as an empty
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the document exists but cannot be read
    /// or parsed.
    pub fn load(&self) -> Result<Registry, RegistryError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no registry document; starting empty");
            return Ok(Registry::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let registry: Registry = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), entries = registry.len(), "loaded registry");
        Ok(registry)
    }

    /// Atomically replace the persisted document with `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if serialization, the temp-file write, or
    /// the rename fails. The previous on-disk copy survives any failure.
    pub fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(registry)?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        debug!(path = %self.path.display(), entries = registry.len(), "saved registry");
        Ok(())
    }
}
