//! swm - core state-transition and persistence logic.
//!
//! Two read paths and one write path compose the system:
//!
//! - [`catalog::Catalog`] is fixed reference data: every piece of software
//!   the system knows about, with its latest version.
//! - [`registry::RegistryStore`] owns the persisted record of what is
//!   installed, loaded from and atomically rewritten to a single JSON
//!   document.
//! - [`service::SoftwareService`] consumes both and implements the
//!   lifecycle operations as pure state transitions, returning the uniform
//!   result envelope for every call.
//!
//! # Directory Layout
//!
//! ```text
//! ~/.swm/
//! ├── registry.json   # Installed-software registry
//! └── config.toml     # Optional configuration overrides
//! ```

pub mod catalog;
pub mod config;
pub mod paths;
pub mod registry;
pub mod service;
pub mod validate;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogEntry};
pub use config::{Config, ConfigError};
pub use registry::{RegistryError, RegistryStore};
pub use service::SoftwareService;
