//! Shared types and wire format for swm.
//!
//! Everything observable at the tool boundary lives here: the
//! [`SoftwareName`] and [`Version`] newtypes, the persisted registry
//! document, and the uniform [`Envelope`] returned by every operation.

pub mod envelope;
pub mod registry;
pub mod types;

// Re-exports
pub use envelope::{Envelope, ErrorCode, ErrorInfo};
pub use registry::{InstalledRecord, Registry};
pub use types::{SoftwareName, Version};
