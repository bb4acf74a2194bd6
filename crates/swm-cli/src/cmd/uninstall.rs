//! Uninstall command

use anyhow::Result;
use swm_core::SoftwareService;
use swm_schema::Envelope;

use crate::ui::{self, Output};

/// Remove the installed record for `name`.
pub fn uninstall(service: &SoftwareService, name: &str, json: bool) -> Result<Envelope> {
    let envelope = service.uninstall(name);
    ui::emit(&envelope, json, |data| {
        Output::new().success(&format!("Uninstalled {}", ui::field(data, "name")));
    })?;
    Ok(envelope)
}
