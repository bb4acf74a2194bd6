//! Update command

use anyhow::Result;
use swm_core::SoftwareService;
use swm_schema::Envelope;

use crate::ui::{self, Output};

/// Move installed software to the catalog's latest version.
pub fn update(service: &SoftwareService, name: &str, json: bool) -> Result<Envelope> {
    let envelope = service.update(name);
    ui::emit(&envelope, json, |data| {
        Output::new().success(&format!(
            "Updated {} {} -> {}",
            ui::field(data, "name"),
            ui::field(data, "old_version"),
            ui::field(data, "new_version")
        ));
    })?;
    Ok(envelope)
}
