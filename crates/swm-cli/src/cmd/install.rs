//! Install command

use anyhow::Result;
use swm_core::SoftwareService;
use swm_schema::Envelope;

use crate::ui::{self, Output};

/// Install `name`, recording it at the catalog's latest version.
pub fn install(service: &SoftwareService, name: &str, json: bool) -> Result<Envelope> {
    let envelope = service.install(name);
    ui::emit(&envelope, json, |data| {
        Output::new().success(&format!(
            "Installed {} {}",
            ui::field(data, "name"),
            ui::field(data, "version")
        ));
    })?;
    Ok(envelope)
}
