//! Auto-update toggle command

use anyhow::Result;
use swm_core::SoftwareService;
use swm_schema::Envelope;

use crate::ui::{self, Output};

/// Set the auto-update flag for installed software.
pub fn autoupdate(
    service: &SoftwareService,
    name: &str,
    enabled: bool,
    json: bool,
) -> Result<Envelope> {
    let envelope = service.set_auto_update(name, enabled);
    ui::emit(&envelope, json, |data| {
        Output::new().success(&format!(
            "{} for {}",
            ui::field(data, "status"),
            ui::field(data, "name")
        ));
    })?;
    Ok(envelope)
}
