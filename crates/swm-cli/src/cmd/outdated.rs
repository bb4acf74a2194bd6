//! Outdated command

use anyhow::Result;
use crossterm::style::Stylize;
use swm_core::SoftwareService;
use swm_schema::Envelope;

use crate::ui::{self, Output, field};

/// List installed software with an update available.
pub fn outdated(service: &SoftwareService, json: bool) -> Result<Envelope> {
    let envelope = service.check_updates();
    ui::emit(&envelope, json, |data| {
        let empty = Vec::new();
        let updates = data["available_updates"].as_array().unwrap_or(&empty);

        if updates.is_empty() {
            Output::new().success("All software is up to date.");
            return;
        }

        println!();
        for item in updates {
            let name_col = format!("{:<14}", field(item, "name"));
            println!(
                "  {} {}  ->  {}",
                name_col.white().bold(),
                field(item, "current_version").dark_grey(),
                field(item, "latest_version").green()
            );
        }
        println!();
        println!("  {} update(s) available", updates.len());
    })?;
    Ok(envelope)
}
