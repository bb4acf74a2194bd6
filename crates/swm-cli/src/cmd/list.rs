//! List command

use anyhow::Result;
use crossterm::style::Stylize;
use swm_core::SoftwareService;
use swm_schema::Envelope;

use crate::ui::{self, field};

/// List installed software with versions and descriptions.
pub fn list(service: &SoftwareService, json: bool) -> Result<Envelope> {
    let envelope = service.list_installed_software();
    ui::emit(&envelope, json, |data| {
        let empty = Vec::new();
        let items = data["installed_software"].as_array().unwrap_or(&empty);

        if items.is_empty() {
            println!();
            println!("  No software installed.");
            println!("  Run 'swm install <name>' to get started.");
            return;
        }

        println!();
        for item in items {
            let name_col = format!("{:<14}", field(item, "name"));
            let version_col = format!("{:<10}", field(item, "version"));
            println!(
                "  {} {} {}",
                name_col.white().bold(),
                version_col.dark_grey(),
                field(item, "description")
            );
        }
        println!();
        println!("  {} installed", items.len());
    })?;
    Ok(envelope)
}
