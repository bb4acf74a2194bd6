//! Info command

use anyhow::Result;
use crossterm::style::Stylize;
use swm_core::SoftwareService;
use swm_schema::Envelope;

use crate::ui::{self, field};

/// Show catalog metadata and installed state for `name`.
pub fn info(service: &SoftwareService, name: &str, json: bool) -> Result<Envelope> {
    let envelope = service.get_software_info(name);
    ui::emit(&envelope, json, |data| {
        let lw = 14;
        let installed = data["installed"].as_bool().unwrap_or(false);

        println!();
        println!(
            "  {} {}",
            field(data, "name").white().bold(),
            field(data, "latest_version").dark_grey()
        );
        println!("  {}", field(data, "description"));
        println!();
        println!("  {:<lw$}{}", "category", field(data, "category"));

        if installed {
            println!("  {:<lw$}{}", "installed", field(data, "current_version"));
            println!("  {:<lw$}{}", "since", field(data, "installed_date"));
            let auto = data["auto_update"].as_bool().unwrap_or(false);
            println!("  {:<lw$}{}", "auto-update", if auto { "on" } else { "off" });
        } else {
            println!("  {:<lw$}{}", "installed", "no");
        }
    })?;
    Ok(envelope)
}
