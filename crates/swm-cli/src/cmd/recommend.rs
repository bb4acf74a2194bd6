//! Recommend command

use anyhow::Result;
use crossterm::style::Stylize;
use swm_core::SoftwareService;
use swm_schema::Envelope;

use crate::ui::{self, field};

/// Recommend software for a task.
pub fn recommend(service: &SoftwareService, task: &str, json: bool) -> Result<Envelope> {
    let envelope = service.get_recommendations(task);
    ui::emit(&envelope, json, |data| {
        println!();
        println!("  Recommended for {}:", field(data, "task").white().bold());
        if let Some(names) = data["recommendations"].as_array() {
            for name in names {
                println!("    {}", name.as_str().unwrap_or_default());
            }
        }
    })?;
    Ok(envelope)
}
