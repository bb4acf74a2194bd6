//! Lifecycle operations over the catalog and the registry store.
//!
//! Every operation validates its input, consults the catalog, performs a
//! load → mutate → save cycle against the store (mutating operations only),
//! and returns one [`Envelope`]. No registry state is cached across calls;
//! overlapping invocations each do their own load/save pair.
//!
//! Per-software states: unknown (not in catalog) → available (no record) →
//! installed (record at latest version) / outdated (record at another
//! version). Uninstalling returns the software to available.

use serde_json::{Value, json};
use tracing::{info, warn};

use swm_schema::{Envelope, ErrorCode, ErrorInfo, InstalledRecord, Registry, SoftwareName};

use crate::catalog::{Catalog, CatalogEntry};
use crate::registry::RegistryStore;
use crate::validate;

/// Implements the lifecycle operations as pure state transitions.
///
/// Constructed explicitly at startup with its catalog and store; there is
/// no process-wide instance.
#[derive(Debug)]
pub struct SoftwareService {
    catalog: Catalog,
    store: RegistryStore,
}

impl SoftwareService {
    /// Create a service over the given catalog and registry store.
    pub fn new(catalog: Catalog, store: RegistryStore) -> Self {
        Self { catalog, store }
    }

    /// The catalog this service answers from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Install software: available → installed at the latest version.
    pub fn install(&self, raw_name: &str) -> Envelope {
        self.try_install(raw_name)
            .map_or_else(Envelope::failure, Envelope::success)
    }

    /// Uninstall software: installed/outdated → available.
    pub fn uninstall(&self, raw_name: &str) -> Envelope {
        self.try_uninstall(raw_name)
            .map_or_else(Envelope::failure, Envelope::success)
    }

    /// Update software: outdated → installed at the latest version.
    pub fn update(&self, raw_name: &str) -> Envelope {
        self.try_update(raw_name)
            .map_or_else(Envelope::failure, Envelope::success)
    }

    /// Enable or disable automatic updates for installed software.
    ///
    /// The flag is inert metadata; nothing in the system acts on it.
    pub fn set_auto_update(&self, raw_name: &str, enabled: bool) -> Envelope {
        self.try_set_auto_update(raw_name, enabled)
            .map_or_else(Envelope::failure, Envelope::success)
    }

    /// Catalog metadata for one piece of software, merged with its
    /// installed state when a record exists.
    pub fn get_software_info(&self, raw_name: &str) -> Envelope {
        self.try_get_software_info(raw_name)
            .map_or_else(Envelope::failure, Envelope::success)
    }

    /// Enumerate installed software joined with catalog descriptions.
    pub fn list_installed_software(&self) -> Envelope {
        self.try_list_installed_software()
            .map_or_else(Envelope::failure, Envelope::success)
    }

    /// Installed software whose version differs from the catalog's latest.
    pub fn check_updates(&self) -> Envelope {
        self.try_check_updates()
            .map_or_else(Envelope::failure, Envelope::success)
    }

    /// Recommended software names for a task.
    pub fn get_recommendations(&self, raw_task: &str) -> Envelope {
        self.try_get_recommendations(raw_task)
            .map_or_else(Envelope::failure, Envelope::success)
    }

    fn try_install(&self, raw_name: &str) -> Result<Value, ErrorInfo> {
        let name = validate::software_name(raw_name)?;
        let entry = self.catalog_entry(&name)?;
        let mut registry = self.load_registry()?;

        if registry.get(&name).is_some() {
            return Err(ErrorInfo::new(
                ErrorCode::AlreadyInstalled,
                format!("Software '{name}' is already installed"),
            )
            .with_hint("Use 'update' to move to the latest version"));
        }

        let record = InstalledRecord::installed_now(entry.latest_version.clone());
        let version = record.version.clone();
        registry.put(name.clone(), record);
        self.save_registry(&registry)?;

        info!(name = %name, version = %version, "installed");
        Ok(json!({
            "name": name.as_str(),
            "version": version.as_str(),
            "status": "installed",
        }))
    }

    fn try_uninstall(&self, raw_name: &str) -> Result<Value, ErrorInfo> {
        let name = validate::software_name(raw_name)?;
        self.catalog_entry(&name)?;
        let mut registry = self.load_registry()?;

        let Some(record) = registry.remove(&name) else {
            return Err(not_installed(&name));
        };
        self.save_registry(&registry)?;

        info!(name = %name, version = %record.version, "uninstalled");
        Ok(json!({
            "name": name.as_str(),
            "status": "uninstalled",
        }))
    }

    fn try_update(&self, raw_name: &str) -> Result<Value, ErrorInfo> {
        let name = validate::software_name(raw_name)?;
        let entry = self.catalog_entry(&name)?;
        let mut registry = self.load_registry()?;

        let Some(current) = registry.get(&name) else {
            return Err(not_installed(&name).with_hint("Install the software first"));
        };

        if current.version == entry.latest_version {
            return Err(ErrorInfo::new(
                ErrorCode::UpToDate,
                format!(
                    "Software '{name}' is already up to date (v{})",
                    current.version
                ),
            ));
        }

        let old_version = current.version.clone();
        let record = InstalledRecord {
            version: entry.latest_version.clone(),
            ..current.clone()
        };
        let new_version = record.version.clone();
        registry.put(name.clone(), record);
        self.save_registry(&registry)?;

        info!(name = %name, old = %old_version, new = %new_version, "updated");
        Ok(json!({
            "name": name.as_str(),
            "old_version": old_version.as_str(),
            "new_version": new_version.as_str(),
            "status": "updated",
        }))
    }

    fn try_set_auto_update(&self, raw_name: &str, enabled: bool) -> Result<Value, ErrorInfo> {
        let name = validate::software_name(raw_name)?;
        self.catalog_entry(&name)?;
        let mut registry = self.load_registry()?;

        let Some(current) = registry.get(&name) else {
            return Err(not_installed(&name));
        };

        let record = InstalledRecord {
            auto_update: enabled,
            ..current.clone()
        };
        registry.put(name.clone(), record);
        self.save_registry(&registry)?;

        let status = if enabled {
            "auto-update enabled"
        } else {
            "auto-update disabled"
        };
        info!(name = %name, enabled, "auto-update toggled");
        Ok(json!({
            "name": name.as_str(),
            "auto_update": enabled,
            "status": status,
        }))
    }

    fn try_get_software_info(&self, raw_name: &str) -> Result<Value, ErrorInfo> {
        let name = validate::software_name(raw_name)?;
        let entry = self.catalog_entry(&name)?;
        let registry = self.load_registry()?;

        let mut data = json!({
            "name": name.as_str(),
            "description": entry.description,
            "category": entry.category,
            "latest_version": entry.latest_version.as_str(),
            "current_version": Value::Null,
            "installed": false,
            "auto_update": false,
        });
        if let Some(record) = registry.get(&name) {
            data["current_version"] = json!(record.version.as_str());
            data["installed"] = json!(true);
            data["auto_update"] = json!(record.auto_update);
            data["installed_date"] = json!(record.installed_date.to_rfc3339());
        }
        Ok(data)
    }

    fn try_list_installed_software(&self) -> Result<Value, ErrorInfo> {
        let registry = self.load_registry()?;

        let mut installed = Vec::with_capacity(registry.len());
        for (name, record) in registry.iter() {
            let Some(entry) = self.catalog.lookup(name) else {
                warn!(name = %name, "registry entry references unknown software; skipping");
                continue;
            };
            installed.push(json!({
                "name": name.as_str(),
                "version": record.version.as_str(),
                "description": entry.description,
            }));
        }

        Ok(json!({
            "count": installed.len(),
            "installed_software": installed,
        }))
    }

    fn try_check_updates(&self) -> Result<Value, ErrorInfo> {
        let registry = self.load_registry()?;

        let mut updates = Vec::new();
        for (name, record) in registry.iter() {
            let Some(entry) = self.catalog.lookup(name) else {
                warn!(name = %name, "registry entry references unknown software; skipping");
                continue;
            };
            if record.version != entry.latest_version {
                updates.push(json!({
                    "name": name.as_str(),
                    "current_version": record.version.as_str(),
                    "latest_version": entry.latest_version.as_str(),
                }));
            }
        }

        Ok(json!({
            "count": updates.len(),
            "available_updates": updates,
        }))
    }

    fn try_get_recommendations(&self, raw_task: &str) -> Result<Value, ErrorInfo> {
        let task = validate::task_name(raw_task)?;

        let Some(names) = self.catalog.recommend(&task) else {
            let tasks: Vec<&str> = self.catalog.tasks().collect();
            return Err(ErrorInfo::new(
                ErrorCode::SoftwareNotFound,
                format!("Task '{task}' not found"),
            )
            .with_hint(format!("Available tasks: {}", tasks.join(", "))));
        };

        Ok(json!({
            "task": task,
            "recommendations": names,
            "count": names.len(),
        }))
    }

    fn catalog_entry(&self, name: &SoftwareName) -> Result<&CatalogEntry, ErrorInfo> {
        self.catalog.lookup(name).ok_or_else(|| {
            let known: Vec<&str> = self.catalog.entries().map(|e| e.name.as_str()).collect();
            ErrorInfo::new(
                ErrorCode::SoftwareNotFound,
                format!("Software '{name}' not found in catalog"),
            )
            .with_hint(format!("Known software: {}", known.join(", ")))
        })
    }

    fn load_registry(&self) -> Result<Registry, ErrorInfo> {
        self.store.load().map_err(|e| {
            ErrorInfo::new(
                ErrorCode::RegistryError,
                format!("Failed to load registry: {e}"),
            )
        })
    }

    fn save_registry(&self, registry: &Registry) -> Result<(), ErrorInfo> {
        self.store.save(registry).map_err(|e| {
            ErrorInfo::new(
                ErrorCode::RegistryError,
                format!("Failed to save registry: {e}"),
            )
        })
    }
}

fn not_installed(name: &SoftwareName) -> ErrorInfo {
    ErrorInfo::new(
        ErrorCode::NotInstalled,
        format!("Software '{name}' is not installed"),
    )
}
