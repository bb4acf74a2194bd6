//! Filesystem locations for swm state.

use dirs::home_dir;
use std::path::PathBuf;

/// Filename of the installed-software registry inside the swm home.
pub const REGISTRY_FILE: &str = "registry.json";

/// Filename of the optional configuration file inside the swm home.
pub const CONFIG_FILE: &str = "config.toml";

/// Returns the swm home directory, or None if the user's home cannot be
/// resolved.
///
/// `SWM_HOME` overrides the default of `~/.swm`.
pub fn try_swm_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var("SWM_HOME") {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".swm"))
}
