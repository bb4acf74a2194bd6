//! Command handlers, one per subcommand.

pub mod autoupdate;
pub mod completions;
pub mod info;
pub mod install;
pub mod list;
pub mod outdated;
pub mod recommend;
pub mod uninstall;
pub mod update;
