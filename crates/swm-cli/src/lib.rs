//! swm - software lifecycle manager
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
//!
//! Tracks the simulated lifecycle of known software against a persisted
//! registry: install, uninstall, update, query, recommend, and toggle
//! auto-update. Installing here means writing a record; no binaries are
//! touched.
//!
//! Every subcommand maps to one core operation and prints either a
//! human-readable rendering or, with `--json`, the raw result envelope.

pub mod cmd;
pub mod ui;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "swm")]
#[command(author, version, about = "swm - software lifecycle manager")]
pub struct Cli {
    /// Print the raw JSON result envelope instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install software from the catalog
    Install {
        /// Software name
        name: String,
    },
    /// Uninstall installed software
    Uninstall {
        /// Software name
        name: String,
    },
    /// Update installed software to the latest version
    Update {
        /// Software name
        name: String,
    },
    /// Show catalog and installed-state info for software
    Info {
        /// Software name
        name: String,
    },
    /// List installed software
    List,
    /// List installed software with available updates
    Outdated,
    /// Recommend software for a task
    Recommend {
        /// Task description, e.g. "web development"
        #[arg(required = true)]
        task: Vec<String>,
    },
    /// Enable or disable auto-update for installed software
    Autoupdate {
        /// Software name
        name: String,
        /// New auto-update state
        state: Toggle,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// On/off switch argument for `autoupdate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    /// Enable auto-update
    On,
    /// Disable auto-update
    Off,
}

impl Toggle {
    /// Whether this switch means enabled.
    pub fn enabled(self) -> bool {
        matches!(self, Self::On)
    }
}
