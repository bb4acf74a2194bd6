//! swm - software lifecycle manager CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use swm_cli::ui;
use swm_cli::{Cli, Commands, cmd};
use swm_core::{Catalog, Config, RegistryStore, SoftwareService};
use swm_schema::{Envelope, ErrorCode, ErrorInfo};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            let envelope =
                Envelope::failure(ErrorInfo::new(ErrorCode::ConfigMissing, e.to_string()));
            ui::emit(&envelope, cli.json, |_| {})?;
            std::process::exit(1);
        }
    };

    // Logging goes to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        home = %config.home.display(),
        registry = %config.registry_path.display(),
        "resolved configuration"
    );

    let service = SoftwareService::new(
        Catalog::builtin(),
        RegistryStore::new(config.registry_path.clone()),
    );

    let envelope = match cli.command {
        Commands::Install { name } => cmd::install::install(&service, &name, cli.json)?,
        Commands::Uninstall { name } => cmd::uninstall::uninstall(&service, &name, cli.json)?,
        Commands::Update { name } => cmd::update::update(&service, &name, cli.json)?,
        Commands::Info { name } => cmd::info::info(&service, &name, cli.json)?,
        Commands::List => cmd::list::list(&service, cli.json)?,
        Commands::Outdated => cmd::outdated::outdated(&service, cli.json)?,
        Commands::Recommend { task } => {
            cmd::recommend::recommend(&service, &task.join(" "), cli.json)?
        }
        Commands::Autoupdate { name, state } => {
            cmd::autoupdate::autoupdate(&service, &name, state.enabled(), cli.json)?
        }
        Commands::Completions { shell } => {
            cmd::completions::completions(shell);
            return Ok(());
        }
    };

    if !envelope.ok {
        std::process::exit(1);
    }

    Ok(())
}
