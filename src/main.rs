//! Stackpilot CLI - build, deploy and clean up a serverless stack
//!
//! Usage: stackpilot <COMMAND>
//!
//! Commands:
//!   build    Build the dependency layers, then the functions
//!   deploy   Build, validate and deploy the stack
//!   cleanup  Find and delete leftover cloud resources
//!   outputs  Print the outputs of a deployed stack

use anyhow::Result;
use clap::Parser;

use stackpilot::config::{load_layered, EnvSnapshot};
use stackpilot::presentation::{Cli, Commands};
use stackpilot::{logging, Settings};

mod commands;
mod ui;

use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    let early = UiContext::early(cli.json, cli.color.map(Into::into));
    logging::init(cli.verbose, early.color);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "command failed");
        ui::error::print_error(&err, cli.json, early.color, early.unicode);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let project_root = cli.project_dir.as_path();
    let (config, config_warnings) = load_layered(project_root, cli.config.as_deref())?;
    let settings = Settings::resolve(config, &EnvSnapshot::capture(), &cli.overrides());
    tracing::debug!(?settings, "settings resolved");

    let ui = UiContext::new(cli.json, &settings);
    ui::output::print_warnings(&ui, &config_warnings, settings.warnings());

    match &cli.command {
        Commands::Build { parallel } => {
            commands::build::cmd_build(&settings, project_root, *parallel, &ui)
        }
        Commands::Deploy {
            parallel,
            skip_build,
            ..
        } => commands::deploy::cmd_deploy(&settings, project_root, *parallel, *skip_build, &ui),
        Commands::Cleanup { yes, dry_run, .. } => {
            commands::cleanup::cmd_cleanup(&settings, *yes, *dry_run, &ui)
        }
        Commands::Outputs { .. } => commands::outputs::cmd_outputs(&settings, &ui),
    }
}
