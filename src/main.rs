//! Stagehand CLI entry point
//!
//! Usage: stagehand <COMMAND>
//!
//! Commands:
//!   deploy   Deploy component configuration into installed programs
//!   launch   Launch configured programs
//!   version  Show version information

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::deploy::DeployArgs;
use commands::launch::LaunchArgs;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Deploy {
            components,
            apply_to_all_versions,
            backup,
            dry_run,
            config_root,
            programs_root,
            config,
        } => commands::deploy::run(DeployArgs {
            components,
            apply_to_all_versions,
            backup,
            dry_run,
            config_root,
            programs_root,
            config,
            json: cli.json,
            verbose: cli.verbose,
            color: cli.color,
        }),
        Commands::Launch {
            skip,
            elevate,
            programs_root,
            config,
        } => commands::launch::run(LaunchArgs {
            skip,
            elevate,
            programs_root,
            config,
            json: cli.json,
            verbose: cli.verbose,
            color: cli.color,
        }),
        Commands::Version => {
            commands::version::run(cli.json);
            Ok(())
        }
    }
}
