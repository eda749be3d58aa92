//! projkit CLI
//!
//! Usage: projkit <COMMAND>
//!
//! Commands:
//!   icon           Convert the application icon source into an ICO container
//!   deps generate  Write dependency discovery files and the toolchain file
//!   deps list      List declared dependencies

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands, DepsCommands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Icon { dir, pack, force } => {
            commands::icon::cmd_icon(&cli.project, dir, pack, force, cli.json)
        }
        Commands::Deps { command } => match command {
            DepsCommands::Generate { output_dir } => {
                commands::deps::cmd_deps_generate(&cli.project, output_dir, cli.json)
            }
            DepsCommands::List => commands::deps::cmd_deps_list(&cli.project, cli.json),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::output::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

/// `PROJKIT_LOG` wins over `-v` flags
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("PROJKIT_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
