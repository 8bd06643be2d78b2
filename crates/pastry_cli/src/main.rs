//! Pastry CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (including a cancelled prompt)
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Manifest error
//! - 4: Filesystem error

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pastry_template::{Project, TemplateError};

mod commands;
mod prompt;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const MANIFEST_ERROR: u8 = 3;
    pub const FILESYSTEM_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let manifest_version = Project::current_dir().and_then(|project| project.manifest_version());
    let version = match &manifest_version {
        Ok(version) => version.clone(),
        Err(_) => env!("CARGO_PKG_VERSION").to_string(),
    };

    let matches = Cli::command().version(version).get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);

    if let Err(e) = &manifest_version {
        debug!("Reporting built-in version, manifest version unavailable: {}", e);
    }

    let Some(command) = cli.command else {
        let err = Cli::command().error(ErrorKind::MissingSubcommand, "A command is required");
        let _ = err.print();
        return ExitCode::from(ExitCodes::INVALID_ARGS);
    };

    let result = match command {
        Commands::Init(args) => commands::init::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,pastry_cli=debug,pastry_template=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Map an error to its exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    let template_error = e
        .chain()
        .find_map(|cause| cause.downcast_ref::<TemplateError>());

    match template_error {
        Some(err) if err.is_manifest_error() => ExitCodes::MANIFEST_ERROR,
        Some(err) if err.is_filesystem_error() => ExitCodes::FILESYSTEM_ERROR,
        _ => ExitCodes::GENERAL_ERROR,
    }
}
