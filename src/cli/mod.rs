//! Command-line interface: argument parsing, validation, and command
//! dispatch for the serve and migrate subcommands.

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use executor::{CommandOutcome, execute_command};
pub use parser::{Cli, Commands, LogLevel};

use crate::config::{ConfigError, ConfigLoader, Settings};

/// Loads settings, honoring the global `--config` and `--env` flags, then
/// folds the command-line overrides (host, port, log level, verbosity) into
/// the result.
pub fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_file(path.clone()),
        None => ConfigLoader::new()?,
    };
    let loader = match cli.env {
        Some(env) => loader.with_environment(env),
        None => loader,
    };

    let mut settings = loader.load_unvalidated()?;
    apply_cli_overrides(cli, &mut settings);
    settings.validate()?;
    Ok(settings)
}

fn apply_cli_overrides(cli: &Cli, settings: &mut Settings) {
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    if let Some(Commands::Serve {
        host,
        port,
        log_level,
        ..
    }) = &cli.command
    {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
        // A per-serve log level wins over --verbose/--quiet.
        if let Some(level) = log_level {
            settings.logger.level = level.as_str().to_string();
        }
    }
}
