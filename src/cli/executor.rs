//! Command executor for dispatching CLI commands.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;

/// Outcome of command execution, telling main whether to start the server.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command finished; the process should exit.
    Done,
    /// The serve command was requested; main should start the server.
    StartServer,
}

/// Dispatches the parsed command to its handler.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<CommandOutcome> {
    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings).validate_only()?;
            Ok(CommandOutcome::Done)
        }
        Some(Commands::Serve { .. }) | None => Ok(CommandOutcome::StartServer),
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await?;
            Ok(CommandOutcome::Done)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/storefront".to_string();
        settings
    }

    #[tokio::test]
    async fn bare_invocation_defaults_to_serving() {
        let cli = Cli::try_parse_from(["storefront-rs"]).unwrap();
        let outcome = execute_command(&cli, valid_settings()).await.unwrap();
        assert_eq!(outcome, CommandOutcome::StartServer);
    }

    #[tokio::test]
    async fn serve_dry_run_finishes_without_starting() {
        let cli = Cli::try_parse_from(["storefront-rs", "serve", "--dry-run"]).unwrap();
        let outcome = execute_command(&cli, valid_settings()).await.unwrap();
        assert_eq!(outcome, CommandOutcome::Done);
    }
}
