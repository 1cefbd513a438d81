//! Serve command handler.
//!
//! The dry-run path validates configuration and prints a summary; the real
//! server startup lives in `server::Server` and is driven from main.

use crate::config::Settings;
use crate::error::AppResult;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validates configuration without starting the server.
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("Configuration is valid");
        println!("Server would bind to: {}", self.config.server.address());
        println!(
            "Database pool: {} max / {} min connections",
            self.config.database.max_connections, self.config.database.min_connections
        );
        println!("Dry run completed successfully");
        Ok(())
    }
}
