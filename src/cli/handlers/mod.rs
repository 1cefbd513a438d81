//! Command handlers for CLI subcommands.

mod migrate;
mod serve;

pub use migrate::MigrateCommandHandler;
pub use serve::ServeCommandHandler;
