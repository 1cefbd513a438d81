use clap::Parser;

use storefront_rs::cli::{self, Cli, CommandOutcome};
use storefront_rs::logger::init_logger;
use storefront_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match cli::load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_logger(&settings.logger)?;

    match cli::execute_command(&cli, settings.clone()).await {
        Ok(CommandOutcome::StartServer) => Server::new(settings).run().await,
        Ok(CommandOutcome::Done) => Ok(()),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            std::process::exit(1);
        }
    }
}
