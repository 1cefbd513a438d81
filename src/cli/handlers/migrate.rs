//! Migrate command handler.
//!
//! Migrations run over a synchronous PgConnection on a blocking task;
//! diesel_migrations' MigrationHarness has no async counterpart.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::MigrationHarness;

use crate::config::Settings;
use crate::db::MIGRATIONS;
use crate::error::{AppError, AppResult};

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Executes the migrate command.
    ///
    /// `dry_run` lists pending migrations without applying them; `rollback`
    /// reverts the given number of most recent migrations.
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;

        if dry_run {
            return self.show_pending_migrations().await;
        }

        match rollback {
            Some(steps) => self.rollback_migrations(steps).await,
            None => self.run_migrations().await,
        }
    }

    async fn show_pending_migrations(&self) -> AppResult<()> {
        println!("Checking for pending migrations...");

        let pending_names = self
            .with_blocking_connection("check pending migrations", |conn| {
                let pending = conn
                    .pending_migrations(MIGRATIONS)
                    .map_err(|e| migration_error("check pending migrations", e))?;
                Ok(pending.iter().map(|m| m.name().to_string()).collect::<Vec<_>>())
            })
            .await?;

        if pending_names.is_empty() {
            println!("No pending migrations - database is up to date");
        } else {
            println!("Found {} pending migration(s):", pending_names.len());
            for name in &pending_names {
                println!("  {}", name);
            }
            println!("\nRun without --dry-run to apply these migrations");
        }
        Ok(())
    }

    async fn run_migrations(&self) -> AppResult<()> {
        println!("Running database migrations...");

        let applied = self
            .with_blocking_connection("run pending migrations", |conn| {
                let applied = conn
                    .run_pending_migrations(MIGRATIONS)
                    .map_err(|e| migration_error("run pending migrations", e))?;
                Ok(applied.iter().map(|m| m.to_string()).collect::<Vec<_>>())
            })
            .await?;

        if applied.is_empty() {
            println!("No migrations to apply - database is up to date");
        } else {
            for name in &applied {
                println!("Applied: {}", name);
            }
            println!("{} migration(s) applied", applied.len());
        }
        Ok(())
    }

    async fn rollback_migrations(&self, steps: u32) -> AppResult<()> {
        println!("Rolling back {} migration(s)...", steps);

        let reverted = self
            .with_blocking_connection("revert migrations", move |conn| {
                let mut reverted = Vec::new();
                for _ in 0..steps {
                    let version = conn
                        .revert_last_migration(MIGRATIONS)
                        .map_err(|e| migration_error("revert last migration", e))?;
                    reverted.push(version.to_string());
                }
                Ok(reverted)
            })
            .await?;

        for name in &reverted {
            println!("Reverted: {}", name);
        }
        println!("{} migration(s) reverted", reverted.len());
        Ok(())
    }

    /// Establishes a synchronous connection on a blocking task and runs the
    /// provided closure with it.
    async fn with_blocking_connection<T, F>(&self, operation: &str, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
    {
        let database_url = self.config.database.url.clone();
        let operation = operation.to_string();
        tokio::task::spawn_blocking(move || {
            let mut conn = PgConnection::establish(&database_url).map_err(|e| {
                AppError::Database {
                    operation: format!("establish connection for {}", operation),
                    source: anyhow::anyhow!("Connection error: {}", e),
                }
            })?;
            f(&mut conn)
        })
        .await
        .map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })?
    }
}

fn migration_error(operation: &str, e: Box<dyn std::error::Error + Send + Sync>) -> AppError {
    AppError::Database {
        operation: operation.to_string(),
        source: anyhow::anyhow!("Migration error: {}", e),
    }
}
