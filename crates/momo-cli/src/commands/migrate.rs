//! Database migration commands.

use clap::{Args, Subcommand};
use sqlx::PgPool;

use crate::output;
use momo_core::error::AppError;
use momo_database::migration::run_migrations;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, pool: &PgPool) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            run_migrations(pool).await?;
            output::print_success("All migrations applied successfully.");
        }
    }
    Ok(())
}
