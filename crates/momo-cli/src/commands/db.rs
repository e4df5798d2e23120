//! Fixture data commands: seed and reset.

use clap::{Args, Subcommand};
use sqlx::PgPool;

use crate::output;
use momo_core::error::AppError;
use momo_database::fixtures::{table_counts, truncate_all};
use momo_database::migration::run_migrations;
use momo_service::seed::{SEED_PASSWORD, seed_fixtures};

/// Arguments for the db command
#[derive(Debug, Args)]
pub struct DbArgs {
    /// Database subcommand
    #[command(subcommand)]
    pub command: DbCommand,
}

/// Database subcommands
#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Insert the fixture users, posts, comments and likes
    Seed,
    /// Empty every table and reset id sequences
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
        /// Seed fixtures after the reset
        #[arg(long)]
        seed: bool,
    },
}

/// Execute database commands
pub async fn execute(args: &DbArgs, pool: &PgPool) -> Result<(), AppError> {
    match &args.command {
        DbCommand::Seed => {
            run_migrations(pool).await?;
            seed(pool).await?;
        }
        DbCommand::Reset { force, seed: reseed } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("This will DELETE all users, posts, comments and likes. Continue?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            run_migrations(pool).await?;
            truncate_all(pool).await?;
            output::print_success("Database reset complete.");

            if *reseed {
                seed(pool).await?;
            }
        }
    }
    Ok(())
}

async fn seed(pool: &PgPool) -> Result<(), AppError> {
    let report = seed_fixtures(pool).await?;
    output::print_success(&format!(
        "Seeded {} users, {} posts, {} comments, {} likes (password: {SEED_PASSWORD}).",
        report.users.len(),
        report.posts.len(),
        report.comments,
        report.likes
    ));

    for (table, count) in table_counts(pool).await? {
        output::print_kv(table, &count.to_string());
    }
    Ok(())
}
