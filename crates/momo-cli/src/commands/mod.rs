//! CLI command definitions and dispatch.

pub mod db;
pub mod migrate;
pub mod user;

use clap::{Parser, Subcommand};
use sqlx::PgPool;

use crate::output::OutputFormat;
use momo_core::config::AppConfig;
use momo_core::error::AppError;
use momo_database::DatabasePool;

/// Momo: users CRUD backend administration
#[derive(Debug, Parser)]
#[command(name = "momo", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (`config/<env>.toml`, `.env.<env>`)
    #[arg(short, long, env = "MOMO_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Fixture data management
    Db(db::DbArgs),
    /// User inspection
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;
        let pool = create_db_pool(&config).await?;

        let result = match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &pool).await,
            Commands::Db(args) => db::execute(args, &pool).await,
            Commands::User(args) => user::execute(args, &pool, self.format).await,
        };

        pool.close().await;
        result
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<PgPool, AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
