//! User inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use sqlx::PgPool;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use momo_core::error::AppError;
use momo_core::traits::Repository;
use momo_database::repositories::UserRepository;
use momo_entity::User;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct UserRow {
    /// User ID
    id: i64,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Created at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    pool: &PgPool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(pool.clone());

    match &args.command {
        UserCommand::List => {
            let users = user_repo.find_all().await?;
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
