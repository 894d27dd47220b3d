//! CLI administration tool for users-api.
//!
//! Provides commands for managing the database and user records without
//! requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Insert sample users (use --reset to clear the table first)
//! cargo run --bin admin -- db seed --reset
//!
//! # List users
//! cargo run --bin admin -- users list
//!
//! # Delete a user
//! cargo run --bin admin -- users delete 3
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`, `APP_ENV`).

use users_api::config;
use users_api::domain::entities::NewUser;
use users_api::domain::repositories::UserRepository;
use users_api::error::{AppError, StorageFault};
use users_api::infrastructure::persistence::PgUserRepository;
use users_api::server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// Sample records inserted by `db seed`.
const SEED_USERS: [(&str, &str); 3] = [
    ("John Doe", "john.doe@example.com"),
    ("Jane Smith", "jane.smith@example.com"),
    ("Bob Johnson", "bob.johnson@example.com"),
];

/// CLI tool for managing users-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage user records
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,

    /// Insert sample users
    Seed {
        /// Delete all existing users first
        #[arg(long)]
        reset: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UsersAction {
    /// List all users
    List,

    /// Delete a user by id
    Delete {
        /// User id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Users { action } => handle_users_action(action, &pool).await?,
    }

    Ok(())
}

/// Handles database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Users:      {}",
                users_count.to_string().bright_green().bold()
            );
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
        DbAction::Seed { reset, yes } => seed(pool, reset, yes).await?,
    }

    Ok(())
}

/// Inserts [`SEED_USERS`], optionally clearing the table first.
///
/// Records whose email already exists are skipped.
async fn seed(pool: &PgPool, reset: bool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed users".bright_blue().bold());
    println!();

    if reset && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete ALL existing users before seeding?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if reset {
        let removed = sqlx::query("DELETE FROM users").execute(pool).await?;
        println!(
            "  Removed {} existing user(s)",
            removed.rows_affected().to_string().yellow()
        );
    }

    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    for (name, email) in SEED_USERS {
        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
        };

        match repo.create(new_user).await {
            Ok(user) => println!(
                "  {} {} <{}>",
                format!("#{}", user.id).bright_black(),
                user.name.cyan(),
                user.email
            ),
            Err(AppError::Storage {
                fault: StorageFault::UniqueViolation,
                ..
            }) => println!("  {} {} (already exists)", "skip".yellow(), email),
            Err(e) => anyhow::bail!("Failed to seed {}: {}", email, e),
        }
    }

    println!();
    println!("{}", "✅ Seeding complete".green().bold());

    Ok(())
}

/// Handles user management commands.
async fn handle_users_action(action: UsersAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UsersAction::List => list_users(repo).await?,
        UsersAction::Delete { id, yes } => delete_user(repo, id, yes).await?,
    }

    Ok(())
}

/// Lists all users, newest first.
///
/// # Output Format
///
/// ```text
/// 👥 Users
///
///   ID  Name                      Email                          Created
///   ───────────────────────────────────────────────────────────────────────────
///   3   Bob Johnson               bob.johnson@example.com        2025-01-01 10:30
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Insert samples with: {} admin db seed",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<25} {:<30} {:<16}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(79).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<25} {:<30} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a user after showing it and asking for confirmation.
async fn delete_user(repo: Arc<PgUserRepository>, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete User".bright_blue().bold());
    println!();

    let user = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let Some(user) = user else {
        println!("{}", format!("⚠️  No user with id {}", id).yellow());
        return Ok(());
    };

    println!("  Name:  {}", user.name.cyan());
    println!("  Email: {}", user.email);
    println!("  ID:    {}", user.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    if !deleted {
        println!("{}", format!("⚠️  User {} was already removed", id).yellow());
        return Ok(());
    }

    println!();
    println!("{}", "✅ User deleted".green().bold());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insert_user(pool: &PgPool, email: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO users (name, email) VALUES ('Admin Test', $1) RETURNING id")
            .bind(email)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    async fn test_delete_user_removes_row(pool: PgPool) {
        let id = insert_user(&pool, "admin.test@example.com").await;
        let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

        delete_user(repo.clone(), id, true).await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[sqlx::test]
    async fn test_delete_user_missing_id_is_not_an_error(pool: PgPool) {
        let repo = Arc::new(PgUserRepository::new(Arc::new(pool)));

        assert!(delete_user(repo, 999_999, true).await.is_ok());
    }

    #[sqlx::test]
    async fn test_seed_skips_existing_emails(pool: PgPool) {
        seed(&pool, false, true).await.unwrap();
        seed(&pool, false, true).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, SEED_USERS.len() as i64);
    }
}
