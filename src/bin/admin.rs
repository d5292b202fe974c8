//! CLI administration tool for tinylink.
//!
//! Creates and inspects short links directly in the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- create https://www.example.com
//!
//! # Inspect a record without counting a click
//! cargo run --bin admin -- lookup code aZ3kP9
//! cargo run --bin admin -- lookup id 42
//!
//! # Page through records
//! cargo run --bin admin -- list --offset 0 --limit 20
//!
//! # Totals and database diagnostics
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`)
//! - `CODE_LENGTH`, `MAX_CODE_ATTEMPTS` (optional): validated as for the server

use tinylink::application::services::UrlService;
use tinylink::config::{self, Config};
use tinylink::domain::entities::UrlRecord;
use tinylink::infrastructure::persistence::PgUrlRepository;
use tinylink::utils::code_generator::RandomCodeGenerator;
use tinylink::utils::url_normalizer::normalize_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
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
    /// Create a short link
    Create {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,
    },

    /// Show a record without counting a click
    Lookup {
        #[command(subcommand)]
        key: LookupKey,
    },

    /// List records in creation order
    List {
        /// Records to skip
        #[arg(long, default_value_t = 0)]
        offset: i64,

        /// Maximum number of records to show
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Lookup keys.
#[derive(Subcommand)]
enum LookupKey {
    /// By short code (case-sensitive)
    Code { code: String },

    /// By numeric id
    Id { id: i64 },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

type Service = UrlService<PgUrlRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let database_url = match config.database_url {
        Some(ref url) => url.clone(),
        None => Config::load_database_url().context("DATABASE_URL must be set")?,
    };

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let generator = RandomCodeGenerator::new(config.code_length)?;

    let service = UrlService::new(
        Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))),
        Arc::new(generator),
        config.max_code_attempts,
    );

    match cli.command {
        Commands::Create { url } => create_link(&service, url).await?,
        Commands::Lookup { key } => lookup(&service, key).await?,
        Commands::List { offset, limit } => list_links(&service, offset, limit).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Normalizes and stores one URL, then prints the new record.
async fn create_link(service: &Service, url: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let normalized = normalize_url(&url).with_context(|| format!("Invalid URL '{url}'"))?;

    let record = service
        .create(&normalized)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!();
    print_record(&record);

    Ok(())
}

/// Prints a record found by code or id.
async fn lookup(service: &Service, key: LookupKey) -> Result<()> {
    let record = match key {
        LookupKey::Code { code } => service
            .get_by_code(&code)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        LookupKey::Id { id } => service
            .get_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    match record {
        Some(record) => print_record(&record),
        None => println!("{}", "⚠️  Not found".yellow()),
    }

    Ok(())
}

/// Prints one page of records.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   ID    Code        Clicks   Created            URL
///   ─────────────────────────────────────────────────────────────────────────────
///   1     aZ3kP9      12       2026-01-15 10:30   https://www.example.com/
/// ```
async fn list_links(service: &Service, offset: i64, limit: i64) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let records = service
        .list(offset, limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<11} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(79).bright_black());

    for record in &records {
        println!(
            "  {:<5} {:<11} {:<8} {:<18} {}",
            record.id.to_string().bright_black(),
            record.short_code.cyan(),
            record.click_count.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original_url
        );
    }

    println!();
    println!(
        "  Shown: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays record and click totals.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summary = service
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Links:  {}",
        summary.records.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        summary.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
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

            let migrations: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await
                    .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

fn print_record(record: &UrlRecord) {
    println!("  ID:       {}", record.id.to_string().bright_black());
    println!("  Code:     {}", record.short_code.cyan().bold());
    println!("  URL:      {}", record.original_url);
    println!(
        "  Created:  {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  Clicks:   {}",
        record.click_count.to_string().bright_green()
    );
    println!();
}
