//! CLI administration tool for startup-dose.
//!
//! Runs the pipelines without going through the HTTP API. `generate` is the
//! daily job entry point and is meant to be scheduled (e.g. from cron).
//!
//! # Usage
//!
//! ```bash
//! # Generate and store today's company
//! cargo run --bin admin -- generate
//!
//! # Show the latest company
//! cargo run --bin admin -- latest
//!
//! # Post the latest company to the media platform
//! cargo run --bin admin -- publish --yes
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `startup_dose::config`.

use startup_dose::config::{self, Config};
use startup_dose::domain::entities::Company;
use startup_dose::server::{build_state, connect_pool};
use startup_dose::state::AppState;
use startup_dose::utils::caption::build_caption;
use startup_dose::utils::markup::appeal_to_plain_text;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing startup-dose.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Generate, illustrate and store a new company
    Generate,

    /// Show the latest company
    Latest,

    /// Post the latest company to the media platform
    Publish {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and count companies
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Generate => generate(&config, pool).await?,
        Commands::Latest => latest(&config, pool).await?,
        Commands::Publish { yes } => publish(&config, pool, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Pipeline logs go to stderr so they do not mix with command output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn app_state(config: &Config, pool: PgPool) -> Result<AppState> {
    build_state(config, Arc::new(pool))
}

/// Runs the generation pipeline once and prints the stored company.
async fn generate(config: &Config, pool: PgPool) -> Result<()> {
    println!("{}", "✨ Generating company of the day...".bright_blue().bold());
    if !config.is_screenshot_enabled() {
        println!(
            "{}",
            "⚠️  Screenshots not configured, the generated cover image will be kept".yellow()
        );
    }

    let state = app_state(config, pool)?;
    let cancel = CancellationToken::new();
    spawn_ctrl_c(cancel.clone());

    let company = state
        .generation_service
        .generate_and_store(&cancel)
        .await
        .map_err(|e| anyhow::anyhow!("Generation failed: {}", e))?;

    println!();
    println!("{}", "✅ Company stored".green().bold());
    print_company(&company);

    Ok(())
}

/// Prints the latest company.
async fn latest(config: &Config, pool: PgPool) -> Result<()> {
    let state = app_state(config, pool)?;

    match state.company_service.get_latest().await {
        Ok(company) => print_company(&company),
        Err(e) if e.is_not_found() => {
            println!("{}", "  No companies yet".yellow());
            println!();
            println!(
                "  Generate one with: {} admin -- generate",
                "cargo run --bin".bright_cyan()
            );
        }
        Err(e) => anyhow::bail!("Failed to load latest company: {}", e),
    }

    Ok(())
}

/// Publishes the latest company after confirmation.
///
/// Ctrl-C cancels the container poll loop.
async fn publish(config: &Config, pool: PgPool, skip_confirm: bool) -> Result<()> {
    if !config.is_publishing_enabled() {
        anyhow::bail!("Media publishing is not configured (INSTAGRAM_USER_ID, INSTAGRAM_ACCESS_TOKEN)");
    }

    let state = app_state(config, pool)?;
    let company = state
        .company_service
        .get_latest()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load latest company: {}", e))?;

    let caption = build_caption(
        &company.name,
        &company.description,
        &company.appeal,
        &company.website,
    );

    println!("{}", "📣 Publish to media platform".bright_blue().bold());
    println!();
    println!("  Image:   {}", company.cover_image.cyan());
    println!("{}", "  Caption:".bright_white());
    for line in caption.lines() {
        println!("    {}", line.bright_black());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Publish this post?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let cancel = CancellationToken::new();
    spawn_ctrl_c(cancel.clone());

    let outcome = state
        .media_publisher
        .publish(&company.cover_image, &caption, &cancel)
        .await;

    println!();
    if outcome.posted {
        println!("{}", "✅ Published".green().bold());
        println!(
            "  Media ID: {}",
            outcome.media_id.unwrap_or_default().bright_yellow()
        );
    } else {
        println!("{}", "❌ Not published".red().bold());
        println!("  {}", outcome.error.unwrap_or_default().red());
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;
            println!("{}", "✅ Database connection OK".green().bold());

            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
                .fetch_one(pool)
                .await?;
            println!("  Companies: {}", count.to_string().bright_white());
        }
    }

    Ok(())
}

fn spawn_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("{}", "Cancelling...".yellow());
            cancel.cancel();
        }
    });
}

fn print_company(company: &Company) {
    println!();
    println!("  {}", company.name.bright_white().bold());
    println!("  {}", company.slug.bright_black());
    println!();
    println!("  Website:     {}", company.website.cyan());
    println!("  Cover image: {}", company.cover_image.cyan());
    println!(
        "  Created:     {}",
        company.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();
    println!("  {}", company.description);
    println!();
    for line in appeal_to_plain_text(&company.appeal).lines() {
        println!("  {}", line.green());
    }

    let socials = [
        ("Twitter", &company.twitter),
        ("LinkedIn", &company.linkedin),
        ("Facebook", &company.facebook),
        ("Instagram", &company.instagram),
    ];
    let known: Vec<_> = socials
        .iter()
        .filter_map(|(label, url)| url.as_deref().map(|url| (label, url)))
        .collect();
    if !known.is_empty() {
        println!();
        for (label, url) in known {
            println!("  {:<10} {}", format!("{label}:"), url.bright_cyan());
        }
    }
    println!();
}
