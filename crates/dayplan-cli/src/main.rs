//! dayplan CLI - Command-line interface for dayplan
//!
//! Provides commands for:
//! - User registration and login
//! - Adding, listing, updating, and deleting to-do items
//! - Clearing the item store
//!
//! The session (logged-in user) persists in the database between
//! invocations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dayplan_cli::commands::{
    items::{AddCommand, ClearCommand, DeleteCommand, ListCommand, UpdateCommand},
    user::{LoginCommand, LogoutCommand, RegisterCommand, WhoamiCommand},
};
use dayplan_cli::context::AppContext;
use dayplan_cli::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "dayplan", version, about = "Day planner with a per-user document mirror")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a new user
    Register(RegisterCommand),
    /// Sign in and persist the session
    Login(LoginCommand),
    /// Clear the persisted session
    Logout(LogoutCommand),
    /// Show the logged-in user
    Whoami(WhoamiCommand),
    /// Add a to-do item
    Add(AddCommand),
    /// List items sorted by status and start date
    List(ListCommand),
    /// Update fields of an existing item
    Update(UpdateCommand),
    /// Delete an item
    Delete(DeleteCommand),
    /// Delete every item for every user
    Clear(ClearCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let ctx = AppContext::init(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Register(cmd) => cmd.execute(&ctx, format).await,
        Commands::Login(cmd) => cmd.execute(&ctx, format).await,
        Commands::Logout(cmd) => cmd.execute(&ctx, format).await,
        Commands::Whoami(cmd) => cmd.execute(&ctx, format).await,
        Commands::Add(cmd) => cmd.execute(&ctx, format).await,
        Commands::List(cmd) => cmd.execute(&ctx, format).await,
        Commands::Update(cmd) => cmd.execute(&ctx, format).await,
        Commands::Delete(cmd) => cmd.execute(&ctx, format).await,
        Commands::Clear(cmd) => cmd.execute(&ctx, format).await,
    }
}
