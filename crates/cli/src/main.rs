//! Frontino CLI - Database migrations and account management.
//!
//! # Usage
//!
//! ```bash
//! # Apply the schema migrations
//! frontino-cli migrate
//!
//! # Create the default administrator account
//! frontino-cli seed
//!
//! # Create an additional administrator
//! frontino-cli admin create --handle root -n "Root" -p some-password
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Create the default administrator (no-op when present)
//! - `admin create` - Create administrator accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "frontino-cli")]
#[command(author, version, about = "Frontino CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Create the default administrator account
    Seed,
    /// Manage administrator accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new administrator
    Create {
        /// Login handle
        #[arg(long)]
        handle: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                handle,
                name,
                password,
            } => {
                commands::admin::create(&handle, &name, &password).await?;
            }
        },
    }
    Ok(())
}
