//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use sweet_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "sweetshop")]
#[command(version = "0.1")]
#[command(about = "Sweet Shop terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password (read from stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Clear the persisted session
    Logout,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Print the effective configuration
    Show,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the storefront TUI
    let Some(command) = cli.command else {
        return commands::tui::run(config).await;
    };

    match command {
        Commands::Login { username, password } => {
            commands::auth::login(&config, &username, password.as_deref()).await
        }
        Commands::Logout => commands::auth::logout(),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Show => commands::config::show(&config),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
