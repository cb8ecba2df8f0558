//! a11yscan - AI-Assisted Web Accessibility Auditing
//!
//! Main entry point for the CLI application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use a11yscan::cli::commands;
use a11yscan::Config;

/// a11yscan - AI-assisted accessibility auditing for live browser tabs
#[derive(Parser, Debug)]
#[command(name = "a11yscan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Analysis endpoint override
    #[arg(long)]
    endpoint: Option<String>,

    /// Model identifier override
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a browser tab for accessibility issues
    Analyze {
        /// Tab id to analyze (defaults to the active tab)
        #[arg(long, short = 't')]
        tab: Option<u32>,

        /// Save the report to this directory instead of printing it
        #[arg(long, short = 's', value_name = "DIR")]
        save: Option<PathBuf>,
    },

    /// Manage the API access token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// List open browser tabs
    Tabs,

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum TokenAction {
    /// Save the token used to authenticate analysis calls
    Set { value: String },
    /// Show whether a token is stored
    Status,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref endpoint) = args.endpoint {
        config.api.endpoint = endpoint.clone();
    }

    if let Some(ref model) = args.model {
        config.api.model = model.clone();
    }

    if args.debug {
        config.app.debug = true;
    }

    match args.command {
        Command::Analyze { tab, save } => commands::analyze(config, tab, save).await?,
        Command::Token { action } => match action {
            TokenAction::Set { value } => commands::token_set(&value)?,
            TokenAction::Status => commands::token_status()?,
        },
        Command::Tabs => commands::tabs(config).await?,
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&config)?,
            ConfigAction::Init => commands::config_init()?,
        },
    }

    Ok(())
}
