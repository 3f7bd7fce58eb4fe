use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rednote-dash")]
#[command(about = "Terminal dashboard for the RedNote content generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend base URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// View to open on launch (dashboard, generate, analytics, calendar, library, settings)
    #[arg(long, value_name = "VIEW")]
    pub view: Option<String>,

    /// Account to select on launch
    #[arg(long, value_name = "ID")]
    pub account: Option<String>,

    /// Write debug-level logs
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show config status and location, or create default config if missing
    InitConfig,

    /// Check that the backend answers and print a short summary
    Status,
}

pub fn parse() -> Cli {
    Cli::parse()
}
