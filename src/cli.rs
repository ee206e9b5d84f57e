use clap::{Parser, Subcommand};

pub const DEFAULT_CONFIG_FILE: &str = "/crafty/app/config/version.json";
pub const DEFAULT_CURRENT_DIR: &str = ".";
pub const DEFAULT_EXTRA_DIR: &str = "/crafty/app/config";

#[derive(Parser, Debug)]
#[command(
    name = "crafty-debug",
    version,
    about = "Dump process, environment and config file state for debugging"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Settings file (TOML)")]
    pub settings: Option<String>,
    #[arg(long, global = true, help = "Config file to probe")]
    pub config_file: Option<String>,
    #[arg(long, global = true, help = "First directory to list")]
    pub current_dir: Option<String>,
    #[arg(long, global = true, help = "Second directory to list")]
    pub extra_dir: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Give each directory listing its own failure scope"
    )]
    pub independent_listings: bool,
    #[arg(short, long, global = true, help = "Debug logging on stderr")]
    pub verbose: bool,
    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Full dump: environment, config file probe, directory listings.
    Report,
    /// Working directory, executable and environment variables.
    Env,
    /// Inspect the config file (or PATH).
    Probe { path: Option<String> },
    /// List the configured directories.
    Ls,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Report)
    }
}
