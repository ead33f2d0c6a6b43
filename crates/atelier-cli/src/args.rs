use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Kiosk catalog browser for a sculptor's tool collection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Catalog source: a local JSON file or an HTTP(S) URL.
    /// Defaults to the source in the config file.
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Config file path (defaults to ~/.atelier/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive kiosk (the default command).
    Browse {
        /// URL path to open instead of the splash screen.
        #[arg(long, default_value = "/")]
        start: String,
    },
    /// Load the catalog and verify its structure (unique ids, non-empty
    /// names).
    Check,
    /// Resolve a URL path against the catalog and print the outcome.
    Resolve {
        /// A path such as /catalog/clay-tools/pots/item/loop-tool
        path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
