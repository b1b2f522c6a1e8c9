//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Handtrace - record hand-landmark streams as anatomical motion sessions
#[derive(Parser, Debug)]
#[command(name = "handtrace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a session from a landmark frame stream
    Record {
        /// Input frame stream, one JSON frame per line (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Destination directory for the finalized recording
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Stop after this many frames (0 = until the stream ends)
        #[arg(short, long, default_value = "0")]
        limit: u64,
    },

    /// List finalized recordings
    List {
        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Delete a finalized recording
    Delete {
        /// Recording file name to delete
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
