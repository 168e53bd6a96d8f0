use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sysfonts")]
#[command(version)]
#[command(about = "Inspect and load system fonts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List font names available in the system catalog
    Names,
    /// List full font file paths
    Paths,
    /// Resolve a font name to a file path
    Resolve {
        /// Name fragment to match, case-insensitively
        name: String,
    },
    /// Show the default font path
    Default,
    /// Load a font file and print its metrics
    Load {
        path: PathBuf,
        /// Pixel size; falls back to the configured size, then 14
        #[arg(long)]
        size: Option<u32>,
        /// Style modifier passed through to the engine
        #[arg(long)]
        style: Option<String>,
    },
}
