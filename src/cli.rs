use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Stagehand - configuration deployment and launch tool
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Component folders under the config root are deployed \
into the matching versioned directories under the programs root.")]
pub struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy component configuration into installed program directories
    Deploy {
        /// Component to deploy (repeatable; default: every folder under
        /// the config root)
        #[arg(short, long = "component")]
        components: Vec<String>,

        /// Deploy into every matching version, not just the most recent
        #[arg(long)]
        apply_to_all_versions: bool,

        /// Back up existing files before overwriting them
        #[arg(long)]
        backup: bool,

        /// Show what would be done without touching the filesystem
        #[arg(long)]
        dry_run: bool,

        /// Root of component configuration folders [default: ./Config]
        #[arg(long)]
        config_root: Option<PathBuf>,

        /// Root of installed program directories [default: ./Programs]
        #[arg(long)]
        programs_root: Option<PathBuf>,

        /// Path to stagehand.toml [default: ./stagehand.toml if present]
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Launch configured programs from their installed directories
    Launch {
        /// Program to leave unstarted (repeatable)
        #[arg(long = "skip")]
        skip: Vec<String>,

        /// Request elevated launch for every program
        #[arg(long)]
        elevate: bool,

        /// Root of installed program directories [default: ./Programs]
        #[arg(long)]
        programs_root: Option<PathBuf>,

        /// Path to stagehand.toml [default: ./stagehand.toml if present]
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show version information
    Version,
}
