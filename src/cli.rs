use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// skillmeter - stable skill-level scoring for portfolio sites
#[derive(Parser, Debug)]
#[command(name = "skillmeter")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Levels are deterministic: the same name and base always give the same result.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./skillmeter.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the display level for one skill
    Score {
        /// Skill name (may be empty)
        name: String,

        /// Authored base score
        #[arg(allow_negative_numbers = true)]
        base: i32,

        /// Jitter range; defaults to the configured range
        #[arg(short, long, allow_negative_numbers = true)]
        range: Option<i64>,
    },

    /// Render the skills panel for the configured catalog
    Render {
        /// Show percentages only
        #[arg(long)]
        no_bars: bool,

        /// Include reveal timings for every element
        #[arg(long)]
        schedule: bool,
    },

    /// Validate the configured catalog
    Check,

    /// Print the effective catalog as TOML
    Catalog,
}
