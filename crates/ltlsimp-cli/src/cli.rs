//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ltlsimp")]
#[command(author, version, about = "ltlsimp - simplify Linear Temporal Logic formulas", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Formula to simplify ("-" reads it from stdin)
    #[arg(value_name = "FORMULA")]
    pub input: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum, global = true)]
    pub output_format: Option<OutputFormat>,

    /// Simplification strategy (propositional, modal, pullup-x, aggressively)
    #[arg(short, long, global = true)]
    pub strategy: Option<String>,

    /// Upper bound on simplification passes
    #[arg(long, global = true)]
    pub max_passes: Option<usize>,

    /// Show size, depth and operator counts before and after
    #[arg(short, long)]
    pub analyze: bool,

    /// Check the result against the input on every small lasso word
    #[arg(long, global = true)]
    pub verify: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Don't load configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simplify every formula in the given files (one per line)
    Batch {
        /// Input files; blank lines and lines starting with '#' are skipped
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Stop at the first formula that fails
        #[arg(long)]
        fail_fast: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Show configuration file path
    Path,
    /// Initialize default configuration file
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The simplified formula
    Text,
    /// Input, result and run metrics as JSON
    Json,
    /// Run metrics only
    Stats,
}
