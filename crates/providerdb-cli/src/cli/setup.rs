use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "providerdb",
    bin_name = "providerdb",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Manage a provider registry stored in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the JSON data file (overrides configuration)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List providers one page at a time
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: usize,

        /// Providers per page (defaults to the configured page size)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        size: Option<u64>,
    },

    /// Show one provider
    #[command(alias = "v", display_order = 2)]
    Get { id: u64 },

    /// Create a provider (names are unique, ignoring case)
    #[command(alias = "n", display_order = 3)]
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        company: String,

        #[arg(long)]
        address: String,
    },

    /// Change some fields of a provider
    #[command(alias = "e", display_order = 4)]
    Update {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a provider
    #[command(alias = "rm", display_order = 5)]
    Delete { id: u64 },

    /// Print the number of stored providers
    #[command(display_order = 6)]
    Count,
}
