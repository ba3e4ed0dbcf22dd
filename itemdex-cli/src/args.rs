use clap::{ArgAction, Parser, Subcommand};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "itemdex")]
#[command(about = "Browse the Stendhal item catalogue")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Raw-content base URL feeds and sprites are fetched from
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Game website URL item pages live under
    #[arg(long, global = true, value_name = "URL")]
    pub site_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the known item categories
    Categories,
    /// Fetch one category and print its attribute table
    Show {
        /// Category to fetch (e.g. swords)
        category: String,

        /// Sort by this column before printing (name or an attribute)
        #[arg(long, value_name = "COLUMN")]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Output format (text or json)
        #[arg(long, value_name = "FORMAT", default_value = "text")]
        output: String,
    },
    /// Browse the catalogue interactively
    Browse {
        /// Category to open first
        category: Option<String>,
    },
}
