use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `folio` - link previews and site helpers for the portfolio build.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Link previews and site helpers for a static portfolio.", long_about = None)]
pub struct Cli {
    /// Config file (default: ./folio.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the link preview cache directory
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch preview metadata for one or more URLs
    Fetch {
        /// URLs to preview
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect links in a content file and warm the preview cache
    Scan {
        /// Markdown, HTML or text file to scan
        path: PathBuf,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or maintain the preview cache
    Cache {
        #[command(subcommand)]
        cache_command: CacheCommands,
    },

    /// Print site navigation, social links and date helpers
    Site {
        #[command(subcommand)]
        site_command: SiteCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// List cached entries with their age
    List,
    /// Remove expired and corrupt entries
    Prune,
    /// Remove every entry
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum SiteCommands {
    /// Header navigation as JSON
    Nav,
    /// Footer social links as JSON
    Social,
    /// Current year
    Year,
    /// Format an ISO date for display
    Date {
        /// e.g. 2025-01-15 or 2025-01-15T12:00:00Z
        value: String,
    },
}
