//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use filmmate_core::{Role, SortKey};

#[derive(Parser)]
#[command(name = "filmmate")]
#[command(about = "Manage a film catalog from the console", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding films.txt and users.txt (defaults to the configured
    /// directory, then the current directory)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Exactly one search criterion.
#[derive(Args, Clone)]
#[group(required = true, multiple = false)]
pub(crate) struct SearchArgs {
    /// Part of the title, ignoring case
    #[arg(short, long)]
    pub title: Option<String>,

    /// Exact category, ignoring case
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum average rating (1-10)
    #[arg(short, long)]
    pub min_rating: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and use the interactive menu
    Menu,

    /// List every film
    List,

    /// Search or filter films (at most 10 results are shown)
    Search {
        #[command(flatten)]
        query: SearchArgs,
    },

    /// List films ordered by rating, year or title
    Sort {
        /// Sort key (rating, year, title)
        key: SortKey,

        /// Sort in descending order
        #[arg(long)]
        desc: bool,
    },

    /// List the distinct film categories
    Categories,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved data directory
    Show,

    /// Print the settings file path
    Path,

    /// Remember a data directory
    SetDataDir {
        /// Directory holding films.txt and users.txt
        dir: PathBuf,
    },

    /// Forget the remembered data directory
    ClearDataDir,
}

#[derive(Subcommand)]
pub(crate) enum UserAction {
    /// List accounts and their roles
    List,

    /// Make an account an administrator
    Promote {
        /// Exact (case-sensitive) username
        name: String,
    },

    /// Give an account a role
    SetRole {
        /// Exact (case-sensitive) username
        name: String,

        /// admin or viewer
        role: Role,
    },
}
