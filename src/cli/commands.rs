//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeep")]
#[command(about = "Short categorized notes in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new notebook
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Category used when a note doesn't name one
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Create a note
    Add {
        /// Note text (1-200 characters)
        content: String,

        /// Optional title
        #[arg(short, long)]
        title: Option<String>,

        /// Category id (work-study, life, ideas)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit an existing note
    Edit {
        /// Note id
        id: String,

        /// New note text (keeps the current text if omitted)
        content: Option<String>,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New category id
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List notes
    List {
        /// Only show notes in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show a single note
    Show {
        /// Note id
        id: String,
    },

    /// Delete a note
    Delete {
        /// Note id
        id: String,
    },

    /// Per-category counts and most recent notes
    Summary {
        /// Number of recent notes per category
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the available categories
    Categories,

    /// Delete all notes
    Clear {
        /// Confirm deletion of every note
        #[arg(long)]
        yes: bool,
    },

    /// Check the note store
    Status,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
