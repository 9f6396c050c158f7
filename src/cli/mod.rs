//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_categories, format_note_detail, format_note_list, format_status, format_summary,
};
