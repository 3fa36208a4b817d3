//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands. Row numbers
//! on the command line are the 1-based values shown in the table's `#`
//! column, not internal indices.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// The employee's name
    pub name: String,

    /// The employee's position
    pub position: String,

    /// The employee's salary
    pub salary: String,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Row number as shown in the # column
    pub row: usize,

    /// The employee's name
    pub name: String,

    /// The employee's position
    pub position: String,

    /// The employee's salary
    pub salary: String,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Row number as shown in the # column
    pub row: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Row number as shown in the # column
    pub row: usize,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Write the page to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for the list command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per record
    Plain,
    /// Aligned table
    #[default]
    Table,
    /// Raw records as JSON
    Json,
    /// HTML table
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_output_format_debug() {
        let format = OutputFormat::Json;
        let debug_str = format!("{format:?}");
        assert_eq!(debug_str, "Json");
    }

    #[test]
    fn test_output_format_clone() {
        let format = OutputFormat::Html;
        let cloned = format;
        assert_eq!(format, cloned);
    }

    #[test]
    fn test_add_command_debug() {
        let cmd = AddCommand {
            name: "Asha".to_string(),
            position: "Engineer".to_string(),
            salary: "75000".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Asha"));
    }

    #[test]
    fn test_delete_command_debug() {
        let cmd = DeleteCommand { row: 1, yes: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("yes"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
