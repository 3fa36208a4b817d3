//! Command-line interface for rosterbook.
//!
//! This module provides the CLI structure and command definitions for the
//! `rosbook` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, ExportCommand, ListCommand, OutputFormat,
    ShowCommand, StatusCommand, UpdateCommand,
};

/// rosbook - Keep a local employee roster
///
/// A local roster editor: add, update, delete and list employee records.
/// Records persist in a local database and survive between invocations.
#[derive(Debug, Parser)]
#[command(name = "rosbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the roster as a table
    List(ListCommand),

    /// Add a new employee
    Add(AddCommand),

    /// Update the employee at a row
    Update(UpdateCommand),

    /// Delete the employee at a row
    Delete(DeleteCommand),

    /// Show one employee's fields
    Show(ShowCommand),

    /// Write the roster as an HTML page
    Export(ExportCommand),

    /// Show roster and storage status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
