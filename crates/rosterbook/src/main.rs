//! `rosbook` - CLI for rosterbook
//!
//! This binary provides the command-line interface for editing and
//! listing the locally stored employee roster.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use rosterbook::cli::{
    AddCommand, Cli, Command, ConfigCommand, DeleteCommand, ExportCommand, ListCommand,
    OutputFormat, ShowCommand, UpdateCommand,
};
use rosterbook::render::{self, Highlight, TableView};
use rosterbook::store::RosterStore;
use rosterbook::ui::Surface;
use rosterbook::validate::Field;
use rosterbook::{init_logging, Config, EmployeeDraft};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Add(cmd) => handle_add(&config, &cmd),
        Command::Update(cmd) => handle_update(&config, &cmd),
        Command::Delete(cmd) => handle_delete(&config, &cmd),
        Command::Show(cmd) => handle_show(&config, &cmd),
        Command::Export(cmd) => handle_export(&config, &cmd),
        Command::Status(cmd) => handle_status(&config, cmd.json),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Surface implementation for the terminal.
///
/// Field feedback goes to the debug log (there is no persistent form on a
/// one-shot CLI), alerts go to stderr, and the delete confirmation is a
/// blocking stdin prompt.
#[derive(Debug)]
struct ConsoleSurface {
    assume_yes: bool,
}

impl Surface for ConsoleSurface {
    fn field_state(&mut self, field: Field, valid: bool) {
        tracing::debug!(
            "field '{}' is {}",
            field,
            if valid { "valid" } else { "invalid" }
        );
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm_delete(&mut self, index: usize) -> bool {
        if self.assume_yes {
            return true;
        }

        print!(
            "Are you sure you want to delete employee #{}? [y/N] ",
            index + 1
        );
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn open_store(config: &Config) -> anyhow::Result<RosterStore> {
    let store = RosterStore::open(config.database_path(), config.storage.roster_key.clone())?;
    Ok(store)
}

/// Convert a displayed row number (1-based) to a roster index.
fn to_index(row: usize) -> anyhow::Result<usize> {
    anyhow::ensure!(row >= 1, "row numbers start at 1");
    Ok(row - 1)
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let view = TableView::project(store.employees(), Highlight::None);

    match cmd.format {
        OutputFormat::Plain => {
            if store.is_empty() {
                println!("No employees.");
            }
            for row in view.rows() {
                println!(
                    "{}. {}  {}  {}",
                    row.display_index(),
                    row.name,
                    row.position,
                    row.salary
                );
            }
        }
        OutputFormat::Table => {
            if store.is_empty() {
                println!("No employees.");
            } else {
                print!("{}", view.to_text());
            }
        }
        OutputFormat::Json => println!("{}", render::roster_json(store.employees())?),
        OutputFormat::Html => print!("{}", view.to_html()),
    }
    Ok(())
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let draft = EmployeeDraft::new(&*cmd.name, &*cmd.position, &*cmd.salary);

    let index = store.create(&draft)?;
    println!("Added {} at row {}", cmd.name.trim(), index + 1);
    Ok(())
}

fn handle_update(config: &Config, cmd: &UpdateCommand) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let index = to_index(cmd.row)?;
    let draft = EmployeeDraft::new(&*cmd.name, &*cmd.position, &*cmd.salary);

    store.update(index, &draft)?;
    println!("Updated row {}", cmd.row);
    Ok(())
}

fn handle_delete(config: &Config, cmd: &DeleteCommand) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let index = to_index(cmd.row)?;

    let mut surface = ConsoleSurface {
        assume_yes: cmd.yes || !config.ui.confirm_delete,
    };

    if store.delete(index, &mut surface)? {
        println!("Deleted row {}", cmd.row);
    } else {
        println!("Delete cancelled.");
    }
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let index = to_index(cmd.row)?;

    let Some(emp) = store.get(index) else {
        anyhow::bail!(
            "row {} does not exist (roster has {} row(s))",
            cmd.row,
            store.len()
        );
    };

    println!("Row:      {}", cmd.row);
    println!("Name:     {}", emp.name);
    println!("Position: {}", emp.position);
    println!(
        "Salary:   {} ({})",
        emp.salary,
        render::format_inr(&emp.salary)
    );
    Ok(())
}

fn handle_export(config: &Config, cmd: &ExportCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let page = TableView::project(store.employees(), Highlight::None).render_page();

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, page)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{page}"),
    }
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let stats = store.stats()?;

    if json {
        let status = serde_json::json!({
            "employees": stats.employees,
            "database_path": stats.db_path,
            "database_size_bytes": stats.db_size_bytes,
            "saved_at": stats.saved_at.map(|t| t.to_rfc3339()),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        let saved = stats
            .saved_at
            .map_or_else(|| "never".to_string(), |t| t.to_rfc3339());
        println!("rosbook status");
        println!("--------------");
        println!("Employees:     {}", stats.employees);
        println!("Database:      {}", stats.db_path.display());
        println!("Size (bytes):  {}", stats.db_size_bytes);
        println!("Last saved:    {saved}");
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:  {}", config.database_path().display());
                println!("  Roster key:     {}", config.storage.roster_key);
                println!();
                println!("[UI]");
                println!("  Confirm delete: {}", config.ui.confirm_delete);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
