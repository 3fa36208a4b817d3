//! `rosterbook` - A local employee roster editor
//!
//! This library provides the core functionality for keeping an ordered
//! roster of employee records: validated create/update/delete operations,
//! snapshot persistence in a local key-value store, and deterministic
//! table rendering.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod employee;
pub mod error;
pub mod form;
pub mod logging;
pub mod render;
pub mod session;
pub mod store;
pub mod ui;
pub mod validate;

pub use config::Config;
pub use employee::{Employee, EmployeeDraft, Salary};
pub use error::{Error, Result};
pub use form::{FormSnapshot, Mode, RosterForm};
pub use logging::init_logging;
pub use render::{format_inr, Highlight, TableView};
pub use session::EditorSession;
pub use store::{KvStore, RosterStats, RosterStore};
pub use ui::{Headless, Surface};
pub use validate::Field;
