//! Roster store.
//!
//! This module owns the ordered employee list and mirrors it to durable
//! storage on every mutation. The whole roster is one JSON snapshot under
//! a single key; persistence is a full overwrite, not a diff, which is
//! fine at human-roster scale.

pub mod kv;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::employee::{Employee, EmployeeDraft};
use crate::error::{Error, Result};
use crate::ui::Surface;
use crate::validate;

pub use kv::KvStore;

/// The employee roster, backed by a key-value store.
///
/// The in-memory list is authoritative during a session; it is written
/// out as a whole after every successful create, update, or delete, and
/// read back once when the store opens. Records are addressed by index;
/// out-of-range indices are rejected, never written.
#[derive(Debug)]
pub struct RosterStore {
    /// Ordered roster; insertion order is display order.
    roster: Vec<Employee>,
    /// The durable store beneath.
    kv: KvStore,
    /// Storage key holding the snapshot.
    key: String,
}

impl RosterStore {
    /// Open the roster at the given database path.
    ///
    /// An absent or unparsable snapshot yields an empty roster; parse
    /// failures are logged, not surfaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(path: impl AsRef<Path>, key: impl Into<String>) -> Result<Self> {
        Self::with_kv(KvStore::open(path)?, key)
    }

    /// Open an in-memory roster for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory(key: impl Into<String>) -> Result<Self> {
        Self::with_kv(KvStore::open_in_memory()?, key)
    }

    /// Build a roster on top of an already-open key-value store.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub fn with_kv(kv: KvStore, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let roster = load_snapshot(&kv, &key)?;
        info!("Loaded {} employee(s) from key '{}'", roster.len(), key);
        Ok(Self { roster, kv, key })
    }

    /// Validate a draft and append it as a new record.
    ///
    /// Returns the new record's index. On validation failure nothing is
    /// mutated and nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the failed fields, or a
    /// storage error if persisting the snapshot fails.
    pub fn create(&mut self, draft: &EmployeeDraft) -> Result<usize> {
        let report = validate::check_draft(draft);
        if !report.is_valid() {
            return Err(Error::validation(report.failed()));
        }

        self.roster.push(draft.to_employee());
        self.persist()?;

        let index = self.roster.len() - 1;
        debug!("Created employee at index {}", index);
        Ok(index)
    }

    /// Validate a draft and replace the record at `index` in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for an index with no record,
    /// [`Error::Validation`] for a bad draft, or a storage error.
    pub fn update(&mut self, index: usize, draft: &EmployeeDraft) -> Result<()> {
        if index >= self.roster.len() {
            return Err(Error::index_out_of_range(index, self.roster.len()));
        }

        let report = validate::check_draft(draft);
        if !report.is_valid() {
            return Err(Error::validation(report.failed()));
        }

        self.roster[index] = draft.to_employee();
        self.persist()?;

        debug!("Updated employee at index {}", index);
        Ok(())
    }

    /// Remove the record at `index`, gated on user confirmation.
    ///
    /// The gate is asked before anything changes. A declined confirmation
    /// returns `Ok(false)` and leaves the roster untouched. On removal,
    /// records after `index` shift down by one position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for an index with no record, or
    /// a storage error if persisting fails.
    pub fn delete(&mut self, index: usize, gate: &mut dyn Surface) -> Result<bool> {
        if index >= self.roster.len() {
            return Err(Error::index_out_of_range(index, self.roster.len()));
        }

        if !gate.confirm_delete(index) {
            debug!("Delete of index {} declined", index);
            return Ok(false);
        }

        self.roster.remove(index);
        self.persist()?;

        debug!("Deleted employee at index {}", index);
        Ok(true)
    }

    /// The record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.roster.get(index)
    }

    /// All records in display order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.roster
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// The storage key holding the snapshot.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path to the underlying database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kv.path()
    }

    /// Write the full roster snapshot to durable storage.
    ///
    /// Called after every successful mutation; callers only need it
    /// directly when they have bypassed the mutation API.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn persist(&self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.roster)?;
        self.kv.put(&self.key, &snapshot)
    }

    /// Statistics about the roster and its storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<RosterStats> {
        Ok(RosterStats {
            employees: self.roster.len(),
            db_path: self.kv.path().to_path_buf(),
            db_size_bytes: self.kv.size_bytes(),
            saved_at: self.kv.saved_at(&self.key)?,
        })
    }
}

/// Read and parse the snapshot under `key`, treating bad data as absent.
fn load_snapshot(kv: &KvStore, key: &str) -> Result<Vec<Employee>> {
    match kv.get(key)? {
        Some(json) => match serde_json::from_str(&json) {
            Ok(roster) => Ok(roster),
            Err(e) => {
                warn!("Unparsable roster snapshot under '{}': {}", key, e);
                Ok(Vec::new())
            }
        },
        None => Ok(Vec::new()),
    }
}

/// Statistics about the roster storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStats {
    /// Number of employees in the roster.
    pub employees: usize,
    /// Path to the database file.
    pub db_path: PathBuf,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
    /// When the snapshot was last written.
    pub saved_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Headless;

    fn create_test_store() -> RosterStore {
        RosterStore::open_in_memory("employees").expect("failed to create test store")
    }

    fn draft(name: &str, position: &str, salary: &str) -> EmployeeDraft {
        EmployeeDraft::new(name, position, salary)
    }

    #[test]
    fn test_open_in_memory() {
        let store = create_test_store();
        assert!(store.is_empty());
        assert_eq!(store.key(), "employees");
    }

    #[test]
    fn test_create_appends_exactly_one() {
        let mut store = create_test_store();
        let index = store.create(&draft("Asha", "Engineer", "75000")).unwrap();

        assert_eq!(index, 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().name, "Asha");
    }

    #[test]
    fn test_create_preserves_insertion_order() {
        let mut store = create_test_store();
        store.create(&draft("Asha", "Engineer", "75000")).unwrap();
        store.create(&draft("Ravi", "Manager", "90000")).unwrap();
        store.create(&draft("Meera", "Designer", "65000")).unwrap();

        let names: Vec<_> = store.employees().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Ravi", "Meera"]);
    }

    #[test]
    fn test_create_rejects_empty_field() {
        let mut store = create_test_store();
        let err = store.create(&draft("", "Engineer", "75000")).unwrap_err();

        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_zero_salary() {
        let mut store = create_test_store();
        let err = store.create(&draft("Asha", "Engineer", "0")).unwrap_err();

        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_persists_snapshot() {
        let mut store = create_test_store();
        store.create(&draft("Asha", "Engineer", "75000")).unwrap();

        let snapshot = store.kv.get("employees").unwrap().unwrap();
        let parsed: Vec<Employee> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Asha");
    }

    #[test]
    fn test_update_replaces_only_target() {
        let mut store = create_test_store();
        store.create(&draft("Asha", "Engineer", "75000")).unwrap();
        store.create(&draft("Ravi", "Manager", "90000")).unwrap();
        store.create(&draft("Meera", "Designer", "65000")).unwrap();

        store
            .update(1, &draft("Ravi", "Senior Manager", "110000"))
            .unwrap();

        assert_eq!(store.get(0).unwrap().position, "Engineer");
        assert_eq!(store.get(1).unwrap().position, "Senior Manager");
        assert_eq!(store.get(2).unwrap().position, "Designer");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_out_of_range() {
        let mut store = create_test_store();
        store.create(&draft("Asha", "Engineer", "75000")).unwrap();

        let err = store
            .update(5, &draft("Ghost", "Nobody", "1"))
            .unwrap_err();
        assert!(err.is_index_out_of_range());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_rejects_invalid_draft() {
        let mut store = create_test_store();
        store.create(&draft("Asha", "Engineer", "75000")).unwrap();

        let err = store.update(0, &draft("Asha", "", "75000")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.get(0).unwrap().position, "Engineer");
    }

    #[test]
    fn test_delete_confirmed_shifts_down() {
        let mut store = create_test_store();
        store.create(&draft("Asha", "Engineer", "75000")).unwrap();
        store.create(&draft("Ravi", "Manager", "90000")).unwrap();
        store.create(&draft("Meera", "Designer", "65000")).unwrap();

        let mut gate = Headless::confirming();
        let removed = store.delete(1, &mut gate).unwrap();

        assert!(removed);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().name, "Asha");
        assert_eq!(store.get(1).unwrap().name, "Meera");
        assert_eq!(gate.confirmations, vec![1]);
    }

    #[test]
    fn test_delete_declined_is_noop() {
        let mut store = create_test_store();
        store.create(&draft("Asha", "Engineer", "75000")).unwrap();

        let mut gate = Headless::declining();
        let removed = store.delete(0, &mut gate).unwrap();

        assert!(!removed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut store = create_test_store();
        let mut gate = Headless::confirming();

        let err = store.delete(0, &mut gate).unwrap_err();
        assert!(err.is_index_out_of_range());
        // The gate is never asked about a row that does not exist.
        assert!(gate.confirmations.is_empty());
    }

    #[test]
    fn test_delete_persists_snapshot() {
        let mut store = create_test_store();
        store.create(&draft("Asha", "Engineer", "75000")).unwrap();
        store.create(&draft("Ravi", "Manager", "90000")).unwrap();

        let mut gate = Headless::confirming();
        store.delete(0, &mut gate).unwrap();

        let snapshot = store.kv.get("employees").unwrap().unwrap();
        let parsed: Vec<Employee> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Ravi");
    }

    #[test]
    fn test_snapshot_survives_reopen() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("rosterbook_store_test_{}.db", std::process::id()));
        let _ = std::fs::remove_file(&db_path);

        {
            let mut store = RosterStore::open(&db_path, "employees").unwrap();
            store.create(&draft("Asha", "Engineer", "75000")).unwrap();
        }

        let store = RosterStore::open(&db_path, "employees").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().name, "Asha");
        assert_eq!(store.get(0).unwrap().salary.to_string(), "75000");

        // Clean up
        drop(store);
        let _ = std::fs::remove_file(&db_path);
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }

    #[test]
    fn test_malformed_snapshot_treated_as_empty() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.put("employees", "{not json").unwrap();

        let store = RosterStore::with_kv(kv, "employees").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_wrong_shape_snapshot_treated_as_empty() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.put("employees", r#"{"name":"not an array"}"#).unwrap();

        let store = RosterStore::with_kv(kv, "employees").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_loads_legacy_numeric_salaries() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.put(
            "employees",
            r#"[{"name":"Ravi","position":"Manager","salary":90000}]"#,
        )
        .unwrap();

        let store = RosterStore::with_kv(kv, "employees").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().salary.as_number(), Some(90000.0));
    }

    #[test]
    fn test_stats() {
        let mut store = create_test_store();
        let stats = store.stats().unwrap();
        assert_eq!(stats.employees, 0);
        assert!(stats.saved_at.is_none());

        store.create(&draft("Asha", "Engineer", "75000")).unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.employees, 1);
        assert!(stats.saved_at.is_some());
    }

    #[test]
    fn test_custom_roster_key() {
        let mut store = RosterStore::open_in_memory("staff").unwrap();
        store.create(&draft("Asha", "Engineer", "75000")).unwrap();

        assert!(store.kv.get("staff").unwrap().is_some());
        assert_eq!(store.kv.get("employees").unwrap(), None);
    }
}
