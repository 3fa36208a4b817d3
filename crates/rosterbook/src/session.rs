//! Interactive editing session.
//!
//! `EditorSession` ties the store, the form and a presentation surface
//! together and exposes the event handlers a roster editor needs: live
//! input feedback, add, select-for-edit, update, delete, render. Every
//! handler runs to completion (including the storage write) before it
//! returns; there is no background work.

use tracing::debug;

use crate::employee::EmployeeDraft;
use crate::error::{Error, Result};
use crate::form::{Mode, RosterForm};
use crate::render::{Highlight, TableView};
use crate::store::RosterStore;
use crate::ui::Surface;
use crate::validate::{self, Field};

/// The alert shown when the create/update gate fails.
pub const FILL_ALL_FIELDS: &str = "Please fill all fields!";

/// An editing session over a roster store.
#[derive(Debug)]
pub struct EditorSession<S: Surface> {
    store: RosterStore,
    form: RosterForm,
    surface: S,
    /// Set by a successful add; consumed by the next render.
    pending_highlight: bool,
}

impl<S: Surface> EditorSession<S> {
    /// Start a session over an open store.
    #[must_use]
    pub fn new(store: RosterStore, surface: S) -> Self {
        Self {
            store,
            form: RosterForm::new(),
            surface,
            pending_highlight: false,
        }
    }

    /// Handle a keystroke/change event on one form field.
    ///
    /// Stores the value and pushes live validity feedback for that field.
    pub fn input_changed(&mut self, field: Field, value: &str) {
        self.form.set(field, value);
        let valid = validate::is_present(value);
        self.surface.field_state(field, valid);
    }

    /// Handle the "Add" control.
    ///
    /// Validates the whole form first; any failure marks the fields,
    /// raises one combined alert, and changes nothing. On success the new
    /// record is appended and persisted, the form is cleared, and the next
    /// render highlights the new row. Returns the new record's index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the gate fails, or a storage
    /// error if persisting fails.
    pub fn add_clicked(&mut self) -> Result<usize> {
        let draft = self.gate_validate()?;
        let index = self.store.create(&draft)?;

        self.form.clear_fields();
        self.surface.reset_fields();
        self.pending_highlight = true;

        debug!("Added employee at index {}", index);
        Ok(index)
    }

    /// Load the record at `index` into the form and enter Edit mode.
    ///
    /// The populated fields are marked valid; persisted data is assumed
    /// to have passed the gate when it was stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if no record exists at `index`.
    pub fn select_for_edit(&mut self, index: usize) -> Result<()> {
        let employee = self
            .store
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.store.len()))?
            .clone();

        self.form.load(&employee, index);
        for field in [Field::Name, Field::Position, Field::Salary] {
            let valid = validate::is_present(self.form.value(field));
            self.surface.field_state(field, valid);
        }

        debug!("Editing employee at index {}", index);
        Ok(())
    }

    /// Handle the "Update" control.
    ///
    /// Only meaningful in Edit mode. Validates like add, replaces the
    /// record at the edit cursor, clears the form and returns to Create
    /// mode. The cursor is cleared only on this success path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] outside Edit mode,
    /// [`Error::Validation`] when the gate fails, or a storage error.
    pub fn update_clicked(&mut self) -> Result<()> {
        let Mode::Edit(index) = self.form.mode() else {
            return Err(Error::internal("update clicked outside edit mode"));
        };

        let draft = self.gate_validate()?;
        self.store.update(index, &draft)?;

        self.form.reset();
        self.surface.reset_fields();
        Ok(())
    }

    /// Handle a row's "Delete" control.
    ///
    /// Asks the surface for confirmation; declining leaves the roster
    /// unchanged and returns `Ok(false)`. Deleting does not leave Edit
    /// mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if no record exists at `index`,
    /// or a storage error if persisting fails.
    pub fn delete_clicked(&mut self, index: usize) -> Result<bool> {
        self.store.delete(index, &mut self.surface)
    }

    /// Project the roster for display.
    ///
    /// Consumes the one-shot new-row highlight: the render immediately
    /// after an add marks the last row, every later render marks nothing.
    pub fn render(&mut self) -> TableView {
        let highlight = if self.pending_highlight {
            Highlight::NewestRow
        } else {
            Highlight::None
        };
        self.pending_highlight = false;
        TableView::project(self.store.employees(), highlight)
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// The form state.
    #[must_use]
    pub fn form(&self) -> &RosterForm {
        &self.form
    }

    /// The presentation surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run the synchronous validation gate over the whole form.
    ///
    /// Marks all three fields, and on any failure raises the combined
    /// alert. No partial save: one bad field aborts the operation.
    fn gate_validate(&mut self) -> Result<EmployeeDraft> {
        let draft = self.form.draft();
        let report = validate::check_draft(&draft);

        for field in [Field::Name, Field::Position, Field::Salary] {
            self.surface.field_state(field, report.verdict(field));
        }

        if report.is_valid() {
            Ok(draft)
        } else {
            self.surface.alert(FILL_ALL_FIELDS);
            Err(Error::validation(report.failed()))
        }
    }
}
