//! Form state machine.
//!
//! The form is either creating a new record or editing an existing one.
//! Edit mode carries the edit cursor (the index being edited), so the
//! cursor cannot exist without the mode. The only way back from Edit to
//! Create is a successful update; there is no cancel transition.

use crate::employee::{Employee, EmployeeDraft};
use crate::validate::Field;

/// The form's mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Creating a new record; the "Add" affordance is visible.
    #[default]
    Create,
    /// Editing the record at this index; the "Update" affordance is
    /// visible.
    Edit(usize),
}

/// The three-field entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterForm {
    name: String,
    position: String,
    salary: String,
    mode: Mode,
}

impl RosterForm {
    /// An empty form in Create mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Position => self.position = value,
            Field::Salary => self.salary = value,
        }
    }

    /// A single field's current value.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Position => &self.position,
            Field::Salary => &self.salary,
        }
    }

    /// The draft described by the current field values.
    #[must_use]
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft::new(&*self.name, &*self.position, &*self.salary)
    }

    /// Load an existing record's fields and enter Edit mode with the
    /// cursor at `index`.
    pub fn load(&mut self, employee: &Employee, index: usize) {
        self.name = employee.name.clone();
        self.position = employee.position.clone();
        self.salary = employee.salary.to_string();
        self.mode = Mode::Edit(index);
    }

    /// Clear the field values, leaving the mode alone.
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.position.clear();
        self.salary.clear();
    }

    /// Clear the fields and return to Create mode.
    pub fn reset(&mut self) {
        self.clear_fields();
        self.mode = Mode::Create;
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The edit cursor, if the form is in Edit mode.
    #[must_use]
    pub fn edit_cursor(&self) -> Option<usize> {
        match self.mode {
            Mode::Create => None,
            Mode::Edit(index) => Some(index),
        }
    }

    /// A snapshot of the visible form surface.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            mode: self.mode,
            name: self.name.clone(),
            position: self.position.clone(),
            salary: self.salary.clone(),
            add_visible: self.mode == Mode::Create,
            update_visible: self.mode != Mode::Create,
        }
    }
}

/// What the form surface shows: field values and which of the two
/// mutually-exclusive submit controls is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// The form's mode.
    pub mode: Mode,
    /// The name field value.
    pub name: String,
    /// The position field value.
    pub position: String,
    /// The salary field value.
    pub salary: String,
    /// Whether the "Add" control is visible.
    pub add_visible: bool,
    /// Whether the "Update" control is visible.
    pub update_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_create_mode() {
        let form = RosterForm::new();
        assert_eq!(form.mode(), Mode::Create);
        assert_eq!(form.edit_cursor(), None);
        assert!(form.value(Field::Name).is_empty());
    }

    #[test]
    fn test_set_and_value() {
        let mut form = RosterForm::new();
        form.set(Field::Name, "Asha");
        form.set(Field::Position, "Engineer");
        form.set(Field::Salary, "75000");

        assert_eq!(form.value(Field::Name), "Asha");
        assert_eq!(form.value(Field::Position), "Engineer");
        assert_eq!(form.value(Field::Salary), "75000");
    }

    #[test]
    fn test_draft_reflects_fields() {
        let mut form = RosterForm::new();
        form.set(Field::Name, "Asha");
        form.set(Field::Salary, "75000");

        let draft = form.draft();
        assert_eq!(draft.name, "Asha");
        assert_eq!(draft.position, "");
        assert_eq!(draft.salary, "75000");
    }

    #[test]
    fn test_load_populates_and_enters_edit_mode() {
        let mut form = RosterForm::new();
        let emp = Employee::new("Asha", "Engineer", "75000");

        form.load(&emp, 2);

        assert_eq!(form.value(Field::Name), "Asha");
        assert_eq!(form.value(Field::Salary), "75000");
        assert_eq!(form.mode(), Mode::Edit(2));
        assert_eq!(form.edit_cursor(), Some(2));
    }

    #[test]
    fn test_load_renders_numeric_salary_as_text() {
        let mut form = RosterForm::new();
        let emp = Employee::new("Ravi", "Manager", 90000_u32);

        form.load(&emp, 0);
        assert_eq!(form.value(Field::Salary), "90000");
    }

    #[test]
    fn test_clear_fields_keeps_mode() {
        let mut form = RosterForm::new();
        form.load(&Employee::new("Asha", "Engineer", "75000"), 1);
        form.clear_fields();

        assert!(form.value(Field::Name).is_empty());
        assert_eq!(form.mode(), Mode::Edit(1));
    }

    #[test]
    fn test_reset_returns_to_create_mode() {
        let mut form = RosterForm::new();
        form.load(&Employee::new("Asha", "Engineer", "75000"), 1);
        form.reset();

        assert_eq!(form.mode(), Mode::Create);
        assert_eq!(form.edit_cursor(), None);
        assert!(form.value(Field::Salary).is_empty());
    }

    #[test]
    fn test_snapshot_create_mode_shows_add() {
        let form = RosterForm::new();
        let snap = form.snapshot();
        assert!(snap.add_visible);
        assert!(!snap.update_visible);
    }

    #[test]
    fn test_snapshot_edit_mode_shows_update() {
        let mut form = RosterForm::new();
        form.load(&Employee::new("Asha", "Engineer", "75000"), 0);

        let snap = form.snapshot();
        assert!(!snap.add_visible);
        assert!(snap.update_visible);
        assert_eq!(snap.name, "Asha");
    }
}
