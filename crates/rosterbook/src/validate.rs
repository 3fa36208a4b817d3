//! Form field validation.
//!
//! The validity predicate is pure and usable without any presentation
//! surface; visual success/error marking happens separately through
//! [`crate::ui::Surface::field_state`].

use serde::{Deserialize, Serialize};

use crate::employee::EmployeeDraft;

/// The three form fields of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The employee's name.
    Name,
    /// The employee's position.
    Position,
    /// The employee's salary.
    Salary,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Position => write!(f, "position"),
            Self::Salary => write!(f, "salary"),
        }
    }
}

/// Check whether a raw field value counts as present.
///
/// A value is present iff it is non-empty after trimming and, when it
/// parses as a number, that number is non-zero. Non-numeric text such as
/// a position title is present as long as it is non-empty.
#[must_use]
pub fn is_present(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    trimmed.parse::<f64>().map_or(true, |n| n != 0.0)
}

/// Per-field verdicts from validating a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether the name field passed.
    pub name: bool,
    /// Whether the position field passed.
    pub position: bool,
    /// Whether the salary field passed.
    pub salary: bool,
}

impl ValidationReport {
    /// Whether every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.name && self.position && self.salary
    }

    /// The verdict for a single field.
    #[must_use]
    pub fn verdict(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Position => self.position,
            Field::Salary => self.salary,
        }
    }

    /// The fields that failed, in form order.
    #[must_use]
    pub fn failed(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        if !self.name {
            fields.push(Field::Name);
        }
        if !self.position {
            fields.push(Field::Position);
        }
        if !self.salary {
            fields.push(Field::Salary);
        }
        fields
    }
}

/// Validate all three fields of a draft.
///
/// This is the synchronous gate run before create/update. If any field
/// fails, the whole operation must abort; no partial save occurs.
#[must_use]
pub fn check_draft(draft: &EmployeeDraft) -> ValidationReport {
    ValidationReport {
        name: is_present(&draft.name),
        position: is_present(&draft.position),
        salary: is_present(&draft.salary),
    }
}
