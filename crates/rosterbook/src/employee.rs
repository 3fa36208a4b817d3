//! Core employee record types.
//!
//! This module defines the data structures for a roster entry. A record's
//! identity is purely positional; the roster preserves insertion order and
//! there is no generated identifier.

use serde::{Deserialize, Serialize};

/// A salary value as persisted.
///
/// Historical snapshots hold salaries either as JSON numbers or as the
/// raw text the user typed, so both shapes deserialize. The raw value is
/// canonical; display formatting never feeds back into storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salary {
    /// A numeric salary.
    Number(serde_json::Number),
    /// A salary kept as the text it was entered as.
    Text(String),
}

impl Salary {
    /// The numeric value, if the salary is a number or numeric text.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for Salary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Salary {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Salary {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for Salary {
    fn from(value: u32) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

/// A single roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name.
    pub name: String,
    /// The employee's position.
    pub position: String,
    /// The employee's salary.
    pub salary: Salary,
}

impl Employee {
    /// Create a new employee record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        salary: impl Into<Salary>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            salary: salary.into(),
        }
    }
}

/// The raw form values for a record about to be created or updated.
///
/// All three fields are plain text exactly as entered; trimming and
/// validation happen when the draft is checked and stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    /// The name field value.
    pub name: String,
    /// The position field value.
    pub position: String,
    /// The salary field value.
    pub salary: String,
}

impl EmployeeDraft {
    /// Create a draft from raw field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        salary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            salary: salary.into(),
        }
    }

    /// Build the record this draft describes, trimming each field.
    ///
    /// The salary is kept as entered (minus surrounding whitespace); it is
    /// not parsed into a number here because the raw value is what
    /// persists.
    #[must_use]
    pub fn to_employee(&self) -> Employee {
        Employee {
            name: self.name.trim().to_string(),
            position: self.position.trim().to_string(),
            salary: Salary::Text(self.salary.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_new() {
        let emp = Employee::new("Asha", "Engineer", "75000");
        assert_eq!(emp.name, "Asha");
        assert_eq!(emp.position, "Engineer");
        assert_eq!(emp.salary, Salary::Text("75000".to_string()));
    }

    #[test]
    fn test_salary_as_number_from_text() {
        assert_eq!(Salary::from("75000").as_number(), Some(75000.0));
        assert_eq!(Salary::from(" 500 ").as_number(), Some(500.0));
        assert_eq!(Salary::from("not a number").as_number(), None);
    }

    #[test]
    fn test_salary_as_number_from_number() {
        let salary = Salary::from(75000_u32);
        assert_eq!(salary.as_number(), Some(75000.0));
    }

    #[test]
    fn test_salary_display_preserves_raw_text() {
        assert_eq!(Salary::from("075000").to_string(), "075000");
        assert_eq!(Salary::from(50000_u32).to_string(), "50000");
    }

    #[test]
    fn test_salary_deserializes_from_number_or_string() {
        let from_number: Salary = serde_json::from_str("75000").unwrap();
        assert!(matches!(from_number, Salary::Number(_)));

        let from_string: Salary = serde_json::from_str("\"75000\"").unwrap();
        assert_eq!(from_string, Salary::Text("75000".to_string()));
    }

    #[test]
    fn test_salary_serialization_round_trip() {
        let number = Salary::from(95000_u32);
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "95000");

        let text = Salary::from("95000");
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, "\"95000\"");
    }

    #[test]
    fn test_employee_serialization_round_trip() {
        let emp = Employee::new("Asha", "Engineer", "75000");
        let json = serde_json::to_string(&emp).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(emp, back);
    }

    #[test]
    fn test_employee_deserializes_legacy_snapshot() {
        // Older snapshots mixed string and numeric salaries.
        let json = r#"[
            {"name":"Asha","position":"Engineer","salary":"75000"},
            {"name":"Ravi","position":"Manager","salary":90000}
        ]"#;
        let roster: Vec<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].salary.as_number(), Some(75000.0));
        assert_eq!(roster[1].salary.as_number(), Some(90000.0));
    }

    #[test]
    fn test_draft_to_employee_trims_fields() {
        let draft = EmployeeDraft::new("  Asha  ", " Engineer ", " 75000 ");
        let emp = draft.to_employee();
        assert_eq!(emp.name, "Asha");
        assert_eq!(emp.position, "Engineer");
        assert_eq!(emp.salary.to_string(), "75000");
    }

    #[test]
    fn test_draft_default_is_empty() {
        let draft = EmployeeDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.position.is_empty());
        assert!(draft.salary.is_empty());
    }
}
