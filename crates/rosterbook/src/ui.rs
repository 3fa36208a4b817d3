//! Presentation capabilities.
//!
//! The core never touches a rendering surface directly. Everything
//! user-facing that a mutation needs (field success/error marks, the
//! blocking validation alert, the delete confirmation) goes through the
//! [`Surface`] trait, so the store and session stay testable headlessly.

use crate::validate::Field;

/// Capability interface the roster core calls back into.
///
/// Implementors connect the core to whatever presentation exists: a
/// terminal prompt, a GUI form, or nothing at all for scripted use.
pub trait Surface {
    /// Mark a field's presentation as valid (`true`) or invalid (`false`).
    fn field_state(&mut self, field: Field, valid: bool);

    /// Clear all field marks, e.g. after the form is cleared.
    fn reset_fields(&mut self) {}

    /// Show a blocking alert for a failed validation gate.
    fn alert(&mut self, message: &str);

    /// Ask the user to confirm deleting the record at `index`.
    ///
    /// Returning `false` makes the delete a no-op.
    fn confirm_delete(&mut self, index: usize) -> bool;
}

/// A surface that records interactions instead of showing them.
///
/// Used by tests and by scripted callers that have no screen. The
/// confirmation answer is fixed at construction time.
#[derive(Debug, Clone)]
pub struct Headless {
    /// The answer every confirmation prompt receives.
    pub confirm_answer: bool,
    /// Alerts raised, oldest first.
    pub alerts: Vec<String>,
    /// Field marks pushed, oldest first.
    pub field_states: Vec<(Field, bool)>,
    /// Indices whose deletion was asked about.
    pub confirmations: Vec<usize>,
    /// How many times the field marks were cleared.
    pub resets: usize,
}

impl Headless {
    /// A headless surface that confirms every deletion.
    #[must_use]
    pub fn confirming() -> Self {
        Self {
            confirm_answer: true,
            alerts: Vec::new(),
            field_states: Vec::new(),
            confirmations: Vec::new(),
            resets: 0,
        }
    }

    /// A headless surface that declines every deletion.
    #[must_use]
    pub fn declining() -> Self {
        Self {
            confirm_answer: false,
            ..Self::confirming()
        }
    }

    /// The most recent mark recorded for `field`, if any.
    #[must_use]
    pub fn last_state(&self, field: Field) -> Option<bool> {
        self.field_states
            .iter()
            .rev()
            .find(|(f, _)| *f == field)
            .map(|(_, valid)| *valid)
    }
}

impl Default for Headless {
    fn default() -> Self {
        Self::confirming()
    }
}

impl Surface for Headless {
    fn field_state(&mut self, field: Field, valid: bool) {
        self.field_states.push((field, valid));
    }

    fn reset_fields(&mut self) {
        self.resets += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm_delete(&mut self, index: usize) -> bool {
        self.confirmations.push(index);
        self.confirm_answer
    }
}
