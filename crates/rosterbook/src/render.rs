//! Table rendering.
//!
//! Projection from the roster to a displayable table is deterministic and
//! idempotent: the same roster always yields the same rows. The only
//! transient element is the new-row marker, which appears on exactly the
//! last row and only on the render immediately following an append.

use crate::employee::{Employee, Salary};
use crate::error::Result;

/// Which row, if any, gets the transient entrance treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// No row is highlighted.
    #[default]
    None,
    /// The most recently appended row (the last one) is highlighted.
    NewestRow,
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Zero-based roster index; the edit/delete actions are parameterized
    /// by this.
    pub index: usize,
    /// The employee's name.
    pub name: String,
    /// The employee's position.
    pub position: String,
    /// The formatted salary.
    pub salary: String,
    /// Whether this row carries the entrance treatment.
    pub is_new: bool,
}

impl TableRow {
    /// One-based row number as shown in the `#` column.
    #[must_use]
    pub fn display_index(&self) -> usize {
        self.index + 1
    }
}

/// A rendered projection of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<TableRow>,
}

impl TableView {
    /// Project the roster into table rows.
    ///
    /// With [`Highlight::NewestRow`], exactly the last row is marked new;
    /// every other projection marks nothing.
    #[must_use]
    pub fn project(employees: &[Employee], highlight: Highlight) -> Self {
        let last = employees.len().checked_sub(1);
        let rows = employees
            .iter()
            .enumerate()
            .map(|(index, emp)| TableRow {
                index,
                name: emp.name.clone(),
                position: emp.position.clone(),
                salary: format_inr(&emp.salary),
                is_new: highlight == Highlight::NewestRow && Some(index) == last,
            })
            .collect();
        Self { rows }
    }

    /// The rendered rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Render as an aligned text table for the terminal.
    #[must_use]
    pub fn to_text(&self) -> String {
        const HEADERS: [&str; 5] = ["#", "Name", "Position", "Salary", "Actions"];
        const ACTIONS: &str = "edit, delete";

        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            let cells = [
                row.display_index().to_string(),
                row.name.clone(),
                row.position.clone(),
                row.salary.clone(),
                ACTIONS.to_string(),
            ];
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let line = |cells: [&str; 5]| -> String {
            let mut parts = Vec::with_capacity(5);
            for (cell, width) in cells.iter().zip(widths.iter().copied()) {
                parts.push(format!("{cell:<width$}"));
            }
            let mut joined = parts.join("  ");
            while joined.ends_with(' ') {
                joined.pop();
            }
            joined
        };

        out.push_str(&line(HEADERS));
        out.push('\n');
        for row in &self.rows {
            let number = row.display_index().to_string();
            out.push_str(&line([
                &number,
                &row.name,
                &row.position,
                &row.salary,
                ACTIONS,
            ]));
            out.push('\n');
        }
        out
    }

    /// Render as an HTML table.
    ///
    /// A new row carries the `new-row` class so the stylesheet can play
    /// its entrance animation; the action buttons are parameterized by the
    /// row's current index.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<table id=\"employeeTable\">\n");
        html.push_str("  <thead>\n");
        html.push_str("    <tr><th>#</th><th>Name</th><th>Position</th><th>Salary</th><th>Actions</th></tr>\n");
        html.push_str("  </thead>\n");
        html.push_str("  <tbody>\n");
        for row in &self.rows {
            if row.is_new {
                html.push_str("    <tr class=\"new-row\">\n");
            } else {
                html.push_str("    <tr>\n");
            }
            html.push_str(&format!("      <td>{}</td>\n", row.display_index()));
            html.push_str(&format!("      <td>{}</td>\n", row.name));
            html.push_str(&format!("      <td>{}</td>\n", row.position));
            html.push_str(&format!("      <td>{}</td>\n", row.salary));
            html.push_str("      <td>\n");
            html.push_str(&format!(
                "        <button class=\"edit-btn\" onclick=\"editEmployee({})\">Edit</button>\n",
                row.index
            ));
            html.push_str(&format!(
                "        <button class=\"delete-btn\" onclick=\"deleteEmployee({})\">Delete</button>\n",
                row.index
            ));
            html.push_str("      </td>\n");
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n");
        html.push_str("</table>\n");
        html
    }

    /// Render as a complete HTML document.
    #[must_use]
    pub fn render_page(&self) -> String {
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("  <meta charset=\"utf-8\">\n");
        page.push_str("  <title>Employee Roster</title>\n");
        page.push_str("</head>\n<body>\n");
        page.push_str("<h1>Employee Roster</h1>\n");
        page.push_str(&self.to_html());
        page.push_str("</body>\n</html>\n");
        page
    }
}

/// Serialize the roster itself (raw field values) as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn roster_json(employees: &[Employee]) -> Result<String> {
    Ok(serde_json::to_string_pretty(employees)?)
}

/// Format a salary as Indian Rupees.
///
/// Grouping follows the `en-IN` locale (last three digits, then groups of
/// two) with zero fraction digits: `50000` becomes `₹50,000` and
/// `1234567` becomes `₹12,34,567`. Salary text that is not numeric passes
/// through unchanged; the raw value stays canonical either way.
#[must_use]
pub fn format_inr(salary: &Salary) -> String {
    match salary.as_number() {
        Some(n) if n < 0.0 => format!("-₹{}", group_indian(&format_whole(-n))),
        Some(n) => format!("₹{}", group_indian(&format_whole(n))),
        None => salary.to_string(),
    }
}

/// Round a non-negative amount to a whole-rupee digit string.
fn format_whole(amount: f64) -> String {
    format!("{:.0}", amount.round())
}

/// Apply en-IN digit grouping: the last three digits form one group, the
/// rest group in pairs.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        parts.push(&head[i - 2..i]);
        i -= 2;
    }
    parts.push(&head[..i]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}
