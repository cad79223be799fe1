//! Printable table derived from the schedule.

use chrono::NaiveDateTime;

use super::filter::FilterState;
use super::personnel::PersonnelRef;
use super::schedule::{DayOfWeek, ScheduleMap, Shift};

/// Content of a cell without a shift.
pub const EMPTY_CELL: &str = "-";
/// Content of a day-off cell.
pub const DAY_OFF_CELL: &str = "Congé";
/// Prefix of the task line in a working cell.
pub const TASKS_PREFIX: &str = "Tâches: ";

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y à %H:%M";

/// One printed row: a person and their week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub poste: String,
    /// One entry per day, Monday first.
    pub cells: Vec<String>,
    /// Left blank for handwritten annotations.
    pub remarks: String,
}

impl ExportRow {
    /// All columns in print order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns = Vec::with_capacity(self.cells.len() + 3);
        columns.push(self.name.as_str());
        columns.push(self.poste.as_str());
        columns.extend(self.cells.iter().map(String::as_str));
        columns.push(self.remarks.as_str());
        columns
    }
}

/// Everything the document shows, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub title: String,
    pub generated_at: NaiveDateTime,
    pub filter_summary: String,
    pub rows: Vec<ExportRow>,
}

impl ExportTable {
    /// Build the table for the personnel selected by `filters`, in list order.
    ///
    /// Reads the schedule without touching it; the same inputs always give the
    /// same rows.
    pub fn build(
        title: &str,
        schedule: &ScheduleMap,
        personnel: &[PersonnelRef],
        filters: &FilterState,
        generated_at: NaiveDateTime,
    ) -> Self {
        let rows = filters
            .apply(personnel)
            .into_iter()
            .map(|person| ExportRow {
                name: person.full_name(),
                poste: person.poste_or_empty().to_string(),
                cells: DayOfWeek::ALL
                    .iter()
                    .map(|day| cell_text(schedule.get(&person.id, *day)))
                    .collect(),
                remarks: String::new(),
            })
            .collect();

        Self {
            title: title.to_string(),
            generated_at,
            filter_summary: filters.summary(),
            rows,
        }
    }

    /// Column headings in print order.
    pub fn headers() -> Vec<&'static str> {
        let mut headers = vec!["Personnel", "Poste"];
        headers.extend(DayOfWeek::ALL.iter().map(DayOfWeek::label));
        headers.push("Remarques");
        headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn generated_label(&self) -> String {
        format!("Généré le {}", self.generated_at.format(TIMESTAMP_FORMAT))
    }

    /// Lines of the header block under the title.
    pub fn header_lines(&self) -> Vec<String> {
        vec![
            self.generated_label(),
            format!("Filtres : {}", self.filter_summary),
            format!("Nombre de personnel : {}", self.row_count()),
        ]
    }
}

/// Printed content of one cell.
pub fn cell_text(shift: Option<&Shift>) -> String {
    let Some(shift) = shift else {
        return EMPTY_CELL.to_string();
    };
    if shift.is_day_off() {
        return DAY_OFF_CELL.to_string();
    }

    let mut lines = vec![shift.span.format_range()];
    if shift.has_notes() {
        lines.push(shift.notes.trim().to_string());
    }
    if !shift.tasks.is_empty() {
        lines.push(format!("{}{}", TASKS_PREFIX, shift.tasks.join(", ")));
    }
    lines.join("\n")
}
