//! Editing state for a single schedule cell.

use super::schedule::{
    CellState, DayOfWeek, Hour, Preset, ScheduleError, ScheduleMap, Shift, ShiftKind, ShiftSpan,
};

/// Draft of the shift being added or edited in one `(personnel, day)` cell.
///
/// Hours, notes and tasks are kept independently of the day-off toggle, so
/// flipping a cell to a rest day and back loses nothing. Start and end are never
/// cross-checked: any pair is a valid span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftEditor {
    personnel_id: String,
    day: DayOfWeek,
    is_editing: bool,
    start: Hour,
    end: Hour,
    day_off: bool,
    notes: String,
    tasks: Vec<String>,
}

impl ShiftEditor {
    /// Open the editor on a cell, prefilled from `existing` when there is one.
    pub fn open(personnel_id: impl Into<String>, day: DayOfWeek, existing: Option<&Shift>) -> Self {
        let is_editing = existing.is_some();
        let shift = existing.cloned().unwrap_or_default();
        Self {
            personnel_id: personnel_id.into(),
            day,
            is_editing,
            start: shift.span.start(),
            end: shift.span.end(),
            day_off: shift.is_day_off(),
            notes: shift.notes,
            tasks: shift.tasks,
        }
    }

    /// Open the editor on whatever the working map holds for the cell.
    pub fn for_cell(schedule: &ScheduleMap, personnel_id: &str, day: DayOfWeek) -> Self {
        match schedule.cell_state(personnel_id, day) {
            CellState::Empty => Self::open(personnel_id, day, None),
            CellState::Occupied(shift) => Self::open(personnel_id, day, Some(shift)),
        }
    }

    pub fn personnel_id(&self) -> &str {
        &self.personnel_id
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_day_off(&self) -> bool {
        self.day_off
    }

    pub fn start(&self) -> Hour {
        self.start
    }

    pub fn end(&self) -> Hour {
        self.end
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn set_day_off(&mut self, day_off: bool) {
        self.day_off = day_off;
    }

    pub fn set_start(&mut self, start: Hour) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Hour) {
        self.end = end;
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        let span = preset.span();
        self.start = span.start();
        self.end = span.end();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Append a task. Blank input is ignored; duplicates are kept.
    pub fn add_task(&mut self, task: &str) -> bool {
        let task = task.trim();
        if task.is_empty() {
            return false;
        }
        self.tasks.push(task.to_string());
        true
    }

    pub fn remove_task(&mut self, index: usize) -> Result<String, ScheduleError> {
        if index >= self.tasks.len() {
            return Err(ScheduleError::TaskIndexOutOfRange { index, len: self.tasks.len() });
        }
        Ok(self.tasks.remove(index))
    }

    pub fn clear_tasks(&mut self) {
        self.tasks.clear();
    }

    pub fn span(&self) -> ShiftSpan {
        ShiftSpan::new(self.start, self.end)
    }

    /// Title shown above the editor.
    pub fn title(&self) -> &'static str {
        if self.is_editing { "Modifier le service" } else { "Ajouter un service" }
    }

    pub fn save_label(&self) -> &'static str {
        if self.is_editing { "Mettre à jour" } else { "Ajouter" }
    }

    pub fn notes_label(&self) -> &'static str {
        if self.day_off { "Raison (optionnel)" } else { "Notes (optionnel)" }
    }

    /// Range and duration preview for a working day, e.g. `22:00 → 06:00 (+1j) · 8h nuit`.
    pub fn preview(&self) -> Option<String> {
        if self.day_off {
            return None;
        }
        let span = self.span();
        let duration = span.duration();
        Some(format!("{} · {}h {}", span.format_range(), duration.hours, duration.label))
    }

    pub fn to_shift(&self) -> Shift {
        Shift {
            kind: if self.day_off { ShiftKind::DayOff } else { ShiftKind::Work },
            span: self.span(),
            notes: self.notes.clone(),
            tasks: self.tasks.clone(),
        }
    }
}
