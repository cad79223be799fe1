use serde::{Deserialize, Serialize};

use super::time::{Hour, ShiftDuration, ShiftSpan};

const DEFAULT_START: Hour = Hour::wrapping(8);
const DEFAULT_END: Hour = Hour::wrapping(17);

/// Whether a shift records work or a rest day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftKind {
    #[default]
    Work,
    DayOff,
}

/// One person's assignment for one day of the week.
///
/// Day-off shifts keep their span and tasks so that switching a cell back to a
/// working day restores them, but neither takes part in duration or formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ShiftRecord", into = "ShiftRecord")]
pub struct Shift {
    pub kind: ShiftKind,
    pub span: ShiftSpan,
    pub notes: String,
    pub tasks: Vec<String>,
}

impl Default for Shift {
    fn default() -> Self {
        Self {
            kind: ShiftKind::Work,
            span: ShiftSpan::new(DEFAULT_START, DEFAULT_END),
            notes: String::new(),
            tasks: Vec::new(),
        }
    }
}

impl Shift {
    /// Working shift over `span` with no notes or tasks.
    pub fn work(span: ShiftSpan) -> Self {
        Self { span, ..Default::default() }
    }

    /// Rest day with an optional free-text reason.
    pub fn day_off(reason: impl Into<String>) -> Self {
        Self { kind: ShiftKind::DayOff, notes: reason.into(), ..Default::default() }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_tasks<I, S>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tasks = tasks.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_day_off(&self) -> bool {
        self.kind == ShiftKind::DayOff
    }

    /// Duration of a working shift; `None` for a day off.
    pub fn duration(&self) -> Option<ShiftDuration> {
        shift_duration_hours(self)
    }

    /// Formatted time range of a working shift; `None` for a day off.
    pub fn formatted_range(&self) -> Option<String> {
        if self.is_day_off() { None } else { Some(self.span.format_range()) }
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}

/// Hours worked by `shift`, with its label and overnight flag.
pub fn shift_duration_hours(shift: &Shift) -> Option<ShiftDuration> {
    match shift.kind {
        ShiftKind::Work => Some(shift.span.duration()),
        ShiftKind::DayOff => None,
    }
}

/// Wire shape of a shift as exchanged with the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShiftRecord {
    start_time: Hour,
    end_time: Hour,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    tasks: Vec<String>,
    #[serde(default)]
    is_day_off: bool,
}

impl From<ShiftRecord> for Shift {
    fn from(record: ShiftRecord) -> Self {
        Self {
            kind: if record.is_day_off { ShiftKind::DayOff } else { ShiftKind::Work },
            span: ShiftSpan::new(record.start_time, record.end_time),
            notes: record.notes,
            tasks: record.tasks,
        }
    }
}

impl From<Shift> for ShiftRecord {
    fn from(shift: Shift) -> Self {
        let is_day_off = shift.is_day_off();
        Self {
            start_time: shift.span.start(),
            end_time: shift.span.end(),
            notes: shift.notes,
            tasks: shift.tasks,
            is_day_off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_day_shift() {
        let shift = Shift::default();
        assert_eq!(shift.span.start().value(), 8);
        assert_eq!(shift.span.end().value(), 17);
        assert!(!shift.is_day_off());
        assert_eq!(shift.duration().unwrap().hours, 9);
    }

    #[test]
    fn day_off_has_no_duration_or_range() {
        let shift = Shift::day_off("Congé annuel");
        assert!(shift.duration().is_none());
        assert!(shift.formatted_range().is_none());
        assert_eq!(shift.notes, "Congé annuel");
    }

    #[test]
    fn serializes_to_backend_shape() {
        let shift = Shift::work(ShiftSpan::new(Hour::new(6).unwrap(), Hour::new(14).unwrap()))
            .with_tasks(["Préparer petit-déjeuner"]);
        let value = serde_json::to_value(&shift).unwrap();
        assert_eq!(
            value,
            json!({
                "startTime": 6,
                "endTime": 14,
                "notes": "",
                "tasks": ["Préparer petit-déjeuner"],
                "isDayOff": false
            })
        );
    }

    #[test]
    fn day_off_keeps_hours_and_tasks_on_the_wire() {
        let raw = json!({
            "startTime": 22,
            "endTime": 6,
            "notes": "Récupération",
            "tasks": ["Ronde"],
            "isDayOff": true
        });
        let shift: Shift = serde_json::from_value(raw.clone()).unwrap();
        assert!(shift.is_day_off());
        assert_eq!(serde_json::to_value(&shift).unwrap(), raw);
    }

    #[test]
    fn day_off_built_in_code_serializes_its_flag() {
        let shift = Shift::day_off("Maladie").with_tasks(["Ronde"]);
        let value = serde_json::to_value(&shift).unwrap();
        assert_eq!(value["isDayOff"], json!(true));
        assert_eq!(value["notes"], json!("Maladie"));
        assert_eq!(value["tasks"], json!(["Ronde"]));
    }

    #[test]
    fn missing_optional_fields_default() {
        let shift: Shift = serde_json::from_value(json!({"startTime": 0, "endTime": 0})).unwrap();
        assert!(matches!(shift.span, ShiftSpan::Continuous { .. }));
        assert!(shift.tasks.is_empty());
        assert!(!shift.is_day_off());
    }

    #[test]
    fn rejects_hour_out_of_range() {
        let result = serde_json::from_value::<Shift>(json!({"startTime": 8, "endTime": 25}));
        assert!(result.is_err());
    }
}
