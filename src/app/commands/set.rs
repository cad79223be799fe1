//! Non-interactive edit of a single cell.

use crate::app::AppContext;
use crate::app::session::ScheduleSession;
use crate::domain::{AppError, DayOfWeek, Hour, Preset, Shift, ShiftEditor};
use crate::ports::ScheduleBackend;

/// Field changes applied on top of the cell's current shift, in field order:
/// preset first, then explicit hours, so `--preset night --end 7` ends at 07:00.
#[derive(Debug, Clone, Default)]
pub struct ShiftChange {
    pub preset: Option<Preset>,
    pub start: Option<Hour>,
    pub end: Option<Hour>,
    pub day_off: Option<bool>,
    pub notes: Option<String>,
    pub clear_tasks: bool,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SetOutcome {
    pub personnel_name: String,
    pub day: DayOfWeek,
    pub shift: Shift,
    /// Whether the cell already held a shift.
    pub updated: bool,
}

/// Execute the set command.
pub fn execute<B: ScheduleBackend>(
    ctx: &AppContext<B>,
    personnel_id: &str,
    day: DayOfWeek,
    change: ShiftChange,
) -> Result<SetOutcome, AppError> {
    let mut session = ScheduleSession::open(ctx.backend())?;
    let personnel_name = session.find_personnel(personnel_id)?.full_name();

    let mut editor = session.open_editor(personnel_id, day);
    apply_change(&mut editor, change);
    let shift = session.save(&editor)?;

    Ok(SetOutcome { personnel_name, day, shift, updated: editor.is_editing() })
}

pub fn apply_change(editor: &mut ShiftEditor, change: ShiftChange) {
    if let Some(preset) = change.preset {
        editor.apply_preset(preset);
    }
    if let Some(start) = change.start {
        editor.set_start(start);
    }
    if let Some(end) = change.end {
        editor.set_end(end);
    }
    if let Some(day_off) = change.day_off {
        editor.set_day_off(day_off);
    }
    if let Some(notes) = change.notes {
        editor.set_notes(notes);
    }
    if change.clear_tasks {
        editor.clear_tasks();
    }
    for task in &change.tasks {
        editor.add_task(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_backend::MemoryScheduleBackend;
    use crate::domain::{AppConfig, PersonnelRef, ScheduleMap, ShiftKind};

    fn context() -> AppContext<MemoryScheduleBackend> {
        let personnel = vec![PersonnelRef::new("p1", "Ana", "Silva", Some("Cuisine"))];
        let backend = MemoryScheduleBackend::new(personnel, ScheduleMap::new());
        AppContext::new(backend, AppConfig::default())
    }

    #[test]
    fn set_creates_shift_from_defaults() {
        let ctx = context();
        let change = ShiftChange { tasks: vec!["Accueil".into()], ..Default::default() };

        let outcome = execute(&ctx, "p1", DayOfWeek::Monday, change).unwrap();
        assert!(!outcome.updated);
        assert_eq!(outcome.personnel_name, "Ana Silva");
        assert_eq!(outcome.shift.formatted_range().unwrap(), "08:00 → 17:00");
        let stored = ctx.backend().stored_schedule();
        assert_eq!(stored.get("p1", DayOfWeek::Monday), Some(&outcome.shift));
    }

    #[test]
    fn explicit_hours_override_preset() {
        let ctx = context();
        let change = ShiftChange {
            preset: Some(Preset::Night),
            end: Some(Hour::new(7).unwrap()),
            ..Default::default()
        };

        let outcome = execute(&ctx, "p1", DayOfWeek::Friday, change).unwrap();
        assert_eq!(outcome.shift.formatted_range().unwrap(), "22:00 → 07:00 (+1j)");
    }

    #[test]
    fn second_set_updates_and_keeps_existing_fields() {
        let ctx = context();
        let first = ShiftChange { tasks: vec!["Ronde".into()], ..Default::default() };
        execute(&ctx, "p1", DayOfWeek::Monday, first).unwrap();

        let second = ShiftChange {
            day_off: Some(true),
            notes: Some("Maladie".into()),
            ..Default::default()
        };
        let outcome = execute(&ctx, "p1", DayOfWeek::Monday, second).unwrap();

        assert!(outcome.updated);
        assert_eq!(outcome.shift.kind, ShiftKind::DayOff);
        assert_eq!(outcome.shift.tasks, vec!["Ronde"]);
        assert_eq!(outcome.shift.notes, "Maladie");
    }

    #[test]
    fn clear_tasks_runs_before_new_tasks() {
        let ctx = context();
        let first = ShiftChange { tasks: vec!["A".into(), "B".into()], ..Default::default() };
        execute(&ctx, "p1", DayOfWeek::Monday, first).unwrap();

        let second =
            ShiftChange { clear_tasks: true, tasks: vec!["C".into()], ..Default::default() };
        let outcome = execute(&ctx, "p1", DayOfWeek::Monday, second).unwrap();
        assert_eq!(outcome.shift.tasks, vec!["C"]);
    }

    #[test]
    fn unknown_personnel_is_rejected_without_saving() {
        let ctx = context();
        let err = execute(&ctx, "zz", DayOfWeek::Monday, ShiftChange::default()).unwrap_err();
        assert!(matches!(err, AppError::PersonnelNotFound(_)));
        assert!(ctx.backend().saved_schedules().is_empty());
    }

    #[test]
    fn load_failure_blocks_the_write() {
        let ctx = context();
        ctx.backend().fail_loads(Some("Service indisponible"));
        assert!(execute(&ctx, "p1", DayOfWeek::Monday, ShiftChange::default()).is_err());
        assert!(ctx.backend().saved_schedules().is_empty());
    }
}
