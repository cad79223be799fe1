//! Working state of one editing session: personnel, schedule, filters and the
//! current banner.

use chrono::{DateTime, Utc};

use crate::domain::{
    AppError, DayOfWeek, FilterState, Notice, PersonnelRef, ScheduleMap, Shift, ShiftEditor,
    distinct_postes,
};
use crate::ports::ScheduleBackend;

pub const SAVE_SUCCESS: &str = "Planning enregistré avec succès";
pub const SAVE_FAILURE: &str = "Erreur lors de l'enregistrement du planning";
pub const DELETE_SUCCESS: &str = "Créneau supprimé";
pub const DELETE_FAILURE: &str = "Erreur lors de la suppression du créneau";
pub const LOAD_FAILURE: &str = "Erreur lors du chargement des données";

/// Owns the working schedule and writes it back through the backend.
///
/// Mutations are optimistic: the working map changes first and is then
/// persisted whole. A failed save leaves the change in place so it can be
/// retried, which means the working map and the server may disagree until
/// the next successful save.
#[derive(Debug)]
pub struct ScheduleSession<B: ScheduleBackend> {
    backend: B,
    personnel: Vec<PersonnelRef>,
    schedule: ScheduleMap,
    filters: FilterState,
    notice: Option<Notice>,
    load_error: Option<String>,
}

impl<B: ScheduleBackend> ScheduleSession<B> {
    /// Load personnel and schedule, falling back to empty data on failure.
    ///
    /// The failure is logged and kept as [`Self::load_error`] so callers can
    /// render a degraded view.
    pub fn load(backend: B) -> Self {
        let mut failures = Vec::new();

        let personnel = backend.fetch_personnel().unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to load personnel");
            failures.push(err.banner_message(LOAD_FAILURE));
            Vec::new()
        });
        let schedule = backend.fetch_schedule().unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to load schedule");
            failures.push(err.banner_message(LOAD_FAILURE));
            ScheduleMap::new()
        });

        let load_error = failures.into_iter().next();
        if load_error.is_none() {
            tracing::info!(personnel = personnel.len(), scheduled = schedule.len(), "loaded");
        }

        Self {
            backend,
            personnel,
            schedule,
            filters: FilterState::default(),
            notice: None,
            load_error,
        }
    }

    /// Load personnel and schedule, failing on the first error.
    ///
    /// Used before any write, so a failed load can never be followed by an
    /// overwrite of the server's schedule with an empty one.
    pub fn open(backend: B) -> Result<Self, AppError> {
        let personnel = backend
            .fetch_personnel()
            .inspect_err(|err| tracing::error!(error = %err, "failed to load personnel"))?;
        let schedule = backend
            .fetch_schedule()
            .inspect_err(|err| tracing::error!(error = %err, "failed to load schedule"))?;
        tracing::info!(personnel = personnel.len(), scheduled = schedule.len(), "loaded");
        Ok(Self {
            backend,
            personnel,
            schedule,
            filters: FilterState::default(),
            notice: None,
            load_error: None,
        })
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn personnel(&self) -> &[PersonnelRef] {
        &self.personnel
    }

    pub fn schedule(&self) -> &ScheduleMap {
        &self.schedule
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    /// Personnel rows passing the current filters, in list order.
    pub fn filtered_personnel(&self) -> Vec<&PersonnelRef> {
        self.filters.apply(&self.personnel)
    }

    /// Postes offered by the poste filter.
    pub fn postes(&self) -> Vec<String> {
        distinct_postes(&self.personnel)
    }

    pub fn find_personnel(&self, personnel_id: &str) -> Result<&PersonnelRef, AppError> {
        self.personnel
            .iter()
            .find(|person| person.id == personnel_id)
            .ok_or_else(|| AppError::PersonnelNotFound(personnel_id.to_string()))
    }

    /// Editor for a cell, prefilled when the cell holds a shift.
    pub fn open_editor(&self, personnel_id: &str, day: DayOfWeek) -> ShiftEditor {
        ShiftEditor::for_cell(&self.schedule, personnel_id, day)
    }

    /// Commit the editor's shift and persist the whole schedule.
    pub fn save(&mut self, editor: &ShiftEditor) -> Result<Shift, AppError> {
        let shift = editor.to_shift();
        self.schedule.put(editor.personnel_id(), editor.day(), shift.clone());
        tracing::debug!(personnel = editor.personnel_id(), day = %editor.day(), "shift staged");
        self.persist(SAVE_SUCCESS, SAVE_FAILURE)?;
        Ok(shift)
    }

    /// Remove a cell's shift and persist the whole schedule.
    ///
    /// An empty cell is left alone and nothing is sent.
    pub fn delete(
        &mut self,
        personnel_id: &str,
        day: DayOfWeek,
    ) -> Result<Option<Shift>, AppError> {
        let Some(removed) = self.schedule.remove(personnel_id, day) else {
            return Ok(None);
        };
        self.persist(DELETE_SUCCESS, DELETE_FAILURE)?;
        Ok(Some(removed))
    }

    fn persist(&mut self, success: &str, fallback: &str) -> Result<(), AppError> {
        match self.backend.save_schedule(&self.schedule) {
            Ok(()) => {
                tracing::info!(scheduled = self.schedule.len(), "schedule saved");
                self.notice = Some(Notice::success(success, Utc::now()));
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save schedule");
                self.notice = Some(Notice::error(err.banner_message(fallback), Utc::now()));
                Err(err)
            }
        }
    }

    pub fn raise_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// The banner to show at `now`, if any.
    pub fn active_notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice.as_ref().filter(|notice| !notice.is_expired(now))
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_backend::MemoryScheduleBackend;
    use crate::domain::{Hour, NoticeLevel, Preset, ShiftKind};
    use chrono::Duration;
    use serde_json::json;

    fn ana() -> PersonnelRef {
        PersonnelRef::new("p1", "Ana", "Silva", Some("Cuisine"))
    }

    fn backend() -> MemoryScheduleBackend {
        MemoryScheduleBackend::new(vec![ana()], ScheduleMap::new())
    }

    #[test]
    fn save_then_read_back_matches_submitted_shift() {
        let backend = backend();
        let mut session = ScheduleSession::open(backend.clone()).unwrap();

        let mut editor = session.open_editor("p1", DayOfWeek::Monday);
        editor.set_start(Hour::new(6).unwrap());
        editor.set_end(Hour::new(14).unwrap());
        editor.add_task("Préparer petit-déjeuner");
        let saved = session.save(&editor).unwrap();

        assert_eq!(session.schedule().get("p1", DayOfWeek::Monday), Some(&saved));
        assert_eq!(
            serde_json::to_value(backend.stored_schedule()).unwrap(),
            json!({
                "p1": {
                    "Lundi": {
                        "startTime": 6,
                        "endTime": 14,
                        "isDayOff": false,
                        "tasks": ["Préparer petit-déjeuner"],
                        "notes": ""
                    }
                }
            })
        );
        let notice = session.active_notice(Utc::now()).unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, SAVE_SUCCESS);
    }

    #[test]
    fn task_order_survives_a_save() {
        let mut session = ScheduleSession::open(backend()).unwrap();
        let mut editor = session.open_editor("p1", DayOfWeek::Friday);
        for task in ["Courses", "Ménage", "Courses"] {
            editor.add_task(task);
        }
        session.save(&editor).unwrap();

        let shift = session.schedule().get("p1", DayOfWeek::Friday).unwrap();
        assert_eq!(shift.tasks, vec!["Courses", "Ménage", "Courses"]);
    }

    #[test]
    fn failed_save_keeps_optimistic_change_and_reports_server_message() {
        let backend = backend();
        backend.fail_saves(Some("Planning verrouillé"));
        let mut session = ScheduleSession::open(backend.clone()).unwrap();

        let mut editor = session.open_editor("p1", DayOfWeek::Tuesday);
        editor.apply_preset(Preset::Night);
        assert!(session.save(&editor).is_err());

        assert!(session.schedule().get("p1", DayOfWeek::Tuesday).is_some());
        assert!(backend.stored_schedule().is_empty());
        let notice = session.active_notice(Utc::now() + Duration::seconds(60)).unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Planning verrouillé");

        backend.recover();
        session.save(&editor).unwrap();
        assert_eq!(backend.stored_schedule(), *session.schedule());
    }

    #[test]
    fn failed_save_without_message_uses_fallback() {
        let backend = backend();
        backend.fail_saves(None);
        let mut session = ScheduleSession::open(backend).unwrap();
        let editor = session.open_editor("p1", DayOfWeek::Monday);

        assert!(session.save(&editor).is_err());
        assert_eq!(session.active_notice(Utc::now()).unwrap().message, SAVE_FAILURE);
    }

    #[test]
    fn deleting_last_shift_prunes_personnel() {
        let backend = backend();
        let mut session = ScheduleSession::open(backend.clone()).unwrap();
        let editor = session.open_editor("p1", DayOfWeek::Sunday);
        session.save(&editor).unwrap();

        let removed = session.delete("p1", DayOfWeek::Sunday).unwrap();
        assert!(removed.is_some());
        assert!(!session.schedule().contains_personnel("p1"));
        assert!(backend.stored_schedule().is_empty());
        assert_eq!(session.active_notice(Utc::now()).unwrap().message, DELETE_SUCCESS);
    }

    #[test]
    fn deleting_one_of_several_shifts_keeps_the_rest() {
        let mut session = ScheduleSession::open(backend()).unwrap();
        for day in [DayOfWeek::Monday, DayOfWeek::Wednesday] {
            let editor = session.open_editor("p1", day);
            session.save(&editor).unwrap();
        }

        session.delete("p1", DayOfWeek::Monday).unwrap();
        assert!(session.schedule().get("p1", DayOfWeek::Monday).is_none());
        assert!(session.schedule().get("p1", DayOfWeek::Wednesday).is_some());
    }

    #[test]
    fn deleting_an_empty_cell_sends_nothing() {
        let backend = backend();
        let mut session = ScheduleSession::open(backend.clone()).unwrap();
        assert_eq!(session.delete("p1", DayOfWeek::Monday).unwrap(), None);
        assert!(backend.saved_schedules().is_empty());
    }

    #[test]
    fn failed_delete_reports_error_and_keeps_removal() {
        let mut schedule = ScheduleMap::new();
        schedule.put("p1", DayOfWeek::Monday, Shift::default());
        let backend = MemoryScheduleBackend::new(vec![ana()], schedule);
        let mut session = ScheduleSession::open(backend.clone()).unwrap();
        backend.fail_saves(None);

        assert!(session.delete("p1", DayOfWeek::Monday).is_err());
        assert!(session.schedule().is_empty());
        assert_eq!(session.active_notice(Utc::now()).unwrap().message, DELETE_FAILURE);
        assert_eq!(backend.stored_schedule().len(), 1);
    }

    #[test]
    fn load_failure_degrades_to_empty_data() {
        let backend = backend();
        backend.fail_loads(Some("Service indisponible"));

        let session = ScheduleSession::load(backend.clone());
        assert!(session.personnel().is_empty());
        assert!(session.schedule().is_empty());
        assert_eq!(session.load_error(), Some("Service indisponible"));

        assert!(ScheduleSession::open(backend).is_err());
    }

    #[test]
    fn success_notice_expires_but_error_stays() {
        let mut session = ScheduleSession::open(backend()).unwrap();
        let editor = session.open_editor("p1", DayOfWeek::Monday);
        session.save(&editor).unwrap();
        assert!(session.active_notice(Utc::now() + Duration::seconds(6)).is_none());

        let now = Utc::now();
        session.raise_notice(Notice::error("Erreur", now));
        assert!(session.active_notice(now + Duration::hours(1)).is_some());
        session.dismiss_notice();
        assert!(session.active_notice(now).is_none());
    }

    #[test]
    fn editor_reopens_existing_shift() {
        let mut session = ScheduleSession::open(backend()).unwrap();
        let mut editor = session.open_editor("p1", DayOfWeek::Monday);
        editor.set_day_off(true);
        editor.set_notes("Congé annuel");
        session.save(&editor).unwrap();

        let reopened = session.open_editor("p1", DayOfWeek::Monday);
        assert!(reopened.is_editing());
        assert!(reopened.is_day_off());
        assert_eq!(reopened.notes(), "Congé annuel");
        assert_eq!(reopened.to_shift().kind, ShiftKind::DayOff);
    }

    #[test]
    fn filters_select_rows_and_unknown_personnel_is_reported() {
        let personnel = vec![
            PersonnelRef::new("1", "Marie", "Dupont", Some("Éducatrice")),
            PersonnelRef::new("2", "Jean", "Martin", Some("Cuisinier")),
        ];
        let mut session =
            ScheduleSession::open(MemoryScheduleBackend::new(personnel, ScheduleMap::new()))
                .unwrap();
        session.set_filters(FilterState::new(Some("Cuisinier"), None));

        let rows: Vec<&str> =
            session.filtered_personnel().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(rows, vec!["2"]);
        assert_eq!(session.postes(), vec!["Éducatrice", "Cuisinier"]);
        assert!(matches!(
            session.find_personnel("zz"),
            Err(AppError::PersonnelNotFound(id)) if id == "zz"
        ));
    }
}
