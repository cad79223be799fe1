use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{AppError, PersonnelRef, ScheduleMap};
use crate::ports::ScheduleBackend;

#[derive(Debug, Default)]
struct State {
    personnel: Vec<PersonnelRef>,
    schedule: ScheduleMap,
    saves: Vec<ScheduleMap>,
    failing_loads: Option<AppError>,
    failing_saves: Option<AppError>,
}

/// In-process backend holding personnel and schedule in memory.
///
/// Clones share state, so a test can keep a handle and inspect what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryScheduleBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryScheduleBackend {
    pub fn new(personnel: Vec<PersonnelRef>, schedule: ScheduleMap) -> Self {
        let state = State { personnel, schedule, ..Default::default() };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means another test thread panicked mid-call.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make every subsequent load fail with a backend error carrying `message`.
    pub fn fail_loads(&self, message: Option<&str>) {
        self.lock().failing_loads =
            Some(AppError::Backend { message: message.map(str::to_string), status: Some(500) });
    }

    /// Make every subsequent save fail with a backend error carrying `message`.
    pub fn fail_saves(&self, message: Option<&str>) {
        self.lock().failing_saves =
            Some(AppError::Backend { message: message.map(str::to_string), status: Some(500) });
    }

    /// Let saves succeed again.
    pub fn recover(&self) {
        let mut state = self.lock();
        state.failing_loads = None;
        state.failing_saves = None;
    }

    /// Last successfully persisted schedule.
    pub fn stored_schedule(&self) -> ScheduleMap {
        self.lock().schedule.clone()
    }

    /// Every schedule received by successful saves, oldest first.
    pub fn saved_schedules(&self) -> Vec<ScheduleMap> {
        self.lock().saves.clone()
    }
}

fn replay(error: &AppError) -> AppError {
    match error {
        AppError::Backend { message, status } => {
            AppError::Backend { message: message.clone(), status: *status }
        }
        other => AppError::Transport(other.to_string()),
    }
}

impl ScheduleBackend for MemoryScheduleBackend {
    fn fetch_personnel(&self) -> Result<Vec<PersonnelRef>, AppError> {
        let state = self.lock();
        if let Some(error) = &state.failing_loads {
            return Err(replay(error));
        }
        Ok(state.personnel.clone())
    }

    fn fetch_schedule(&self) -> Result<ScheduleMap, AppError> {
        let state = self.lock();
        if let Some(error) = &state.failing_loads {
            return Err(replay(error));
        }
        Ok(state.schedule.clone())
    }

    fn save_schedule(&self, schedule: &ScheduleMap) -> Result<(), AppError> {
        let mut state = self.lock();
        if let Some(error) = &state.failing_saves {
            return Err(replay(error));
        }
        state.schedule = schedule.clone();
        state.saves.push(schedule.clone());
        Ok(())
    }
}
