//! Backend API port definition.

use crate::domain::{AppError, PersonnelRef, ScheduleMap};

/// Port for the residence backend that owns personnel and schedule persistence.
///
/// Saving is a whole-map overwrite with last-writer-wins semantics: there is no
/// versioning or conflict detection, so a concurrent save from another client
/// silently replaces this one (or is replaced by it).
pub trait ScheduleBackend {
    /// Fetch the personnel list shown as grid rows.
    fn fetch_personnel(&self) -> Result<Vec<PersonnelRef>, AppError>;

    /// Fetch the persisted weekly schedule.
    fn fetch_schedule(&self) -> Result<ScheduleMap, AppError>;

    /// Replace the persisted schedule with `schedule`.
    fn save_schedule(&self, schedule: &ScheduleMap) -> Result<(), AppError>;
}

impl<T: ScheduleBackend + ?Sized> ScheduleBackend for &T {
    fn fetch_personnel(&self) -> Result<Vec<PersonnelRef>, AppError> {
        (**self).fetch_personnel()
    }

    fn fetch_schedule(&self) -> Result<ScheduleMap, AppError> {
        (**self).fetch_schedule()
    }

    fn save_schedule(&self, schedule: &ScheduleMap) -> Result<(), AppError> {
        (**self).save_schedule(schedule)
    }
}
