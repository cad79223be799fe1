//! Removal of a single cell.

use crate::app::AppContext;
use crate::app::session::ScheduleSession;
use crate::domain::{AppError, DayOfWeek, Shift};
use crate::ports::ScheduleBackend;

/// Execute the delete command. Returns the removed shift, or `None` when the
/// cell was already empty.
pub fn execute<B: ScheduleBackend>(
    ctx: &AppContext<B>,
    personnel_id: &str,
    day: DayOfWeek,
) -> Result<Option<Shift>, AppError> {
    let mut session = ScheduleSession::open(ctx.backend())?;
    session.find_personnel(personnel_id)?;
    session.delete(personnel_id, day)
}
