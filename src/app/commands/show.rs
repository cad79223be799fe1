//! Weekly grid view of the schedule.

use crate::app::AppContext;
use crate::app::session::ScheduleSession;
use crate::domain::{DayOfWeek, FilterState, ScheduleMap, Shift};
use crate::ports::ScheduleBackend;

/// Marker shown on a cell that carries notes or tasks.
const DETAILS_MARKER: &str = "*";

/// One grid line: a person and their week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub personnel_id: String,
    pub name: String,
    pub poste: String,
    pub cells: Vec<String>,
    pub weekly_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub filter_summary: String,
    /// Postes available as filter choices, over the whole staff.
    pub postes: Vec<String>,
    pub rows: Vec<GridRow>,
    /// Set when the data could not be loaded and the grid is empty.
    pub load_error: Option<String>,
}

/// Execute the show command.
pub fn execute<B: ScheduleBackend>(ctx: &AppContext<B>, filters: FilterState) -> GridView {
    let mut session = ScheduleSession::load(ctx.backend());
    session.set_filters(filters);
    grid_view(&session)
}

pub fn grid_view<B: ScheduleBackend>(session: &ScheduleSession<B>) -> GridView {
    let schedule = session.schedule();
    let rows = session
        .filtered_personnel()
        .into_iter()
        .map(|person| GridRow {
            personnel_id: person.id.clone(),
            name: person.full_name(),
            poste: person.poste_or_empty().to_string(),
            cells: DayOfWeek::ALL.iter().map(|day| grid_cell(schedule, &person.id, *day)).collect(),
            weekly_hours: schedule.weekly_hours(&person.id),
        })
        .collect();

    GridView {
        filter_summary: session.filters().summary(),
        postes: session.postes(),
        rows,
        load_error: session.load_error().map(str::to_string),
    }
}

fn grid_cell(schedule: &ScheduleMap, personnel_id: &str, day: DayOfWeek) -> String {
    schedule.get(personnel_id, day).map(short_label).unwrap_or_default()
}

/// Compact cell label: the range, or `Congé`, flagged when details exist.
pub fn short_label(shift: &Shift) -> String {
    let base = shift.formatted_range().unwrap_or_else(|| "Congé".to_string());
    if shift.has_notes() || (!shift.is_day_off() && !shift.tasks.is_empty()) {
        format!("{} {}", base, DETAILS_MARKER)
    } else {
        base
    }
}
