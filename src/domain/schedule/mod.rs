pub mod day;
pub mod error;
pub mod model;
pub mod preset;
pub mod shift;
pub mod time;

pub use day::DayOfWeek;
pub use error::ScheduleError;
pub use model::{CellState, ScheduleMap};
pub use preset::Preset;
pub use shift::{Shift, ShiftKind, shift_duration_hours};
pub use time::{Hour, ShiftDuration, ShiftSpan};
