pub mod configuration;
pub mod editor;
pub mod error;
pub mod export_table;
pub mod filter;
pub mod notice;
pub mod personnel;
pub mod schedule;

pub use configuration::{AppConfig, BackendConfig, ExportConfig};
pub use editor::ShiftEditor;
pub use error::AppError;
pub use export_table::{ExportRow, ExportTable, cell_text};
pub use filter::{FilterState, PosteFilter};
pub use notice::{Notice, NoticeLevel};
pub use personnel::{PersonnelRef, distinct_postes};
pub use schedule::{
    CellState, DayOfWeek, Hour, Preset, ScheduleError, ScheduleMap, Shift, ShiftDuration,
    ShiftKind, ShiftSpan, shift_duration_hours,
};
