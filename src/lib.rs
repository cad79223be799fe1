//! foyer: edit and export the weekly general staff schedule of a residence hall.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{
    DayOfWeek, ExportOutcome, FilterState, GridRow, GridView, SetOutcome, ShiftChange, delete_shift,
    export, set_shift, show,
};
pub use domain::AppError;
