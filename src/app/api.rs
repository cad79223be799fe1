//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! context creation and command execution against the HTTP backend.

use std::path::Path;

use chrono::Local;

use crate::adapters::backend_http::HttpScheduleBackend;
use crate::adapters::token_file::FileTokenStore;
use crate::app::session::ScheduleSession;
use crate::app::{
    AppContext,
    commands::{delete, export, set, show},
};
use crate::domain::configuration::load_config;

pub use crate::app::commands::export::ExportOutcome;
pub use crate::app::commands::set::{SetOutcome, ShiftChange};
pub use crate::app::commands::show::{GridRow, GridView};
pub use crate::domain::{AppConfig, AppError, DayOfWeek, FilterState, Shift};

fn create_backend(config: &AppConfig) -> Result<HttpScheduleBackend, AppError> {
    let tokens = FileTokenStore::new(config.backend.token_file.clone());
    HttpScheduleBackend::new(&config.backend, Box::new(tokens))
}

/// Create an `AppContext` talking to the configured backend.
fn create_context(config: AppConfig) -> Result<AppContext<HttpScheduleBackend>, AppError> {
    let backend = create_backend(&config)?;
    Ok(AppContext::new(backend, config))
}

fn context_from(config_path: Option<&Path>) -> Result<AppContext<HttpScheduleBackend>, AppError> {
    create_context(load_config(config_path)?)
}

/// Load the weekly grid. Load failures give an empty grid with `load_error` set.
pub fn show(config_path: Option<&Path>, filters: FilterState) -> Result<GridView, AppError> {
    let ctx = context_from(config_path)?;
    Ok(show::execute(&ctx, filters))
}

/// Create or update the shift of one cell and persist the schedule.
pub fn set_shift(
    config_path: Option<&Path>,
    personnel_id: &str,
    day: DayOfWeek,
    change: ShiftChange,
) -> Result<SetOutcome, AppError> {
    let ctx = context_from(config_path)?;
    set::execute(&ctx, personnel_id, day, change)
}

/// Remove the shift of one cell and persist the schedule.
pub fn delete_shift(
    config_path: Option<&Path>,
    personnel_id: &str,
    day: DayOfWeek,
) -> Result<Option<Shift>, AppError> {
    let ctx = context_from(config_path)?;
    delete::execute(&ctx, personnel_id, day)
}

/// Export the filtered schedule as a PDF document.
pub fn export(
    config_path: Option<&Path>,
    filters: FilterState,
    output: Option<&Path>,
) -> Result<ExportOutcome, AppError> {
    let ctx = context_from(config_path)?;
    export::execute(&ctx, filters, output, Local::now().naive_local())
}

/// Open an editing session on the configured backend, failing if data cannot
/// be loaded.
pub fn open_session(
    config_path: Option<&Path>,
) -> Result<ScheduleSession<HttpScheduleBackend>, AppError> {
    let config = load_config(config_path)?;
    ScheduleSession::open(create_backend(&config)?)
}
