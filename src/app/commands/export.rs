//! PDF export of the filtered schedule.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::app::AppContext;
use crate::app::export::{ExportJob, export_file_name, write_export};
use crate::app::session::ScheduleSession;
use crate::domain::{AppError, ExportTable, FilterState};
use crate::ports::ScheduleBackend;

#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub rows: usize,
}

/// Execute the export command.
///
/// `output` names the target file; without it the document goes to the
/// configured output directory under a dated name.
pub fn execute<B: ScheduleBackend>(
    ctx: &AppContext<B>,
    filters: FilterState,
    output: Option<&Path>,
    now: NaiveDateTime,
) -> Result<ExportOutcome, AppError> {
    let session = ScheduleSession::open(ctx.backend())?;
    let config = &ctx.config().export;

    let table =
        ExportTable::build(&config.title, session.schedule(), session.personnel(), &filters, now);
    let rows = table.row_count();
    tracing::info!(rows, filters = %table.filter_summary, "exporting schedule");

    let (dir, file_name) = target(output, &config.output_dir, now)?;
    let bytes = ExportJob::spawn(table, config.clone()).join().inspect_err(|err| {
        tracing::error!(error = %err, "export failed");
    })?;
    let path = write_export(&dir, &file_name, &bytes)?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "export written");
    Ok(ExportOutcome { path, rows })
}

fn target(
    output: Option<&Path>,
    output_dir: &Path,
    now: NaiveDateTime,
) -> Result<(PathBuf, String), AppError> {
    let Some(output) = output else {
        return Ok((output_dir.to_path_buf(), export_file_name(now.date())));
    };
    let file_name = output
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::Export(format!("Invalid output path: {}", output.display())))?;
    let dir = output.parent().map(Path::to_path_buf).unwrap_or_default();
    let dir = if dir.as_os_str().is_empty() { PathBuf::from(".") } else { dir };
    Ok((dir, file_name.to_string()))
}
