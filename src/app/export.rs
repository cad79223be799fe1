//! Background PDF generation and delivery to disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use chrono::NaiveDate;

use crate::adapters::pdf;
use crate::domain::{AppError, ExportConfig, ExportTable};

const PARTIAL_SUFFIX: &str = "part";

/// File name of an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("planning-general-{}.pdf", date.format("%Y-%m-%d"))
}

/// PDF generation running on a worker thread.
///
/// The table is an owned snapshot, so the session stays usable while the
/// document is produced. Cancellation is checked between pages.
#[derive(Debug)]
pub struct ExportJob {
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<Result<Vec<u8>, AppError>>,
}

impl ExportJob {
    pub fn spawn(table: ExportTable, config: ExportConfig) -> Self {
        Self::spawn_with_flag(table, config, Arc::new(AtomicBool::new(false)))
    }

    /// Spawn with a caller-held cancellation flag, for callers that stop the
    /// job from elsewhere than this handle.
    pub fn spawn_with_flag(
        table: ExportTable,
        config: ExportConfig,
        cancelled: Arc<AtomicBool>,
    ) -> Self {
        Self::run(cancelled, move |should_stop| pdf::export_pdf(&table, &config, should_stop))
    }

    fn run<F>(cancelled: Arc<AtomicBool>, work: F) -> Self
    where
        F: FnOnce(&dyn Fn() -> bool) -> Result<Vec<u8>, AppError> + Send + 'static,
    {
        let flag = Arc::clone(&cancelled);
        let handle = thread::spawn(move || work(&|| flag.load(Ordering::Relaxed)));
        Self { cancelled, handle }
    }

    /// Ask the worker to stop at the next page boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Wait for the document bytes.
    pub fn join(self) -> Result<Vec<u8>, AppError> {
        self.handle
            .join()
            .map_err(|_| AppError::Export("export worker panicked".to_string()))?
    }
}

/// Write `bytes` as `dir/file_name`.
///
/// The bytes go to a sibling `.part` file first and are renamed into place, so
/// an interrupted write never leaves a truncated file under the final name.
pub fn write_export(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;
    let target = dir.join(file_name);
    let partial = dir.join(format!("{}.{}", file_name, PARTIAL_SUFFIX));

    if let Err(err) = fs::write(&partial, bytes).and_then(|_| fs::rename(&partial, &target)) {
        let _ = fs::remove_file(&partial);
        return Err(err.into());
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilterState, PersonnelRef, ScheduleMap};
    use std::sync::mpsc;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn table() -> ExportTable {
        let personnel = vec![PersonnelRef::new("p1", "Ana", "Silva", Some("Cuisine"))];
        let at = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let filters = FilterState::default();
        ExportTable::build("Planning", &ScheduleMap::new(), &personnel, &filters, at)
    }

    #[test]
    fn file_name_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "planning-general-2026-03-09.pdf");
    }

    #[test]
    fn job_produces_pdf() {
        let bytes = ExportJob::spawn(table(), ExportConfig::default()).join().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    fn large_table(rows: usize) -> ExportTable {
        let personnel: Vec<PersonnelRef> = (0..rows)
            .map(|i| PersonnelRef::new(format!("p{i}"), "Agent", format!("{i}"), Some("Veille")))
            .collect();
        let at = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let filters = FilterState::default();
        ExportTable::build("Planning", &ScheduleMap::new(), &personnel, &filters, at)
    }

    #[test]
    fn cancelled_flag_yields_no_document() {
        let cancelled = Arc::new(AtomicBool::new(true));
        let job = ExportJob::spawn_with_flag(large_table(500), ExportConfig::default(), cancelled);
        assert!(matches!(job.join(), Err(AppError::ExportCancelled)));
    }

    #[test]
    fn cancel_reaches_running_worker() {
        let (started_tx, started_rx) = mpsc::channel();
        let job = ExportJob::run(Arc::new(AtomicBool::new(false)), move |should_stop| {
            started_tx.send(()).unwrap();
            let deadline = Instant::now() + Duration::from_secs(5);
            while Instant::now() < deadline {
                if should_stop() {
                    return Err(AppError::ExportCancelled);
                }
                thread::sleep(Duration::from_millis(5));
            }
            Ok(b"%PDF".to_vec())
        });

        started_rx.recv().unwrap();
        job.cancel();
        assert!(matches!(job.join(), Err(AppError::ExportCancelled)));
    }

    #[test]
    fn write_export_leaves_only_final_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("exports");
        let path = write_export(&out, "planning.pdf", b"%PDF-1.3").unwrap();

        assert_eq!(path, out.join("planning.pdf"));
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.3");
        assert!(!out.join("planning.pdf.part").exists());
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = tempdir().unwrap();
        // A directory squatting on the target name makes the rename fail.
        fs::create_dir(dir.path().join("planning.pdf")).unwrap();
        fs::write(dir.path().join("planning.pdf").join("keep"), b"x").unwrap();

        assert!(write_export(dir.path(), "planning.pdf", b"%PDF").is_err());
        assert!(!dir.path().join("planning.pdf.part").exists());
    }
}
