//! PDF rendering of the export table.

pub mod layout;
pub mod render;

pub use layout::{DocumentLayout, layout_table};
pub use render::{page_label, render_pdf};

use crate::domain::{AppError, ExportConfig, ExportTable};

/// Lay out and render `table` in one go.
pub fn export_pdf(
    table: &ExportTable,
    config: &ExportConfig,
    should_stop: &dyn Fn() -> bool,
) -> Result<Vec<u8>, AppError> {
    let layout = layout_table(table);
    tracing::debug!(rows = table.row_count(), pages = layout.page_count(), "laid out export");
    render_pdf(table, &layout, config, should_stop)
}
