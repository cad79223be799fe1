//! Page geometry and pagination of the export table.
//!
//! All measures are millimetres on an A4 landscape page with the origin at the
//! bottom-left corner, as PDF draws. Text width is estimated from an average
//! glyph width, which is close enough for Helvetica at table sizes.

use crate::domain::{ExportRow, ExportTable};

pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;
pub const MARGIN_MM: f32 = 10.0;

/// Personnel, Poste, seven days, Remarques. Sums to the printable width.
pub const COLUMN_WIDTHS_MM: [f32; 10] =
    [34.0, 24.0, 26.0, 26.0, 26.0, 26.0, 26.0, 26.0, 26.0, 37.0];

pub const BODY_FONT_PT: f32 = 6.5;
pub const LINE_HEIGHT_MM: f32 = 3.0;
pub const CELL_PADDING_MM: f32 = 1.5;

/// Title and summary lines on the first page.
pub const HEADER_BLOCK_MM: f32 = 26.0;
/// Running title on the following pages.
pub const CONTINUATION_MM: f32 = 8.0;

pub const SIGNATURE_WIDTH_MM: f32 = 70.0;
pub const SIGNATURE_HEIGHT_MM: f32 = 26.0;
/// Bottom edge of the signature block; the footer line sits below it.
pub const SIGNATURE_BOTTOM_MM: f32 = 16.0;
/// Rows never extend below this line, keeping footer and signature clear.
pub const TABLE_BOTTOM_MM: f32 = SIGNATURE_BOTTOM_MM + SIGNATURE_HEIGHT_MM + 4.0;

const AVERAGE_GLYPH_EM: f32 = 0.5;
const MM_PER_PT: f32 = 0.3528;
const ELLIPSIS: char = '…';

/// A table row with every cell already wrapped into lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutRow {
    pub cells: Vec<Vec<String>>,
    pub height_mm: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutPage {
    /// Whether the page carries the full header block.
    pub is_first: bool,
    pub rows: Vec<LaidOutRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    /// Column headings, repeated at the top of every page.
    pub header_row: LaidOutRow,
    pub pages: Vec<LaidOutPage>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|page| page.rows.len()).sum()
    }
}

/// Top edge of the table on a page.
pub fn table_top_mm(is_first: bool) -> f32 {
    let reserved = if is_first { HEADER_BLOCK_MM } else { CONTINUATION_MM };
    PAGE_HEIGHT_MM - MARGIN_MM - reserved
}

/// Characters that fit on one line of a column `width_mm` wide.
pub fn max_chars(width_mm: f32) -> usize {
    let glyph_mm = BODY_FONT_PT * AVERAGE_GLYPH_EM * MM_PER_PT;
    (((width_mm - 2.0 * CELL_PADDING_MM) / glyph_mm).floor() as usize).max(1)
}

/// Greedy word wrap. Explicit newlines are kept, over-long words are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(word.drain(..max_chars).collect());
            }
            let word: String = word.into_iter().collect();
            if word.is_empty() {
                continue;
            }
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }
        lines.push(current);
    }
    lines
}

fn row_height(line_count: usize) -> f32 {
    line_count.max(1) as f32 * LINE_HEIGHT_MM + 2.0 * CELL_PADDING_MM
}

fn lay_out_row(columns: &[&str]) -> LaidOutRow {
    let cells: Vec<Vec<String>> = columns
        .iter()
        .zip(COLUMN_WIDTHS_MM)
        .map(|(text, width)| wrap_text(text, max_chars(width)))
        .collect();
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1);
    LaidOutRow { cells, height_mm: row_height(lines) }
}

/// Cut a row down to `available_mm`, marking clipped cells with an ellipsis.
fn clip_row(row: LaidOutRow, available_mm: f32) -> LaidOutRow {
    let max_lines =
        (((available_mm - 2.0 * CELL_PADDING_MM) / LINE_HEIGHT_MM).floor() as usize).max(1);
    let cells = row
        .cells
        .into_iter()
        .map(|mut lines| {
            if lines.len() > max_lines {
                lines.truncate(max_lines);
                if let Some(last) = lines.last_mut() {
                    last.pop();
                    last.push(ELLIPSIS);
                }
            }
            lines
        })
        .collect::<Vec<_>>();
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1);
    LaidOutRow { cells, height_mm: row_height(lines) }
}

fn page_capacity(is_first: bool, header_row: &LaidOutRow) -> f32 {
    table_top_mm(is_first) - TABLE_BOTTOM_MM - header_row.height_mm
}

/// Split the table into pages. Rows are never split across a page break; a row
/// taller than a whole page is clipped.
pub fn layout_table(table: &ExportTable) -> DocumentLayout {
    let header_row = lay_out_row(&ExportTable::headers());
    let mut pages = Vec::new();
    let mut current = LaidOutPage { is_first: true, rows: Vec::new() };
    let mut remaining = page_capacity(true, &header_row);

    for row in &table.rows {
        let mut laid_out = lay_out_row(&ExportRow::columns(row));
        if laid_out.height_mm > remaining && !current.rows.is_empty() {
            pages.push(std::mem::replace(
                &mut current,
                LaidOutPage { is_first: false, rows: Vec::new() },
            ));
            remaining = page_capacity(false, &header_row);
        }
        if laid_out.height_mm > remaining {
            laid_out = clip_row(laid_out, remaining);
        }
        remaining -= laid_out.height_mm;
        current.rows.push(laid_out);
    }
    pages.push(current);

    DocumentLayout { header_row, pages }
}
