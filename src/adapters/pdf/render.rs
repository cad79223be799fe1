//! Drawing of a laid-out table with printpdf.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use super::layout::{
    CELL_PADDING_MM, COLUMN_WIDTHS_MM, DocumentLayout, LINE_HEIGHT_MM, LaidOutPage, LaidOutRow,
    MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, SIGNATURE_BOTTOM_MM, SIGNATURE_HEIGHT_MM,
    SIGNATURE_WIDTH_MM, table_top_mm,
};
use crate::domain::{AppError, ExportConfig, ExportTable};

const TITLE_FONT_PT: f32 = 14.0;
const HEADER_FONT_PT: f32 = 8.0;
const CONTINUATION_FONT_PT: f32 = 9.0;
const TABLE_FONT_PT: f32 = super::layout::BODY_FONT_PT;
const FOOTER_FONT_PT: f32 = 7.0;
const FOOTER_BASELINE_MM: f32 = 8.0;
const LAYER_NAME: &str = "Planning";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weight {
    Regular,
    Bold,
}

/// Drawing surface of one page, in millimetres from the bottom-left corner.
trait Canvas {
    fn text(&mut self, content: &str, size: f32, x: f32, y: f32, weight: Weight);
    fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32);
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Embedded fonts draw any glyph; built-in ones only WinAnsi.
    embedded: bool,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference, config: &ExportConfig) -> Result<Self, AppError> {
        let Some(regular_path) = &config.font_file else {
            return Ok(Self {
                regular: builtin_font(doc, BuiltinFont::Helvetica)?,
                bold: builtin_font(doc, BuiltinFont::HelveticaBold)?,
                embedded: false,
            });
        };
        let regular = external_font(doc, regular_path)?;
        let bold = match &config.bold_font_file {
            Some(bold_path) => external_font(doc, bold_path)?,
            None => regular.clone(),
        };
        Ok(Self { regular, bold, embedded: true })
    }
}

struct PdfCanvas<'a> {
    layer: PdfLayerReference,
    fonts: &'a Fonts,
}

impl Canvas for PdfCanvas<'_> {
    fn text(&mut self, content: &str, size: f32, x: f32, y: f32, weight: Weight) {
        let font = match weight {
            Weight::Regular => &self.fonts.regular,
            Weight::Bold => &self.fonts.bold,
        };
        let content = if self.fonts.embedded { content.to_string() } else { sanitize(content) };
        self.layer.use_text(content, size, Mm(x), Mm(y), font);
    }

    fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let corners = [(x, y), (x + width, y), (x + width, y + height), (x, y + height)];
        self.layer.add_line(Line {
            points: corners.iter().map(|(x, y)| (Point::new(Mm(*x), Mm(*y)), false)).collect(),
            is_closed: true,
        });
    }
}

/// Render the table into PDF bytes.
///
/// `should_stop` is polled between pages; a `true` aborts with
/// [`AppError::ExportCancelled`] and nothing is returned.
pub fn render_pdf(
    table: &ExportTable,
    layout: &DocumentLayout,
    config: &ExportConfig,
    should_stop: &dyn Fn() -> bool,
) -> Result<Vec<u8>, AppError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(&table.title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
    let fonts = Fonts::load(&doc, config)?;

    let total = layout.page_count();
    for (index, page) in layout.pages.iter().enumerate() {
        if should_stop() {
            return Err(AppError::ExportCancelled);
        }

        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };
        layer.set_outline_thickness(0.3);
        layer.set_outline_color(Color::Rgb(Rgb::new(0.35, 0.35, 0.35, None)));

        let mut canvas = PdfCanvas { layer, fonts: &fonts };
        draw_page(&mut canvas, table, layout, page, index + 1, total, config);
    }

    doc.save_to_bytes().map_err(|e| AppError::Export(e.to_string()))
}

/// Everything one page shows: heading, table slice, signature block, footer.
fn draw_page(
    canvas: &mut dyn Canvas,
    table: &ExportTable,
    layout: &DocumentLayout,
    page: &LaidOutPage,
    number: usize,
    total: usize,
    config: &ExportConfig,
) {
    if page.is_first {
        draw_header_block(canvas, table);
    } else {
        let title = format!("{} (suite)", table.title);
        let y = PAGE_HEIGHT_MM - MARGIN_MM - 5.0;
        canvas.text(&title, CONTINUATION_FONT_PT, MARGIN_MM, y, Weight::Bold);
    }

    let mut top = table_top_mm(page.is_first);
    draw_row(canvas, &layout.header_row, top, Weight::Bold);
    top -= layout.header_row.height_mm;
    for row in &page.rows {
        draw_row(canvas, row, top, Weight::Regular);
        top -= row.height_mm;
    }

    draw_signature_block(canvas, config);
    draw_footer(canvas, config, table, number, total);
}

fn builtin_font(
    doc: &PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, AppError> {
    doc.add_builtin_font(font).map_err(|e| AppError::Export(format!("font: {}", e)))
}

fn external_font(doc: &PdfDocumentReference, path: &Path) -> Result<IndirectFontRef, AppError> {
    let font_error = |detail: String| {
        AppError::Export(format!("font {}: {}", path.display(), detail))
    };
    let file = File::open(path).map_err(|e| font_error(e.to_string()))?;
    doc.add_external_font(BufReader::new(file)).map_err(|e| font_error(e.to_string()))
}

/// Built-in fonts only cover WinAnsi; swap the few glyphs outside it.
fn sanitize(text: &str) -> String {
    text.replace('→', "->").replace('…', "...")
}

fn draw_header_block(canvas: &mut dyn Canvas, table: &ExportTable) {
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM - 6.0;
    canvas.text(&table.title, TITLE_FONT_PT, MARGIN_MM, y, Weight::Bold);
    y -= 7.0;
    for line in table.header_lines() {
        canvas.text(&line, HEADER_FONT_PT, MARGIN_MM, y, Weight::Regular);
        y -= 4.0;
    }
}

fn draw_row(canvas: &mut dyn Canvas, row: &LaidOutRow, top: f32, weight: Weight) {
    let bottom = top - row.height_mm;
    let mut x = MARGIN_MM;
    for (lines, width) in row.cells.iter().zip(COLUMN_WIDTHS_MM) {
        canvas.rectangle(x, bottom, width, row.height_mm);
        for (line_index, line) in lines.iter().enumerate() {
            let baseline =
                top - CELL_PADDING_MM - LINE_HEIGHT_MM * (line_index as f32 + 1.0) + 0.8;
            canvas.text(line, TABLE_FONT_PT, x + CELL_PADDING_MM, baseline, weight);
        }
        x += width;
    }
}

fn draw_signature_block(canvas: &mut dyn Canvas, config: &ExportConfig) {
    let x = PAGE_WIDTH_MM - MARGIN_MM - SIGNATURE_WIDTH_MM;
    let top = SIGNATURE_BOTTOM_MM + SIGNATURE_HEIGHT_MM;
    canvas.rectangle(x, SIGNATURE_BOTTOM_MM, SIGNATURE_WIDTH_MM, SIGNATURE_HEIGHT_MM);
    let x = x + 3.0;
    canvas.text(&config.signature_title, HEADER_FONT_PT, x, top - 5.0, Weight::Bold);
    canvas.text("Date : ____________________", HEADER_FONT_PT, x, top - 13.0, Weight::Regular);
    canvas.text("Signature :", HEADER_FONT_PT, x, top - 20.0, Weight::Regular);
}

fn draw_footer(
    canvas: &mut dyn Canvas,
    config: &ExportConfig,
    table: &ExportTable,
    number: usize,
    total: usize,
) {
    let y = FOOTER_BASELINE_MM;
    canvas.text(&config.institution, FOOTER_FONT_PT, MARGIN_MM, y, Weight::Regular);
    let counter = page_label(number, total);
    canvas.text(&counter, FOOTER_FONT_PT, PAGE_WIDTH_MM / 2.0 - 8.0, y, Weight::Regular);
    let stamp_x = PAGE_WIDTH_MM - MARGIN_MM - 50.0;
    canvas.text(&table.generated_label(), FOOTER_FONT_PT, stamp_x, y, Weight::Regular);
}

/// Footer page counter, numbered from 1.
pub fn page_label(number: usize, total: usize) -> String {
    format!("Page {} sur {}", number, total)
}
