//! Plain-text rendering of the weekly grid.

use crate::app::api::GridView;
use crate::domain::DayOfWeek;

const ID_WIDTH: usize = 8;
const NAME_WIDTH: usize = 22;
const POSTE_WIDTH: usize = 14;
const DAY_WIDTH: usize = 22;
const EMPTY_CELL: &str = "·";

pub fn render_grid(view: &GridView) -> String {
    let mut out = String::new();
    out.push_str(&format!("Filtres : {}\n", view.filter_summary));
    if !view.postes.is_empty() {
        out.push_str(&format!("Postes : {}\n", view.postes.join(", ")));
    }
    out.push('\n');

    let mut header = format!(
        "{:<id$} {:<name$} {:<poste$}",
        "ID",
        "Personnel",
        "Poste",
        id = ID_WIDTH,
        name = NAME_WIDTH,
        poste = POSTE_WIDTH
    );
    for day in DayOfWeek::ALL {
        header.push_str(&format!(" {:<width$}", day.label(), width = DAY_WIDTH));
    }
    header.push_str(" Total");
    out.push_str(header.trim_end());
    out.push('\n');

    if view.rows.is_empty() {
        out.push_str("Aucun personnel trouvé\n");
        return out;
    }

    for row in &view.rows {
        let mut line = format!(
            "{:<id$} {:<name$} {:<poste$}",
            clip(&row.personnel_id, ID_WIDTH),
            clip(&row.name, NAME_WIDTH),
            clip(&row.poste, POSTE_WIDTH),
            id = ID_WIDTH,
            name = NAME_WIDTH,
            poste = POSTE_WIDTH
        );
        for cell in &row.cells {
            let cell = if cell.is_empty() { EMPTY_CELL } else { cell.as_str() };
            line.push_str(&format!(" {:<width$}", clip(cell, DAY_WIDTH), width = DAY_WIDTH));
        }
        line.push_str(&format!(" {}h", row.weekly_hours));
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
