//! Table output for schedule listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use anesth_model::{DoctolibLinks, ScheduleDate, ScheduleIndex};

/// One table of every assignment, chronological, optionally for one date.
///
/// Within a day, rows keep the order the surgeons appeared in the CSV.
pub fn schedule_table(
    index: &ScheduleIndex,
    only: Option<&ScheduleDate>,
    links: &DoctolibLinks,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Chirurgien"),
        header_cell("Anesthésiste"),
        header_cell("Doctolib"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);

    let days = index
        .iter()
        .filter(|(date, _)| only.is_none_or(|wanted| *date == wanted));
    for (date, day) in days {
        if day.is_empty() {
            table.add_row(vec![
                Cell::new(date),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
            continue;
        }
        for (surgeon, anesth) in day.iter() {
            let linked = if links.get(anesth).is_some() {
                Cell::new("✓").fg(Color::Green)
            } else {
                dim_cell("-")
            };
            table.add_row(vec![
                Cell::new(date),
                Cell::new(surgeon),
                Cell::new(anesth),
                linked,
            ]);
        }
    }
    table
}

/// Surgeon names in display order, one per line.
pub fn surgeon_lines(names: &[&str]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
