use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lead_map::KeywordTable;
use lead_model::{Role, RoleMap};

use crate::commands::CleanOutcome;

/// Widest preview cell before truncation.
const PREVIEW_CELL_WIDTH: usize = 32;

pub fn print_summary(outcome: &CleanOutcome) {
    let summary = &outcome.result.summary;
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if let Some(path) = &outcome.report {
        println!("Report: {}", path.display());
    }

    print_role_table(&outcome.result.roles, &[]);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Step"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input rows"), Cell::new(summary.input_rows)]);
    table.add_row(vec![
        Cell::new("Dropped: blank address"),
        count_cell(summary.dropped_blank_address, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: duplicate"),
        count_cell(summary.dropped_duplicates, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Output rows")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !summary.dedupe_applied {
        println!("No address, city, state or zip column found; deduplication skipped.");
    }
    if summary.name_split {
        println!("Full name column split into First Name and Last Name.");
    }
    if !summary.unmapped_columns.is_empty() {
        println!("Unmapped columns: {}", summary.unmapped_columns.join(", "));
    }
}

/// Detected columns per role. With `headers`, unmapped headers are listed too.
pub fn print_role_table(roles: &RoleMap, headers: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Column")]);
    apply_table_style(&mut table);
    for role in Role::ALL {
        let column = match roles.header(role) {
            Some(header) => Cell::new(header).fg(Color::Green),
            None => Cell::new("-").fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(role.label()), column]);
    }
    for header in roles.unmapped_headers(headers) {
        table.add_row(vec![
            Cell::new("(unmapped)").fg(Color::DarkGrey),
            Cell::new(header),
        ]);
    }
    println!("{table}");
}

pub fn print_preview(source: &lead_model::Table, rows: usize) {
    if rows == 0 || source.row_count() == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(
        source
            .headers()
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in source.rows().iter().take(rows) {
        table.add_row(
            row.cells()
                .iter()
                .map(|cell| Cell::new(truncate(cell.as_deref().unwrap_or_default())))
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
}

pub fn print_keyword_table(keywords: &KeywordTable) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Header keywords")]);
    apply_table_style(&mut table);
    for entry in keywords.entries() {
        table.add_row(vec![
            Cell::new(entry.role.label()).add_attribute(Attribute::Bold),
            Cell::new(entry.keywords.join(", ")),
        ]);
    }
    println!("{table}");
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= PREVIEW_CELL_WIDTH {
        return value.to_string();
    }
    let mut out: String = value.chars().take(PREVIEW_CELL_WIDTH - 1).collect();
    out.push('…');
    out
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
