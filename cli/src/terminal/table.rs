//! Grid tables for section records, rendered by `comfy_table`.

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

pub const STATE_UP: Color = Color::Green;
pub const STATE_DOWN: Color = Color::Red;
pub const ADDRESS: Color = Color::Yellow;
pub const NETWORK: Color = Color::Green;

/// An empty table with bold headers.
pub fn grid(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|header| Cell::new(header).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

/// Cell contents of every body row, without styling.
#[cfg(test)]
pub fn contents(table: &Table) -> Vec<Vec<String>> {
    table
        .row_iter()
        .map(|row| row.cell_iter().map(Cell::content).collect())
        .collect()
}
