mod table;
mod units;

pub use table::{Align, Table};
pub use units::{with_units, HEADERS, UNITS};

use crate::parser::MergedRecord;

/// Render rows as the final report: table, blank line, entry count, blank line.
pub fn render_report(rows: &[MergedRecord]) -> String {
    let mut table = Table::new(&HEADERS);
    table.set_align(&[Align::Right; 4]);
    for row in rows {
        table.add_row(&with_units(row));
    }
    format!("{}\n\n{} entries total.\n\n", table.draw(), table.len())
}
