use crate::datatable::DomainTable;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

/// Print the first `limit` rows of the table to stdout, plus a count line.
pub fn display_preview(table: &DomainTable, limit: usize) {
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);

    out.set_header(
        DomainTable::COLUMNS
            .iter()
            .map(|name| Cell::new(name).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for row in table.to_string_rows().into_iter().take(limit) {
        out.add_row(row);
    }

    println!("{out}");
    println!(
        "{} of {} rows shown",
        limit.min(table.row_count()),
        table.row_count()
    );
}
