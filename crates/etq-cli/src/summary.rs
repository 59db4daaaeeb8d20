use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::types::{CheckReport, PrintReport};

/// Print the `check` summary: one row per record plus totals.
pub fn print_check_summary(report: &CheckReport) {
    println!("File: {}", report.csv_file.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Desenho"),
        header_cell("Equipamento"),
        header_cell("SKU"),
        header_cell("Descrição"),
        header_cell("Qte"),
        header_cell("Fornecedor"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);

    for record in &report.records {
        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(&record.draw),
            Cell::new(&record.equipament),
            Cell::new(&record.sku),
            Cell::new(record.short_description()),
            Cell::new(&record.qte),
            Cell::new(&record.supplier),
        ]);
    }
    println!("{table}");
    println!(
        "{} records, {} labels, {} suppliers",
        report.records.len(),
        report.total_labels,
        report.suppliers
    );
}

/// Print the `print` summary line.
pub fn print_print_summary(report: &PrintReport) {
    println!(
        "Wrote {} label blocks for {} records to {}",
        report.blocks,
        report.selected,
        report.out.display()
    );
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
