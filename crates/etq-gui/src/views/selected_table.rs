//! Selected-records table, read-only, in canonical order.

use egui::{Align, Layout, RichText, TextStyle, Ui};
use egui_extras::{Column, TableBuilder};

use etq_state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    let rows: Vec<[String; 5]> = state
        .selected_records()
        .iter()
        .map(|record| {
            [
                record.draw.clone(),
                record.equipament.clone(),
                record.sku.clone(),
                record.short_description(),
                record.qte.clone(),
            ]
        })
        .collect();

    let text_height = TextStyle::Body.resolve(ui.style()).size;
    ui.push_id("selected_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder().at_least(160.0))
            .column(Column::auto().at_least(60.0))
            .max_scroll_height(220.0)
            .header(text_height + 8.0, |mut header| {
                for title in ["Desenho", "Equipamento", "SKU", "Descrição", "Quantidade"] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(text_height + 8.0, rows.len(), |mut row| {
                    let data = &rows[row.index()];
                    for value in data {
                        row.col(|ui| {
                            ui.label(value);
                        });
                    }
                });
            });
    });
}
