//! All-records table with per-row and select-all checkboxes.

use egui::{Align, Layout, RichText, TextStyle, Ui};
use egui_extras::{Column, TableBuilder};

use etq_state::AppState;

struct RowData {
    id: String,
    draw: String,
    equipament: String,
    sku: String,
    description: String,
    qte: String,
    selected: bool,
}

/// Render the visible rows; checkbox changes are applied to `state` after
/// the table closes so the snapshot the table renders stays consistent.
pub fn show(ui: &mut Ui, state: &mut AppState) {
    let rows: Vec<RowData> = state
        .visible_records()
        .iter()
        .map(|record| RowData {
            id: record.id.clone(),
            draw: record.draw.clone(),
            equipament: record.equipament.clone(),
            sku: record.sku.clone(),
            description: record.short_description(),
            qte: record.qte.clone(),
            selected: state.is_selected(&record.id),
        })
        .collect();
    let all_selected = state.is_all_visible_selected();

    let mut toggled: Option<String> = None;
    let mut toggle_all = false;

    let text_height = TextStyle::Body.resolve(ui.style()).size;
    ui.push_id("records_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::exact(24.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder().at_least(160.0))
            .column(Column::auto().at_least(60.0))
            .max_scroll_height(280.0)
            .header(text_height + 8.0, |mut header| {
                header.col(|ui| {
                    let mut checked = all_selected;
                    if ui.checkbox(&mut checked, "").changed() {
                        toggle_all = true;
                    }
                });
                for title in ["Desenho", "Equipamento", "SKU", "Descrição", "Quantidade"] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(text_height + 8.0, rows.len(), |mut row| {
                    let data = &rows[row.index()];
                    row.col(|ui| {
                        let mut checked = data.selected;
                        if ui.checkbox(&mut checked, "").changed() {
                            toggled = Some(data.id.clone());
                        }
                    });
                    row.col(|ui| {
                        ui.label(&data.draw);
                    });
                    row.col(|ui| {
                        ui.label(&data.equipament);
                    });
                    row.col(|ui| {
                        ui.label(&data.sku);
                    });
                    row.col(|ui| {
                        ui.label(&data.description);
                    });
                    row.col(|ui| {
                        ui.label(&data.qte);
                    });
                });
            });
    });

    if toggle_all {
        state.toggle_all_visible();
    }
    if let Some(id) = toggled {
        state.toggle(&id);
    }
}
