// src/gui/components/package_table.rs
//
// Package list: Package / Version / Source. Click a header to sort by it,
// click a row to select it (single selection).

use eframe::egui::{self, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::state::SortColumn,
    gui::{app::App, table_model},
};

const HEADERS: [(&str, SortColumn); 3] = [
    ("Package", SortColumn::Name),
    ("Version", SortColumn::Version),
    ("Source", SortColumn::Source),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label(format!("📦 Packages ({})", app.session.packages().len()));

    let gui = &app.state.gui;
    let rows: Vec<(String, String, String)> =
        table_model::sorted_rows(app.session.packages(), gui.sort_column, gui.sort_ascending)
            .into_iter()
            .map(|e| (e.name.clone(), e.version.clone(), e.source.to_string()))
            .collect();

    let mut clicked_header = None;
    let mut clicked_row = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .min_scrolled_height(0.0)
        .column(Column::initial(360.0).at_least(120.0).resizable(true).clip(true))
        .column(Column::initial(160.0).at_least(60.0).resizable(true))
        .column(Column::remainder().at_least(60.0))
        .header(24.0, |mut header| {
            for (title, col) in HEADERS {
                header.col(|ui| {
                    let text = table_model::header_label(title, col, gui.sort_column, gui.sort_ascending);
                    let resp = ui.add(
                        egui::Label::new(RichText::new(text).strong())
                            .selectable(false)
                            .sense(Sense::click()),
                    );
                    if resp.clicked() {
                        clicked_header = Some(col);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let (name, version, source) = &rows[row.index()];
                row.set_selected(app.selected.as_deref() == Some(name.as_str()));

                for cell in [name, version, source] {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.add(egui::Label::new(cell.as_str()).selectable(false));
                    });
                }
                if row.response().clicked() {
                    clicked_row = Some(name.clone());
                }
            });
        });

    if let Some(col) = clicked_header {
        app.state.gui.toggle_sort(col);
        logd!("UI: sort → {:?} asc={}", app.state.gui.sort_column, app.state.gui.sort_ascending);
    }
    if let Some(name) = clicked_row {
        app.selected = Some(name);
    }
}
