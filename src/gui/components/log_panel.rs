// src/gui/components/log_panel.rs

use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("📋 Log").strong());
        if ui.small_button("Clear").clicked() {
            app.log_lines.clear();
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("log_scroll")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for line in &app.log_lines {
                ui.label(RichText::new(line).monospace());
            }
        });
}
