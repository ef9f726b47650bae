// src/gui/components/action_buttons.rs

use eframe::egui::{self, Color32, RichText};

use crate::gui::{
    actions,
    app::{App, Dialog},
};

/// Refresh / Add / Remove row above the table.
pub fn draw_list_buttons(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("🔄 Refresh from README").clicked() {
            actions::load(app);
        }
        if ui.button("➕ Add Package").clicked() {
            app.dialog = Some(Dialog::Add { input: s!(), error: None });
        }
        if ui.button("🗑️ Remove Selected").clicked() {
            actions::confirm_remove(app);
        }
    });
}

/// Commit message field plus the git-facing buttons.
pub fn draw_git_bar(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Commit message:");
        let width = ui.available_width();
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.commit_message).desired_width(width));
    });

    ui.horizontal(|ui| {
        if ui.button("⬇️ Pull Latest").clicked() {
            actions::pull(app);
        }
        if ui.button("📝 Generate README").clicked() {
            actions::generate(app);
        }

        let orange = Color32::from_rgb(0xd9, 0x6c, 0x1f);
        let push = ui.add(
            egui::Button::new(RichText::new("🚀 Generate & Force Push").color(Color32::BLACK).strong())
                .fill(orange),
        );
        if push.on_hover_text("Always pushes with --force-with-lease").clicked() {
            actions::publish(app);
        }
    });
}
