// src/gui/components/path_bar.rs
//
// Repository path field with Browse / Open folder. Editing the field only
// changes the text; it is applied when focus leaves or an action runs.

use eframe::egui;

use crate::{
    file,
    gui::{actions, app::App, components::dir_browser::DirBrowser},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut browse_clicked = false;
    let mut open_clicked = false;
    let mut reload = false;

    ui.horizontal(|ui| {
        ui.label("Repository:");
        let width = (ui.available_width() - 170.0).max(120.0);
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.repo_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(width),
        );
        if resp.lost_focus() {
            reload = ui.input(|i| i.key_pressed(egui::Key::Enter));
            app.sync_repo_path();
        }

        if ui.button("📂 Browse").clicked() {
            browse_clicked = true;
        }
        if ui.button("📁").on_hover_text("Open repository folder").clicked() {
            open_clicked = true;
        }
    });

    if browse_clicked {
        let start = file::nearest_existing_dir(std::path::Path::new(app.repo_path_text.trim()));
        app.browser = Some(DirBrowser::open(start));
    }
    if open_clicked {
        open_repo_folder(app);
    }
    if reload {
        actions::load(app);
    }
}

/// Open the repository in the system file explorer.
fn open_repo_folder(app: &mut App) {
    let folder = file::nearest_existing_dir(app.session.repo_path());

    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {e}");
            loge!("{msg}");
            app.log(&join!("❌ ", &msg));
            return;
        }
    };

    match open_folder_in_explorer(&absolute) {
        Ok(()) => logf!("Opened folder: {}", absolute.display()),
        Err(e) => {
            loge!("Failed to open folder: {e}");
            app.log(&format!("❌ Failed to open folder: {e}"));
        }
    }
}

fn open_folder_in_explorer(path: &std::path::Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(program)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|e| format!("Failed to spawn {program}: {e}"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}
