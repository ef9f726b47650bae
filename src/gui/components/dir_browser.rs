// src/gui/components/dir_browser.rs
//
// In-app directory picker: one level at a time, Up to go to the parent,
// click a folder to enter it, Select to use the current folder.

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::{
    file,
    gui::{actions, app::App},
};

pub struct DirBrowser {
    current: PathBuf,
    entries: Vec<PathBuf>,
    error: Option<String>,
}

impl DirBrowser {
    pub fn open(start: PathBuf) -> Self {
        let mut b = Self { current: start, entries: Vec::new(), error: None };
        b.refresh();
        b
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn enter(&mut self, dir: PathBuf) {
        self.current = dir;
        self.refresh();
    }

    pub fn up(&mut self) {
        if let Some(parent) = self.current.parent() {
            let parent = parent.to_path_buf();
            self.enter(parent);
        }
    }

    pub fn is_git_checkout(&self) -> bool {
        file::is_git_checkout(&self.current)
    }

    fn refresh(&mut self) {
        match file::list_subdirs(&self.current) {
            Ok(v) => {
                self.entries = v;
                self.error = None;
            }
            Err(e) => {
                logd!("Browse: {e}");
                self.entries.clear();
                self.error = Some(e.to_string());
            }
        }
    }
}

enum Choice {
    Up,
    Enter(PathBuf),
    Select,
    Cancel,
}

pub fn show(ctx: &egui::Context, app: &mut App) {
    let Some(browser) = app.browser.as_ref() else { return };
    let mut choice = None;

    egui::Window::new("Select repository folder")
        .collapsible(false)
        .resizable(true)
        .default_size([520.0, 420.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⬆ Up").clicked() {
                    choice = Some(Choice::Up);
                }
                ui.monospace(browser.current().display().to_string());
            });
            if browser.is_git_checkout() {
                ui.label(egui::RichText::new("✓ git repository").color(egui::Color32::LIGHT_GREEN));
            }
            if let Some(err) = &browser.error {
                ui.colored_label(egui::Color32::LIGHT_RED, err);
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("dir_browser_scroll")
                .max_height(300.0)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for dir in browser.entries() {
                        let name = dir
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| dir.display().to_string());
                        if ui.selectable_label(false, join!("📁 ", &name)).clicked() {
                            choice = Some(Choice::Enter(dir.clone()));
                        }
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Select").clicked() {
                    choice = Some(Choice::Select);
                }
                if ui.button("Cancel").clicked() {
                    choice = Some(Choice::Cancel);
                }
            });
        });

    match choice {
        Some(Choice::Up) => {
            if let Some(b) = app.browser.as_mut() {
                b.up();
            }
        }
        Some(Choice::Enter(dir)) => {
            if let Some(b) = app.browser.as_mut() {
                b.enter(dir);
            }
        }
        Some(Choice::Select) => {
            if let Some(b) = app.browser.take() {
                app.set_repo_path(b.current());
                app.log(&format!("📂 Repository: {}", b.current().display()));
                actions::load(app);
            }
        }
        Some(Choice::Cancel) => app.browser = None,
        None => {}
    }
}
