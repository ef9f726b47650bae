// src/gui/app.rs
use std::{
    error::Error,
    path::{Path, PathBuf},
};

use eframe::egui::{self, Color32, Visuals};

use crate::{
    config::{
        consts::{DEBUG_LOG_FILE, STORE_DIR},
        state::AppState,
    },
    file,
    session::Session,
};

use super::{
    actions,
    components::{self, dir_browser::DirBrowser},
    progress::{GuiProgress, stamp},
};

const TITLE: &str = "📦 GLLB-Apps Package Manager";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    crate::log::init(&Path::new(STORE_DIR).join(DEBUG_LOG_FILE), false);

    let mut state = AppState::default();
    state.options.readme.repo_path = file::find_repo_path();

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx);
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

/// Window title and initial size for the native viewport.
pub fn native_options(state: &AppState) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    }
}

fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    let bg = Color32::from_rgb(0x1e, 0x1e, 0x1e);
    visuals.panel_fill = bg;
    visuals.window_fill = Color32::from_rgb(0x25, 0x25, 0x26);
    visuals.extreme_bg_color = Color32::from_rgb(0x2d, 0x2d, 0x30);
    ctx.set_visuals(visuals);
}

/// Modal overlays. Only one is open at a time.
pub enum Dialog {
    Add { input: String, error: Option<String> },
    ConfirmRemove(String),
    Message { title: String, text: String, error: bool },
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub session: Session,

    // repo path text field; applied to the session before each action
    pub repo_path_text: String,
    pub browser: Option<DirBrowser>,

    pub selected: Option<String>,
    pub dialog: Option<Dialog>,

    // log panel lines, already timestamped
    pub log_lines: Vec<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let repo = state.options.readme.repo_path.clone();
        let mut app = Self {
            session: Session::new(&repo),
            repo_path_text: repo.to_string_lossy().into_owned(),
            browser: None,
            selected: None,
            dialog: None,
            log_lines: Vec::new(),
            state,
        };

        logf!("Init: repo={}", repo.display());
        app.log(&format!("📂 Repository: {}", repo.display()));
        actions::load(&mut app);
        app
    }

    pub fn log(&mut self, msg: &str) {
        self.log_lines.push(stamp(msg));
    }

    /// Borrow the session and a progress sink writing to the log panel.
    pub fn session_and_progress(&mut self) -> (&mut Session, GuiProgress<'_>) {
        (&mut self.session, GuiProgress::new(&mut self.log_lines))
    }

    /// Push the text field into options and session.
    pub fn sync_repo_path(&mut self) {
        let path = PathBuf::from(self.repo_path_text.trim());
        if path != self.session.repo_path() {
            logf!("UI: repo path → {}", path.display());
            self.session.set_repo_path(&path);
            self.state.options.readme.repo_path = path;
        }
    }

    pub fn set_repo_path(&mut self, path: &Path) {
        self.repo_path_text = path.to_string_lossy().into_owned();
        self.sync_repo_path();
    }

    pub fn show_error(&mut self, title: &str, text: impl Into<String>) {
        self.dialog = Some(Dialog::Message { title: s!(title), text: text.into(), error: true });
    }

    pub fn show_info(&mut self, title: &str, text: impl Into<String>) {
        self.dialog = Some(Dialog::Message { title: s!(title), text: text.into(), error: false });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("repo")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.heading(TITLE);
                ui.add_space(4.0);
                components::path_bar::draw(ui, self);
                ui.add_space(4.0);
            });

        egui::TopBottomPanel::bottom("log")
            .resizable(true)
            .default_height(200.0)
            .show(ctx, |ui| {
                components::log_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_buttons::draw_list_buttons(ui, self);
            ui.separator();
            components::action_buttons::draw_git_bar(ui, self);
            ui.separator();
            components::package_table::draw(ui, self);
        });

        components::dir_browser::show(ctx, self);
        components::dialogs::show(ctx, self);
    }
}
