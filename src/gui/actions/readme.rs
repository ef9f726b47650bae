// src/gui/actions/readme.rs
use crate::gui::app::App;

/// Reload the list from README.md. A missing README clears nothing.
pub fn load(app: &mut App) {
    app.sync_repo_path();
    let (session, mut prog) = app.session_and_progress();
    match session.load_from_readme(&mut prog) {
        Ok(n) => {
            logf!("Load: {n} package(s)");
            app.selected = app.selected.take().filter(|s| app.session.contains(s));
        }
        Err(e) => loge!("Load: {e}"),
    }
}

pub fn generate(app: &mut App) {
    app.sync_repo_path();
    let (session, mut prog) = app.session_and_progress();
    if let Err(e) = session.generate_readme(&mut prog) {
        loge!("Generate: {e}");
        app.show_error("Error", format!("Failed to generate README:\n{e}"));
    }
}
