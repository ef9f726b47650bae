// src/gui/actions/git.rs
use crate::{
    config::options::GitOptions,
    error::Error,
    gui::app::App,
};

pub fn pull(app: &mut App) {
    app.sync_repo_path();
    let (session, mut prog) = app.session_and_progress();
    match session.pull(&mut prog) {
        Ok(_) => {
            app.selected = app.selected.take().filter(|s| app.session.contains(s));
        }
        Err(Error::Git { stderr, .. }) => {
            let text = if stderr.is_empty() { s!("Unknown git error") } else { stderr };
            app.show_error("Git Error", text);
        }
        Err(e) => app.show_error("Error", format!("Failed to pull:\n{e}")),
    }
}

/// Generate, commit with the message field (default when blank), force push.
pub fn publish(app: &mut App) {
    app.sync_repo_path();
    let message = GitOptions::message_or_default(&app.state.gui.commit_message);
    logf!("Publish: begin message={message:?}");

    let (session, mut prog) = app.session_and_progress();
    match session.publish(&message, &mut prog) {
        Ok(_) => {
            logf!("Publish: OK");
            app.show_info("Success", "Force push completed successfully! 🎉");
        }
        Err(Error::Git { command, stderr, .. }) if command.starts_with("git add") => {
            app.show_error("Error", format!("git add failed:\n{stderr}"));
        }
        Err(Error::Git { stderr, .. }) => {
            let text = if stderr.is_empty() { s!("Force push failed") } else { stderr };
            app.show_error("Error", text);
        }
        Err(e) => app.show_error("Error", e.to_string()),
    }
}
