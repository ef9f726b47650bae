// src/gui/actions/packages.rs
use crate::{
    error::{Error, ValidationError},
    gui::app::{App, Dialog},
};

/// Submit the add dialog. On rejection the dialog stays open with the reason.
pub fn add(app: &mut App, input: &str) {
    let (session, mut prog) = app.session_and_progress();
    match session.add_package(input, &mut prog) {
        Ok(name) => {
            logf!("UI: added {name}");
            app.selected = Some(name);
            app.dialog = None;
        }
        Err(Error::Validation(v)) => {
            logd!("UI: add rejected: {v}");
            app.dialog = Some(Dialog::Add { input: s!(input), error: Some(v.to_string()) });
        }
        Err(e) => app.show_error("Error", e.to_string()),
    }
}

/// Ask before removing the selected row.
pub fn confirm_remove(app: &mut App) {
    match app.selected.clone() {
        Some(name) => app.dialog = Some(Dialog::ConfirmRemove(name)),
        None => app.show_error("No Selection", ValidationError::NoSelection.to_string()),
    }
}

pub fn remove(app: &mut App, name: &str) {
    let (session, mut prog) = app.session_and_progress();
    match session.remove_package(Some(name), &mut prog) {
        Ok(()) => {
            if app.selected.as_deref() == Some(name) {
                app.selected = None;
            }
        }
        Err(e) => app.show_error("Error", e.to_string()),
    }
}
