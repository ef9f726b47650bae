// src/gui/components/dialogs.rs
//
// The one open dialog, if any. Each frame takes it out of `app`, draws it,
// and puts it back unless a button closed it. Actions may replace it
// (e.g. a rejected add reopens with the reason).

use eframe::egui::{self, Align2, Color32, Key, RichText};

use crate::gui::{
    actions,
    app::{App, Dialog},
};

enum Outcome {
    Keep(Dialog),
    Close,
    Add(String),
    Remove(String),
}

pub fn show(ctx: &egui::Context, app: &mut App) {
    let Some(dialog) = app.dialog.take() else { return };

    let outcome = match dialog {
        Dialog::Add { input, error } => add_dialog(ctx, input, error),
        Dialog::ConfirmRemove(name) => confirm_dialog(ctx, name),
        Dialog::Message { title, text, error } => message_dialog(ctx, title, text, error),
    };

    match outcome {
        Outcome::Keep(d) => app.dialog = Some(d),
        Outcome::Close => {}
        Outcome::Add(input) => actions::add(app, &input),
        Outcome::Remove(name) => actions::remove(app, &name),
    }
}

fn modal(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
}

fn add_dialog(ctx: &egui::Context, mut input: String, error: Option<String>) -> Outcome {
    let mut submit = false;
    let mut cancel = false;

    modal("Add Package").show(ctx, |ui| {
        ui.set_min_width(380.0);
        ui.label("Package name (lowercase):");
        let resp = ui.add(egui::TextEdit::singleline(&mut input).desired_width(360.0));
        if !resp.has_focus() && input.is_empty() {
            resp.request_focus();
        }
        if resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submit = true;
        }
        ui.label(RichText::new("Allowed: a-z, 0-9, underscore (_)").weak());

        if let Some(err) = &error {
            ui.colored_label(Color32::LIGHT_RED, err);
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Add").clicked() {
                submit = true;
            }
            if ui.button("Cancel").clicked() {
                cancel = true;
            }
        });
    });

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        cancel = true;
    }

    if cancel {
        Outcome::Close
    } else if submit {
        Outcome::Add(input)
    } else {
        Outcome::Keep(Dialog::Add { input, error })
    }
}

fn confirm_dialog(ctx: &egui::Context, name: String) -> Outcome {
    let mut answer = None;

    modal("Confirm").show(ctx, |ui| {
        ui.label(format!("Remove package '{name}'?"));
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Yes").clicked() {
                answer = Some(true);
            }
            if ui.button("No").clicked() {
                answer = Some(false);
            }
        });
    });

    match answer {
        Some(true) => Outcome::Remove(name),
        Some(false) => Outcome::Close,
        None => Outcome::Keep(Dialog::ConfirmRemove(name)),
    }
}

fn message_dialog(ctx: &egui::Context, title: String, text: String, error: bool) -> Outcome {
    let mut ok = false;

    modal(&title).show(ctx, |ui| {
        let body = RichText::new(&text);
        ui.label(if error { body.color(Color32::LIGHT_RED) } else { body });
        ui.add_space(6.0);
        if ui.button("OK").clicked() {
            ok = true;
        }
    });

    if ok {
        Outcome::Close
    } else {
        Outcome::Keep(Dialog::Message { title, text, error })
    }
}
