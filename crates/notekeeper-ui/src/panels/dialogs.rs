//! Blocking confirm and alert dialogs.

use egui::{self, Align2, RichText};
use crate::state::{Action, UiState};
use crate::theme::*;

/// Delete confirmation. Returns the delete call once the user agrees;
/// declining issues nothing.
pub fn confirm_dialog(ctx: &egui::Context, state: &mut UiState) -> Option<Action> {
    let prompt = state.pending_delete.as_ref()?.prompt();
    let mut confirmed = false;
    let mut declined = false;

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(prompt).color(TEXT_PRIMARY));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add(action_button("OK", ERROR)).clicked() {
                    confirmed = true;
                }
                if ui.add(action_button("Cancel", BG_SURFACE)).clicked() {
                    declined = true;
                }
            });
        });

    if confirmed {
        state.confirm_delete()
    } else {
        if declined {
            state.cancel_delete();
        }
        None
    }
}

pub fn alert_dialog(ctx: &egui::Context, state: &mut UiState) {
    let Some(message) = state.alert.clone() else {
        return;
    };
    let mut dismissed = false;

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(message).color(TEXT_PRIMARY));
            ui.add_space(8.0);
            if ui.add(action_button("OK", ACCENT)).clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        state.dismiss_alert();
    }
}
