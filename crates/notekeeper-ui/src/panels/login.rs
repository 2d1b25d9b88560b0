//! Login panel: username and password checked against the backend.

use egui::{self, Align, Layout, RichText, Vec2};
use notekeeper_core::auth::LoginForm;
use crate::state::Action;
use crate::theme::*;

/// Render the login form. Returns `Action::Login` when submitted.
pub fn login_panel(ui: &mut egui::Ui, form: &mut LoginForm) -> Option<Action> {
    let mut submitted = false;

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(ui.available_height() * 0.2);
        egui::Frame::default()
            .fill(BG_SECONDARY)
            .inner_margin(24.0)
            .corner_radius(PANEL_ROUNDING)
            .show(ui, |ui| {
                ui.set_width(320.0);
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("D&D Note Keeper").color(TEXT_PRIMARY).strong());
                });
                ui.add_space(12.0);

                field_label(ui, "Username");
                ui.add(
                    egui::TextEdit::singleline(&mut form.username)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(6.0);

                field_label(ui, "Password");
                let password = ui.add(
                    egui::TextEdit::singleline(&mut form.password)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }

                if let Some(error) = &form.error {
                    ui.add_space(4.0);
                    ui.label(RichText::new(error).color(ERROR).small());
                }

                ui.add_space(12.0);
                let login = ui.add(
                    action_button("Login", ACCENT).min_size(Vec2::new(ui.available_width(), 30.0)),
                );
                if login.clicked() {
                    submitted = true;
                }
            });
    });

    if submitted {
        log::debug!("Login submitted for {}", form.username);
        Some(Action::Login(form.credentials()))
    } else {
        None
    }
}
