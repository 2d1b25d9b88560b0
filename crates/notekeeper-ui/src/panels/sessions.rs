//! Sessions view: list cards, the new-session control and whichever
//! editor is open.

use egui::{self, Align, Color32, Layout, RichText};
use notekeeper_core::editor::SessionEditor;
use notekeeper_types::npc::format_timestamp;
use notekeeper_types::session::{Session, SessionType};
use crate::panels::{freeform, structured, EditorAction};
use crate::state::{Action, PendingDelete, UiState};
use crate::theme::*;

const STRUCTURED_BADGE: Color32 = Color32::from_rgb(37, 99, 235);
const FREE_FORM_BADGE: Color32 = Color32::from_rgb(22, 163, 74);

/// Render the sessions view. Returns a backend operation when one was requested.
pub fn sessions_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<Action> {
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Game Sessions").color(TEXT_PRIMARY).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.add(action_button("New Session", SUCCESS)).clicked() {
                state.new_session();
            }
            egui::ComboBox::from_id_salt("new_session_type")
                .selected_text(type_option(state.new_session_type))
                .show_ui(ui, |ui| {
                    for kind in SessionType::all() {
                        ui.selectable_value(&mut state.new_session_type, *kind, type_option(*kind));
                    }
                });
        });
    });
    ui.separator();

    if state.editor.is_some() {
        return editor_view(ui, state);
    }

    let mut open: Option<String> = None;
    let mut delete: Option<PendingDelete> = None;
    for session in &state.sessions {
        match session_card(ui, session) {
            CardAction::Edit => open = Some(session.id.clone()),
            CardAction::Delete => {
                delete = Some(PendingDelete::Session {
                    id: session.id.clone(),
                    title: session.title.clone(),
                })
            }
            CardAction::None => {}
        }
    }
    if let Some(id) = open {
        state.open_session(&id);
    }
    if let Some(pending) = delete {
        state.request_delete(pending);
    }
    None
}

fn type_option(kind: SessionType) -> String {
    let icon = match kind {
        SessionType::Structured => "📋",
        SessionType::FreeForm => "📝",
    };
    format!("{} {}", icon, kind.label())
}

fn editor_view(ui: &mut egui::Ui, state: &mut UiState) -> Option<Action> {
    let editor_action = match state.editor.as_mut()? {
        SessionEditor::Structured(editor) => structured::structured_editor(ui, editor),
        SessionEditor::FreeForm(editor) => freeform::freeform_editor(ui, editor),
    };

    match editor_action {
        EditorAction::None => None,
        EditorAction::Save => state.save_editor(),
        EditorAction::Cancel => {
            state.close_editor();
            None
        }
        EditorAction::Export => {
            let editor = state.editor.as_ref()?;
            Some(Action::ExportSession {
                session_id: editor.session_id()?.to_string(),
                title: editor.title().to_string(),
            })
        }
        EditorAction::Extract(req) => Some(Action::ExtractNpc(req)),
        EditorAction::Suggest(text) => Some(Action::SuggestNpcs { text }),
    }
}

enum CardAction {
    None,
    Edit,
    Delete,
}

fn session_card(ui: &mut egui::Ui, session: &Session) -> CardAction {
    let mut action = CardAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(CARD_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&session.title).color(TEXT_PRIMARY).strong().size(16.0));
                    ui.horizontal(|ui| {
                        let (icon, fill) = match session.session_type {
                            SessionType::Structured => ("📋", STRUCTURED_BADGE),
                            SessionType::FreeForm => ("📝", FREE_FORM_BADGE),
                        };
                        badge(ui, &format!("{} {}", icon, session.session_type.badge()), fill);
                        if let Some(number) = session.session_number() {
                            badge(ui, &format!("Session #{}", number), BG_INPUT);
                        }
                    });
                });
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    if ui.add(action_button("Delete", ERROR).small()).clicked() {
                        action = CardAction::Delete;
                    }
                    if ui.add(action_button("Edit", ACCENT).small()).clicked() {
                        action = CardAction::Edit;
                    }
                });
            });

            ui.label(RichText::new(dates_line(session)).color(TEXT_SECONDARY).small());

            if session.structured_data.is_some() {
                if let Some(goal) = session.goal_preview() {
                    ui.label(RichText::new("Goal:").color(TEXT_SECONDARY).small());
                    ui.label(RichText::new(goal).color(TEXT_PRIMARY).small());
                }
                if let Some(players) = session.players_line() {
                    ui.label(RichText::new("Players:").color(TEXT_SECONDARY).small());
                    ui.label(RichText::new(players).color(TEXT_PRIMARY).small());
                }
            } else if let Some(preview) = session.content_preview() {
                egui::Frame::default()
                    .fill(BG_SURFACE)
                    .inner_margin(8.0)
                    .corner_radius(PANEL_ROUNDING)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(preview).color(TEXT_PRIMARY));
                    });
            }
        });
    ui.add_space(8.0);

    action
}

fn badge(ui: &mut egui::Ui, text: &str, fill: Color32) {
    egui::Frame::default()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(TEXT_PRIMARY).small());
        });
}

fn dates_line(session: &Session) -> String {
    let mut line = format!("Created: {}", format_timestamp(&session.created_at));
    if let Some(date) = session.structured_data.as_ref().and_then(|d| d.session_date.as_ref()) {
        line.push_str(&format!(" • Session Date: {}", date));
    }
    line
}
