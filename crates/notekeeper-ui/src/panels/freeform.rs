//! Free-form session editor: formatting toolbar, notes buffer and the
//! NPC extraction panel.

use egui::{self, RichText};
use notekeeper_core::editor::FreeFormEditor;
use crate::panels::formatted::formatted_text;
use crate::panels::EditorAction;
use crate::theme::*;

const NOTES_HINT: &str = "Take your D&D session notes here... Select text and use the formatting \
                          buttons above, or highlight NPCs for extraction.";

/// Render the free-form editor. Returns an action for the caller to handle.
pub fn freeform_editor(ui: &mut egui::Ui, editor: &mut FreeFormEditor) -> EditorAction {
    let mut action = EditorAction::None;

    field_label(ui, "Session Title");
    ui.add(
        egui::TextEdit::singleline(&mut editor.title)
            .hint_text("Enter session title...")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    field_label(ui, "Session Notes");
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            let output = formatted_text(ui, &mut editor.content, &mut editor.selection, NOTES_HINT, 14);
            if let Some(text) = output.captured {
                editor.show_extraction(text);
            }
        });

    if editor.extraction.is_some() {
        ui.add_space(8.0);
        if let Some(next) = extraction_panel(ui, editor) {
            action = next;
        }
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.add(action_button("Save Session", SUCCESS)).clicked() {
            action = EditorAction::Save;
        }
        if ui.add(action_button("Cancel", BG_SURFACE)).clicked() {
            action = EditorAction::Cancel;
        }
    });

    action
}

fn extraction_panel(ui: &mut egui::Ui, editor: &mut FreeFormEditor) -> Option<EditorAction> {
    let mut action = None;
    let mut cancel = false;
    let mut picked: Option<String> = None;
    let content = editor.content.clone();
    let ready = editor.extraction_request();

    let panel = editor.extraction.as_mut()?;
    egui::Frame::default()
        .fill(EXTRACT_BG)
        .inner_margin(CARD_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Extract NPC").color(EXTRACT_FG).strong());
            ui.label(
                RichText::new(format!("Selected text: \"{}\"", panel.selected_text))
                    .color(EXTRACT_FG)
                    .small(),
            );
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut panel.npc_name)
                        .hint_text("Enter NPC name...")
                        .desired_width(220.0),
                );
                let extract = ui.add_enabled(ready.is_some(), action_button("Extract NPC", ACCENT));
                if extract.clicked() {
                    action = ready.clone().map(EditorAction::Extract);
                }
                if ui.add(action_button("Cancel", BG_SURFACE)).clicked() {
                    cancel = true;
                }
                if ui.add(action_button("Suggest names", BG_SURFACE)).clicked() {
                    action = Some(EditorAction::Suggest(content.clone()));
                }
            });

            if !editor.suggestions.is_empty() {
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("Suggestions:").color(EXTRACT_FG).small());
                    for name in &editor.suggestions {
                        if ui.small_button(name.as_str()).clicked() {
                            picked = Some(name.clone());
                        }
                    }
                });
            }
        });

    if let Some(name) = picked {
        editor.use_suggestion(&name);
    }
    if cancel {
        editor.cancel_extraction();
    }
    action
}
