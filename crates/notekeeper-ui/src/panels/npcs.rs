//! NPC view: one card per tracked NPC, read-only or in edit mode,
//! plus the "New NPC" form.

use egui::{self, Align, Layout, RichText};
use notekeeper_core::editor::NewNpcForm;
use notekeeper_types::npc::{Npc, NpcStatus};
use crate::state::{Action, PendingDelete, UiState};
use crate::theme::*;

/// Editable NPC attributes, shared by the edit and create forms
struct NpcFields<'a> {
    name: &'a mut String,
    status: &'a mut NpcStatus,
    race: &'a mut String,
    class_role: &'a mut String,
    appearance: &'a mut String,
    quirks_mannerisms: &'a mut String,
    background: &'a mut String,
    notes: &'a mut String,
}

impl<'a> NpcFields<'a> {
    fn of_npc(npc: &'a mut Npc) -> Self {
        Self {
            name: &mut npc.name,
            status: &mut npc.status,
            race: &mut npc.race,
            class_role: &mut npc.class_role,
            appearance: &mut npc.appearance,
            quirks_mannerisms: &mut npc.quirks_mannerisms,
            background: &mut npc.background,
            notes: &mut npc.notes,
        }
    }

    fn of_form(form: &'a mut NewNpcForm) -> Self {
        let npc = &mut form.npc;
        Self {
            name: &mut npc.name,
            status: &mut npc.status,
            race: &mut npc.race,
            class_role: &mut npc.class_role,
            appearance: &mut npc.appearance,
            quirks_mannerisms: &mut npc.quirks_mannerisms,
            background: &mut npc.background,
            notes: &mut npc.notes,
        }
    }
}

/// Render the NPC view. Returns a backend operation when one was requested.
pub fn npcs_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading(RichText::new("Non-Player Characters").color(TEXT_PRIMARY).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if state.new_npc.is_none() && ui.add(action_button("New NPC", SUCCESS)).clicked() {
                state.new_npc = Some(NewNpcForm::default());
            }
            ui.label(RichText::new(state.npc_count_text()).color(TEXT_SECONDARY));
        });
    });
    ui.separator();

    // ── New NPC form ─────────────────────────────────────
    let mut close_form = false;
    if let Some(form) = state.new_npc.as_mut() {
        let payload = form.payload();
        card(ui, |ui| {
            ui.label(RichText::new("New NPC").color(TEXT_PRIMARY).strong().size(16.0));
            npc_form(ui, "new_npc", NpcFields::of_form(form));
            ui.horizontal(|ui| {
                let create = ui.add_enabled(payload.is_some(), action_button("Create NPC", SUCCESS));
                if create.clicked() {
                    action = payload.map(Action::CreateNpc);
                }
                if ui.add(action_button("Cancel", BG_SURFACE)).clicked() {
                    close_form = true;
                }
            });
        });
    }
    if close_form {
        state.new_npc = None;
    }

    // ── NPC cards ────────────────────────────────────────
    let mut begin: Option<Npc> = None;
    let mut cancel: Option<String> = None;
    let mut delete: Option<PendingDelete> = None;

    for npc in &state.npcs {
        if let Some(draft) = state.npc_edits.draft_mut(&npc.id) {
            card(ui, |ui| {
                npc_form(ui, &npc.id, NpcFields::of_npc(&mut *draft));
                ui.horizontal(|ui| {
                    if ui.add(action_button("Save", SUCCESS)).clicked() {
                        action = Some(Action::SaveNpc(draft.clone()));
                    }
                    if ui.add(action_button("Cancel", BG_SURFACE)).clicked() {
                        cancel = Some(npc.id.clone());
                    }
                });
            });
        } else {
            card(ui, |ui| match npc_card(ui, npc) {
                CardAction::Edit => begin = Some(npc.clone()),
                CardAction::Delete => {
                    delete = Some(PendingDelete::Npc {
                        id: npc.id.clone(),
                        name: npc.name.clone(),
                    })
                }
                CardAction::None => {}
            });
        }
    }

    if let Some(npc) = begin {
        state.npc_edits.begin(&npc);
    }
    if let Some(id) = cancel {
        state.npc_edits.cancel(&id);
    }
    if let Some(pending) = delete {
        state.request_delete(pending);
    }

    action
}

enum CardAction {
    None,
    Edit,
    Delete,
}

fn card(ui: &mut egui::Ui, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(CARD_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            body(ui);
        });
    ui.add_space(8.0);
}

fn npc_card(ui: &mut egui::Ui, npc: &Npc) -> CardAction {
    let mut action = CardAction::None;

    ui.horizontal(|ui| {
        ui.label(RichText::new(&npc.name).color(TEXT_PRIMARY).strong().size(18.0));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.add(action_button("Delete", ERROR).small()).clicked() {
                action = CardAction::Delete;
            }
            if ui.add(action_button("Edit", ACCENT).small()).clicked() {
                action = CardAction::Edit;
            }
        });
    });

    ui.horizontal_wrapped(|ui| {
        attribute(ui, "Status:", npc.status.label());
        attribute(ui, "Race:", &npc.race);
        attribute(ui, "Class/Role:", &npc.class_role);
    });

    text_block(ui, "Appearance:", &npc.appearance);
    text_block(ui, "Quirks/Mannerisms:", &npc.quirks_mannerisms);
    text_block(ui, "Background:", &npc.background);
    text_block(ui, "Notes:", &npc.notes);

    if !npc.history.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new("History:").color(TEXT_SECONDARY).small());
        for entry in &npc.history {
            egui::Frame::default()
                .fill(BG_SURFACE)
                .inner_margin(8.0)
                .corner_radius(PANEL_ROUNDING)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(&entry.interaction).color(TEXT_PRIMARY));
                    ui.label(RichText::new(entry.display_time()).color(TEXT_SECONDARY).small());
                });
        }
    }

    action
}

fn attribute(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    ui.label(RichText::new(value).color(TEXT_PRIMARY).small());
    ui.add_space(12.0);
}

/// Optional text shown only when non-empty
fn text_block(ui: &mut egui::Ui, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    ui.add_space(4.0);
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    ui.label(RichText::new(value).color(TEXT_PRIMARY));
}

fn npc_form(ui: &mut egui::Ui, id_salt: &str, fields: NpcFields<'_>) {
    ui.push_id(id_salt, |ui| {
        field_label(ui, "Name");
        ui.add(egui::TextEdit::singleline(fields.name).desired_width(f32::INFINITY));

        field_label(ui, "Status");
        egui::ComboBox::from_id_salt("npc_status")
            .selected_text(fields.status.label())
            .show_ui(ui, |ui| {
                for status in NpcStatus::all() {
                    ui.selectable_value(&mut *fields.status, *status, status.label());
                }
            });

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                field_label(ui, "Race");
                ui.text_edit_singleline(fields.race);
            });
            ui.vertical(|ui| {
                field_label(ui, "Class/Role");
                ui.text_edit_singleline(fields.class_role);
            });
        });

        for (label, value) in [
            ("Appearance", fields.appearance),
            ("Quirks/Mannerisms", fields.quirks_mannerisms),
            ("Background", fields.background),
            ("Notes", fields.notes),
        ] {
            field_label(ui, label);
            ui.add(
                egui::TextEdit::multiline(value)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
        }
    });
}
