//! Structured session editor: section tabs and one form per section.

use egui::{self, RichText, Vec2};
use notekeeper_core::editor::{Field, Section, StructuredEditor};
use notekeeper_core::format::Selection;
use notekeeper_types::session::MissionStatus;
use crate::panels::formatted::formatted_text;
use crate::panels::EditorAction;
use crate::theme::*;

/// Render the structured editor. Returns an action for the caller to handle.
pub fn structured_editor(ui: &mut egui::Ui, editor: &mut StructuredEditor) -> EditorAction {
    let mut action = EditorAction::None;

    field_label(ui, "Session Title");
    ui.add(
        egui::TextEdit::singleline(&mut editor.title)
            .hint_text("Enter session title...")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    // ── Section navigation ───────────────────────────────
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for section in Section::all() {
                    let text = format!("{} {}", section.icon(), section.label());
                    if ui.selectable_label(editor.active == *section, text).clicked() {
                        editor.select(*section);
                    }
                }
            });
        });
    ui.add_space(8.0);

    // ── Active section ───────────────────────────────────
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(CARD_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            match editor.active {
                Section::Info => info_section(ui, editor),
                Section::Goal => text_section(
                    ui,
                    "🎯 Session Goal",
                    "What did the party aim to achieve this session?",
                    &mut editor.data.session_goal,
                    editor.selections.get(Field::Goal),
                ),
                Section::Combat => combat_section(ui, editor),
                Section::Roleplay => roleplay_section(ui, editor),
                Section::Npcs => npc_section(ui, editor),
                Section::Loot => loot_section(ui, editor),
                Section::Notes => text_section(
                    ui,
                    "📝 Additional Notes",
                    "Session Notes",
                    &mut editor.data.notes,
                    editor.selections.get(Field::Notes),
                ),
                Section::Moments => moments_section(ui, editor),
                Section::NextSession => text_section(
                    ui,
                    "🚀 Next Session Goals",
                    "What does the party plan to do next week?",
                    &mut editor.data.next_session_goals,
                    editor.selections.get(Field::NextSession),
                ),
                Section::Missions => missions_section(ui, editor),
            }
        });

    // ── Buttons ──────────────────────────────────────────
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.add(action_button("Save Session", SUCCESS)).clicked() {
            action = EditorAction::Save;
        }
        if editor.is_existing() && ui.add(action_button("Export", ACCENT)).clicked() {
            action = EditorAction::Export;
        }
        if ui.add(action_button("Cancel", BG_SURFACE)).clicked() {
            action = EditorAction::Cancel;
        }
    });

    action
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_PRIMARY).strong().size(16.0));
    ui.add_space(6.0);
}

/// Heading plus an "Add" button. Returns true when the button was clicked.
fn list_heading(ui: &mut egui::Ui, text: &str, add_label: &str) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(text).color(TEXT_PRIMARY).strong().size(16.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clicked = ui.add(action_button(add_label, SUCCESS)).clicked();
        });
    });
    ui.add_space(6.0);
    clicked
}

/// Card around one list item. Returns true when "Remove" was clicked.
fn item_card(ui: &mut egui::Ui, body: impl FnOnce(&mut egui::Ui)) -> bool {
    let mut removed = false;
    egui::Frame::default()
        .fill(BG_SURFACE)
        .inner_margin(CARD_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                removed = ui.add(action_button("Remove", ERROR).small()).clicked();
            });
            body(ui);
        });
    ui.add_space(6.0);
    removed
}

fn single(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    field_label(ui, label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
}

/// Labelled multi-line field with the formatting toolbar. Returns true when
/// the text changed.
fn rich(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    selection: &mut Selection,
    hint: &str,
    rows: usize,
) -> bool {
    field_label(ui, label);
    formatted_text(ui, value, selection, hint, rows).changed
}

fn text_section(ui: &mut egui::Ui, heading: &str, label: &str, value: &mut String, selection: &mut Selection) {
    section_heading(ui, heading);
    rich(ui, label, value, selection, "", 6);
}

fn info_section(ui: &mut egui::Ui, editor: &mut StructuredEditor) {
    section_heading(ui, "📅 Session Information");

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            field_label(ui, "Session Number");
            let mut number = editor.session_number_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut number)
                    .hint_text("e.g., 12")
                    .desired_width(120.0),
            );
            if response.changed() {
                editor.set_session_number_input(&number);
            }
        });
        ui.vertical(|ui| {
            field_label(ui, "Session Date");
            let mut date = editor.data.session_date.clone().unwrap_or_default();
            let response = ui.add(
                egui::TextEdit::singleline(&mut date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(140.0),
            );
            if response.changed() {
                editor.set_session_date(&date);
            }
        });
    });
    ui.add_space(8.0);

    field_label(ui, "Players Present");
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut editor.new_player)
                .hint_text("Add player name...")
                .desired_width(240.0),
        );
        let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add(action_button("Add", ACCENT)).clicked() || entered {
            editor.commit_new_player();
        }
    });

    let mut removed = None;
    ui.horizontal_wrapped(|ui| {
        for player in &editor.data.players_present {
            let chip = egui::Button::new(RichText::new(format!("{} ✕", player)).color(TEXT_PRIMARY))
                .fill(ACCENT)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(0.0, 22.0));
            if ui.add(chip).on_hover_text("Remove player").clicked() {
                removed = Some(player.clone());
            }
        }
    });
    if let Some(player) = removed {
        editor.remove_player(&player);
    }
}

fn combat_section(ui: &mut egui::Ui, editor: &mut StructuredEditor) {
    if list_heading(ui, "⚔ Combat Encounters", "Add Combat") {
        editor.add_combat_encounter();
    }

    let ids: Vec<String> = editor.data.combat_encounters.iter().map(|c| c.id.clone()).collect();
    let mut removed = None;
    let mut selections = std::mem::take(&mut editor.selections);
    for id in ids {
        editor.update_combat_encounter(&id, |combat| {
            let remove = item_card(ui, |ui| {
                ui.push_id(&combat.id, |ui| {
                    rich(
                        ui,
                        "Description",
                        &mut combat.description,
                        selections.get(Field::CombatDescription(combat.id.clone())),
                        "",
                        2,
                    );
                    single(ui, "Enemies", &mut combat.enemies, "e.g., 2 Goblins, 1 Orc Chieftain");
                    single(ui, "Outcome", &mut combat.outcome, "e.g., Victory, Retreat, Negotiated peace");
                    rich(
                        ui,
                        "Notable Events",
                        &mut combat.notable_events,
                        selections.get(Field::CombatEvents(combat.id.clone())),
                        "",
                        2,
                    );
                });
            });
            if remove {
                removed = Some(combat.id.clone());
            }
        });
    }
    editor.selections = selections;
    if let Some(id) = removed {
        editor.remove_combat_encounter(&id);
    }
}

fn roleplay_section(ui: &mut egui::Ui, editor: &mut StructuredEditor) {
    if list_heading(ui, "🎭 Roleplay Encounters", "Add Roleplay") {
        editor.add_roleplay_encounter();
    }

    let ids: Vec<String> = editor.data.roleplay_encounters.iter().map(|r| r.id.clone()).collect();
    let mut removed = None;
    let mut selections = std::mem::take(&mut editor.selections);
    for id in ids {
        editor.update_roleplay_encounter(&id, |encounter| {
            let remove = item_card(ui, |ui| {
                ui.push_id(&encounter.id, |ui| {
                    rich(
                        ui,
                        "Description",
                        &mut encounter.description,
                        selections.get(Field::RoleplayDescription(encounter.id.clone())),
                        "",
                        2,
                    );
                    single(
                        ui,
                        "Outcome/Result",
                        &mut encounter.outcome,
                        "What was the result of this encounter?",
                    );
                    single(ui, "Importance", &mut encounter.importance, "");
                    if !encounter.npcs_involved.is_empty() {
                        field_label(ui, "NPCs Involved");
                        ui.label(encounter.npcs_involved.join(", "));
                    }
                });
            });
            if remove {
                removed = Some(encounter.id.clone());
            }
        });
    }
    editor.selections = selections;
    if let Some(id) = removed {
        editor.remove_roleplay_encounter(&id);
    }
}

fn npc_section(ui: &mut egui::Ui, editor: &mut StructuredEditor) {
    if list_heading(ui, "👥 NPCs Encountered", "Add NPC") {
        editor.add_npc_encounter();
    }

    let ids: Vec<String> = editor.data.npcs_encountered.iter().map(|n| n.id.clone()).collect();
    let mut removed = None;
    let mut selections = std::mem::take(&mut editor.selections);
    for id in ids {
        editor.update_npc_encounter(&id, |npc| {
            let remove = item_card(ui, |ui| {
                ui.push_id(&npc.id, |ui| {
                    single(ui, "NPC Name", &mut npc.npc_name, "e.g., Thorin the Blacksmith");
                    single(ui, "Role", &mut npc.role, "e.g., Quest giver, Merchant, Enemy");
                    rich(
                        ui,
                        "Notes",
                        &mut npc.notes,
                        selections.get(Field::NpcNotes(npc.id.clone())),
                        "",
                        2,
                    );
                    ui.checkbox(&mut npc.first_encounter, "First time meeting this NPC");
                });
            });
            if remove {
                removed = Some(npc.id.clone());
            }
        });
    }
    editor.selections = selections;
    if let Some(id) = removed {
        editor.remove_npc_encounter(&id);
    }
}

fn loot_section(ui: &mut egui::Ui, editor: &mut StructuredEditor) {
    if list_heading(ui, "💰 Loot & Rewards", "Add Loot") {
        editor.add_loot_item();
    }

    let ids: Vec<String> = editor.data.loot.iter().map(|l| l.id.clone()).collect();
    let mut removed = None;
    for id in ids {
        editor.update_loot_item(&id, |item| {
            let remove = item_card(ui, |ui| {
                ui.push_id(&item.id, |ui| {
                    single(ui, "Item Name", &mut item.item_name, "e.g., +1 Sword, Gold Pieces");
                    single(ui, "Value", &mut item.value, "e.g., 150 gp, Priceless");
                    single(ui, "Description", &mut item.description, "Item description or properties");
                    single(ui, "Recipient", &mut item.recipient, "Who got this item?");
                });
            });
            if remove {
                removed = Some(item.id.clone());
            }
        });
    }
    if let Some(id) = removed {
        editor.remove_loot_item(&id);
    }
}

fn moments_section(ui: &mut egui::Ui, editor: &mut StructuredEditor) {
    if list_heading(ui, "✨ Notable Roleplay Moments", "Add Moment") {
        editor.add_moment();
    }

    let mut removed = None;
    for index in 0..editor.data.notable_roleplay_moments.len() {
        let mut text = editor.data.notable_roleplay_moments[index].clone();
        let mut changed = false;
        let remove = item_card(ui, |ui| {
            ui.push_id(("moment", index), |ui| {
                changed = formatted_text(
                    ui,
                    &mut text,
                    editor.selections.get(Field::Moment(index)),
                    "Describe a memorable moment...",
                    2,
                )
                .changed;
            });
        });
        if changed {
            editor.update_moment(index, &text);
        }
        if remove {
            removed = Some(index);
        }
    }
    if let Some(index) = removed {
        editor.remove_moment(index);
    }
}

fn missions_section(ui: &mut egui::Ui, editor: &mut StructuredEditor) {
    if list_heading(ui, "🌍 Overarching Missions", "Add Mission") {
        editor.add_mission();
    }

    let ids: Vec<String> = editor.data.overarching_missions.iter().map(|m| m.id.clone()).collect();
    let mut removed = None;
    let mut selections = std::mem::take(&mut editor.selections);
    for id in ids {
        editor.update_mission(&id, |mission| {
            let remove = item_card(ui, |ui| {
                ui.push_id(&mission.id, |ui| {
                    single(ui, "Mission Name", &mut mission.mission_name, "e.g., Rescue the Princess");
                    field_label(ui, "Status");
                    egui::ComboBox::from_id_salt("mission_status")
                        .selected_text(mission.status.label())
                        .show_ui(ui, |ui| {
                            for status in MissionStatus::all() {
                                ui.selectable_value(&mut mission.status, *status, status.label());
                            }
                        });
                    rich(
                        ui,
                        "Description",
                        &mut mission.description,
                        selections.get(Field::MissionDescription(mission.id.clone())),
                        "",
                        2,
                    );
                    rich(
                        ui,
                        "Notes",
                        &mut mission.notes,
                        selections.get(Field::MissionNotes(mission.id.clone())),
                        "",
                        2,
                    );
                });
            });
            if remove {
                removed = Some(mission.id.clone());
            }
        });
    }
    editor.selections = selections;
    if let Some(id) = removed {
        editor.remove_mission(&id);
    }
}
