//! Structured session editor: one section visible at a time.

use std::collections::HashMap;

use notekeeper_types::session::{
    CombatEncounter, LootItem, Mission, NpcEncounter, RoleplayEncounter, Session, SessionDraft,
    StructuredData,
};

use super::{append, remove, update};
use crate::format::Selection;

/// Sections of the structured form. Navigation between them is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Info,
    Goal,
    Combat,
    Roleplay,
    Npcs,
    Loot,
    Notes,
    Moments,
    NextSession,
    Missions,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Info,
            Section::Goal,
            Section::Combat,
            Section::Roleplay,
            Section::Npcs,
            Section::Loot,
            Section::Notes,
            Section::Moments,
            Section::NextSession,
            Section::Missions,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Section::Info => "Session Info",
            Section::Goal => "Session Goal",
            Section::Combat => "Combat",
            Section::Roleplay => "Roleplay",
            Section::Npcs => "NPCs",
            Section::Loot => "Loot",
            Section::Notes => "Notes",
            Section::Moments => "Key Moments",
            Section::NextSession => "Next Session",
            Section::Missions => "Missions",
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            Section::Info => "📅",
            Section::Goal => "🎯",
            Section::Combat => "⚔",
            Section::Roleplay => "🎭",
            Section::Npcs => "👥",
            Section::Loot => "💰",
            Section::Notes => "📝",
            Section::Moments => "✨",
            Section::NextSession => "🚀",
            Section::Missions => "🌍",
        }
    }
}

/// A multi-line field of the structured form that takes formatting.
/// List item fields are addressed by item id, moments by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Goal,
    Notes,
    NextSession,
    CombatDescription(String),
    CombatEvents(String),
    RoleplayDescription(String),
    NpcNotes(String),
    Moment(usize),
    MissionDescription(String),
    MissionNotes(String),
}

impl Field {
    fn item_id(&self) -> Option<&str> {
        match self {
            Field::CombatDescription(id)
            | Field::CombatEvents(id)
            | Field::RoleplayDescription(id)
            | Field::NpcNotes(id)
            | Field::MissionDescription(id)
            | Field::MissionNotes(id) => Some(id),
            _ => None,
        }
    }
}

/// Per-field selection state of the structured form
#[derive(Debug, Clone, Default)]
pub struct Selections(HashMap<Field, Selection>);

impl Selections {
    pub fn get(&mut self, field: Field) -> &mut Selection {
        self.0.entry(field).or_default()
    }

    fn forget(&mut self, keep: impl Fn(&Field) -> bool) {
        self.0.retain(|field, _| keep(field));
    }
}

#[derive(Debug, Clone, Default)]
pub struct StructuredEditor {
    /// `None` until the backend has stored the session
    pub session_id: Option<String>,
    pub title: String,
    pub data: StructuredData,
    pub active: Section,
    /// Pending text of the "add player" field
    pub new_player: String,
    /// Text buffer behind the session-number field
    pub session_number_input: String,
    pub selections: Selections,
}

impl StructuredEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_session(session: &Session) -> Self {
        let data = session.structured_data.clone().unwrap_or_default();
        Self {
            session_id: Some(session.id.clone()),
            title: session.title.clone(),
            session_number_input: data.session_number.map(|n| n.to_string()).unwrap_or_default(),
            data,
            active: Section::Info,
            new_player: String::new(),
            selections: Selections::default(),
        }
    }

    pub fn is_existing(&self) -> bool {
        self.session_id.is_some()
    }

    pub fn select(&mut self, section: Section) {
        self.active = section;
    }

    pub fn draft(&self) -> SessionDraft {
        SessionDraft::structured(self.title.clone(), self.data.clone())
    }

    // ─── Session info ────────────────────────────────────────

    /// Parse the session-number field by its leading integer, so `12abc`
    /// and `12.5` read as 12. No leading digits or a zero clears the number.
    pub fn set_session_number_input(&mut self, input: &str) {
        self.session_number_input = input.to_string();
        self.data.session_number = leading_integer(input).filter(|n| *n != 0);
    }

    pub fn set_session_date(&mut self, date: &str) {
        let date = date.trim();
        self.data.session_date = if date.is_empty() { None } else { Some(date.to_string()) };
    }

    /// Add a player. Blank names and names already present are ignored.
    pub fn add_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.data.players_present.iter().any(|p| p == name) {
            return false;
        }
        self.data.players_present.push(name.to_string());
        true
    }

    /// Add the player typed into the pending field, clearing it on success.
    pub fn commit_new_player(&mut self) -> bool {
        let pending = std::mem::take(&mut self.new_player);
        if self.add_player(&pending) {
            true
        } else {
            self.new_player = pending;
            false
        }
    }

    pub fn remove_player(&mut self, name: &str) -> bool {
        let before = self.data.players_present.len();
        self.data.players_present.retain(|p| p != name);
        self.data.players_present.len() != before
    }

    // ─── Combat ──────────────────────────────────────────────

    pub fn add_combat_encounter(&mut self) -> String {
        append(&mut self.data.combat_encounters)
    }

    pub fn update_combat_encounter(&mut self, id: &str, f: impl FnOnce(&mut CombatEncounter)) -> bool {
        update(&mut self.data.combat_encounters, id, f)
    }

    pub fn remove_combat_encounter(&mut self, id: &str) -> bool {
        self.selections.forget(|field| field.item_id() != Some(id));
        remove(&mut self.data.combat_encounters, id)
    }

    // ─── Roleplay ────────────────────────────────────────────

    pub fn add_roleplay_encounter(&mut self) -> String {
        append(&mut self.data.roleplay_encounters)
    }

    pub fn update_roleplay_encounter(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut RoleplayEncounter),
    ) -> bool {
        update(&mut self.data.roleplay_encounters, id, f)
    }

    pub fn remove_roleplay_encounter(&mut self, id: &str) -> bool {
        self.selections.forget(|field| field.item_id() != Some(id));
        remove(&mut self.data.roleplay_encounters, id)
    }

    // ─── NPC encounters ──────────────────────────────────────

    pub fn add_npc_encounter(&mut self) -> String {
        append(&mut self.data.npcs_encountered)
    }

    pub fn update_npc_encounter(&mut self, id: &str, f: impl FnOnce(&mut NpcEncounter)) -> bool {
        update(&mut self.data.npcs_encountered, id, f)
    }

    pub fn remove_npc_encounter(&mut self, id: &str) -> bool {
        self.selections.forget(|field| field.item_id() != Some(id));
        remove(&mut self.data.npcs_encountered, id)
    }

    // ─── Loot ────────────────────────────────────────────────

    pub fn add_loot_item(&mut self) -> String {
        append(&mut self.data.loot)
    }

    pub fn update_loot_item(&mut self, id: &str, f: impl FnOnce(&mut LootItem)) -> bool {
        update(&mut self.data.loot, id, f)
    }

    pub fn remove_loot_item(&mut self, id: &str) -> bool {
        remove(&mut self.data.loot, id)
    }

    // ─── Key moments (keyed by position) ─────────────────────

    pub fn add_moment(&mut self) -> usize {
        self.data.notable_roleplay_moments.push(String::new());
        self.data.notable_roleplay_moments.len() - 1
    }

    pub fn update_moment(&mut self, index: usize, text: &str) -> bool {
        match self.data.notable_roleplay_moments.get_mut(index) {
            Some(moment) => {
                *moment = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove_moment(&mut self, index: usize) -> bool {
        if index < self.data.notable_roleplay_moments.len() {
            self.data.notable_roleplay_moments.remove(index);
            self.selections.forget(|field| !matches!(field, Field::Moment(_)));
            true
        } else {
            false
        }
    }

    // ─── Missions ────────────────────────────────────────────

    pub fn add_mission(&mut self) -> String {
        append(&mut self.data.overarching_missions)
    }

    pub fn update_mission(&mut self, id: &str, f: impl FnOnce(&mut Mission)) -> bool {
        update(&mut self.data.overarching_missions, id, f)
    }

    pub fn remove_mission(&mut self, id: &str) -> bool {
        self.selections.forget(|field| field.item_id() != Some(id));
        remove(&mut self.data.overarching_missions, id)
    }
}

fn leading_integer(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let (sign, rest) = match input.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, input.strip_prefix('+').unwrap_or(input)),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    rest[..digits].parse::<i64>().ok().map(|n| sign * n)
}
