use serde::{Deserialize, Serialize};

/// Which editor a session record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Structured,
    /// Records without a type discriminator are treated as free-form notes
    #[default]
    FreeForm,
}

impl SessionType {
    pub fn all() -> &'static [SessionType] {
        &[SessionType::Structured, SessionType::FreeForm]
    }

    pub fn label(&self) -> &str {
        match self {
            SessionType::Structured => "Structured Template",
            SessionType::FreeForm => "Free Form Notes",
        }
    }

    pub fn badge(&self) -> &str {
        match self {
            SessionType::Structured => "Structured",
            SessionType::FreeForm => "Free Form",
        }
    }
}

/// A session record as stored by the backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub session_type: SessionType,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,
    pub created_at: String,
    pub updated_at: String,
}

impl Session {
    /// Goal text trimmed for list cards.
    pub fn goal_preview(&self) -> Option<String> {
        let goal = &self.structured_data.as_ref()?.session_goal;
        if goal.is_empty() {
            return None;
        }
        let head: String = goal.chars().take(100).collect();
        Some(format!("{}...", head))
    }

    pub fn players_line(&self) -> Option<String> {
        let players = &self.structured_data.as_ref()?.players_present;
        if players.is_empty() {
            None
        } else {
            Some(players.join(", "))
        }
    }

    pub fn session_number(&self) -> Option<i64> {
        self.structured_data.as_ref().and_then(|d| d.session_number)
    }

    /// Free-form content for list cards, cut after 200 characters.
    pub fn content_preview(&self) -> Option<String> {
        if self.content.is_empty() {
            return None;
        }
        if self.content.chars().count() <= 200 {
            return Some(self.content.clone());
        }
        let head: String = self.content.chars().take(200).collect();
        Some(format!("{}...", head))
    }
}

/// Payload for `POST /sessions` and `PUT /sessions/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub title: String,
    pub session_type: SessionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,
}

impl SessionDraft {
    pub fn structured(title: impl Into<String>, data: StructuredData) -> Self {
        Self {
            title: title.into(),
            session_type: SessionType::Structured,
            content: None,
            structured_data: Some(data),
        }
    }

    pub fn free_form(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            session_type: SessionType::FreeForm,
            content: Some(content.into()),
            structured_data: None,
        }
    }
}

/// The fixed multi-section schema of a structured session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredData {
    pub session_number: Option<i64>,
    pub session_date: Option<String>,
    pub players_present: Vec<String>,
    pub session_goal: String,
    pub combat_encounters: Vec<CombatEncounter>,
    pub roleplay_encounters: Vec<RoleplayEncounter>,
    pub npcs_encountered: Vec<NpcEncounter>,
    pub loot: Vec<LootItem>,
    pub notes: String,
    pub notable_roleplay_moments: Vec<String>,
    pub next_session_goals: String,
    pub overarching_missions: Vec<Mission>,
}

/// List items keyed by an identifier while they are being edited
pub trait Keyed {
    fn id(&self) -> &str;

    /// A new item with empty fields
    fn blank(id: String) -> Self;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatEncounter {
    pub id: String,
    pub description: String,
    pub enemies: String,
    pub outcome: String,
    pub notable_events: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleplayEncounter {
    pub id: String,
    pub description: String,
    pub npcs_involved: Vec<String>,
    pub outcome: String,
    pub importance: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcEncounter {
    pub id: String,
    pub npc_name: String,
    pub role: String,
    pub notes: String,
    pub first_encounter: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LootItem {
    pub id: String,
    pub item_name: String,
    pub description: String,
    pub value: String,
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mission {
    pub id: String,
    pub mission_name: String,
    pub status: MissionStatus,
    pub description: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissionStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Failed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl MissionStatus {
    pub fn all() -> &'static [MissionStatus] {
        &[
            MissionStatus::InProgress,
            MissionStatus::Completed,
            MissionStatus::Failed,
            MissionStatus::OnHold,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            MissionStatus::InProgress => "In Progress",
            MissionStatus::Completed => "Completed",
            MissionStatus::Failed => "Failed",
            MissionStatus::OnHold => "On Hold",
        }
    }
}

macro_rules! keyed {
    ($($ty:ty),*) => {
        $(
            impl Keyed for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn blank(id: String) -> Self {
                    Self { id, ..Default::default() }
                }
            }
        )*
    };
}

keyed!(CombatEncounter, RoleplayEncounter, NpcEncounter, LootItem, Mission);
