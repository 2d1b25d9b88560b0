use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NpcStatus {
    Alive,
    Deceased,
    #[default]
    #[serde(other)]
    Unknown,
}

impl NpcStatus {
    pub fn all() -> &'static [NpcStatus] {
        &[NpcStatus::Alive, NpcStatus::Deceased, NpcStatus::Unknown]
    }

    pub fn label(&self) -> &str {
        match self {
            NpcStatus::Alive => "Alive",
            NpcStatus::Deceased => "Deceased",
            NpcStatus::Unknown => "Unknown",
        }
    }
}

/// A tracked non-player character
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Npc {
    pub id: String,
    pub name: String,
    pub status: NpcStatus,
    pub race: String,
    pub class_role: String,
    pub appearance: String,
    pub quirks_mannerisms: String,
    pub background: String,
    pub notes: String,
    /// Appended by the backend when text is extracted from a session
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    pub interaction: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl HistoryEntry {
    pub fn display_time(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

/// Payload for `POST /npcs`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewNpc {
    pub name: String,
    pub status: NpcStatus,
    pub race: String,
    pub class_role: String,
    pub appearance: String,
    pub quirks_mannerisms: String,
    pub background: String,
    pub notes: String,
}

/// Payload for `POST /extract-npc`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Session id, or [`ExtractionRequest::NEW_SESSION`] for unsaved sessions
    pub session_id: String,
    pub extracted_text: String,
    pub npc_name: String,
}

impl ExtractionRequest {
    pub const NEW_SESSION: &'static str = "new";
}

/// Response of `POST /extract-npc`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// `created` or `updated`, decided by the backend
    pub action: String,
    #[serde(default)]
    pub npc: Option<Npc>,
}

/// Render a backend timestamp in local time, falling back to the raw string.
///
/// Accepts RFC 3339 as well as the naive UTC form (`2024-05-01T18:30:00.123456`).
pub fn format_timestamp(raw: &str) -> String {
    let utc: Option<DateTime<Utc>> = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        });

    match utc {
        Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}
