use crate::auth::Credentials;
use crate::npc::Npc;
use crate::session::Session;

/// Completions reported by the notes service.
/// The UI drains these each frame and folds them into its state.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// `/auth/check` accepted the credentials
    LoginSucceeded { credentials: Credentials, username: String },

    /// Credentials were refused or the check could not be made
    LoginRejected,

    /// Fresh snapshot of every session
    SessionsLoaded(Vec<Session>),

    /// Fresh snapshot of every NPC
    NpcsLoaded(Vec<Npc>),

    /// A create or update of a session succeeded
    SessionSaved { session_id: String },

    SessionDeleted { session_id: String },

    /// An export payload was handed to the browser as a download
    ExportOffered { filename: String },

    NpcSaved { npc_id: String },

    NpcCreated { npc_id: String },

    NpcDeleted { npc_id: String },

    /// The backend created or appended to an NPC from selected text
    NpcExtracted { npc_name: String, action: String },

    ExtractionFailed,

    /// Candidate NPC names found in a free-form buffer
    NpcSuggestions(Vec<String>),
}

/// An event stamped with the login it was issued under. Login outcomes
/// themselves carry `0`, which no signed-in login ever uses.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub login: u64,
    pub event: AppEvent,
}
