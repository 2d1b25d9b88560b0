//! UI-level state that drives rendering.
//! Holds the session and NPC snapshots and the open editors,
//! updated each frame by draining the EventBus.

use notekeeper_core::auth::AuthGate;
use notekeeper_core::editor::freeform::{extraction_message, EXTRACTION_FAILED};
use notekeeper_core::editor::{NewNpcForm, NpcEdits, SessionEditor};
use notekeeper_types::auth::Credentials;
use notekeeper_types::event::{AppEvent, Envelope};
use notekeeper_types::npc::{ExtractionRequest, NewNpc, Npc};
use notekeeper_types::session::{Session, SessionDraft, SessionType};

/// Which list the main shell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Sessions,
    Npcs,
}

/// A backend operation requested by the UI. The app layer runs it
/// with the signed-in credentials.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login(Credentials),
    RefreshAll,
    RefreshNpcs,
    SaveSession {
        session_id: Option<String>,
        draft: SessionDraft,
    },
    DeleteSession {
        session_id: String,
    },
    ExportSession {
        session_id: String,
        title: String,
    },
    SaveNpc(Npc),
    CreateNpc(NewNpc),
    DeleteNpc {
        npc_id: String,
    },
    ExtractNpc(ExtractionRequest),
    SuggestNpcs {
        text: String,
    },
}

/// A delete waiting for the user's confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum PendingDelete {
    Session { id: String, title: String },
    Npc { id: String, name: String },
}

impl PendingDelete {
    pub fn prompt(&self) -> String {
        match self {
            PendingDelete::Session { .. } => {
                "Are you sure you want to delete this session?".to_string()
            }
            PendingDelete::Npc { name, .. } => {
                format!("Are you sure you want to delete NPC \"{}\"?", name)
            }
        }
    }
}

/// State visible to UI panels
pub struct UiState {
    pub auth: AuthGate,
    pub view: View,
    pub sessions: Vec<Session>,
    pub npcs: Vec<Npc>,
    /// Editor shown in place of the session list
    pub editor: Option<SessionEditor>,
    /// Variant used for the next "New Session"
    pub new_session_type: SessionType,
    pub npc_edits: NpcEdits,
    /// Form behind "New NPC", when open
    pub new_npc: Option<NewNpcForm>,
    pub pending_delete: Option<PendingDelete>,
    /// Message shown in a blocking alert
    pub alert: Option<String>,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            auth: AuthGate::new(),
            view: View::Sessions,
            sessions: Vec::new(),
            npcs: Vec::new(),
            editor: None,
            new_session_type: SessionType::Structured,
            npc_edits: NpcEdits::new(),
            new_npc: None,
            pending_delete: None,
            alert: None,
            status_text: String::new(),
        }
    }

    /// Process a drained EventBus batch. Events issued under any login but
    /// the current one are dropped; login outcomes always pass.
    pub fn process_envelopes(&mut self, envelopes: Vec<Envelope>) -> Vec<Action> {
        let current = self.auth.login_id();
        let events = envelopes
            .into_iter()
            .filter_map(|envelope| {
                let outcome = matches!(
                    envelope.event,
                    AppEvent::LoginSucceeded { .. } | AppEvent::LoginRejected
                );
                if outcome || Some(envelope.login) == current {
                    Some(envelope.event)
                } else {
                    log::debug!("Dropping event from login {}", envelope.login);
                    None
                }
            })
            .collect();
        self.process_events(events)
    }

    /// Process events from the EventBus and update UI state.
    /// Returns follow-up operations the app should run.
    pub fn process_events(&mut self, events: Vec<AppEvent>) -> Vec<Action> {
        let mut follow_ups = Vec::new();
        for event in events {
            match event {
                AppEvent::LoginSucceeded {
                    credentials,
                    username,
                } => {
                    if self.auth.accept(credentials, username) {
                        self.view = View::Sessions;
                        follow_ups.push(Action::RefreshAll);
                    }
                }
                AppEvent::LoginRejected => self.auth.reject(),
                // Late snapshots after logout are dropped
                AppEvent::SessionsLoaded(sessions) => {
                    if self.auth.is_signed_in() {
                        self.sessions = sessions;
                    }
                }
                AppEvent::NpcsLoaded(npcs) => {
                    if self.auth.is_signed_in() {
                        self.npc_edits.retain_known(&npcs);
                        self.npcs = npcs;
                    }
                }
                AppEvent::SessionSaved { session_id } => {
                    self.editor = None;
                    self.status_text = format!("Session {} saved", session_id);
                }
                AppEvent::SessionDeleted { session_id } => {
                    if self.editor.as_ref().and_then(|e| e.session_id()) == Some(session_id.as_str()) {
                        self.editor = None;
                    }
                    self.status_text = "Session deleted".to_string();
                }
                AppEvent::ExportOffered { filename } => {
                    self.status_text = format!("Exported {}", filename);
                }
                AppEvent::NpcSaved { npc_id } => {
                    self.npc_edits.finish(&npc_id);
                }
                AppEvent::NpcCreated { .. } => {
                    self.new_npc = None;
                }
                AppEvent::NpcDeleted { npc_id } => {
                    self.npc_edits.cancel(&npc_id);
                }
                AppEvent::NpcExtracted { npc_name, action } => {
                    self.alert = Some(extraction_message(&npc_name, &action));
                    if let Some(SessionEditor::FreeForm(editor)) = self.editor.as_mut() {
                        editor.finish_extraction();
                    }
                }
                AppEvent::ExtractionFailed => {
                    self.alert = Some(EXTRACTION_FAILED.to_string());
                }
                AppEvent::NpcSuggestions(names) => {
                    if let Some(SessionEditor::FreeForm(editor)) = self.editor.as_mut() {
                        editor.suggestions = names;
                    }
                }
            }
        }
        follow_ups
    }

    // ─── Navigation ──────────────────────────────────────────

    /// Switch views. Entering the NPC view re-fetches the NPC list.
    pub fn show_view(&mut self, view: View) -> Option<Action> {
        if self.view == view {
            return None;
        }
        self.view = view;
        match view {
            View::Npcs => Some(Action::RefreshNpcs),
            View::Sessions => None,
        }
    }

    pub fn new_session(&mut self) {
        self.editor = Some(SessionEditor::open(None, self.new_session_type));
    }

    /// Open an existing session in the variant of its stored type.
    pub fn open_session(&mut self, session_id: &str) -> bool {
        let Some(session) = self.sessions.iter().find(|s| s.id == session_id) else {
            return false;
        };
        self.new_session_type = session.session_type;
        self.editor = Some(SessionEditor::open(Some(session), session.session_type));
        true
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Save request for the open editor.
    pub fn save_editor(&self) -> Option<Action> {
        let editor = self.editor.as_ref()?;
        Some(Action::SaveSession {
            session_id: editor.session_id().map(str::to_string),
            draft: editor.draft(),
        })
    }

    // ─── Deletes ─────────────────────────────────────────────

    pub fn request_delete(&mut self, pending: PendingDelete) {
        self.pending_delete = Some(pending);
    }

    /// The user agreed; the delete call to issue.
    pub fn confirm_delete(&mut self) -> Option<Action> {
        match self.pending_delete.take()? {
            PendingDelete::Session { id, .. } => Some(Action::DeleteSession { session_id: id }),
            PendingDelete::Npc { id, .. } => Some(Action::DeleteNpc { npc_id: id }),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // ─── Session ─────────────────────────────────────────────

    /// Drop credentials and every snapshot. The gate keeps its login count.
    pub fn logout(&mut self) {
        let mut auth = std::mem::take(&mut self.auth);
        auth.logout();
        *self = Self::new();
        self.auth = auth;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn welcome_text(&self) -> Option<String> {
        self.auth.username().map(|name| format!("Welcome, {}", name))
    }

    pub fn npc_count_text(&self) -> String {
        format!("{} NPCs tracked", self.npcs.len())
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
