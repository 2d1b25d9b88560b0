//! Notes service: every backend operation the client performs.
//!
//! Each operation is a pass-through call on [`NotesApi`] followed by a
//! completion event on the [`EventBus`]. Mutations re-fetch the affected
//! snapshot in full once the mutation's response has resolved; there is no
//! optimistic or incremental update.
//!
//! Futures returned here are meant to be spawned with
//! `wasm_bindgen_futures::spawn_local`; they never block the UI thread.

use std::rc::Rc;

use notekeeper_types::{
    Result,
    auth::Credentials,
    event::AppEvent,
    npc::{ExtractionOutcome, ExtractionRequest, NewNpc, Npc},
    session::SessionDraft,
};

use crate::editor::export_filename;
use crate::event_bus::EventBus;
use crate::ports::{DownloadPort, NotesApi};

const EXPORT_MIME: &str = "application/json";

#[derive(Clone)]
pub struct NotesService {
    api: Rc<dyn NotesApi>,
    downloads: Rc<dyn DownloadPort>,
    event_bus: EventBus,
    /// Login whose requests this handle runs; stamped on every event
    login: u64,
}

impl NotesService {
    pub fn new(api: Rc<dyn NotesApi>, downloads: Rc<dyn DownloadPort>, event_bus: EventBus) -> Self {
        Self {
            api,
            downloads,
            event_bus,
            login: 0,
        }
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// A handle whose completions are stamped with `login`, so the UI can
    /// drop responses that outlive the login that asked for them.
    pub fn for_login(&self, login: u64) -> Self {
        Self {
            login,
            ..self.clone()
        }
    }

    fn emit(&self, event: AppEvent) {
        self.event_bus.emit_for(self.login, event);
    }

    // ─── Authentication ──────────────────────────────────────

    /// Verify candidate credentials. Any failure, including a transport
    /// error, is reported as a rejection.
    pub async fn login(&self, candidate: Credentials) -> bool {
        match self.api.check_auth(&candidate).await {
            Ok(check) if check.authenticated => {
                let username = check
                    .username
                    .filter(|u| !u.is_empty())
                    .unwrap_or_else(|| candidate.username.clone());
                self.emit(AppEvent::LoginSucceeded {
                    credentials: candidate,
                    username,
                });
                true
            }
            Ok(_) => {
                log::warn!("Credentials rejected for {}", candidate.username);
                self.emit(AppEvent::LoginRejected);
                false
            }
            Err(e) => {
                log::warn!("Auth check failed: {}", e);
                self.emit(AppEvent::LoginRejected);
                false
            }
        }
    }

    // ─── Snapshots ───────────────────────────────────────────

    pub async fn refresh_sessions(&self, auth: &Credentials) -> Result<()> {
        let sessions = self.api.list_sessions(auth).await?;
        log::debug!("Fetched {} sessions", sessions.len());
        self.emit(AppEvent::SessionsLoaded(sessions));
        Ok(())
    }

    pub async fn refresh_npcs(&self, auth: &Credentials) -> Result<()> {
        let npcs = self.api.list_npcs(auth).await?;
        log::debug!("Fetched {} NPCs", npcs.len());
        self.emit(AppEvent::NpcsLoaded(npcs));
        Ok(())
    }

    /// Fetch both snapshots concurrently. Each one that succeeds is applied
    /// even if the other fails.
    pub async fn refresh_all(&self, auth: &Credentials) -> Result<()> {
        let (sessions, npcs) = futures::join!(self.refresh_sessions(auth), self.refresh_npcs(auth));
        sessions.and(npcs)
    }

    async fn reload_sessions(&self, auth: &Credentials) {
        if let Err(e) = self.refresh_sessions(auth).await {
            log::error!("Error fetching sessions: {}", e);
        }
    }

    async fn reload_npcs(&self, auth: &Credentials) {
        if let Err(e) = self.refresh_npcs(auth).await {
            log::error!("Error fetching NPCs: {}", e);
        }
    }

    // ─── Sessions ────────────────────────────────────────────

    /// Create when `session_id` is `None`, otherwise update. Returns the id
    /// of the stored session.
    pub async fn save_session(
        &self,
        auth: &Credentials,
        session_id: Option<&str>,
        draft: &SessionDraft,
    ) -> Result<String> {
        let stored = match session_id {
            Some(id) => self.api.update_session(auth, id, draft).await?,
            None => self.api.create_session(auth, draft).await?,
        };
        let id = if stored.id.is_empty() {
            session_id.unwrap_or_default().to_string()
        } else {
            stored.id
        };
        log::info!("Session saved: {} ({})", draft.title, id);
        self.emit(AppEvent::SessionSaved {
            session_id: id.clone(),
        });

        // Saving may have touched NPCs server-side, refresh both.
        self.reload_sessions(auth).await;
        self.reload_npcs(auth).await;
        Ok(id)
    }

    pub async fn delete_session(&self, auth: &Credentials, session_id: &str) -> Result<()> {
        self.api.delete_session(auth, session_id).await?;
        log::info!("Session deleted: {}", session_id);
        self.emit(AppEvent::SessionDeleted {
            session_id: session_id.to_string(),
        });
        self.reload_sessions(auth).await;
        Ok(())
    }

    /// Fetch the server-rendered export and offer it as a JSON download.
    pub async fn export_session(
        &self,
        auth: &Credentials,
        session_id: &str,
        title: &str,
    ) -> Result<String> {
        let payload = self.api.export_session(auth, session_id).await?;
        let contents = serde_json::to_string_pretty(&payload)?;
        let filename = export_filename(title);
        self.downloads.offer_download(&filename, EXPORT_MIME, &contents)?;
        log::info!("Export offered as {}", filename);
        self.emit(AppEvent::ExportOffered {
            filename: filename.clone(),
        });
        Ok(filename)
    }

    // ─── NPCs ────────────────────────────────────────────────

    pub async fn save_npc(&self, auth: &Credentials, npc: &Npc) -> Result<()> {
        self.api.update_npc(auth, npc).await?;
        log::info!("NPC saved: {} ({})", npc.name, npc.id);
        self.emit(AppEvent::NpcSaved {
            npc_id: npc.id.clone(),
        });
        self.reload_npcs(auth).await;
        Ok(())
    }

    pub async fn create_npc(&self, auth: &Credentials, npc: &NewNpc) -> Result<String> {
        let created = self.api.create_npc(auth, npc).await?;
        log::info!("NPC created: {} ({})", created.name, created.id);
        self.emit(AppEvent::NpcCreated {
            npc_id: created.id.clone(),
        });
        self.reload_npcs(auth).await;
        Ok(created.id)
    }

    pub async fn delete_npc(&self, auth: &Credentials, npc_id: &str) -> Result<()> {
        self.api.delete_npc(auth, npc_id).await?;
        log::info!("NPC deleted: {}", npc_id);
        self.emit(AppEvent::NpcDeleted {
            npc_id: npc_id.to_string(),
        });
        self.reload_npcs(auth).await;
        Ok(())
    }

    /// Hand selected text to the backend, which decides whether it creates a
    /// new NPC or appends to an existing one's history.
    pub async fn extract_npc(
        &self,
        auth: &Credentials,
        req: &ExtractionRequest,
    ) -> Result<ExtractionOutcome> {
        match self.api.extract_npc(auth, req).await {
            Ok(outcome) => {
                log::info!("NPC {} {}", req.npc_name, outcome.action);
                self.emit(AppEvent::NpcExtracted {
                    npc_name: req.npc_name.clone(),
                    action: outcome.action.clone(),
                });
                self.reload_npcs(auth).await;
                Ok(outcome)
            }
            Err(e) => {
                self.emit(AppEvent::ExtractionFailed);
                Err(e)
            }
        }
    }

    pub async fn suggest_npcs(&self, auth: &Credentials, text: &str) -> Result<Vec<String>> {
        let names = self.api.suggest_npcs(auth, text).await?;
        self.emit(AppEvent::NpcSuggestions(names.clone()));
        Ok(names)
    }
}
