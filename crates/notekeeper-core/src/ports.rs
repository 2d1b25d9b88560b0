//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `notekeeper-core` (pure Rust).
//! Implementations live in `notekeeper-platform` (browser adapters).
//! Every authenticated call takes the signed-in [`Credentials`] explicitly;
//! adapters keep no ambient auth state.

use async_trait::async_trait;
use serde_json::Value;
use notekeeper_types::{
    Result,
    auth::{AuthCheck, Credentials},
    npc::{ExtractionOutcome, ExtractionRequest, NewNpc, Npc},
    session::{Session, SessionDraft},
};

// ─── Backend Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait NotesApi {
    /// `GET /auth/check` using the candidate credentials
    async fn check_auth(&self, candidate: &Credentials) -> Result<AuthCheck>;

    async fn list_sessions(&self, auth: &Credentials) -> Result<Vec<Session>>;

    async fn create_session(&self, auth: &Credentials, draft: &SessionDraft) -> Result<Session>;

    async fn update_session(
        &self,
        auth: &Credentials,
        id: &str,
        draft: &SessionDraft,
    ) -> Result<Session>;

    async fn delete_session(&self, auth: &Credentials, id: &str) -> Result<()>;

    /// Server-rendered export payload, passed through untouched
    async fn export_session(&self, auth: &Credentials, id: &str) -> Result<Value>;

    async fn list_npcs(&self, auth: &Credentials) -> Result<Vec<Npc>>;

    async fn create_npc(&self, auth: &Credentials, npc: &NewNpc) -> Result<Npc>;

    /// Full-record update
    async fn update_npc(&self, auth: &Credentials, npc: &Npc) -> Result<Npc>;

    async fn delete_npc(&self, auth: &Credentials, id: &str) -> Result<()>;

    async fn extract_npc(
        &self,
        auth: &Credentials,
        req: &ExtractionRequest,
    ) -> Result<ExtractionOutcome>;

    async fn suggest_npcs(&self, auth: &Credentials, text: &str) -> Result<Vec<String>>;
}

// ─── Download Port ───────────────────────────────────────────

/// Hands a generated file to the user.
pub trait DownloadPort {
    fn offer_download(&self, filename: &str, mime: &str, contents: &str) -> Result<()>;
}
