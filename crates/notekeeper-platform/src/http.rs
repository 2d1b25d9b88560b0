//! REST adapter for the notes backend.
//!
//! Uses browser `fetch()` via gloo-net. Every request is built from the
//! credentials passed in by the caller and sent as HTTP Basic auth.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use notekeeper_core::ports::NotesApi;
use notekeeper_types::{
    NotesError, Result,
    auth::{AuthCheck, Credentials},
    config::ClientConfig,
    npc::{ExtractionOutcome, ExtractionRequest, NewNpc, Npc},
    session::{Session, SessionDraft},
};

/// `Authorization` header value for `credentials`.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", BASE64.encode(pair))
}

#[derive(Deserialize)]
struct Suggestions {
    #[serde(default)]
    suggested_npcs: Vec<String>,
}

pub struct HttpNotesApi {
    config: ClientConfig,
}

impl HttpNotesApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn authorized(builder: RequestBuilder, auth: &Credentials) -> RequestBuilder {
        builder.header("Authorization", &basic_auth_header(auth))
    }

    fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request> {
        builder
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| NotesError::Serialization(e.to_string()))
    }

    async fn send(request: Request) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| NotesError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        if status == 401 {
            return Err(NotesError::Unauthorized);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(NotesError::Http { status, body })
    }

    async fn send_empty(builder: RequestBuilder) -> Result<Response> {
        let request = builder
            .build()
            .map_err(|e| NotesError::Network(e.to_string()))?;
        Self::send(request).await
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| NotesError::Serialization(e.to_string()))
    }
}

#[async_trait(?Send)]
impl NotesApi for HttpNotesApi {
    async fn check_auth(&self, candidate: &Credentials) -> Result<AuthCheck> {
        let builder = Self::authorized(Request::get(&self.url("auth/check")), candidate);
        match Self::send_empty(builder).await {
            Ok(response) => Self::read(response).await,
            Err(NotesError::Unauthorized) => Ok(AuthCheck::default()),
            Err(e) => Err(e),
        }
    }

    async fn list_sessions(&self, auth: &Credentials) -> Result<Vec<Session>> {
        let builder = Self::authorized(Request::get(&self.url("sessions")), auth);
        Self::read(Self::send_empty(builder).await?).await
    }

    async fn create_session(&self, auth: &Credentials, draft: &SessionDraft) -> Result<Session> {
        let builder = Self::authorized(Request::post(&self.url("sessions")), auth);
        let response = Self::send(Self::with_json(builder, draft)?).await?;
        Self::read(response).await
    }

    async fn update_session(
        &self,
        auth: &Credentials,
        id: &str,
        draft: &SessionDraft,
    ) -> Result<Session> {
        let url = self.url(&format!("sessions/{}", id));
        let builder = Self::authorized(Request::put(&url), auth);
        let response = Self::send(Self::with_json(builder, draft)?).await?;
        Self::read(response).await
    }

    async fn delete_session(&self, auth: &Credentials, id: &str) -> Result<()> {
        let url = self.url(&format!("sessions/{}", id));
        Self::send_empty(Self::authorized(Request::delete(&url), auth)).await?;
        Ok(())
    }

    async fn export_session(&self, auth: &Credentials, id: &str) -> Result<Value> {
        let url = self.url(&format!("sessions/{}/export", id));
        let builder = Self::authorized(Request::get(&url), auth);
        Self::read(Self::send_empty(builder).await?).await
    }

    async fn list_npcs(&self, auth: &Credentials) -> Result<Vec<Npc>> {
        let builder = Self::authorized(Request::get(&self.url("npcs")), auth);
        Self::read(Self::send_empty(builder).await?).await
    }

    async fn create_npc(&self, auth: &Credentials, npc: &NewNpc) -> Result<Npc> {
        let builder = Self::authorized(Request::post(&self.url("npcs")), auth);
        let response = Self::send(Self::with_json(builder, npc)?).await?;
        Self::read(response).await
    }

    async fn update_npc(&self, auth: &Credentials, npc: &Npc) -> Result<Npc> {
        let url = self.url(&format!("npcs/{}", npc.id));
        let builder = Self::authorized(Request::put(&url), auth);
        let response = Self::send(Self::with_json(builder, npc)?).await?;
        Self::read(response).await
    }

    async fn delete_npc(&self, auth: &Credentials, id: &str) -> Result<()> {
        let url = self.url(&format!("npcs/{}", id));
        Self::send_empty(Self::authorized(Request::delete(&url), auth)).await?;
        Ok(())
    }

    async fn extract_npc(
        &self,
        auth: &Credentials,
        req: &ExtractionRequest,
    ) -> Result<ExtractionOutcome> {
        let builder = Self::authorized(Request::post(&self.url("extract-npc")), auth);
        let response = Self::send(Self::with_json(builder, req)?).await?;
        Self::read(response).await
    }

    async fn suggest_npcs(&self, auth: &Credentials, text: &str) -> Result<Vec<String>> {
        let builder = Self::authorized(Request::post(&self.url("suggest-npcs")), auth);
        let body = json!({ "text": text });
        let response = Self::send(Self::with_json(builder, &body)?).await?;
        let suggestions: Suggestions = Self::read(response).await?;
        Ok(suggestions.suggested_npcs)
    }
}
