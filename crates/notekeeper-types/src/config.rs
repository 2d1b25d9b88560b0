use serde::{Deserialize, Serialize};

/// Build-time variable naming the backend base URL
pub const BACKEND_URL_VAR: &str = "NOTEKEEPER_BACKEND_URL";

const DEFAULT_API_PREFIX: &str = "/api";

/// Where the REST backend lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme + host (+ optional path). Empty means "same origin as the page".
    pub backend_url: String,
    pub api_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read the backend URL baked in at build time.
    pub fn from_env() -> Self {
        Self::with_backend_url(option_env!("NOTEKEEPER_BACKEND_URL").unwrap_or_default())
    }

    pub fn with_backend_url(url: impl Into<String>) -> Self {
        Self {
            backend_url: url.into().trim().to_string(),
            ..Self::default()
        }
    }

    pub fn has_backend_url(&self) -> bool {
        !self.backend_url.is_empty()
    }

    /// `backend_url` + `api_prefix`, joined with exactly one slash.
    pub fn api_base(&self) -> String {
        let base = self.backend_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, prefix)
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base(), path.trim_start_matches('/'))
    }
}
