use std::fmt;

use serde::{Deserialize, Serialize};

/// Basic-scheme credentials.
///
/// Once accepted by `/auth/check` this is the request context handed to every
/// outbound call; it lives exactly as long as the signed-in session.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `GET /auth/check`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthCheck {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}
