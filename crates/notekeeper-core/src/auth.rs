//! Authentication gate.
//!
//! Holds the login form and the signed-in credentials. The credentials are
//! only ever stored after `/auth/check` accepted them and are dropped on
//! logout; nothing is persisted across reloads.

use notekeeper_types::auth::Credentials;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn {
        credentials: Credentials,
        username: String,
    },
}

#[derive(Debug, Default)]
pub struct AuthGate {
    pub form: LoginForm,
    state: AuthState,
    /// Bumped on every accepted login and kept across logouts
    logins: u64,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, AuthState::SignedIn { .. })
    }

    /// The session-scoped request context, present only while signed in.
    pub fn credentials(&self) -> Option<&Credentials> {
        match &self.state {
            AuthState::SignedIn { credentials, .. } => Some(credentials),
            AuthState::SignedOut => None,
        }
    }

    /// Id of the current login, present only while signed in.
    pub fn login_id(&self) -> Option<u64> {
        self.is_signed_in().then_some(self.logins)
    }

    pub fn username(&self) -> Option<&str> {
        match &self.state {
            AuthState::SignedIn { username, .. } => Some(username),
            AuthState::SignedOut => None,
        }
    }

    /// Record an accepted login. Returns `true` only on the transition into
    /// the signed-in state; a duplicate acceptance is ignored.
    pub fn accept(&mut self, credentials: Credentials, username: String) -> bool {
        if self.is_signed_in() {
            return false;
        }
        log::info!("Signed in as {}", username);
        self.form.error = None;
        self.form.password.clear();
        self.logins += 1;
        self.state = AuthState::SignedIn { credentials, username };
        true
    }

    pub fn reject(&mut self) {
        if self.is_signed_in() {
            return;
        }
        self.form.error = Some(INVALID_CREDENTIALS.to_string());
    }

    pub fn logout(&mut self) {
        if let AuthState::SignedIn { username, .. } = &self.state {
            log::info!("Signed out {}", username);
        }
        self.state = AuthState::SignedOut;
        self.form = LoginForm::default();
    }
}
