//! The authenticated-session handle supplied by the auth component.

use secrecy::{ExposeSecret, SecretString};

/// Token and authentication flag for the current session.
///
/// The auth component owns login/logout; this is the read-only view the
/// user-data store consumes. The token is held as a [`SecretString`] so it
/// never leaks through `Debug` output.
#[derive(Debug, Clone)]
pub struct AuthSession {
    token: SecretString,
    is_auth: bool,
}

impl AuthSession {
    /// Session for a signed-in user.
    #[must_use]
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            is_auth: true,
        }
    }

    /// Session for a visitor who has not signed in.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            token: SecretString::from(String::new()),
            is_auth: false,
        }
    }

    /// Whether the session is authenticated.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        self.is_auth
    }

    /// The bearer token for API calls.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}
