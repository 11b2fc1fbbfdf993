//! Session store.
//!
//! Holds the authenticated identity for the current process and keeps it in
//! sync with the credential file. No network calls originate here: the store
//! only manages state transitions, not acquisition of credentials.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::credentials::{CredentialKey, CredentialStore};

/// Account role, as issued by the auth endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A role string the client does not recognize.
#[derive(Debug)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

/// The authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub username: String,
}

/// Session lifecycle state.
///
/// `Loading` exists so that route decisions can tell "not hydrated yet"
/// apart from "anonymous"; no route renders while loading.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Anonymous,
    Authenticated { session: Session, token: String },
}

impl SessionState {
    /// Returns the session if authenticated.
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated { session, .. } => Some(session),
            _ => None,
        }
    }

    /// Returns the bearer token if authenticated.
    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

/// Process-wide session store backed by the credential file.
#[derive(Debug)]
pub struct SessionStore {
    creds: CredentialStore,
    state: SessionState,
}

impl SessionStore {
    /// Creates a store in the `Loading` state. Call [`hydrate`] before the
    /// first route decision.
    ///
    /// [`hydrate`]: SessionStore::hydrate
    pub fn new(creds: CredentialStore) -> Self {
        Self {
            creds,
            state: SessionState::Loading,
        }
    }

    /// Rebuilds the in-memory session from persisted credentials.
    ///
    /// The session is present iff both token and role are persisted (and the
    /// role parses); anything else hydrates to anonymous. A session is never
    /// fabricated without a persisted token.
    pub fn hydrate(&mut self) -> Result<&SessionState> {
        let token = self.creds.get(CredentialKey::Token)?;
        let role = self.creds.get(CredentialKey::Role)?;
        let username = self
            .creds
            .get(CredentialKey::Username)?
            .unwrap_or_default();

        self.state = match (token, role) {
            (Some(token), Some(role)) => match role.parse::<Role>() {
                Ok(role) => SessionState::Authenticated {
                    session: Session { role, username },
                    token,
                },
                Err(err) => {
                    tracing::warn!(%err, "persisted role not recognized, treating as anonymous");
                    SessionState::Anonymous
                }
            },
            _ => SessionState::Anonymous,
        };
        Ok(&self.state)
    }

    /// Persists the credentials, then replaces the in-memory session.
    ///
    /// A later `hydrate()` (e.g. after restart) reproduces this session.
    pub fn establish(&mut self, role: Role, username: &str, token: &str) -> Result<()> {
        self.creds.set(CredentialKey::Token, token)?;
        self.creds.set(CredentialKey::Role, &role.to_string())?;
        self.creds.set(CredentialKey::Username, username)?;
        self.state = SessionState::Authenticated {
            session: Session {
                role,
                username: username.to_string(),
            },
            token: token.to_string(),
        };
        Ok(())
    }

    /// Removes persisted credentials and drops the in-memory session.
    pub fn clear(&mut self) -> Result<()> {
        self.creds.remove(CredentialKey::Token)?;
        self.creds.remove(CredentialKey::Role)?;
        self.creds.remove(CredentialKey::Username)?;
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// Current session lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the session if authenticated.
    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }
}
