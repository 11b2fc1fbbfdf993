//! Persisted credential storage.
//!
//! Credentials survive restarts in a single JSON file
//! (`${SWEETSHOP_HOME}/credentials.json`) holding exactly three optional
//! string fields: token, role, username. The file is read and rewritten
//! whole; writes only happen on login/logout, which are user-triggered and
//! therefore serialized.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// The three fields the store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKey {
    Token,
    Role,
    Username,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

impl StoredCredentials {
    fn field(&self, key: CredentialKey) -> &Option<String> {
        match key {
            CredentialKey::Token => &self.token,
            CredentialKey::Role => &self.role,
            CredentialKey::Username => &self.username,
        }
    }

    fn field_mut(&mut self, key: CredentialKey) -> &mut Option<String> {
        match key {
            CredentialKey::Token => &mut self.token,
            CredentialKey::Role => &mut self.role,
            CredentialKey::Username => &mut self.username,
        }
    }
}

/// File-backed credential store.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Store at the default location under the app home.
    pub fn from_home() -> Self {
        Self::new(paths::credentials_path())
    }

    /// Store at an explicit path (tests point this at a tempdir).
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads a single field. A missing file reads as absent.
    pub fn get(&self, key: CredentialKey) -> Result<Option<String>> {
        Ok(self.load()?.field(key).clone())
    }

    /// Writes a single field, creating the file if needed.
    pub fn set(&self, key: CredentialKey, value: &str) -> Result<()> {
        let mut creds = self.load()?;
        *creds.field_mut(key) = Some(value.to_string());
        self.save(&creds)
    }

    /// Removes a single field. Removing from a missing file is a no-op.
    pub fn remove(&self, key: CredentialKey) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut creds = self.load()?;
        *creds.field_mut(key) = None;
        self.save(&creds)
    }

    fn load(&self) -> Result<StoredCredentials> {
        if !self.path.exists() {
            return Ok(StoredCredentials::default());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn save(&self, creds: &StoredCredentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(creds)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}
