// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The session holder: at most one active bearer token, passed explicitly
/// into the API client instead of living in a process-wide global.
///
/// Transitions: a successful login/register exchange moves to
/// `Authenticated`; explicit logout or any 401 from the server moves back to
/// `Anonymous`. There is no expiry tracking; invalidity surfaces only as a
/// rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { token: String, email: String },
}

impl Session {
    pub fn authenticated(token: String, email: String) -> Self {
        Session::Authenticated { token, email }
    }

    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Session::Authenticated { email, .. } => Some(email),
            Session::Anonymous => None,
        }
    }
}

/// Persists the session between CLI invocations as a small JSON file in the
/// platform config dir.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: crate::config::config_dir()?.join("session.json"),
        })
    }

    /// Explicit location, used by tests.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::Anonymous);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Read session at {}", self.path.display()))?;
        let session = serde_json::from_str(&raw)
            .with_context(|| format!("Parse session at {}", self.path.display()))?;
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context("Failed to create config dir")?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Write session at {}", self.path.display()))?;
        Ok(())
    }

    /// Drops the stored token. Called on logout and whenever the server
    /// answers 401.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Remove session at {}", self.path.display()))?;
        }
        Ok(())
    }
}
