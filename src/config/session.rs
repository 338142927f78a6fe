// src/config/session.rs
use std::env;

use thiserror::Error;

const SESSION_VAR: &str = "SESSION_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SESSION_ID is not set (checked environment and .env)")]
    MissingSessionId,
}

/// Authenticated session state. Built once at startup and handed to the
/// transport; nothing reads process-wide state at request time.
#[derive(Clone, Debug)]
pub struct Session {
    session_id: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self { session_id: session_id.into() }
    }

    /// Load the session token from `SESSION_ID`, with `.env` as a fallback
    /// source. How the token was obtained is not our problem.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        match env::var(SESSION_VAR) {
            Ok(id) if !id.trim().is_empty() => Ok(Self::new(id)),
            _ => Err(ConfigError::MissingSessionId),
        }
    }

    /// Cookie header value the site expects.
    pub fn cookie(&self) -> String {
        format!("SESS={}", self.session_id)
    }
}
