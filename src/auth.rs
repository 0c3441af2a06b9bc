//! Authentication gate - a single shared access code.
//!
//! The tracker is gated by one static code compared against the configured
//! value; a successful check persists a boolean flag file that stands in
//! for the original deployment's client-local storage. There is no session
//! expiry, rotation, or per-user identity.

use crate::config::settings::Settings;
use crate::errors::Result;
use std::path::{Path, PathBuf};
use tracing::info;

const AUTH_FLAG_FILE: &str = ".tracker_auth";

/// Shared-code gate with a persisted authenticated flag.
#[derive(Debug, Clone)]
pub struct AuthGate {
    access_code: String,
    flag_path: PathBuf,
}

impl AuthGate {
    /// Builds the gate from settings; the flag file lives in the data dir.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            access_code: settings.access_code.clone(),
            flag_path: Path::new(&settings.data_dir).join(AUTH_FLAG_FILE),
        }
    }

    /// Whether the submitted code matches the configured one.
    #[must_use]
    pub fn verify_code(&self, code: &str) -> bool {
        code == self.access_code
    }

    /// Whether a prior successful authentication is on record.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        std::fs::read_to_string(&self.flag_path)
            .map(|contents| contents.trim() == "true")
            .unwrap_or(false)
    }

    /// Verifies the code and, on success, persists the authenticated flag.
    ///
    /// Returns whether the code was accepted.
    pub fn authenticate(&self, code: &str) -> Result<bool> {
        if !self.verify_code(code) {
            info!("Rejected authentication attempt");
            return Ok(false);
        }
        if let Some(parent) = self.flag_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.flag_path, "true")?;
        info!("Authenticated; flag persisted");
        Ok(true)
    }

    /// Clears the persisted flag, if any.
    pub fn sign_out(&self) -> Result<()> {
        if self.flag_path.exists() {
            std::fs::remove_file(&self.flag_path)?;
        }
        Ok(())
    }
}
