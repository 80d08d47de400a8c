//! MySQL credential override store.
//!
//! Holds the optional caller-supplied credential set that supersedes
//! environment defaults for every subsequent connectivity probe. The store
//! is process-wide: a write from one request is observed by all others.
//! Replacement is a single swap under the lock, so readers never see a
//! partially updated set; beyond that, concurrent writes race with
//! last-write-wins semantics, which is acceptable for a debug tool.

use common::errors::{AppError, AppResult};
use common::models::credentials::{CredentialSource, MysqlCredentials, MysqlOverrideRequest};
use tokio::sync::RwLock;

/// Stores the active MySQL credential override, if any.
///
/// Invariant: whenever an override is present, every field except the
/// password is non-empty — `set_override` rejects anything else.
pub struct CredentialStore {
    override_credentials: RwLock<Option<MysqlCredentials>>,
}

impl CredentialStore {
    /// Creates an empty store; probes fall back to environment defaults.
    pub fn new() -> Self {
        Self {
            override_credentials: RwLock::new(None),
        }
    }

    /// Validates and installs a caller-supplied credential set.
    ///
    /// An all-empty body means the caller declines to override: the store
    /// is cleared and probes return to environment defaults. Otherwise the
    /// host, user, port, and database name must be non-empty (the password
    /// is exempt — an empty password is valid MySQL configuration).
    pub async fn set_override(&self, req: MysqlOverrideRequest) -> AppResult<CredentialSource> {
        let missing = req.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        if req.is_all_empty() {
            *self.override_credentials.write().await = None;
            tracing::info!("Credential override cleared, using environment defaults");
            return Ok(CredentialSource::Environment);
        }

        let empty = req.empty_required_fields();
        if !empty.is_empty() {
            return Err(AppError::EmptyRequiredFields(empty));
        }

        let credentials = req
            .into_credentials()
            .ok_or_else(|| AppError::Internal("credential fields vanished mid-validation".into()))?;

        tracing::info!(host = %credentials.host, database = %credentials.database, "Credential override installed");
        *self.override_credentials.write().await = Some(credentials);
        Ok(CredentialSource::UserProvided)
    }

    /// Resolves the credential set a probe should use right now.
    ///
    /// Returns the stored override verbatim when active; otherwise builds
    /// a fresh set from the environment so later variable changes are
    /// picked up.
    pub async fn resolve(&self) -> MysqlCredentials {
        match self.override_credentials.read().await.as_ref() {
            Some(credentials) => credentials.clone(),
            None => MysqlCredentials::from_env(),
        }
    }

}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
