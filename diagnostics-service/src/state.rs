//! Application state for the diagnostics service.

use std::sync::Arc;
use std::time::Duration;

use common::config::AppConfig;

use crate::credential_store::CredentialStore;
use crate::prober::{ConnectivityProbe, DriverProbe};

/// Application state shared across handlers.
///
/// The credential store is the only mutable piece and is shared by all
/// concurrent requests for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub credentials: Arc<CredentialStore>,
    pub prober: Arc<dyn ConnectivityProbe>,
}

impl AppState {
    /// Creates a new application state with the driver-backed prober.
    pub fn new(config: AppConfig) -> Self {
        let connect_timeout = Duration::from_secs(config.connect_timeout_secs);
        Self {
            credentials: Arc::new(CredentialStore::new()),
            prober: Arc::new(DriverProbe::new(connect_timeout)),
            config,
        }
    }
}
