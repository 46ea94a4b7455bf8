//! Tracing-backed logging facility
//!
//! The default process-wide facility over `tracing-subscriber`. The
//! global subscriber installs at most once per process, on the first
//! successful acquire; later acquires only add leases.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use super::LogFacility;
use crate::errors::FacilityError;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Registry-only output for deterministic testing
    Test,
}

#[derive(Debug, PartialEq, Eq)]
enum InstallState {
    Pending,
    Installed,
}

/// Default facility backend over the global tracing subscriber
pub struct TracingFacility {
    profile: Profile,
    leases: AtomicUsize,
    install: Mutex<InstallState>,
}

impl TracingFacility {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            leases: AtomicUsize::new(0),
            install: Mutex::new(InstallState::Pending),
        }
    }

    fn try_install(&self) -> Result<(), FacilityError> {
        let result: Result<(), String> = match self.profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("emberlog_core=debug")),
                )
                .try_init()
                .map_err(|e| e.to_string()),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("emberlog_core=info")),
                )
                .try_init()
                .map_err(|e| e.to_string()),
            Profile::Test => tracing_subscriber::registry()
                .try_init()
                .map_err(|e| e.to_string()),
        };
        result.map_err(|reason| FacilityError::SubscriberInstall { reason })
    }
}

impl Default for TracingFacility {
    fn default() -> Self {
        Self::new(Profile::Development)
    }
}

impl LogFacility for TracingFacility {
    fn acquire(&self) -> Result<(), FacilityError> {
        let mut state = match self.install.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if *state == InstallState::Pending {
            self.try_install()?;
            *state = InstallState::Installed;
        }
        self.leases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn release(&self) {
        // saturate at zero; an unmatched release is a caller bug but
        // release itself stays infallible
        let _ = self
            .leases
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    fn acquired_count(&self) -> usize {
        self.leases.load(Ordering::SeqCst)
    }
}
