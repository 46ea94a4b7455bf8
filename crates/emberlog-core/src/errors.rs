use thiserror::Error;

/// Result type alias using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;

/// Why the host runtime refused an allocation or binding
///
/// Unit creation and constant binding are infallible except for resource
/// exhaustion in the host, so every variant here is a refusal rather than
/// a malfunction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host's unit table is at capacity
    #[error("host unit table is full")]
    UnitTableFull,

    /// The constant table of a unit is at capacity
    #[error("constant table of unit '{unit}' is full")]
    ConstTableFull { unit: String },

    /// A unit with this name is already installed
    #[error("unit already installed: {name}")]
    DuplicateUnit { name: String },

    /// The unit already carries a teardown hook
    #[error("teardown hook already armed for unit '{unit}'")]
    TeardownAlreadyArmed { unit: String },
}

/// Why the logging facility could not start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacilityError {
    /// The global log subscriber could not be installed
    #[error("could not install log subscriber: {reason}")]
    SubscriberInstall { reason: String },
}

/// Load failure taxonomy for the log unit
///
/// All three variants are terminal for that load attempt; nothing is
/// retried. The distinction exists for unwind-path selection and
/// diagnostics - callers may match on the variant but only need "load
/// failed".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The logging facility could not start; nothing was acquired
    #[error("logging facility failed to start")]
    LogInitFailed(#[source] FacilityError),

    /// The host could not allocate the unit container
    #[error("host could not allocate unit '{name}'")]
    UnitAllocFailed {
        name: &'static str,
        #[source]
        source: HostError,
    },

    /// Binding one of the published constants failed
    #[error("failed to publish constant '{field}'")]
    PublishFailed {
        field: &'static str,
        #[source]
        source: HostError,
    },
}

impl LoadError {
    /// Get the stable error code for this failure
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::LogInitFailed(_) => "ERR_LOG_INIT_FAILED",
            LoadError::UnitAllocFailed { .. } => "ERR_UNIT_ALLOC_FAILED",
            LoadError::PublishFailed { .. } => "ERR_PUBLISH_FAILED",
        }
    }
}
