//! Emberlog Core - lifecycle management for a host-loadable logging unit
//!
//! This crate provides the load/publish/teardown protocol for the `log`
//! unit of an embeddable module host:
//! - Acquire the process-wide logging facility exactly once per load
//! - Publish read-only build/version constants on the unit
//! - Guarantee the facility is released exactly once, whether the load
//!   fails partway through or the host later unloads the unit
//!
//! The external collaborators are modeled as seams: the logging facility
//! behind [`LogFacility`], the host's module machinery behind [`UnitHost`],
//! and build metadata behind [`BuildInfo`]. Default implementations
//! ([`TracingFacility`], [`Runtime`], [`BuildInfo::from_build_env`]) make
//! the crate usable standalone.

pub mod buildinfo;
pub mod errors;
pub mod facility;
pub mod host;
pub mod lifecycle;
pub mod schema;
pub mod unit;

// Re-export commonly used types
pub use buildinfo::BuildInfo;
pub use errors::{FacilityError, HostError, LoadError, Result};
pub use facility::{LogFacility, Profile, TracingFacility};
pub use host::{Runtime, UnitHost};
pub use lifecycle::load_log_unit;
pub use unit::{ConstValue, Unit};
