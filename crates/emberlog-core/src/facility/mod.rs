//! Logging facility lifecycle
//!
//! The facility is a process-wide singleton owned by the logging
//! subsystem itself. The lifecycle layer only takes and returns leases on
//! it and must never release without a matching prior acquire; scoped
//! leases in the load path enforce that.

pub mod subsys;
pub mod test_capture;

pub use subsys::{Profile, TracingFacility};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

use crate::errors::FacilityError;

/// Process-wide logging facility, seen as an acquire/release pair
///
/// Shared as `Arc<dyn LogFacility>` because the teardown hook of a loaded
/// unit outlives the load call.
pub trait LogFacility: Send + Sync {
    /// Take a lease on the facility, starting it if this is the first one
    ///
    /// # Errors
    ///
    /// Returns a `FacilityError` if the facility could not start; no
    /// lease is held afterwards.
    fn acquire(&self) -> Result<(), FacilityError>;

    /// Return a lease
    ///
    /// Infallible; any shutdown problem is the logging subsystem's own
    /// concern and is not surfaced here.
    fn release(&self);

    /// Number of outstanding leases
    fn acquired_count(&self) -> usize;
}
