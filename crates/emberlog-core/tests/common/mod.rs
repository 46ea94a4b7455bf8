use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use emberlog_core::{FacilityError, HostError, LogFacility, Unit, UnitHost};

/// Facility double that keeps a full acquire/release ledger
///
/// `acquired_count` is the net outstanding-lease count; the raw totals
/// let tests assert exactly-once behavior rather than just net-zero.
#[derive(Default)]
pub struct CountingFacility {
    fail_acquire: AtomicBool,
    acquires: AtomicUsize,
    releases: AtomicUsize,
}

impl CountingFacility {
    pub fn new() -> Self {
        Self::default()
    }

    /// A facility whose acquire always fails
    #[allow(dead_code)]
    pub fn failing() -> Self {
        let facility = Self::default();
        facility.fail_acquire.store(true, Ordering::SeqCst);
        facility
    }

    #[allow(dead_code)]
    pub fn total_acquires(&self) -> usize {
        self.acquires.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn total_releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

impl LogFacility for CountingFacility {
    fn acquire(&self) -> Result<(), FacilityError> {
        if self.fail_acquire.load(Ordering::SeqCst) {
            return Err(FacilityError::SubscriberInstall {
                reason: "armed to fail".to_string(),
            });
        }
        self.acquires.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }

    fn acquired_count(&self) -> usize {
        self.acquires
            .load(Ordering::SeqCst)
            .saturating_sub(self.releases.load(Ordering::SeqCst))
    }
}

/// Host wrapper that fails the Nth host call (1-based), delegating
/// everything else to the wrapped host
///
/// Call 1 is `create_unit`; the binds follow in the lifecycle's canonical
/// order, so call 2 is the `version` bind and call 6 the `commit` bind.
#[allow(dead_code)]
pub struct FlakyHost<H> {
    inner: H,
    fail_at: usize,
    calls: usize,
}

#[allow(dead_code)]
impl<H: UnitHost> FlakyHost<H> {
    pub fn new(inner: H, fail_at: usize) -> Self {
        Self {
            inner,
            fail_at,
            calls: 0,
        }
    }

    fn fails_now(&mut self) -> bool {
        self.calls += 1;
        self.calls == self.fail_at
    }
}

impl<H: UnitHost> UnitHost for FlakyHost<H> {
    fn create_unit(&mut self, name: &str) -> Result<Unit, HostError> {
        if self.fails_now() {
            return Err(HostError::UnitTableFull);
        }
        self.inner.create_unit(name)
    }

    fn bind_str(
        &mut self,
        unit: &mut Unit,
        name: &'static str,
        value: &str,
    ) -> Result<(), HostError> {
        if self.fails_now() {
            return Err(HostError::ConstTableFull {
                unit: unit.name().to_string(),
            });
        }
        self.inner.bind_str(unit, name, value)
    }

    fn bind_int(
        &mut self,
        unit: &mut Unit,
        name: &'static str,
        value: i64,
    ) -> Result<(), HostError> {
        if self.fails_now() {
            return Err(HostError::ConstTableFull {
                unit: unit.name().to_string(),
            });
        }
        self.inner.bind_int(unit, name, value)
    }
}
