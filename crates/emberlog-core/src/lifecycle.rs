//! Load protocol for the log unit
//!
//! Bringing the unit up is a strict sequence: take a lease on the logging
//! facility, allocate the unit container, bind the build constants in
//! canonical order, arm the teardown hook. A failure at any step unwinds
//! exactly what was taken so far, in reverse order, through scoped
//! release - there is no hand-written cleanup chain.
//!
//! The teardown hook is registered only after full success, so "teardown
//! without a preceding successful load" is unrepresentable by
//! construction.

use std::sync::Arc;

use crate::buildinfo::BuildInfo;
use crate::errors::{FacilityError, LoadError};
use crate::facility::LogFacility;
use crate::host::UnitHost;
use crate::schema;
use crate::unit::Unit;

const OP_LOAD: &str = "load_log_unit";

/// Scoped lease on the logging facility
///
/// Created by a successful acquire; releases on drop unless the release
/// duty has been handed to the unit's teardown hook.
struct LogLease {
    facility: Arc<dyn LogFacility>,
    armed: bool,
}

impl LogLease {
    fn acquire(facility: Arc<dyn LogFacility>) -> Result<Self, FacilityError> {
        facility.acquire()?;
        Ok(Self {
            facility,
            armed: true,
        })
    }

    /// Hand the release duty elsewhere; the lease no longer releases on
    /// drop.
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LogLease {
    fn drop(&mut self) {
        if self.armed {
            self.facility.release();
        }
    }
}

/// Load the log unit
///
/// Starts the logging facility, publishes the build constants, and arms
/// the teardown hook that will stop the facility when the host destroys
/// the unit. The returned unit carries its own teardown: dropping it -
/// directly or through [`crate::Runtime::unload`] - releases the facility
/// exactly once.
///
/// On failure, everything acquired so far is unwound in reverse order:
/// the partially built unit is discarded, then the facility lease is
/// released. No partial success is ever returned.
///
/// # Errors
///
/// [`LoadError::LogInitFailed`] if the facility could not start,
/// [`LoadError::UnitAllocFailed`] if the host refused the unit container,
/// [`LoadError::PublishFailed`] if binding any constant failed. All are
/// terminal for this load attempt; nothing is retried.
pub fn load_log_unit(
    host: &mut dyn UnitHost,
    facility: Arc<dyn LogFacility>,
    info: &BuildInfo,
) -> Result<Unit, LoadError> {
    tracing::info!(
        component = module_path!(),
        op = OP_LOAD,
        event = schema::EVENT_START,
    );

    let lease = match LogLease::acquire(Arc::clone(&facility)) {
        Ok(lease) => lease,
        Err(err) => return Err(fail(LoadError::LogInitFailed(err))),
    };

    let mut unit = match host.create_unit(schema::LOG_UNIT_NAME) {
        Ok(unit) => unit,
        // the lease drop releases the facility
        Err(source) => {
            return Err(fail(LoadError::UnitAllocFailed {
                name: schema::LOG_UNIT_NAME,
                source,
            }))
        }
    };

    if let Err(err) = publish_constants(host, &mut unit, info) {
        // discard the partial unit first, then the lease releases
        drop(unit);
        return Err(fail(err));
    }

    let hook_facility = Arc::clone(&facility);
    if let Err(source) = unit.arm_teardown(move || hook_facility.release()) {
        drop(unit);
        return Err(fail(LoadError::UnitAllocFailed {
            name: schema::LOG_UNIT_NAME,
            source,
        }));
    }

    // the teardown hook now owns the release
    lease.disarm();

    tracing::info!(
        component = module_path!(),
        op = OP_LOAD,
        event = schema::EVENT_END,
    );
    Ok(unit)
}

/// Bind the build facts onto the unit in the canonical order
fn publish_constants(
    host: &mut dyn UnitHost,
    unit: &mut Unit,
    info: &BuildInfo,
) -> Result<(), LoadError> {
    bind_str(host, unit, schema::CONST_VERSION, info.version())?;
    bind_int(host, unit, schema::CONST_BUILD_NUMBER, info.build_number())?;
    bind_str(host, unit, schema::CONST_HOST, info.host())?;
    bind_str(host, unit, schema::CONST_DATE, info.date())?;
    bind_str(host, unit, schema::CONST_COMMIT, info.commit())?;
    bind_str(host, unit, schema::CONST_COMPILER, info.compiler())?;
    bind_str(host, unit, schema::CONST_BUILD_SYSTEM, info.build_system_id())?;
    bind_str(host, unit, schema::CONST_ALL, &info.summary())?;
    Ok(())
}

fn bind_str(
    host: &mut dyn UnitHost,
    unit: &mut Unit,
    field: &'static str,
    value: &str,
) -> Result<(), LoadError> {
    host.bind_str(unit, field, value)
        .map_err(|source| LoadError::PublishFailed { field, source })
}

fn bind_int(
    host: &mut dyn UnitHost,
    unit: &mut Unit,
    field: &'static str,
    value: i64,
) -> Result<(), LoadError> {
    host.bind_int(unit, field, value)
        .map_err(|source| LoadError::PublishFailed { field, source })
}

fn fail(err: LoadError) -> LoadError {
    tracing::error!(
        component = module_path!(),
        op = OP_LOAD,
        event = schema::EVENT_END_ERROR,
        err_code = err.code(),
        error = %err,
    );
    err
}
