//! Host runtime abstraction: unit allocation, constant binding, and the
//! installed-unit registry.

use std::collections::HashMap;

use crate::errors::HostError;
use crate::unit::{ConstValue, Unit};

/// Module-loading machinery of the host runtime, as seen by the
/// lifecycle layer
///
/// Creating a unit and binding a constant can only fail for resource
/// exhaustion in the host, which is why binding routes through the host
/// rather than the unit itself. The default bind implementations append
/// unconditionally; hosts with bounded tables override them.
pub trait UnitHost {
    /// Allocate an empty unit container with the given name
    ///
    /// # Errors
    ///
    /// Returns a `HostError` if the host cannot allocate another unit.
    fn create_unit(&mut self, name: &str) -> Result<Unit, HostError>;

    /// Bind a string constant onto the unit
    ///
    /// # Errors
    ///
    /// Returns a `HostError` if the host cannot hold another constant.
    fn bind_str(
        &mut self,
        unit: &mut Unit,
        name: &'static str,
        value: &str,
    ) -> Result<(), HostError> {
        unit.push_const(name, ConstValue::Str(value.to_string()));
        Ok(())
    }

    /// Bind an integer constant onto the unit
    ///
    /// # Errors
    ///
    /// Returns a `HostError` if the host cannot hold another constant.
    fn bind_int(
        &mut self,
        unit: &mut Unit,
        name: &'static str,
        value: i64,
    ) -> Result<(), HostError> {
        unit.push_const(name, ConstValue::Int(value));
        Ok(())
    }
}

/// Default in-process host runtime
///
/// HashMap-backed and single-threaded by design; the host serializes load
/// and unload of its units. Capacity limits are optional so that the
/// allocation-failure paths are real behavior, not just test fiction.
#[derive(Debug, Default)]
pub struct Runtime {
    units: HashMap<String, Unit>,
    max_units: Option<usize>,
    max_consts_per_unit: Option<usize>,
}

impl Runtime {
    /// An unbounded host
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with bounded unit and constant tables
    pub fn with_limits(max_units: usize, max_consts_per_unit: usize) -> Self {
        Self {
            units: HashMap::new(),
            max_units: Some(max_units),
            max_consts_per_unit: Some(max_consts_per_unit),
        }
    }

    /// Hand a fully built unit over to the host
    ///
    /// # Errors
    ///
    /// Returns `DuplicateUnit` if a unit with this name is already
    /// installed, or `UnitTableFull` if the host is at capacity.
    pub fn install(&mut self, unit: Unit) -> Result<(), HostError> {
        if self.units.contains_key(unit.name()) {
            return Err(HostError::DuplicateUnit {
                name: unit.name().to_string(),
            });
        }
        if let Some(max) = self.max_units {
            if self.units.len() >= max {
                return Err(HostError::UnitTableFull);
            }
        }
        self.units.insert(unit.name().to_string(), unit);
        Ok(())
    }

    /// Look up an installed unit by name
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    /// Number of installed units
    pub fn installed_count(&self) -> usize {
        self.units.len()
    }

    /// Destroy an installed unit, firing its teardown hook
    ///
    /// Returns whether a unit with this name was installed. Dropping the
    /// whole `Runtime` destroys every remaining unit the same way.
    pub fn unload(&mut self, name: &str) -> bool {
        self.units.remove(name).is_some()
    }
}

impl UnitHost for Runtime {
    fn create_unit(&mut self, name: &str) -> Result<Unit, HostError> {
        if let Some(max) = self.max_units {
            if self.units.len() >= max {
                return Err(HostError::UnitTableFull);
            }
        }
        Ok(Unit::new(name))
    }

    fn bind_str(
        &mut self,
        unit: &mut Unit,
        name: &'static str,
        value: &str,
    ) -> Result<(), HostError> {
        self.check_const_capacity(unit)?;
        unit.push_const(name, ConstValue::Str(value.to_string()));
        Ok(())
    }

    fn bind_int(
        &mut self,
        unit: &mut Unit,
        name: &'static str,
        value: i64,
    ) -> Result<(), HostError> {
        self.check_const_capacity(unit)?;
        unit.push_const(name, ConstValue::Int(value));
        Ok(())
    }
}

impl Runtime {
    fn check_const_capacity(&self, unit: &Unit) -> Result<(), HostError> {
        if let Some(max) = self.max_consts_per_unit {
            if unit.len() >= max {
                return Err(HostError::ConstTableFull {
                    unit: unit.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_unbounded_host_creates_and_binds() {
        let mut host = Runtime::new();
        let mut unit = host.create_unit("log").expect("create should succeed");

        host.bind_str(&mut unit, "version", "1.2.3")
            .expect("bind should succeed");
        host.bind_int(&mut unit, "build_number", 7)
            .expect("bind should succeed");

        assert_eq!(unit.get_str("version"), Some("1.2.3"));
        assert_eq!(unit.get_int("build_number"), Some(7));
    }

    #[test]
    fn test_full_unit_table_refuses_create() {
        let mut host = Runtime::with_limits(0, 8);
        let err = host.create_unit("log").expect_err("create must fail");
        assert_eq!(err, HostError::UnitTableFull);
    }

    #[test]
    fn test_full_const_table_refuses_bind() {
        let mut host = Runtime::with_limits(1, 1);
        let mut unit = host.create_unit("log").expect("create should succeed");

        host.bind_str(&mut unit, "version", "1.2.3")
            .expect("first bind fits");
        let err = host
            .bind_str(&mut unit, "host", "build-box")
            .expect_err("second bind must fail");
        assert_eq!(
            err,
            HostError::ConstTableFull {
                unit: "log".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_install_is_refused() {
        let mut host = Runtime::new();
        let first = host.create_unit("log").expect("create should succeed");
        let second = host.create_unit("log").expect("create should succeed");

        host.install(first).expect("first install should succeed");
        let err = host.install(second).expect_err("second install must fail");
        assert_eq!(
            err,
            HostError::DuplicateUnit {
                name: "log".to_string()
            }
        );
        assert_eq!(host.installed_count(), 1);
    }

    #[test]
    fn test_unload_fires_teardown_and_reports_presence() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let mut host = Runtime::new();
        let mut unit = host.create_unit("log").expect("create should succeed");
        unit.arm_teardown(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("arm should succeed");
        host.install(unit).expect("install should succeed");

        assert!(host.unload("log"));
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // nothing left to unload, nothing fires twice
        assert!(!host.unload("log"));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropping_runtime_destroys_installed_units() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let mut host = Runtime::new();
        let mut unit = host.create_unit("log").expect("create should succeed");
        unit.arm_teardown(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("arm should succeed");
        host.install(unit).expect("install should succeed");

        drop(host);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
