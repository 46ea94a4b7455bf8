//! The published unit: a named container of read-only constants with at
//! most one teardown hook, fired when the host destroys the unit.

use std::fmt;

use crate::errors::HostError;

/// A constant value published on a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstValue {
    Str(String),
    Int(i64),
}

type TeardownHook = Box<dyn FnOnce() + Send>;

/// A loadable, host-managed container exposing named read-only constants
///
/// The constant table preserves binding order. The teardown hook is armed
/// at most once, after the unit is fully populated, and fires exactly
/// once when the unit is dropped - whether through [`crate::Runtime::unload`],
/// host destruction, or the unit being discarded directly.
pub struct Unit {
    name: String,
    consts: Vec<(&'static str, ConstValue)>,
    teardown: Option<TeardownHook>,
}

impl Unit {
    /// Create an empty unit with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            consts: Vec::new(),
            teardown: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constant names in the order they were bound
    pub fn constant_names(&self) -> Vec<&'static str> {
        self.consts.iter().map(|(name, _)| *name).collect()
    }

    /// Look up a constant by name
    pub fn get(&self, name: &str) -> Option<&ConstValue> {
        self.consts
            .iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| value)
    }

    /// Look up a string constant; `None` if absent or not a string
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ConstValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Look up an integer constant; `None` if absent or not an integer
    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ConstValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.consts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consts.is_empty()
    }

    pub(crate) fn push_const(&mut self, name: &'static str, value: ConstValue) {
        self.consts.push((name, value));
    }

    /// Register the teardown action for this unit
    ///
    /// Exactly one hook may be registered per unit; a second registration
    /// is refused.
    ///
    /// # Errors
    ///
    /// Returns `TeardownAlreadyArmed` if a hook is already registered.
    pub fn arm_teardown<F>(&mut self, hook: F) -> Result<(), HostError>
    where
        F: FnOnce() + Send + 'static,
    {
        if self.teardown.is_some() {
            return Err(HostError::TeardownAlreadyArmed {
                unit: self.name.clone(),
            });
        }
        self.teardown = Some(Box::new(hook));
        Ok(())
    }

    /// Whether a teardown hook is armed
    pub fn has_teardown(&self) -> bool {
        self.teardown.is_some()
    }
}

impl Drop for Unit {
    fn drop(&mut self) {
        // take() means the hook can run at most once per unit
        if let Some(hook) = self.teardown.take() {
            hook();
        }
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("name", &self.name)
            .field("consts", &self.consts)
            .field("teardown_armed", &self.teardown.is_some())
            .finish()
    }
}
