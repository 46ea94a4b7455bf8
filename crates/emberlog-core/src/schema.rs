//! Canonical name constants for the log unit and its diagnostics
//!
//! These constants ensure consistency between the lifecycle layer, the
//! host, and everything that reads the published unit.

/// Name the log unit is created under in the host runtime
pub const LOG_UNIT_NAME: &str = "log";

// Published constant names, in binding order
pub const CONST_VERSION: &str = "version";
pub const CONST_BUILD_NUMBER: &str = "build_number";
pub const CONST_HOST: &str = "host";
pub const CONST_DATE: &str = "date";
pub const CONST_COMMIT: &str = "commit";
pub const CONST_COMPILER: &str = "compiler";
/// Build-system identity; the name is kept stable for existing consumers
/// of the unit.
pub const CONST_BUILD_SYSTEM: &str = "cmake";
pub const CONST_ALL: &str = "all";

/// Every published constant name, in the order the lifecycle binds them
pub const PUBLISHED_CONSTANTS: [&str; 8] = [
    CONST_VERSION,
    CONST_BUILD_NUMBER,
    CONST_HOST,
    CONST_DATE,
    CONST_COMMIT,
    CONST_COMPILER,
    CONST_BUILD_SYSTEM,
    CONST_ALL,
];

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_constants_are_distinct() {
        for (i, a) in PUBLISHED_CONSTANTS.iter().enumerate() {
            for b in &PUBLISHED_CONSTANTS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_binding_order_is_fixed() {
        assert_eq!(PUBLISHED_CONSTANTS[0], CONST_VERSION);
        // commit is the fifth bind
        assert_eq!(PUBLISHED_CONSTANTS[4], CONST_COMMIT);
        assert_eq!(PUBLISHED_CONSTANTS[7], CONST_ALL);
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }
}
