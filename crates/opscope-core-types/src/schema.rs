//! Canonical schema constants for structured operation logging
//!
//! These constants keep emitters and test assertions in agreement on
//! field keys and event names.

/// Tracing target used for every operation event
pub const TARGET: &str = "opscope";

// Canonical field keys for structured logging
pub const FIELD_OP: &str = "op";
pub const FIELD_OP_ID: &str = "op_id";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_EVENT_ID: &str = "event_id";
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_PAYLOAD: &str = "payload";
pub const FIELD_ERROR: &str = "error";
pub const FIELD_MESSAGE: &str = "message";
/// Raw message argument, before template rendering
pub const FIELD_DETAIL: &str = "detail";

// Template placeholder names
pub const ARG_NAME: &str = "name";
pub const ARG_ID: &str = "id";
pub const ARG_PAYLOAD: &str = "payload";
pub const ARG_MESSAGE: &str = "message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_START_WITH_ARGS: &str = "start_with_args";
pub const EVENT_END: &str = "end";
pub const EVENT_END_WITH_ARGS: &str = "end_with_args";
pub const EVENT_INFO: &str = "info";
pub const EVENT_WARNING: &str = "warning";
pub const EVENT_CRITICAL: &str = "critical";
