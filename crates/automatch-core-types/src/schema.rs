//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Matcher identifiers
pub const FIELD_TYPE_NAME: &str = "type_name";
pub const FIELD_PROPERTY: &str = "property";
pub const FIELD_METHOD: &str = "method";

// Collection sizes
pub const FIELD_PROPERTY_COUNT: &str = "property_count";
pub const FIELD_ELEMENT_COUNT: &str = "element_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_EQUAL_TO: &str = "equal_to";
pub const OP_CONTAINS: &str = "contains";
pub const OP_CONTAINS_IN_ANY_ORDER: &str = "contains_in_any_order";
pub const OP_DISCOVER: &str = "discover";
