//! Standard error messages and codes for consistent error responses.

// Message constants
pub const INVALID_UUID: &str = "Invalid UUID format.";
pub const INVALID_JSON: &str = "Invalid JSON format.";
pub const BAD_REQUEST: &str = "Invalid request input.";
pub const NOT_FOUND_RESOURCE: &str = "Requested resource was not found.";
pub const CONFLICT: &str = "Request conflicts with current resource state.";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred.";
pub const SERVICE_UNAVAILABLE: &str = "Service is temporarily unavailable.";
pub const IO_ERROR: &str = "An I/O error occurred.";
pub const SERDE_JSON_ERROR: &str = "JSON serialization error.";

// Error codes for observability and debugging
pub const CODE_UUID: i32 = 1002;
pub const CODE_JSON_EXTRACTION: i32 = 1003;
pub const CODE_NOT_FOUND: i32 = 1004;
pub const CODE_INTERNAL: i32 = 1005;
pub const CODE_BAD_REQUEST: i32 = 1006;
pub const CODE_CONFLICT: i32 = 1008;
pub const CODE_SERVICE_UNAVAILABLE: i32 = 1010;

// I/O error code
pub const CODE_IO: i32 = 4001;

// JSON parsing error code
pub const CODE_SERDE_JSON: i32 = 5001;
