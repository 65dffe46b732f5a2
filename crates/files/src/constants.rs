/// Mimetype reported when the filename extension has no known mapping.
pub const UNKNOWN_MIMETYPE: &str = "unknown";

/// Output pattern for `create_datetime` (local time, second precision).
pub const CREATE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
