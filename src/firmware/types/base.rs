//! Capacity constants shared across the controller. All buffers are
//! fixed-size; runtime limits (queue capacity) are clamped to these.

/// Longest local artifact path, storage root plus stamped filename.
pub const ARTIFACT_PATH_MAX: usize = 96;
/// Longest remote path; sized so a full remote root plus a full local
/// basename always fits.
pub const REMOTE_PATH_MAX: usize = 176;
/// Compile-time slot count backing the upload queue; the configured
/// capacity may be smaller, never larger.
pub const UPLOAD_QUEUE_SLOTS: usize = 16;
/// Longest server response line the transfer agent will inspect.
pub const RESPONSE_LINE_MAX: usize = 128;

pub const STORAGE_ROOT_MAX: usize = 64;
pub const REMOTE_ROOT_MAX: usize = 64;
pub const HOST_MAX: usize = 64;
pub const CREDENTIAL_MAX: usize = 64;
