//! Utility modules.

/// Keeps response bodies from flooding debug/error logs.
pub mod log_sanitizer;
