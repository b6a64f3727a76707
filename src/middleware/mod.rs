//! Cross-cutting request concerns.
//!
//! - [`trace`] — one access-log line per request: method, path, status, latency

pub mod trace;
