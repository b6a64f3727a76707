//! Per-request access log.
//!
//! Emitted after dispatch, once the status is known:
//!
//! ```text
//!  INFO GET /about 200 1.84 ms method="GET" path="/about" status=200
//! ```
//!
//! Server errors log at `warn` so they stand out next to the handler's own
//! `error` line carrying the detail.

use std::time::Duration;

use tracing::{info, warn};

/// Records one completed request.
pub fn record(method: &str, path: &str, status: u16, elapsed: Duration) {
    let latency_ms = elapsed.as_secs_f64() * 1000.0;
    if status >= 500 {
        warn!(method, path, status, latency_ms, "{method} {path} {status} {latency_ms:.2} ms");
    } else {
        info!(method, path, status, latency_ms, "{method} {path} {status} {latency_ms:.2} ms");
    }
}
