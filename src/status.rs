//! HTTP status codes the site answers with.
//!
//! ```rust
//! use portfolio::{Response, Status};
//!
//! Response::builder()
//!     .status(Status::NotFound)
//!     .text("Not found");
//! ```

/// The status codes a route can produce.
///
/// Every page and API route either succeeds, misses, or fails; there is no
/// redirect, no created resource and no client error beyond the 404.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    NotFound,            // 404
    InternalServerError, // 500
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::NotFound            => 404,
            Status::InternalServerError => 500,
        }
    }
}
