//! Route handlers and their type-erased storage.
//!
//! Every route on the site is an `async fn(Request) -> Result<_, Error>`:
//! pages return `Page<_>`, the API returns `Json<_>`, assets a `Response`.
//! The router keeps them all in one tree per method, so each is wrapped once
//! at startup into a shared closure with a single concrete signature:
//!
//! ```text
//! async fn home(req: Request) -> Result<Page<HomePage>, Error>
//!        ↓ router.get("/", pages::home)
//! Arc<dyn Fn(Request) -> BoxFuture>
//!        ↓ per request
//! Ok(page)  → page.into_response()          200 text/html
//! Err(err)  → err.into_response()           logged, 500 "Server error"
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::Error;
use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A boxed future resolving to the finished response.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A stored route handler, shared by every request that hits the route.
pub(crate) type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync + 'static>;

/// Erases `handler`'s concrete type. Failures collapse to the generic 500
/// here, so handlers only ever use `?`.
pub(crate) fn erase<F, Fut, R>(handler: F) -> BoxedHandler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, Error>> + Send + 'static,
    R: IntoResponse,
{
    Arc::new(move |req: Request| -> BoxFuture {
        let fut = handler(req);
        Box::pin(async move {
            match fut.await {
                Ok(value) => value.into_response(),
                Err(err) => err.into_response(),
            }
        })
    })
}
