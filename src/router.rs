//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Matching is as forgiving
//! as the usual web-framework defaults:
//!
//! - one trailing slash is ignored (`/about/` is `/about`);
//! - literal routes match case-insensitively (`/About` is `/about`), while
//!   catch-all parameters keep the request's case, since asset file names
//!   are case-sensitive;
//! - `HEAD` runs the `GET` handler and drops the body.
//!
//! Anything else with no handler gets the plain-text `404 Not found`.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::error::Error;
use crate::handler::{self, BoxedHandler};
use crate::method::Method;
use crate::request::Request;
use crate::response::{self, IntoResponse, Response};
use crate::site::Site;

/// The application router.
///
/// Built once at startup around a shared [`Site`] and passed to
/// [`Server::serve`](crate::Server::serve). Every registration returns `self`
/// so the route table reads as one chain. Route paths are registered in
/// lowercase.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    site: Arc<Site>,
}

impl Router {
    pub fn new(site: Arc<Site>) -> Self {
        Self { routes: HashMap::new(), site }
    }

    /// Register a `GET` handler (also answers `HEAD`). Returns `self` for chaining.
    pub fn get<F, Fut, R>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, Error>> + Send + 'static,
        R: IntoResponse,
    {
        self.on(Method::Get, path, handler)
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax, catch-alls `{*name}`.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Route tables are static, so this fires at
    /// startup, never per request.
    pub fn on<F, Fut, R>(mut self, method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, Error>> + Send + 'static,
        R: IntoResponse,
    {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler::erase(handler))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Routes one request and produces one response.
    pub async fn dispatch(&self, method: Method, path: &str) -> Response {
        let head = method == Method::Head;
        let tree_method = if head { Method::Get } else { method };
        let path = trim_trailing_slash(path);

        let mut response = match self.lookup(tree_method, path) {
            Some((handler, params)) => {
                let req = Request::new(method, path.to_owned(), params, Arc::clone(&self.site));
                handler(req).await
            }
            None => response::not_found(),
        };

        if head {
            response.body.clear();
        }
        response
    }

    /// Tries the lowercased path against literal routes first, then the
    /// path as sent (for catch-alls).
    fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let lowered = path.to_ascii_lowercase();

        if let Ok(matched) = tree.at(&lowered) {
            if matched.params.is_empty() {
                return Some((Arc::clone(matched.value), HashMap::new()));
            }
        }

        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

/// Drops one trailing `/`, except from the root path.
fn trim_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
