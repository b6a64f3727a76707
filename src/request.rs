//! Incoming HTTP request type.

use std::collections::HashMap;
use std::sync::Arc;

use crate::method::Method;
use crate::site::Site;

/// An incoming request, as seen by a handler.
///
/// The site's routes take no query string or body, so a request is just the
/// matched method and path, any path parameters, and a handle to the [`Site`]
/// the router was built for.
pub struct Request {
    method: Method,
    path: String,
    params: HashMap<String, String>,
    site: Arc<Site>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        params: HashMap<String, String>,
        site: Arc<Site>,
    ) -> Self {
        Self { method, path, params, site }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn site(&self) -> &Site { &self.site }

    /// Returns a named path parameter.
    ///
    /// For a route `/{*file}`, `req.param("file")` on `/css/site.css` returns
    /// `Some("css/site.css")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
