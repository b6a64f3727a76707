//! Static files from the public directory (stylesheets, images, scripts).
//!
//! Mounted as the `GET /{*file}` catch-all, so it only sees paths no page or
//! API route claimed. Anything that is not a readable regular file inside the
//! public root gets the same `404 Not found` as an unknown route.
//!
//! The path is percent-decoded before the traversal check, so
//! `/img/my%20photo.png` finds `img/my photo.png` and `/%2e%2e/...` is still
//! refused.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::request::Request;
use crate::response::{self, ContentType, Response};

/// Never fails: a missing or unreadable file is a 404, not a fault.
pub async fn serve(req: Request) -> Result<Response, Error> {
    let relative = req.param("file").and_then(decode).and_then(|raw| safe_relative(&raw));
    let Some(relative) = relative else {
        return Ok(response::not_found());
    };
    let path = req.site().public_dir().join(relative);

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Ok(response::not_found()),
    }

    match tokio::fs::read(&path).await {
        Ok(body) => {
            let content_type = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or(ContentType::OctetStream, ContentType::from_extension);
            Ok(Response::builder().bytes(content_type, body))
        }
        Err(e) => {
            debug!(path = %req.path(), error = %e, "asset unreadable");
            Ok(response::not_found())
        }
    }
}

/// Percent-decodes a request path. Sequences that do not decode to UTF-8
/// match no file.
fn decode(raw: &str) -> Option<String> {
    urlencoding::decode(raw).ok().map(|decoded| decoded.into_owned())
}

/// Accepts only plain relative paths: no `..`, no root, no drive prefix.
fn safe_relative(raw: &str) -> Option<PathBuf> {
    let path = Path::new(raw);
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!clean.as_os_str().is_empty()).then_some(clean)
}
