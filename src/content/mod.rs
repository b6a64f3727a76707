//! Content loading: the site's JSON data documents.
//!
//! Every document is read fresh from the data root on each call. Nothing is
//! cached and nothing is written back, so concurrent requests never see each
//! other.
//!
//! | Document | List key |
//! |---|---|
//! | `navLinks.json` | `navLinks` (legacy spelling `navLink` accepted) |
//! | `socialLinks.json` | `socialLinks` |
//! | `projects.json` | `projects` |
//! | `experiences.json` | `jobs` |
//! | `skills.json` | `Skills` |

mod document;
mod preview;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::Error;

pub use document::{Document, Record};
pub use preview::{preview, preview_len};

pub const NAV_LINKS: &str = "navLinks.json";
pub const SOCIAL_LINKS: &str = "socialLinks.json";
pub const PROJECTS: &str = "projects.json";
pub const EXPERIENCES: &str = "experiences.json";
pub const SKILLS: &str = "skills.json";

/// Compatibility shim: older data files spell the nav key `navLink`.
const NAV_KEYS: &[&str] = &["navLinks", "navLink"];

/// Reads data documents from a fixed directory.
#[derive(Clone, Debug)]
pub struct ContentStore {
    root: PathBuf,
}

/// The navigation and social links every page carries.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedContext {
    pub nav_links: Vec<Record>,
    pub social_links: Vec<Record>,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads and parses `name`, relative to the data root.
    pub async fn read_document(&self, name: &str) -> Result<Document, Error> {
        let path = self.root.join(name);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(source) => return Err(Error::Read { path, source }),
        };
        let value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(source) => return Err(Error::Parse { path, source }),
        };
        debug!(path = %path.display(), bytes = raw.len(), "document loaded");
        Ok(Document::new(path, value))
    }

    pub async fn nav_links(&self) -> Result<Vec<Record>, Error> {
        self.read_document(NAV_LINKS).await?.into_first_list(NAV_KEYS)
    }

    pub async fn social_links(&self) -> Result<Vec<Record>, Error> {
        self.read_document(SOCIAL_LINKS).await?.into_list("socialLinks")
    }

    pub async fn projects(&self) -> Result<Vec<Record>, Error> {
        self.read_document(PROJECTS).await?.into_list("projects")
    }

    pub async fn jobs(&self) -> Result<Vec<Record>, Error> {
        self.read_document(EXPERIENCES).await?.into_list("jobs")
    }

    pub async fn skills(&self) -> Result<Vec<Record>, Error> {
        self.read_document(SKILLS).await?.into_list("Skills")
    }

    /// Loads nav and social links concurrently.
    pub async fn shared(&self) -> Result<SharedContext, Error> {
        let (nav_links, social_links) = tokio::try_join!(self.nav_links(), self.social_links())?;
        Ok(SharedContext { nav_links, social_links })
    }
}
