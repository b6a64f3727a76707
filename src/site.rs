//! The site: where its files live and which route serves what.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;
use crate::router::Router;
use crate::{api, assets, pages};

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct Site {
    content: ContentStore,
    public_dir: PathBuf,
}

impl Site {
    pub fn new(data_dir: impl Into<PathBuf>, public_dir: impl Into<PathBuf>) -> Self {
        Self { content: ContentStore::new(data_dir), public_dir: public_dir.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_dir, &config.public_dir)
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// The full route table.
    pub fn router(self) -> Router {
        Router::new(Arc::new(self))
            .get("/",                 pages::home)
            .get("/about",            pages::about)
            .get("/projects",         pages::projects)
            .get("/blog",             pages::blog)
            .get("/api/nav-links",    api::nav_links)
            .get("/api/social-links", api::social_links)
            .get("/api/experiences",  api::experiences)
            .get("/api/projects",     api::projects)
            .get("/api/skills",       api::skills)
            .get("/{*file}",          assets::serve)
    }
}
