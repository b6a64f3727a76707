//! Server-rendered pages.
//!
//! Each page is one struct that is both the askama template and the data
//! context handed to it. Composing a page means loading the shared nav and
//! social links plus whatever lists that page shows; the home page also cuts
//! the projects down to a [`preview`].

use askama::Template;
use serde::Serialize;

use crate::content::{ContentStore, Record, SharedContext, preview};
use crate::error::Error;
use crate::request::Request;
use crate::response::Page;

#[derive(Debug, Serialize, Template)]
#[template(path = "index.html")]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub title: &'static str,
    #[serde(flatten)]
    pub shared: SharedContext,
    pub preview_projects: Vec<Record>,
}

#[derive(Debug, Serialize, Template)]
#[template(path = "about.html")]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub title: &'static str,
    #[serde(flatten)]
    pub shared: SharedContext,
    pub experiences: Vec<Record>,
    pub skills_root: Vec<Record>,
}

#[derive(Debug, Serialize, Template)]
#[template(path = "projects.html")]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPage {
    pub title: &'static str,
    #[serde(flatten)]
    pub shared: SharedContext,
    pub projects: Vec<Record>,
}

#[derive(Debug, Serialize, Template)]
#[template(path = "blog.html")]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    pub title: &'static str,
    #[serde(flatten)]
    pub shared: SharedContext,
}

impl HomePage {
    pub async fn compose(store: &ContentStore) -> Result<Self, Error> {
        let shared = store.shared().await?;
        let projects = store.projects().await?;
        Ok(Self {
            title: "Massimo v1",
            shared,
            preview_projects: preview(&projects).to_vec(),
        })
    }
}

impl AboutPage {
    pub async fn compose(store: &ContentStore) -> Result<Self, Error> {
        let shared = store.shared().await?;
        let experiences = store.jobs().await?;
        let skills_root = store.skills().await?;
        Ok(Self { title: "About", shared, experiences, skills_root })
    }
}

impl ProjectsPage {
    pub async fn compose(store: &ContentStore) -> Result<Self, Error> {
        let shared = store.shared().await?;
        let projects = store.projects().await?;
        Ok(Self { title: "Projects", shared, projects })
    }
}

impl BlogPage {
    pub async fn compose(store: &ContentStore) -> Result<Self, Error> {
        let shared = store.shared().await?;
        Ok(Self { title: "Blog", shared })
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

// GET /
pub async fn home(req: Request) -> Result<Page<HomePage>, Error> {
    HomePage::compose(req.site().content()).await.map(Page)
}

// GET /about
pub async fn about(req: Request) -> Result<Page<AboutPage>, Error> {
    AboutPage::compose(req.site().content()).await.map(Page)
}

// GET /projects
pub async fn projects(req: Request) -> Result<Page<ProjectsPage>, Error> {
    ProjectsPage::compose(req.site().content()).await.map(Page)
}

// GET /blog
pub async fn blog(req: Request) -> Result<Page<BlogPage>, Error> {
    BlogPage::compose(req.site().content()).await.map(Page)
}
