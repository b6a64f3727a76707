//! JSON API: each endpoint returns one stored list under a single key.
//!
//! ```text
//! GET /api/nav-links     → {"navLinks":    [...]}
//! GET /api/social-links  → {"socialLinks": [...]}
//! GET /api/experiences   → {"jobs":        [...]}
//! GET /api/projects      → {"projects":    [...]}
//! GET /api/skills        → {"Skills":      [...]}
//! ```
//!
//! Records pass through untouched; a missing key answers an empty list.

use serde::Serialize;

use crate::content::Record;
use crate::error::Error;
use crate::request::Request;
use crate::response::Json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLinks {
    pub nav_links: Vec<Record>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub social_links: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct Experiences {
    pub jobs: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct Projects {
    pub projects: Vec<Record>,
}

/// Same list the about page calls `skillsRoot`.
#[derive(Debug, Serialize)]
pub struct Skills {
    #[serde(rename = "Skills")]
    pub skills: Vec<Record>,
}

pub async fn nav_links(req: Request) -> Result<Json<NavLinks>, Error> {
    let nav_links = req.site().content().nav_links().await?;
    Ok(Json(NavLinks { nav_links }))
}

pub async fn social_links(req: Request) -> Result<Json<SocialLinks>, Error> {
    let social_links = req.site().content().social_links().await?;
    Ok(Json(SocialLinks { social_links }))
}

pub async fn experiences(req: Request) -> Result<Json<Experiences>, Error> {
    let jobs = req.site().content().jobs().await?;
    Ok(Json(Experiences { jobs }))
}

pub async fn projects(req: Request) -> Result<Json<Projects>, Error> {
    let projects = req.site().content().projects().await?;
    Ok(Json(Projects { projects }))
}

pub async fn skills(req: Request) -> Result<Json<Skills>, Error> {
    let skills = req.site().content().skills().await?;
    Ok(Json(Skills { skills }))
}
