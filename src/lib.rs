//! # portfolio
//!
//! A personal portfolio site: four server-rendered pages and five JSON API
//! endpoints, all backed by flat JSON files in a data directory.
//!
//! ## Shape of a request
//!
//! Every route is a stateless read-transform-respond cycle:
//!
//! 1. read one or two JSON documents from the data root (fresh, uncached);
//! 2. take the list under each document's top-level key, defaulting to empty;
//! 3. render a page template, or return the list as JSON.
//!
//! A missing or malformed document turns into a plain `500 Server error`,
//! logged but never echoed. An unknown route is a plain `404 Not found`.
//!
//! ## Routes
//!
//! | Path | Answer |
//! |---|---|
//! | `/` | home page with a preview of the first quarter of the projects |
//! | `/about` | jobs and skill groups |
//! | `/projects` | every project |
//! | `/blog` | shared layout only |
//! | `/api/nav-links` | `{"navLinks": [...]}` |
//! | `/api/social-links` | `{"socialLinks": [...]}` |
//! | `/api/experiences` | `{"jobs": [...]}` |
//! | `/api/projects` | `{"projects": [...]}` |
//! | `/api/skills` | `{"Skills": [...]}` |
//! | anything else | a file from the public directory, or 404 |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use portfolio::{Config, Server, Site};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), portfolio::Error> {
//!     let config = Config::from_env()?;
//!     let server = Server::bind(config.addr()).await?;
//!     server.serve(Site::from_config(&config).router()).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod site;
mod status;

pub mod api;
pub mod assets;
pub mod config;
pub mod content;
pub mod logging;
pub mod middleware;
pub mod pages;

pub use config::Config;
pub use error::{Error, Result};
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Json, Page, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use site::Site;
pub use status::Status;
