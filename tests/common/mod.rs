#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use portfolio::{Method, Response, Router, Site};
use serde_json::{Value, json};
use tempfile::TempDir;

/// A throwaway site: `data/` and `public/` under one temp dir.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Every document present, four projects.
    pub fn new() -> Self {
        let fixture = Self { dir: TempDir::new().unwrap() };
        fs::create_dir_all(fixture.data_dir()).unwrap();
        fs::create_dir_all(fixture.public_dir().join("css")).unwrap();

        fixture.write_json("navLinks.json", json!({
            "navLinks": [
                { "label": "Home", "href": "/" },
                { "label": "About", "href": "/about" }
            ]
        }));
        fixture.write_json("socialLinks.json", json!({
            "socialLinks": [{ "name": "GitHub", "url": "https://github.com/", "icon": "github" }]
        }));
        fixture.write_json("projects.json", json!({ "projects": projects(4) }));
        fixture.write_json("experiences.json", json!({
            "jobs": [{
                "company": "Northwind",
                "role": "Backend Engineer",
                "period": "2022 - present",
                "highlights": ["Shipped the tracking pipeline"]
            }]
        }));
        fixture.write_json("skills.json", json!({
            "Skills": [{ "category": "Languages", "items": ["Rust", "SQL"] }]
        }));
        fs::write(fixture.public_dir().join("css/style.css"), "body { margin: 0; }").unwrap();

        fixture
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    pub fn write_json(&self, name: &str, value: Value) {
        fs::write(self.data_dir().join(name), value.to_string()).unwrap();
    }

    pub fn write_raw(&self, name: &str, body: &str) {
        fs::write(self.data_dir().join(name), body).unwrap();
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.data_dir().join(name)).unwrap();
    }

    pub fn router(&self) -> Router {
        Site::new(self.data_dir(), self.public_dir()).router()
    }
}

/// `count` projects titled "Project 1", "Project 2", ...
pub fn projects(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|i| json!({ "title": format!("Project {i}"), "tags": ["rust"] }))
        .collect()
}

pub async fn get(router: &Router, path: &str) -> Response {
    router.dispatch(Method::Get, path).await
}

pub fn body_text(res: &Response) -> String {
    String::from_utf8(res.body().to_vec()).unwrap()
}

pub fn body_json(res: &Response) -> Value {
    serde_json::from_slice(res.body()).unwrap()
}
