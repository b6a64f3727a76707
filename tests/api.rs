mod common;

use common::{Fixture, body_json, get, projects};
use serde_json::json;

#[tokio::test]
async fn projects_endpoint_returns_stored_records_in_order() {
    let fixture = Fixture::new();

    let res = get(&fixture.router(), "/api/projects").await;

    assert_eq!(res.status_code(), 200);
    assert_eq!(res.header("content-type"), Some("application/json"));
    assert_eq!(body_json(&res), json!({ "projects": projects(4) }));
}

#[tokio::test]
async fn each_endpoint_wraps_its_list_under_one_key() {
    let fixture = Fixture::new();
    let router = fixture.router();

    for (path, key, len) in [
        ("/api/nav-links", "navLinks", 2),
        ("/api/social-links", "socialLinks", 1),
        ("/api/experiences", "jobs", 1),
        ("/api/projects", "projects", 4),
        ("/api/skills", "Skills", 1),
    ] {
        let body = body_json(&get(&router, path).await);
        let object = body.as_object().unwrap();

        assert_eq!(object.len(), 1, "{path}");
        assert_eq!(object[key].as_array().unwrap().len(), len, "{path}");
    }
}

#[tokio::test]
async fn nav_links_endpoint_accepts_legacy_key() {
    let fixture = Fixture::new();
    fixture.write_json("navLinks.json", json!({ "navLink": [{ "label": "Home", "href": "/" }] }));

    let body = body_json(&get(&fixture.router(), "/api/nav-links").await);

    assert_eq!(body, json!({ "navLinks": [{ "label": "Home", "href": "/" }] }));
}

#[tokio::test]
async fn missing_list_key_answers_empty_list() {
    let fixture = Fixture::new();
    fixture.write_json("skills.json", json!({ "skills": [{ "category": "lowercase key" }] }));

    let res = get(&fixture.router(), "/api/skills").await;

    assert_eq!(res.status_code(), 200);
    assert_eq!(body_json(&res), json!({ "Skills": [] }));
}

#[tokio::test]
async fn unreadable_document_is_a_generic_server_error() {
    let fixture = Fixture::new();
    fixture.write_raw("experiences.json", "{ \"jobs\": [ ");

    let res = get(&fixture.router(), "/api/experiences").await;

    assert_eq!(res.status_code(), 500);
    assert_eq!(res.body(), b"Server error");
}
