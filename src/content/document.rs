//! Parsed data documents and the records inside them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// One parsed JSON data file.
///
/// Only the top-level list keys mean anything to the site; the records under
/// them are carried through as opaque [`Record`]s.
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    value: Value,
}

impl Document {
    pub(crate) fn new(path: PathBuf, value: Value) -> Self {
        Self { path, value }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Takes the list stored under `key`.
    ///
    /// An absent or falsy key (`null`, `false`, `""`, `0`) yields an empty
    /// list. Any other non-list value is an [`Error::Shape`].
    pub fn into_list(self, key: &str) -> Result<Vec<Record>, Error> {
        self.into_first_list(&[key])
    }

    /// Takes the list stored under the first of `keys` that holds a truthy
    /// value, or an empty list when none does.
    pub fn into_first_list(mut self, keys: &[&str]) -> Result<Vec<Record>, Error> {
        for key in keys {
            match self.value.get_mut(*key).map(Value::take) {
                None => continue,
                Some(value) if is_falsy(&value) => continue,
                Some(Value::Array(items)) => return Ok(items.into_iter().map(Record).collect()),
                Some(_) => {
                    return Err(Error::Shape { path: self.path, key: (*key).to_owned() });
                }
            }
        }
        Ok(Vec::new())
    }
}

/// `null`, `false`, `""` and zero: present, but treated as absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// One schema-less entry of a data list: a link, project, job or skill group.
///
/// Serialises back exactly as stored. Templates read fields through
/// [`text`](Record::text) and [`strings`](Record::strings), which answer
/// empty for anything missing or of the wrong type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Value);

impl Record {
    /// The string field `key`, or `""`.
    pub fn text(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Whether `key` holds a non-empty string.
    pub fn has(&self, key: &str) -> bool {
        !self.text(key).is_empty()
    }

    /// The string entries of the list field `key`; non-strings are skipped.
    pub fn strings(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc(value: Value) -> Document {
        Document::new(PathBuf::from("data/navLinks.json"), value)
    }

    #[test]
    fn prefers_first_key() {
        let list = doc(json!({ "navLinks": [{ "label": "Home" }], "navLink": [{ "label": "Old" }] }))
            .into_first_list(&["navLinks", "navLink"])
            .unwrap();

        assert_eq!(list, vec![Record(json!({ "label": "Home" }))]);
    }

    #[test]
    fn falls_back_to_alternate_key() {
        let list = doc(json!({ "navLink": [{ "label": "Home" }, { "label": "Blog" }] }))
            .into_first_list(&["navLinks", "navLink"])
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[1].text("label"), "Blog");
    }

    #[test]
    fn null_counts_as_absent() {
        let list = doc(json!({ "navLinks": null, "navLink": [{ "label": "Home" }] }))
            .into_first_list(&["navLinks", "navLink"])
            .unwrap();

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn falsy_scalars_count_as_absent() {
        for falsy in [json!(false), json!(""), json!(0), json!(0.0)] {
            let list = doc(json!({ "navLinks": falsy.clone(), "navLink": [{ "label": "Home" }] }))
                .into_first_list(&["navLinks", "navLink"])
                .unwrap();
            assert_eq!(list.len(), 1, "navLinks = {falsy}");

            assert!(doc(json!({ "projects": falsy })).into_list("projects").unwrap().is_empty());
        }
    }

    #[test]
    fn empty_list_is_still_taken() {
        let list = doc(json!({ "navLinks": [], "navLink": [{ "label": "Old" }] }))
            .into_first_list(&["navLinks", "navLink"])
            .unwrap();

        assert!(list.is_empty());
    }

    #[test]
    fn missing_keys_default_to_empty() {
        assert!(doc(json!({ "links": [1, 2] })).into_first_list(&["navLinks", "navLink"]).unwrap().is_empty());
        assert!(doc(json!([1, 2, 3])).into_list("projects").unwrap().is_empty());
    }

    #[test]
    fn truthy_non_list_value_is_a_shape_error() {
        for truthy in [json!("soon"), json!(true), json!(3), json!({ "a": 1 })] {
            let err = doc(json!({ "projects": truthy })).into_list("projects").unwrap_err();

            assert!(matches!(err, Error::Shape { ref key, .. } if key == "projects"));
        }
    }

    #[test]
    fn record_accessors_tolerate_missing_fields() {
        let project = Record(json!({ "title": "Atlas", "tags": ["rust", 3, "web"], "stars": 12 }));

        assert_eq!(project.text("title"), "Atlas");
        assert_eq!(project.text("stars"), "");
        assert_eq!(project.text("url"), "");
        assert!(!project.has("url"));
        assert_eq!(project.strings("tags"), vec!["rust", "web"]);
        assert!(project.strings("title").is_empty());
    }
}
