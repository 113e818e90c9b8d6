//! JSON snapshot file: the item collection plus the project/person registry.
//!
//! The engine treats project and person ids as opaque; resolving them to
//! display names happens here, and a dangling id renders as "unknown"
//! rather than failing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use taqvim_core::CalendarItem;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    /// Certification tracking number (UTN)
    pub code: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Whole-file shape. Writes replace the file in one go; last write wins.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub items: Vec<CalendarItem>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub people: Vec<Person>,
}

pub struct Store {
    pub path: PathBuf,
    pub snapshot: Snapshot,
}

impl Store {
    /// Load the snapshot at `path`, or the default location. A missing file
    /// is an empty snapshot, not an error.
    pub fn load(path: Option<PathBuf>) -> Result<Store> {
        let path = match path {
            Some(p) => p,
            None => default_path()?,
        };

        let snapshot = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Snapshot::default()
        };

        Ok(Store { path, snapshot })
    }

    /// Replace the item collection and write the whole snapshot back.
    pub fn replace_items(mut self, items: Vec<CalendarItem>) -> Result<()> {
        self.snapshot.items = items;
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(&self.snapshot)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    pub fn items(&self) -> &[CalendarItem] {
        &self.snapshot.items
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.snapshot.projects.iter().find(|p| p.id == id)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.snapshot.people.iter().find(|p| p.id == id)
    }
}

fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".taqvim").join("items.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use taqvim_core::{ItemKind, Occurrence};

    fn item(id: &str) -> CalendarItem {
        CalendarItem {
            id: id.into(),
            kind: ItemKind::Meeting,
            title: "sync".into(),
            project_id: Some("p1".into()),
            person_id: None,
            stage: None,
            occurrence: Occurrence::Point(
                NaiveDate::from_ymd_opt(2024, 3, 20)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap(),
            ),
            note: None,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        let store = Store::load(Some(path)).unwrap();
        assert!(store.items().is_empty());
        assert!(store.snapshot.projects.is_empty());
    }

    #[test]
    fn replace_items_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("items.json");

        let store = Store::load(Some(path.clone())).unwrap();
        store.replace_items(vec![item("i1")]).unwrap();

        let reloaded = Store::load(Some(path)).unwrap();
        assert_eq!(reloaded.items().len(), 1);
        assert_eq!(reloaded.items()[0].id, "i1");
        assert_eq!(reloaded.items()[0].project_id.as_deref(), Some("p1"));
    }

    #[test]
    fn registry_lookup_is_soft() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        let json = r#"{
            "items": [],
            "projects": [{ "id": "p1", "code": "UTN-24051", "title": "Hull optimization" }],
            "people": [{ "id": "u1", "name": "Sara Ahmadi", "role": "project manager" }]
        }"#;
        std::fs::write(&path, json).unwrap();

        let store = Store::load(Some(path)).unwrap();
        assert_eq!(store.project("p1").unwrap().code, "UTN-24051");
        assert!(store.project("p9").is_none());
        assert_eq!(store.person("u1").unwrap().name, "Sara Ahmadi");
        assert!(store.person("u9").is_none());
    }
}
