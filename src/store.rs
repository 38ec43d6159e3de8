// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Durable project library.
//!
//! All saved projects live newest-first in a single JSON file under the
//! platform data directory. The library is bounded: inserting past the
//! capacity evicts the oldest record. A missing or corrupt file opens as
//! an empty library so a damaged store can never take the editor down
//! with it.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::EditorError;
use crate::models::project::Project;

/// Maximum number of projects kept in the library.
pub const CAPACITY: usize = 50;

/// Store handle shared between the shell and the autosave worker.
///
/// Structural changes (insert, evict, delete, rename) must happen inside
/// the lock.
pub type SharedStore = Arc<Mutex<ProjectStore>>;

/// Durable, bounded collection of projects keyed by name.
pub struct ProjectStore {
    path: PathBuf,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Open the library at its default platform location.
    pub fn open_default() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("reelcut");
        Self::open(dir.join("projects.json"))
    }

    /// Open a library backed by the given file.
    ///
    /// A missing, unreadable or corrupt file degrades to an empty
    /// library rather than an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let projects = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Vec<Project>>(&text) {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("Ignoring corrupt project library {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to read project library {}: {}", path.display(), e);
                }
                Vec::new()
            }
        };
        log::info!("Opened project library with {} projects", projects.len());
        Self { path, projects }
    }

    /// Insert or update a project, then flush.
    ///
    /// An existing record with the same name is replaced in place,
    /// keeping its position; a new record is inserted as newest and the
    /// oldest record is evicted if the library is over capacity.
    pub fn upsert(&mut self, project: Project) -> Result<(), EditorError> {
        if let Some(existing) = self.projects.iter_mut().find(|p| p.name == project.name) {
            *existing = project;
        } else {
            self.projects.insert(0, project);
            self.projects.truncate(CAPACITY);
        }
        self.flush()
    }

    /// Insert a brand-new empty project.
    ///
    /// Explicit creation is the one path that enforces name uniqueness;
    /// saves of imported documents overwrite silently through `upsert`.
    pub fn create(&mut self, name: &str) -> Result<Project, EditorError> {
        if self.find(name).is_some() {
            return Err(EditorError::DuplicateName(name.to_string()));
        }
        let project = Project::new(name);
        self.upsert(project.clone())?;
        Ok(project)
    }

    /// Remove a project by name; absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Result<(), EditorError> {
        let before = self.projects.len();
        self.projects.retain(|p| p.name != name);
        if self.projects.len() == before {
            return Ok(());
        }
        self.flush()
    }

    /// Rename a project, keeping its position and contents.
    ///
    /// Fails with [`EditorError::DuplicateName`] when the target name is
    /// already taken; renaming a name that does not exist is a no-op.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), EditorError> {
        if self.projects.iter().any(|p| p.name == new) {
            return Err(EditorError::DuplicateName(new.to_string()));
        }
        match self.projects.iter_mut().find(|p| p.name == old) {
            Some(project) => {
                project.name = new.to_string();
                self.flush()
            }
            None => Ok(()),
        }
    }

    /// Look up a project by name.
    pub fn find(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// All saved projects, newest first. Order is stable between
    /// mutations.
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    fn flush(&self) -> Result<(), EditorError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| EditorError::StoreUnavailable(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&self.projects)
            .map_err(|e| EditorError::StoreUnavailable(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| EditorError::StoreUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Cut;

    fn store_in(dir: &tempfile::TempDir) -> ProjectStore {
        ProjectStore::open(dir.path().join("projects.json"))
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.list().is_empty());
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = ProjectStore::open(&path);
        assert!(store.list().is_empty());
    }

    #[test]
    fn upsert_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");

        let mut store = ProjectStore::open(&path);
        let mut project = Project::new("demo");
        project.edits.cuts.push(Cut { start: 0.0, end: 5.0 });
        store.upsert(project.clone()).unwrap();

        let reopened = ProjectStore::open(&path);
        assert_eq!(reopened.find("demo"), Some(&project));
    }

    #[test]
    fn upsert_is_idempotent_and_keeps_position() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert(Project::new("a")).unwrap();
        store.upsert(Project::new("b")).unwrap();
        store.upsert(Project::new("c")).unwrap();

        let before: Vec<String> = store.list().iter().map(|p| p.name.clone()).collect();
        store.upsert(Project::new("b")).unwrap();
        let after: Vec<String> = store.list().iter().map(|p| p.name.clone()).collect();

        assert_eq!(before, vec!["c", "b", "a"]);
        assert_eq!(before, after);
    }

    #[test]
    fn inserting_past_capacity_evicts_the_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        for i in 0..CAPACITY {
            store.upsert(Project::new(format!("project-{i}"))).unwrap();
        }
        assert_eq!(store.list().len(), CAPACITY);

        store.upsert(Project::new("one-too-many")).unwrap();
        assert_eq!(store.list().len(), CAPACITY);
        // The newest survives, the oldest is the one evicted
        assert!(store.find("one-too-many").is_some());
        assert!(store.find("project-0").is_none());
        assert!(store.find("project-1").is_some());
    }

    #[test]
    fn create_rejects_duplicate_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.create("demo").unwrap();

        assert!(matches!(
            store.create("demo"),
            Err(EditorError::DuplicateName(_))
        ));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn delete_missing_name_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert(Project::new("keep")).unwrap();

        store.delete("missing").unwrap();
        assert_eq!(store.list().len(), 1);

        store.delete("keep").unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn rename_rejects_taken_names_and_keeps_position() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let mut old = Project::new("old");
        old.edits.filters.push("grayscale".to_string());
        store.upsert(Project::new("other")).unwrap();
        store.upsert(old).unwrap();

        assert!(matches!(
            store.rename("old", "other"),
            Err(EditorError::DuplicateName(_))
        ));

        store.rename("old", "new").unwrap();
        assert!(store.find("old").is_none());
        let renamed = store.find("new").unwrap();
        assert_eq!(renamed.edits.filters, vec!["grayscale"]);
        // Position preserved: still the newest entry
        assert_eq!(store.list()[0].name, "new");
    }
}
