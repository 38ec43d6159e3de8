// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project data structures.
//!
//! This module defines the core data model: a project is a named bundle
//! of edits (cuts, filters and an optional audio track) plus a thumbnail
//! captured from the uploaded clip.

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// A trimmed region of the source clip, in seconds.
///
/// Ranges are stored exactly as entered; `start < end` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    pub start: f64,
    pub end: f64,
}

/// The set of edits applied to a project.
///
/// `cuts` and `filters` keep insertion order exactly and allow
/// duplicates. `audio` holds at most one track identifier; setting a new
/// one replaces the old.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditSet {
    pub cuts: Vec<Cut>,
    pub filters: Vec<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

/// A complete project document.
///
/// A project is always fully defined: an empty edit set is represented by
/// empty sequences and an absent audio track, never by missing fields.
/// The wire shape matches this struct exactly, so `edits` and its
/// sequences are required while `thumbnail` and `audio` default when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub thumbnail: String,
    pub edits: EditSet,
}

impl Project {
    /// Create a new project with the given name and an empty edit set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            thumbnail: String::new(),
            edits: EditSet::default(),
        }
    }

    /// Check the document invariants deserialization alone cannot.
    ///
    /// Deserialization already rejects a missing `edits` record or
    /// non-sequence `cuts`/`filters`; the remaining invariant is a
    /// non-empty name.
    pub fn validate(self) -> Result<Self, EditorError> {
        if self.name.trim().is_empty() {
            return Err(EditorError::MalformedDocument(
                "project name is missing or empty".to_string(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_has_empty_edit_set() {
        let project = Project::new("demo");
        assert_eq!(project.name, "demo");
        assert!(project.thumbnail.is_empty());
        assert!(project.edits.cuts.is_empty());
        assert!(project.edits.filters.is_empty());
        assert!(project.edits.audio.is_none());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let project = Project::new("  ");
        assert!(matches!(
            project.validate(),
            Err(EditorError::MalformedDocument(_))
        ));
    }

    #[test]
    fn validate_accepts_malformed_cut_ranges() {
        let mut project = Project::new("demo");
        project.edits.cuts.push(Cut { start: 9.0, end: 2.0 });
        let validated = project.clone().validate().unwrap();
        assert_eq!(validated, project);
    }
}
