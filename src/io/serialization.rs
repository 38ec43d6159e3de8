// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project export and import.
//!
//! The portable format is pretty-printed JSON in exactly the shape of the
//! in-memory model, so an exported file imports back to a deep-equal
//! project. Import validates before handing anything to the caller; a
//! blob that fails to parse or breaks the document shape is rejected as a
//! malformed document and the current state stays untouched.

use std::path::Path;

use anyhow::Result;

use crate::error::EditorError;
use crate::models::project::Project;

/// Serialize a project to its portable JSON form.
pub fn to_json(project: &Project) -> Result<String> {
    Ok(serde_json::to_string_pretty(project)?)
}

/// Parse and validate a portable project blob.
pub fn from_json(text: &str) -> Result<Project, EditorError> {
    let project: Project = serde_json::from_str(text)
        .map_err(|e| EditorError::MalformedDocument(e.to_string()))?;
    project.validate()
}

/// Export a project to a JSON file.
pub fn export_json(project: &Project, path: &Path) -> Result<()> {
    let json = to_json(project)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a project from a JSON file.
pub fn import_json(path: &Path) -> Result<Project, EditorError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| EditorError::MalformedDocument(format!("unreadable file: {}", e)))?;
    from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Cut;

    fn sample_project() -> Project {
        let mut project = Project::new("demo.mp4");
        project.thumbnail = "data:image/png;base64,AAAA".to_string();
        project.edits.cuts.push(Cut { start: 0.0, end: 5.0 });
        project.edits.cuts.push(Cut { start: 2.5, end: 7.5 });
        project.edits.filters.push("grayscale".to_string());
        project.edits.audio = Some("bgm.mp3".to_string());
        project
    }

    #[test]
    fn export_then_import_round_trips() {
        let original = sample_project();
        let json = to_json(&original).unwrap();
        let imported = from_json(&json).unwrap();
        assert_eq!(imported, original);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.mp4.json");
        let original = sample_project();

        export_json(&original, &path).unwrap();
        let imported = import_json(&path).unwrap();
        assert_eq!(imported, original);
    }

    #[test]
    fn missing_edits_is_malformed() {
        let result = from_json(r#"{"name":"x"}"#);
        assert!(matches!(result, Err(EditorError::MalformedDocument(_))));
    }

    #[test]
    fn empty_name_is_malformed() {
        let result = from_json(r#"{"name":"","edits":{"cuts":[],"filters":[]}}"#);
        assert!(matches!(result, Err(EditorError::MalformedDocument(_))));
    }

    #[test]
    fn non_sequence_cuts_is_malformed() {
        let result = from_json(r#"{"name":"x","edits":{"cuts":5,"filters":[]}}"#);
        assert!(matches!(result, Err(EditorError::MalformedDocument(_))));
    }

    #[test]
    fn absent_thumbnail_and_audio_default() {
        let project = from_json(r#"{"name":"x","edits":{"cuts":[],"filters":[]}}"#).unwrap();
        assert!(project.thumbnail.is_empty());
        assert!(project.edits.audio.is_none());
    }

    #[test]
    fn unparseable_text_is_malformed() {
        assert!(matches!(
            from_json("not json at all"),
            Err(EditorError::MalformedDocument(_))
        ));
    }
}
