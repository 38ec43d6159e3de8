// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interactive edit session.
//!
//! The session owns the current document and routes every mutation
//! through the same sequence: snapshot to history, apply, schedule an
//! autosave, notify. Undo and redo swap the current document against the
//! history stacks and go through the same save/notify tail. Exactly one
//! session mutates one document at a time; its history dies with it.

use std::sync::mpsc::Sender;

use crate::autosave::Autosave;
use crate::history::History;
use crate::models::project::{Cut, Project};
use crate::notify::{Notice, Severity};

/// One open project being edited.
pub struct EditSession {
    project: Project,
    history: History<Project>,
    autosave: Autosave,
    notices: Sender<Notice>,
}

impl EditSession {
    pub fn new(project: Project, autosave: Autosave, notices: Sender<Notice>) -> Self {
        Self {
            project,
            history: History::new(),
            autosave,
            notices,
        }
    }

    /// The current document.
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The autosave handle, for status display and event polling.
    pub fn autosave(&mut self) -> &mut Autosave {
        &mut self.autosave
    }

    fn notify(&self, message: impl Into<String>, severity: Severity) {
        let _ = self.notices.send(Notice::new(message, severity));
    }

    /// Record the current state, then apply and persist a mutation.
    fn apply(&mut self, mutate: impl FnOnce(&mut Project)) {
        self.history.record(self.project.clone());
        mutate(&mut self.project);
        self.autosave.schedule(self.project.clone(), false);
    }

    pub fn add_cut(&mut self, start: f64, end: f64) {
        self.apply(|p| p.edits.cuts.push(Cut { start, end }));
        log::info!("Added cut {}s -> {}s", start, end);
        self.notify(format!("Cut {}s → {}s added", start, end), Severity::Info);
    }

    pub fn add_filter(&mut self, filter: &str) {
        let filter = filter.to_string();
        self.apply(|p| p.edits.filters.push(filter.clone()));
        log::info!("Added filter {:?}", filter);
        self.notify(format!("Filter \"{}\" added", filter), Severity::Info);
    }

    pub fn set_audio(&mut self, audio: &str) {
        let audio = audio.to_string();
        self.apply(|p| p.edits.audio = Some(audio.clone()));
        log::info!("Set audio track {:?}", audio);
        self.notify(format!("Audio set: {}", audio), Severity::Info);
    }

    /// Remove the cut at `index`. Out-of-range indices are a no-op:
    /// nothing changes and no history is recorded.
    pub fn remove_cut(&mut self, index: usize) {
        if index >= self.project.edits.cuts.len() {
            return;
        }
        self.apply(|p| {
            p.edits.cuts.remove(index);
        });
        log::info!("Removed cut {}", index);
        self.notify("Cut removed", Severity::Warning);
    }

    /// Remove the filter at `index`; same out-of-range no-op rule as
    /// cut removal.
    pub fn remove_filter(&mut self, index: usize) {
        if index >= self.project.edits.filters.len() {
            return;
        }
        self.apply(|p| {
            p.edits.filters.remove(index);
        });
        log::info!("Removed filter {}", index);
        self.notify("Filter removed", Severity::Warning);
    }

    pub fn remove_audio(&mut self) {
        self.apply(|p| p.edits.audio = None);
        log::info!("Removed audio track");
        self.notify("Audio removed", Severity::Warning);
    }

    pub fn undo(&mut self) {
        if !self.history.can_undo() {
            return;
        }
        let current = self.project.clone();
        if let Some(previous) = self.history.undo(current) {
            self.project = previous;
            self.autosave.schedule(self.project.clone(), false);
            log::info!("Undo");
            self.notify("Undo", Severity::Warning);
        }
    }

    pub fn redo(&mut self) {
        if !self.history.can_redo() {
            return;
        }
        let current = self.project.clone();
        if let Some(next) = self.history.redo(current) {
            self.project = next;
            self.autosave.schedule(self.project.clone(), false);
            log::info!("Redo");
            self.notify("Redo", Severity::Warning);
        }
    }

    /// Schedule an explicit, user-invoked save.
    pub fn save(&mut self) {
        self.autosave.schedule(self.project.clone(), true);
    }

    /// Replace the current document with an imported one.
    ///
    /// Import bypasses mutation history; the next save upserts under the
    /// imported name, overwriting any existing record with that name.
    pub fn replace(&mut self, project: Project) {
        self.project = project;
        self.autosave.schedule(self.project.clone(), false);
        log::info!("Replaced current document with {:?}", self.project.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::EditSet;
    use crate::store::{ProjectStore, SharedStore};
    use std::sync::mpsc::Receiver;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn session_in(dir: &tempfile::TempDir) -> (EditSession, SharedStore, Receiver<Notice>) {
        let store: SharedStore = Arc::new(Mutex::new(ProjectStore::open(
            dir.path().join("projects.json"),
        )));
        let autosave = Autosave::spawn(store.clone());
        let (tx, rx) = crate::notify::channel();
        let session = EditSession::new(Project::new("demo"), autosave, tx);
        (session, store, rx)
    }

    #[test]
    fn mutations_undo_and_redo_along_the_recorded_path() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _store, _rx) = session_in(&dir);

        session.add_cut(0.0, 5.0);
        assert_eq!(session.project().edits.cuts, vec![Cut { start: 0.0, end: 5.0 }]);

        session.add_filter("grayscale");
        assert_eq!(session.project().edits.filters, vec!["grayscale"]);

        let after_both = session.project().clone();

        session.undo();
        session.undo();
        assert_eq!(session.project().edits, EditSet::default());

        session.redo();
        session.redo();
        assert_eq!(session.project(), &after_both);
    }

    #[test]
    fn undo_with_empty_history_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _store, rx) = session_in(&dir);

        session.undo();
        session.redo();
        assert_eq!(session.project(), &Project::new("demo"));
        // No-ops emit no notifications
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn mutation_after_undo_clears_redo() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _store, _rx) = session_in(&dir);

        session.add_cut(0.0, 5.0);
        session.undo();
        session.add_filter("sepia");
        assert!(!session.can_redo());

        let before = session.project().clone();
        session.redo();
        assert_eq!(session.project(), &before);
    }

    #[test]
    fn out_of_range_removals_are_noops() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _store, _rx) = session_in(&dir);

        session.add_cut(0.0, 5.0);
        session.remove_cut(5);
        assert_eq!(session.project().edits.cuts.len(), 1);

        session.remove_filter(0);
        // Neither no-op recorded history: one undo reaches the empty set
        session.undo();
        assert_eq!(session.project().edits, EditSet::default());
        assert!(!session.can_undo());
    }

    #[test]
    fn last_audio_write_wins_and_remove_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _store, _rx) = session_in(&dir);

        session.set_audio("bgm.mp3");
        session.set_audio("voice.mp3");
        assert_eq!(session.project().edits.audio.as_deref(), Some("voice.mp3"));

        session.remove_audio();
        assert!(session.project().edits.audio.is_none());

        session.undo();
        assert_eq!(session.project().edits.audio.as_deref(), Some("voice.mp3"));
    }

    #[test]
    fn every_mutation_lands_in_the_store_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, store, _rx) = session_in(&dir);

        session.add_cut(0.0, 5.0);
        session.add_filter("grayscale");
        session.set_audio("bgm.mp3");
        session.undo();

        let expected = session.project().clone();
        session.autosave().drain(Duration::from_secs(5));

        let store = store.lock().unwrap();
        assert_eq!(store.find("demo"), Some(&expected));
    }

    #[test]
    fn mutations_emit_one_notice_each() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _store, rx) = session_in(&dir);

        session.add_cut(0.0, 5.0);
        session.add_filter("grayscale");
        session.remove_filter(0);
        session.undo();

        let severities: Vec<Severity> = rx.try_iter().map(|n| n.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Info,
                Severity::Info,
                Severity::Warning,
                Severity::Warning
            ]
        );
    }

    #[test]
    fn replace_installs_imported_document_without_history() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, store, _rx) = session_in(&dir);

        let mut imported = Project::new("other");
        imported.edits.filters.push("vhs".to_string());
        session.replace(imported.clone());

        assert_eq!(session.project(), &imported);
        assert!(!session.can_undo());

        // The replacement is persisted under the imported name
        session.autosave().drain(Duration::from_secs(5));
        let store = store.lock().unwrap();
        assert_eq!(store.find("other"), Some(&imported));
    }
}
