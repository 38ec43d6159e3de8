// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait: it owns the shared project store, the current
//! edit session and the notification channel, switches between the
//! library and editor views, and turns view actions into engine calls.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::autosave::{Autosave, SaveOutcome, SaveStatus};
use crate::error::EditorError;
use crate::io::{media, serialization};
use crate::models::project::Project;
use crate::notify::{Notice, Severity};
use crate::session::EditSession;
use crate::store::{ProjectStore, SharedStore};
use crate::ui::editor::{self, EditorAction, EditorInputs};
use crate::ui::home::{self, HomeAction, RenameEdit, ThumbnailCache};
use crate::ui::toasts::Toasts;

/// Which top-level view is showing.
enum View {
    Library,
    Editor,
}

/// Main application state.
pub struct ReelcutApp {
    /// Durable project library, shared with the autosave worker
    store: SharedStore,

    /// Current view
    view: View,

    /// Open edit session (editor view only)
    session: Option<EditSession>,

    /// Sender side of the notification channel, cloned into sessions
    notices: Sender<Notice>,

    /// Toast overlay draining the notification channel
    toasts: Toasts,

    /// Name input for creating an empty project
    name_input: String,

    /// In-progress rename prompt
    rename: Option<RenameEdit>,

    /// Decoded thumbnail textures for the library grid
    thumbnails: ThumbnailCache,

    /// In-flight thumbnail capture for an uploaded clip
    pending_capture: Option<media::ThumbnailCapture>,

    /// Editable defaults for the editor toolbar
    editor_inputs: EditorInputs,
}

impl Default for ReelcutApp {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_store(store: &SharedStore) -> MutexGuard<'_, ProjectStore> {
    match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Default name for a project created without one.
fn anonymous_name() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("project-{}.mp4", seconds)
}

impl ReelcutApp {
    /// Create a new reelcut application instance.
    pub fn new() -> Self {
        Self::with_store(ProjectStore::open_default())
    }

    /// Create an application around an already opened store.
    pub fn with_store(store: ProjectStore) -> Self {
        let (notices, receiver) = crate::notify::channel();
        Self {
            store: Arc::new(Mutex::new(store)),
            view: View::Library,
            session: None,
            notices,
            toasts: Toasts::new(receiver),
            name_input: String::new(),
            rename: None,
            thumbnails: ThumbnailCache::default(),
            pending_capture: None,
            editor_inputs: EditorInputs::default(),
        }
    }

    fn notify(&self, message: impl Into<String>, severity: Severity) {
        let _ = self.notices.send(Notice::new(message, severity));
    }

    /// Open the editor for a project, loading it from the library or
    /// starting fresh when it is not stored yet.
    fn open_project(&mut self, name: &str) {
        let project = lock_store(&self.store)
            .find(name)
            .cloned()
            .unwrap_or_else(|| Project::new(name));

        let autosave = Autosave::spawn(self.store.clone());
        self.session = Some(EditSession::new(project, autosave, self.notices.clone()));
        self.editor_inputs = EditorInputs::default();
        self.view = View::Editor;
        log::info!("Opened editor for {:?}", name);
    }

    /// Create an empty project and open it. Creation is the one path
    /// that enforces name uniqueness.
    fn create_project(&mut self, name: String) {
        if name.is_empty() {
            self.notify("Enter a project name first", Severity::Warning);
            return;
        }

        let result = lock_store(&self.store).create(&name);

        match result {
            Ok(_) => {
                self.name_input.clear();
                self.open_project(&name);
            }
            Err(e @ EditorError::DuplicateName(_)) => {
                self.notify(e.to_string(), Severity::Error);
            }
            Err(e) => {
                // The library is unavailable; edit in memory regardless
                self.notify(e.to_string(), Severity::Error);
                self.open_project(&name);
            }
        }
    }

    /// Finish an uploaded clip once its thumbnail capture resolves.
    fn finish_upload(&mut self, captured: media::CapturedMedia) {
        let mut project = Project::new(captured.name.as_str());
        project.thumbnail = captured.thumbnail;

        // Same-named uploads overwrite, like imports
        if let Err(e) = lock_store(&self.store).upsert(project) {
            self.notify(e.to_string(), Severity::Error);
        }
        self.thumbnails.invalidate(&captured.name);
        self.open_project(&captured.name);
    }

    fn handle_home_action(&mut self, action: HomeAction) {
        match action {
            HomeAction::None => {}
            HomeAction::Create(name) => self.create_project(name),
            HomeAction::StartEditing => self.create_project(anonymous_name()),
            HomeAction::Upload(path) => {
                log::info!("Uploading {}", path.display());
                self.pending_capture = Some(media::capture(path));
            }
            HomeAction::Open(name) => self.open_project(&name),
            HomeAction::Rename { from, to } => {
                if to.is_empty() || to == from {
                    return;
                }
                match lock_store(&self.store).rename(&from, &to) {
                    Ok(()) => {
                        self.thumbnails.invalidate(&from);
                        self.thumbnails.invalidate(&to);
                    }
                    Err(e) => self.notify(e.to_string(), Severity::Error),
                }
            }
            HomeAction::Delete(name) => {
                let confirmed = rfd::MessageDialog::new()
                    .set_title("Delete project")
                    .set_description(format!("Delete project \"{}\"?", name))
                    .set_buttons(rfd::MessageButtons::YesNo)
                    .show()
                    == rfd::MessageDialogResult::Yes;
                if !confirmed {
                    return;
                }
                match lock_store(&self.store).delete(&name) {
                    Ok(()) => self.thumbnails.invalidate(&name),
                    Err(e) => self.notify(e.to_string(), Severity::Error),
                }
            }
        }
    }

    fn handle_editor_action(&mut self, action: EditorAction) {
        if matches!(action, EditorAction::None) {
            return;
        }

        // Export and import need the session but also the dialogs, so
        // they are handled before the plain mutation dispatch
        match action {
            EditorAction::Back => {
                // Queued autosaves finish on the worker; the history
                // does not survive leaving the editor
                self.session = None;
                self.view = View::Library;
                return;
            }
            EditorAction::Export => {
                self.export_current();
                return;
            }
            EditorAction::Import => {
                self.import_into_current();
                return;
            }
            _ => {}
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        match action {
            EditorAction::Undo => session.undo(),
            EditorAction::Redo => session.redo(),
            EditorAction::Save => session.save(),
            EditorAction::AddCut(start, end) => session.add_cut(start, end),
            EditorAction::AddFilter(filter) => session.add_filter(&filter),
            EditorAction::SetAudio(audio) => session.set_audio(&audio),
            EditorAction::RemoveCut(index) => session.remove_cut(index),
            EditorAction::RemoveFilter(index) => session.remove_filter(index),
            EditorAction::RemoveAudio => session.remove_audio(),
            _ => {}
        }
    }

    /// Export the current document to a JSON file of the user's choice.
    fn export_current(&mut self) {
        let Some(project) = self.session.as_ref().map(|s| s.project().clone()) else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(format!("{}.json", project.name))
            .save_file()
        else {
            return;
        };
        match serialization::export_json(&project, &path) {
            Ok(()) => {
                log::info!("Exported project to {}", path.display());
                self.notify("Project exported", Severity::Success);
            }
            Err(e) => {
                log::error!("Failed to export project: {}", e);
                self.notify(format!("Failed to export: {}", e), Severity::Error);
            }
        }
    }

    /// Import a JSON file as the current document. A malformed file is
    /// reported and leaves the current document untouched.
    fn import_into_current(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        match serialization::import_json(&path) {
            Ok(project) => {
                let name = project.name.clone();
                if let Some(session) = self.session.as_mut() {
                    session.replace(project);
                }
                self.thumbnails.invalidate(&name);
                self.notify("Project imported", Severity::Success);
            }
            Err(e) => {
                log::error!("Failed to import project: {}", e);
                self.notify(format!("Invalid project file: {}", e), Severity::Error);
            }
        }
    }
}

impl eframe::App for ReelcutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for a finished thumbnail capture
        if let Some(capture) = self.pending_capture.as_mut() {
            if let Some(captured) = capture.poll() {
                self.pending_capture = None;
                self.finish_upload(captured);
            } else {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
        }

        // Turn autosave completions into notifications
        let outcomes = match self.session.as_mut() {
            Some(session) => session.autosave().poll(),
            None => Vec::new(),
        };
        for outcome in outcomes {
            match outcome {
                SaveOutcome::Saved { explicit: true } => {
                    self.notify("Project saved!", Severity::Success)
                }
                SaveOutcome::Saved { explicit: false } => {}
                SaveOutcome::Failed { message } => {
                    self.notify(format!("Save failed: {}", message), Severity::Error)
                }
            }
        }

        match self.view {
            View::Library => {
                if self.pending_capture.is_some() {
                    egui::TopBottomPanel::bottom("capture_status").show(ctx, |ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Preparing project from upload...");
                        });
                    });
                }

                let action = {
                    let store = lock_store(&self.store);
                    egui::CentralPanel::default()
                        .show(ctx, |ui| {
                            home::show(
                                ui,
                                store.list(),
                                &mut self.name_input,
                                &mut self.rename,
                                &mut self.thumbnails,
                            )
                        })
                        .inner
                };
                self.handle_home_action(action);
            }
            View::Editor => {
                let (header_action, body_action) = match self.session.as_mut() {
                    Some(session) => {
                        let status = session.autosave().status();
                        if status == SaveStatus::Saving {
                            // Keep polling until the worker reports back
                            ctx.request_repaint_after(Duration::from_millis(100));
                        }

                        let header_action = egui::TopBottomPanel::top("editor_header")
                            .show(ctx, |ui| {
                                editor::show_header(
                                    ui,
                                    session.project(),
                                    session.can_undo(),
                                    session.can_redo(),
                                    status,
                                )
                            })
                            .inner;

                        let body_action = egui::CentralPanel::default()
                            .show(ctx, |ui| {
                                editor::show(ui, session.project(), &mut self.editor_inputs)
                            })
                            .inner;

                        (header_action, body_action)
                    }
                    None => {
                        // No session to edit; fall back to the library
                        self.view = View::Library;
                        (EditorAction::None, EditorAction::None)
                    }
                };
                self.handle_editor_action(header_action);
                self.handle_editor_action(body_action);
            }
        }

        self.toasts.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Flush queued saves so closing the window cannot lose a
        // checkpoint that was already scheduled
        if let Some(session) = self.session.as_mut() {
            session.autosave().drain(Duration::from_secs(2));
        }
    }
}
