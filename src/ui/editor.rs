// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor view for a single project.
//!
//! This module renders the edit-history panel (cuts, filters, audio with
//! per-item remove buttons), the toolbar for adding edits, and the header
//! with undo/redo, save status and import/export controls. All state
//! changes are reported back to the app as actions; the view itself never
//! touches the session.

use crate::autosave::SaveStatus;
use crate::models::project::Project;

/// Result of editor interaction.
pub enum EditorAction {
    None,
    Back,
    Undo,
    Redo,
    Save,
    Export,
    Import,
    AddCut(f64, f64),
    AddFilter(String),
    SetAudio(String),
    RemoveCut(usize),
    RemoveFilter(usize),
    RemoveAudio,
}

/// Editable defaults for the add-edit toolbar.
pub struct EditorInputs {
    pub cut_start: f64,
    pub cut_end: f64,
    pub filter: String,
    pub audio: String,
}

impl Default for EditorInputs {
    fn default() -> Self {
        Self {
            cut_start: 0.0,
            cut_end: 5.0,
            filter: "grayscale".to_string(),
            audio: "bgm.mp3".to_string(),
        }
    }
}

/// Display the editor header bar.
pub fn show_header(
    ui: &mut egui::Ui,
    project: &Project,
    can_undo: bool,
    can_redo: bool,
    status: SaveStatus,
) -> EditorAction {
    let mut action = EditorAction::None;

    ui.horizontal(|ui| {
        if ui.button("◀ Back").clicked() {
            action = EditorAction::Back;
        }
        ui.separator();
        ui.label("Editing:");
        ui.label(egui::RichText::new(&project.name).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("📥 Import").clicked() {
                action = EditorAction::Import;
            }
            if ui.button("📤 Export").clicked() {
                action = EditorAction::Export;
            }
            if ui.button("💾 Save").clicked() {
                action = EditorAction::Save;
            }

            let status_text = match status {
                SaveStatus::Saving => "⌛ Saving...",
                SaveStatus::Saved => "💾 Saved",
            };
            ui.label(egui::RichText::new(status_text).weak());

            ui.separator();

            if ui.add_enabled(can_redo, egui::Button::new("↻ Redo")).clicked() {
                action = EditorAction::Redo;
            }
            if ui.add_enabled(can_undo, egui::Button::new("↺ Undo")).clicked() {
                action = EditorAction::Undo;
            }
        });
    });

    action
}

/// Display the editor body: preview placeholder, edit history, toolbar.
pub fn show(ui: &mut egui::Ui, project: &Project, inputs: &mut EditorInputs) -> EditorAction {
    let mut action = EditorAction::None;

    // Preview placeholder; actual rendering is out of scope
    let preview_height = 180.0;
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), preview_height),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(rect, 6.0, egui::Color32::from_gray(25));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "[ Video Preview ]",
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(140),
    );

    ui.add_space(8.0);
    ui.heading("Edit history");
    ui.add_space(4.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        // Cuts
        ui.label(egui::RichText::new("✂ Cuts").weak());
        if project.edits.cuts.is_empty() {
            ui.label(egui::RichText::new("No cuts").italics().weak());
        }
        for (index, cut) in project.edits.cuts.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(format!("From {}s → {}s", cut.start, cut.end));
                if ui.small_button("✕").clicked() {
                    action = EditorAction::RemoveCut(index);
                }
            });
        }

        ui.add_space(6.0);

        // Filters
        ui.label(egui::RichText::new("🎨 Filters").weak());
        if project.edits.filters.is_empty() {
            ui.label(egui::RichText::new("No filters").italics().weak());
        }
        for (index, filter) in project.edits.filters.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(filter);
                if ui.small_button("✕").clicked() {
                    action = EditorAction::RemoveFilter(index);
                }
            });
        }

        ui.add_space(6.0);

        // Audio
        ui.label(egui::RichText::new("🎵 Audio").weak());
        match &project.edits.audio {
            Some(audio) => {
                ui.horizontal(|ui| {
                    ui.label(audio);
                    if ui.small_button("✕").clicked() {
                        action = EditorAction::RemoveAudio;
                    }
                });
            }
            None => {
                ui.label(egui::RichText::new("No audio").italics().weak());
            }
        }
    });

    ui.add_space(8.0);
    ui.separator();

    // Toolbar for adding edits
    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(&mut inputs.cut_start)
                .speed(0.1)
                .suffix("s"),
        );
        ui.label("→");
        ui.add(
            egui::DragValue::new(&mut inputs.cut_end)
                .speed(0.1)
                .suffix("s"),
        );
        if ui.button("✂ Cut").clicked() {
            action = EditorAction::AddCut(inputs.cut_start, inputs.cut_end);
        }

        ui.separator();

        ui.add(
            egui::TextEdit::singleline(&mut inputs.filter)
                .desired_width(100.0),
        );
        if ui.button("🎨 Filter").clicked() {
            action = EditorAction::AddFilter(inputs.filter.clone());
        }

        ui.separator();

        ui.add(
            egui::TextEdit::singleline(&mut inputs.audio)
                .desired_width(100.0),
        );
        if ui.button("🎵 Add audio").clicked() {
            action = EditorAction::SetAudio(inputs.audio.clone());
        }
    });

    action
}
