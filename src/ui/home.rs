// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project library view.
//!
//! This module provides the landing view: a hero row for starting new
//! projects (upload a clip or create an empty project by name) and a
//! grid of saved projects with open/rename/delete controls.

use std::collections::HashMap;

use crate::io::media;
use crate::models::project::Project;

/// Result of library interaction.
pub enum HomeAction {
    None,
    /// Create an empty project with the given (already trimmed) name.
    Create(String),
    /// Create an anonymous project and open it immediately.
    StartEditing,
    /// Upload a media file and build a project around it.
    Upload(std::path::PathBuf),
    Open(String),
    Rename { from: String, to: String },
    Delete(String),
}

/// In-progress rename prompt.
pub struct RenameEdit {
    pub original: String,
    pub value: String,
}

/// Cache of thumbnail textures, keyed by project name.
///
/// Stored thumbnails are data URIs; decoding them every frame would be
/// wasteful, so decoded textures stick around until the entry is
/// invalidated by a rename or delete.
#[derive(Default)]
pub struct ThumbnailCache {
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl ThumbnailCache {
    pub fn invalidate(&mut self, name: &str) {
        self.textures.remove(name);
    }

    fn get(&mut self, ctx: &egui::Context, project: &Project) -> Option<egui::TextureHandle> {
        self.textures
            .entry(project.name.clone())
            .or_insert_with(|| {
                if project.thumbnail.is_empty() {
                    return None;
                }
                media::decode_thumbnail(&project.thumbnail).map(|(width, height, pixels)| {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [width as usize, height as usize],
                        &pixels,
                    );
                    ctx.load_texture(
                        format!("thumbnail-{}", project.name),
                        image,
                        egui::TextureOptions::LINEAR,
                    )
                })
            })
            .clone()
    }
}

/// Display the project library.
pub fn show(
    ui: &mut egui::Ui,
    projects: &[Project],
    name_input: &mut String,
    rename: &mut Option<RenameEdit>,
    thumbnails: &mut ThumbnailCache,
) -> HomeAction {
    let mut action = HomeAction::None;

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.heading(
            egui::RichText::new("Create & Edit Videos")
                .size(28.0),
        );
        ui.label(
            egui::RichText::new("Upload a clip or create an empty project — edit quickly on any machine.")
                .weak(),
        );
        ui.add_space(12.0);
    });

    // Hero row: upload, create by name, quick start
    ui.horizontal(|ui| {
        if ui.button("📤 Upload video (new project)").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Media", &["mp4", "mov", "mkv", "webm", "jpg", "jpeg", "png", "bmp"])
                .pick_file()
            {
                action = HomeAction::Upload(path);
            }
        }

        ui.separator();

        ui.add(
            egui::TextEdit::singleline(name_input)
                .hint_text("Project name")
                .desired_width(180.0),
        );
        if ui.button("➕ Create").clicked() {
            action = HomeAction::Create(name_input.trim().to_string());
        }

        ui.separator();

        if ui.button("Start editing").clicked() {
            action = HomeAction::StartEditing;
        }
    });

    ui.add_space(12.0);
    ui.separator();
    ui.heading("Recent projects");
    ui.add_space(4.0);

    if projects.is_empty() {
        ui.label(
            egui::RichText::new("No projects yet — upload or create one.")
                .italics()
                .weak(),
        );
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for project in projects {
                let card_action = project_card(ui, project, rename, thumbnails);
                if !matches!(card_action, HomeAction::None) {
                    action = card_action;
                }
            }
        });
    });

    // Rename prompt on top of everything else
    if let Some(edit) = rename {
        let mut open = true;
        let mut done = false;
        egui::Window::new("Rename project")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ui.ctx(), |ui| {
                ui.text_edit_singleline(&mut edit.value);
                ui.horizontal(|ui| {
                    if ui.button("Rename").clicked() {
                        action = HomeAction::Rename {
                            from: edit.original.clone(),
                            to: edit.value.trim().to_string(),
                        };
                        done = true;
                    }
                    if ui.button("Cancel").clicked() {
                        done = true;
                    }
                });
            });
        if done || !open {
            *rename = None;
        }
    }

    action
}

/// Draw a single project card; returns the action its buttons produced.
fn project_card(
    ui: &mut egui::Ui,
    project: &Project,
    rename: &mut Option<RenameEdit>,
    thumbnails: &mut ThumbnailCache,
) -> HomeAction {
    let mut action = HomeAction::None;

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.set_width(220.0);
            ui.vertical(|ui| {
                let thumb_size = egui::vec2(204.0, 114.0);
                match thumbnails.get(ui.ctx(), project) {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(&texture)
                                .fit_to_exact_size(thumb_size)
                                .rounding(4.0),
                        );
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(thumb_size, egui::Sense::hover());
                        ui.painter().rect_filled(rect, 4.0, egui::Color32::from_gray(60));
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            "No thumbnail",
                            egui::FontId::proportional(12.0),
                            egui::Color32::from_gray(160),
                        );
                    }
                }

                ui.add_space(4.0);
                ui.label(egui::RichText::new(&project.name).strong());
                ui.label(
                    egui::RichText::new(format!(
                        "edits: {} cuts · {} filters",
                        project.edits.cuts.len(),
                        project.edits.filters.len()
                    ))
                    .small()
                    .weak(),
                );

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Open").clicked() {
                        action = HomeAction::Open(project.name.clone());
                    }
                    if ui.button("Rename").clicked() {
                        *rename = Some(RenameEdit {
                            original: project.name.clone(),
                            value: project.name.clone(),
                        });
                    }
                    if ui.button("Delete").clicked() {
                        action = HomeAction::Delete(project.name.clone());
                    }
                });
            });
        });

    action
}
