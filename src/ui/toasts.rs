// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toast notification overlay.
//!
//! Drains the notification channel each frame into a corner overlay.
//! Toasts are purely presentational and expire three seconds after they
//! arrive.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crate::notify::{Notice, Severity};

const TOAST_LIFETIME: Duration = Duration::from_secs(3);

struct ActiveToast {
    notice: Notice,
    shown_at: Instant,
}

/// Corner overlay of auto-dismissing notifications.
pub struct Toasts {
    receiver: Receiver<Notice>,
    active: Vec<ActiveToast>,
}

impl Toasts {
    pub fn new(receiver: Receiver<Notice>) -> Self {
        Self {
            receiver,
            active: Vec::new(),
        }
    }

    /// Collect new notices, drop expired ones and paint the rest.
    pub fn show(&mut self, ctx: &egui::Context) {
        while let Ok(notice) = self.receiver.try_recv() {
            self.active.push(ActiveToast {
                notice,
                shown_at: Instant::now(),
            });
        }
        self.active
            .retain(|toast| toast.shown_at.elapsed() < TOAST_LIFETIME);
        if self.active.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.active {
                    egui::Frame::none()
                        .fill(severity_color(toast.notice.severity))
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.notice.message)
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(6.0);
                }
            });

        // Keep repainting so toasts disappear on time even when idle
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Info => egui::Color32::from_rgb(31, 41, 55),
        Severity::Success => egui::Color32::from_rgb(22, 163, 74),
        Severity::Warning => egui::Color32::from_rgb(202, 138, 4),
        Severity::Error => egui::Color32::from_rgb(220, 38, 38),
    }
}
