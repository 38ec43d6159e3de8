// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! reelcut - a lightweight video-project editor shell.
//!
//! Projects bundle cuts, filters and an audio track; the engine behind
//! the shell provides linear undo/redo, ordered background autosave into
//! a bounded on-disk library, and lossless JSON export/import.

mod app;
mod autosave;
mod error;
mod history;
mod io;
mod models;
mod notify;
mod session;
mod store;
mod ui;

use anyhow::Result;
use app::ReelcutApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("reelcut - Video Project Editor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "reelcut",
        options,
        Box::new(|_cc| Ok(Box::new(ReelcutApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
