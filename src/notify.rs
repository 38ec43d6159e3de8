// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fire-and-forget notification events.
//!
//! Engine components push notices into an mpsc channel; the shell drains
//! the receiving end each frame and renders them as toasts. Senders never
//! block and never fail hard: a notice sent after the shell is gone is
//! simply dropped.

use std::sync::mpsc::{self, Receiver, Sender};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A single notification message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Create a notification channel.
pub fn channel() -> (Sender<Notice>, Receiver<Notice>) {
    mpsc::channel()
}
