// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for the project engine.
//!
//! None of these are fatal to an editing session: malformed documents and
//! duplicate names are reported and the current state kept, and an
//! unavailable store only costs a durable checkpoint.

use thiserror::Error;

/// Errors surfaced by the project engine.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("invalid project document: {0}")]
    MalformedDocument(String),

    #[error("a project named \"{0}\" already exists")]
    DuplicateName(String),

    #[error("project store unavailable: {0}")]
    StoreUnavailable(String),
}
