// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media thumbnail capture.
//!
//! Uploading a clip starts a project; a background thread decodes the
//! file and hands back a small first-frame thumbnail as a PNG data URI.
//! Files the decoder cannot read, or captures that outlive the deadline,
//! resolve to an empty thumbnail so project creation never stalls on bad
//! media.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Width of captured thumbnails, in pixels.
const THUMBNAIL_WIDTH: u32 = 320;

/// How long the shell waits for a capture before falling back to an
/// empty thumbnail.
pub const CAPTURE_DEADLINE: Duration = Duration::from_millis(2500);

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Result of a finished (or abandoned) capture.
pub struct CapturedMedia {
    pub name: String,
    pub thumbnail: String,
}

/// An in-flight thumbnail capture, polled by the shell each frame.
pub struct ThumbnailCapture {
    name: String,
    receiver: Receiver<String>,
    started: Instant,
}

/// Start capturing a thumbnail for the given media file.
pub fn capture(path: PathBuf) -> ThumbnailCapture {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled.mp4".to_string());

    let (sender, receiver) = channel();
    thread::spawn(move || {
        let thumbnail = match capture_thumbnail(&path) {
            Ok(uri) => uri,
            Err(e) => {
                log::warn!("No thumbnail for {}: {}", path.display(), e);
                String::new()
            }
        };
        let _ = sender.send(thumbnail);
    });

    ThumbnailCapture {
        name,
        receiver,
        started: Instant::now(),
    }
}

impl ThumbnailCapture {
    /// Poll for a finished capture.
    ///
    /// Returns `Some` once the worker reports back or the deadline
    /// passes; the deadline case carries an empty thumbnail.
    pub fn poll(&mut self) -> Option<CapturedMedia> {
        match self.receiver.try_recv() {
            Ok(thumbnail) => Some(CapturedMedia {
                name: self.name.clone(),
                thumbnail,
            }),
            Err(TryRecvError::Disconnected) => Some(CapturedMedia {
                name: self.name.clone(),
                thumbnail: String::new(),
            }),
            Err(TryRecvError::Empty) => {
                if self.started.elapsed() >= CAPTURE_DEADLINE {
                    log::warn!("Thumbnail capture timed out for {}", self.name);
                    Some(CapturedMedia {
                        name: self.name.clone(),
                        thumbnail: String::new(),
                    })
                } else {
                    None
                }
            }
        }
    }
}

/// Decode a media file, scale its first frame down and re-encode it as a
/// PNG data URI.
fn capture_thumbnail(path: &Path) -> anyhow::Result<String> {
    let image = image::open(path)?;
    let scaled = image.thumbnail(THUMBNAIL_WIDTH, THUMBNAIL_WIDTH);

    let mut png = Vec::new();
    scaled.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)?;
    Ok(format!("{}{}", DATA_URI_PREFIX, BASE64.encode(&png)))
}

/// Decode a stored data-URI thumbnail into raw RGBA pixels for display.
pub fn decode_thumbnail(uri: &str) -> Option<(u32, u32, Vec<u8>)> {
    let encoded = uri.strip_prefix(DATA_URI_PREFIX)?;
    let bytes = BASE64.decode(encoded).ok()?;
    let image = image::load_from_memory(&bytes).ok()?;
    let rgba = image.to_rgba8();
    Some((rgba.width(), rgba.height(), rgba.into_raw()))
}
