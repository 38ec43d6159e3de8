// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background autosave.
//!
//! Every document mutation schedules a save; a worker thread drains the
//! queue and applies saves to the store strictly in the order they were
//! scheduled, so a later document state can never be overwritten by an
//! earlier one. Scheduling never blocks the caller. When the handle is
//! dropped the worker finishes whatever is already queued and exits.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::models::project::Project;
use crate::store::SharedStore;

/// Save-status indicator shown in the editor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Saving,
}

/// Completion of one scheduled save.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved { explicit: bool },
    Failed { message: String },
}

struct SaveRequest {
    project: Project,
    explicit: bool,
}

/// Handle to the autosave worker.
pub struct Autosave {
    requests: Sender<SaveRequest>,
    outcomes: Receiver<SaveOutcome>,
    in_flight: usize,
}

impl Autosave {
    /// Spawn a worker that commits saves to the given store.
    pub fn spawn(store: SharedStore) -> Self {
        let (request_tx, request_rx) = channel::<SaveRequest>();
        let (outcome_tx, outcome_rx) = channel();

        thread::spawn(move || {
            for request in request_rx {
                let result = {
                    let mut store = match store.lock() {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    store.upsert(request.project)
                };
                let outcome = match result {
                    Ok(()) => SaveOutcome::Saved {
                        explicit: request.explicit,
                    },
                    Err(e) => {
                        log::error!("Autosave failed: {}", e);
                        SaveOutcome::Failed {
                            message: e.to_string(),
                        }
                    }
                };
                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: request_tx,
            outcomes: outcome_rx,
            in_flight: 0,
        }
    }

    /// Queue a save of the given document state. `explicit` marks a
    /// user-invoked save, which gets a confirmation on completion.
    pub fn schedule(&mut self, project: Project, explicit: bool) {
        self.in_flight += 1;
        let _ = self.requests.send(SaveRequest { project, explicit });
    }

    /// Current indicator state: `Saving` while any save is outstanding.
    pub fn status(&self) -> SaveStatus {
        if self.in_flight > 0 {
            SaveStatus::Saving
        } else {
            SaveStatus::Saved
        }
    }

    /// Drain completion events that arrived since the last poll.
    pub fn poll(&mut self) -> Vec<SaveOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Block until every scheduled save has completed or the timeout
    /// expires, returning the drained outcomes. Used to flush pending
    /// work on shutdown.
    pub fn drain(&mut self, timeout: Duration) -> Vec<SaveOutcome> {
        let deadline = Instant::now() + timeout;
        let mut outcomes = Vec::new();
        while self.in_flight > 0 {
            let now = Instant::now();
            if now >= deadline {
                log::warn!("Gave up waiting on {} outstanding saves", self.in_flight);
                break;
            }
            match self.outcomes.recv_timeout(deadline - now) {
                Ok(outcome) => {
                    self.in_flight -= 1;
                    outcomes.push(outcome);
                }
                Err(_) => break,
            }
        }
        outcomes
    }
}
