//! Broadcast controller: the preview/program switch.
//!
//! DESIGN
//! ======
//! The operator stages a composition label in *preview*; a Take copies it to
//! *program*, the on-air value. The copy happens synchronously inside
//! `take()`, so every reader sees the new program before any I/O starts.
//! Persisting the new state runs on a spawned task whose outcome is logged
//! and handed back as a `JoinHandle`; nothing waits on it before the next
//! Take.
//!
//! The controller is `Taking` while at least one persistence task is in
//! flight and `Idle` otherwise. Each Take bumps a revision counter. Writes
//! go through one controller-wide lock, and a task checks the revision only
//! after taking it: a task that finds a newer Take already recorded skips
//! its write. The stored record therefore never moves backwards, however
//! long an older write takes.
//!
//! ERROR HANDLING
//! ==============
//! Store failures are logged at `error` and reported as
//! `TakeOutcome::Failed`. They never roll back preview or program.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::store::{BroadcastRecord, BroadcastStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TakeState {
    Idle,
    Taking,
}

/// How a Take's persistence attempt settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "camelCase")]
pub enum TakeOutcome {
    Persisted,
    /// A newer Take was requested before this one's write could start.
    Superseded,
    Failed(String),
}

/// Observable controller state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastSnapshot {
    pub preview: String,
    pub program: String,
    pub state: TakeState,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_take_at: Option<OffsetDateTime>,
}

pub struct BroadcastController {
    id: String,
    preview: String,
    program: String,
    last_take_at: Option<OffsetDateTime>,
    store: Arc<dyn BroadcastStore>,
    in_flight: Arc<AtomicUsize>,
    revision: Arc<AtomicU64>,
    write_lock: Arc<Mutex<()>>,
}

impl BroadcastController {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        preview: impl Into<String>,
        program: impl Into<String>,
        store: Arc<dyn BroadcastStore>,
    ) -> Self {
        Self {
            id: id.into(),
            preview: preview.into(),
            program: program.into(),
            last_take_at: None,
            store,
            in_flight: Arc::new(AtomicUsize::new(0)),
            revision: Arc::new(AtomicU64::new(0)),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Resume from the stored record for `id`, or start from the given
    /// labels when there is none or it cannot be read.
    pub async fn restore(
        id: impl Into<String>,
        default_preview: impl Into<String>,
        default_program: impl Into<String>,
        store: Arc<dyn BroadcastStore>,
    ) -> Self {
        let id = id.into();
        let mut controller = Self::new(id.clone(), default_preview, default_program, store);
        match controller.store.load_broadcast(&id).await {
            Ok(Some(record)) => {
                info!(control_room = %id, program = %record.program, "broadcast state restored");
                controller.preview = record.preview;
                controller.program = record.program;
                controller.last_take_at = Some(record.updated_at);
            }
            Ok(None) => debug!(control_room = %id, "no stored broadcast state"),
            Err(e) => warn!(error = %e, control_room = %id, "broadcast state load failed; using defaults"),
        }
        controller
    }

    #[must_use]
    pub fn preview(&self) -> &str {
        &self.preview
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn last_take_at(&self) -> Option<OffsetDateTime> {
        self.last_take_at
    }

    #[must_use]
    pub fn state(&self) -> TakeState {
        if self.in_flight.load(Ordering::SeqCst) == 0 { TakeState::Idle } else { TakeState::Taking }
    }

    #[must_use]
    pub fn snapshot(&self) -> BroadcastSnapshot {
        BroadcastSnapshot {
            preview: self.preview.clone(),
            program: self.program.clone(),
            state: self.state(),
            last_take_at: self.last_take_at,
        }
    }

    /// Stage a new preview. Allowed in any state; program is untouched.
    pub fn set_preview(&mut self, preview: impl Into<String>) {
        self.preview = preview.into();
    }

    /// Put preview on air.
    ///
    /// Program changes before this returns. The returned handle resolves
    /// when the persistence attempt settles; dropping it is fine.
    pub fn take(&mut self) -> JoinHandle<TakeOutcome> {
        let now = OffsetDateTime::now_utc();
        self.program.clone_from(&self.preview);
        self.last_take_at = Some(now);

        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        info!(control_room = %self.id, program = %self.program, revision, "take");

        let record = BroadcastRecord {
            id: self.id.clone(),
            preview: self.preview.clone(),
            program: self.program.clone(),
            updated_at: now,
        };
        let store = Arc::clone(&self.store);
        let in_flight = Arc::clone(&self.in_flight);
        let latest = Arc::clone(&self.revision);
        let write_lock = Arc::clone(&self.write_lock);

        tokio::spawn(async move {
            let outcome = {
                let _guard = write_lock.lock().await;
                persist_take(store.as_ref(), &record, revision, &latest).await
            };
            in_flight.fetch_sub(1, Ordering::SeqCst);
            outcome
        })
    }
}

/// Write `record` unless a newer Take has been recorded. Callers hold the
/// write lock.
async fn persist_take(
    store: &dyn BroadcastStore,
    record: &BroadcastRecord,
    revision: u64,
    latest: &AtomicU64,
) -> TakeOutcome {
    if latest.load(Ordering::SeqCst) != revision {
        debug!(control_room = %record.id, revision, "take superseded before write");
        return TakeOutcome::Superseded;
    }
    match store.upsert(record).await {
        Ok(()) => {
            debug!(control_room = %record.id, revision, "take persisted");
            TakeOutcome::Persisted
        }
        Err(e) => {
            error!(error = %e, control_room = %record.id, program = %record.program, "take persistence failed");
            TakeOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod tests;
