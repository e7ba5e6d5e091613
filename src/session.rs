//! One operator session: the editing engine, the broadcast controller, and
//! the layout document they work on.
//!
//! DESIGN
//! ======
//! `Session` owns an `EngineCore` and routes every mutation through
//! [`Session::apply`], which publishes the new layout on a `watch` channel
//! whenever the engine reports `LayoutChanged`. The autosave task holds the
//! receiving end, so persistence never runs on the editing path.
//!
//! ERROR HANDLING
//! ==============
//! A layout that is missing, unreadable, or malformed is replaced by the
//! built-in default (renamed to the requested id) and the problem is logged.
//! The session never starts half-hydrated.

use std::sync::Arc;

use stage::doc::Layout;
use stage::engine::{Action, EngineCore};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::broadcast::{BroadcastController, TakeOutcome};
use crate::config::Config;
use crate::error::StoreError;
use crate::store::{BroadcastStore, LayoutStore};

pub struct Session {
    engine: EngineCore,
    broadcast: BroadcastController,
    layouts: Arc<dyn LayoutStore>,
    snapshots: watch::Sender<Layout>,
}

impl Session {
    /// Open a session on `config.layout_id`, resuming broadcast state.
    pub async fn open(config: &Config, layouts: Arc<dyn LayoutStore>, broadcasts: Arc<dyn BroadcastStore>) -> Self {
        let layout = load_layout_or_default(layouts.as_ref(), &config.layout_id).await;
        let broadcast = BroadcastController::restore(
            config.control_room_id.clone(),
            config.initial_preview.clone(),
            config.initial_program.clone(),
            broadcasts,
        )
        .await;

        let mut engine = EngineCore::new(layout.clone());
        engine.set_snap(config.snap);
        engine.set_scale(config.canvas_scale);

        let (snapshots, _) = watch::channel(layout);
        Self { engine, broadcast, layouts, snapshots }
    }

    #[must_use]
    pub fn engine(&self) -> &EngineCore {
        &self.engine
    }

    #[must_use]
    pub fn broadcast(&self) -> &BroadcastController {
        &self.broadcast
    }

    /// Receiver for layout snapshots, one per committed change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Layout> {
        self.snapshots.subscribe()
    }

    /// Run an engine operation and publish the layout if it changed.
    pub fn apply<F>(&mut self, op: F) -> Vec<Action>
    where
        F: FnOnce(&mut EngineCore) -> Vec<Action>,
    {
        let actions = op(&mut self.engine);
        if actions.contains(&Action::LayoutChanged) {
            self.snapshots.send_replace(self.engine.layout().clone());
        }
        actions
    }

    /// Replace the working layout with the stored document `id`.
    pub async fn open_layout(&mut self, id: &str) -> Vec<Action> {
        let layout = load_layout_or_default(self.layouts.as_ref(), id).await;
        self.apply(|engine| engine.load_layout(layout))
    }

    /// Persist the working layout now, outside the autosave debounce.
    ///
    /// # Errors
    ///
    /// Returns the store's error; the in-memory layout is unaffected.
    pub async fn save(&self) -> Result<(), StoreError> {
        let layout = self.engine.layout();
        self.layouts.save_layout(layout).await.inspect_err(|e| {
            error!(error = %e, layout_id = %layout.id, "layout save failed");
        })
    }

    pub fn set_preview(&mut self, preview: impl Into<String>) {
        self.broadcast.set_preview(preview);
    }

    /// Take preview to program. See [`BroadcastController::take`].
    pub fn take(&mut self) -> JoinHandle<TakeOutcome> {
        self.broadcast.take()
    }
}

/// Load and parse layout `id`, falling back to the built-in default.
pub async fn load_layout_or_default(store: &dyn LayoutStore, id: &str) -> Layout {
    let parsed = match store.load_layout(id).await {
        Ok(Some(json)) => match Layout::from_json(&json) {
            Ok(layout) => Some(layout),
            Err(e) => {
                warn!(error = %e, layout_id = %id, "malformed layout document; using built-in default");
                None
            }
        },
        Ok(None) => {
            info!(layout_id = %id, "no stored layout; using built-in default");
            None
        }
        Err(e) => {
            error!(error = %e, layout_id = %id, "layout load failed; using built-in default");
            None
        }
    };

    parsed.unwrap_or_else(|| {
        let mut layout = Layout::builtin_default();
        layout.id = id.to_owned();
        layout
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
