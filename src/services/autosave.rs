//! Autosave service: debounced persistence of layout snapshots.
//!
//! DESIGN
//! ======
//! The session publishes every committed layout on a `watch` channel. This
//! task waits for a change, then keeps waiting until the channel has been
//! quiet for the debounce window, and saves only the latest snapshot. A drag
//! that produces hundreds of intermediate layouts costs one write.
//!
//! When the session drops its sender the task flushes any unsaved snapshot
//! and exits.
//!
//! ERROR HANDLING
//! ==============
//! Failed saves are logged and the task keeps running; the next change
//! retries with a fresher snapshot.

use std::sync::Arc;
use std::time::Duration;

use stage::doc::Layout;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::store::LayoutStore;

/// Spawn the autosave task. Returns a handle that resolves once the sender
/// side is gone and the final snapshot has been saved.
pub fn spawn_autosave_task(
    mut rx: watch::Receiver<Layout>,
    store: Arc<dyn LayoutStore>,
    debounce: Duration,
) -> JoinHandle<()> {
    info!(debounce_ms = u64::try_from(debounce.as_millis()).unwrap_or(u64::MAX), "layout autosave configured");
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let open = settle(&mut rx, debounce).await;
            let layout = rx.borrow_and_update().clone();
            save(store.as_ref(), &layout).await;
            if !open {
                break;
            }
        }
        debug!("layout autosave stopped");
    })
}

/// Wait until no change arrives for `debounce`. Returns `false` if the
/// sender closed while waiting.
async fn settle(rx: &mut watch::Receiver<Layout>, debounce: Duration) -> bool {
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    return false;
                }
            }
            () = tokio::time::sleep(debounce) => return true,
        }
    }
}

async fn save(store: &dyn LayoutStore, layout: &Layout) {
    match store.save_layout(layout).await {
        Ok(()) => debug!(layout_id = %layout.id, elements = layout.len(), "layout autosaved"),
        Err(e) => error!(error = %e, layout_id = %layout.id, "layout autosave failed"),
    }
}

#[cfg(test)]
#[path = "autosave_test.rs"]
mod tests;
