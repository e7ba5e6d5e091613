use std::sync::Arc;
use std::time::Duration;

use onair::broadcast::TakeState;
use onair::command;
use onair::config::Config;
use onair::services::autosave::spawn_autosave_task;
use onair::session::Session;
use onair::store::{BroadcastStore, FileStore, LayoutStore, MemoryStore};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const TAKE_SETTLE_POLLS: u32 = 200;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let (layouts, broadcasts) = match &config.store_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "using file store");
            let store = Arc::new(FileStore::new(dir));
            (store.clone() as Arc<dyn LayoutStore>, store as Arc<dyn BroadcastStore>)
        }
        None => {
            info!("using in-memory store");
            let store = Arc::new(MemoryStore::new());
            (store.clone() as Arc<dyn LayoutStore>, store as Arc<dyn BroadcastStore>)
        }
    };

    let mut session = Session::open(&config, layouts.clone(), broadcasts).await;
    let autosave = spawn_autosave_task(session.subscribe(), layouts, config.autosave);
    info!(
        layout_id = %session.engine().layout().id,
        program = %session.broadcast().program(),
        "control room ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = command::handle_line(&line, &mut session).await;
        match serde_json::to_string(&reply) {
            Ok(json) => {
                stdout.write_all(json.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
            Err(e) => error!(error = %e, "reply serialization failed"),
        }
    }

    // Give outstanding Take writes a bounded window to settle.
    for _ in 0..TAKE_SETTLE_POLLS {
        if session.broadcast().state() == TakeState::Idle {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    // Closing the session drops the snapshot sender; autosave flushes and exits.
    drop(session);
    autosave.await?;
    info!("control room closed");
    Ok(())
}
