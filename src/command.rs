//! Newline-delimited JSON command protocol.
//!
//! DESIGN
//! ======
//! Each input line is one JSON object tagged by `cmd`, e.g.
//! `{"cmd":"align","mode":"left"}` or
//! `{"cmd":"input","event":{"event":"pointerDown","pointerId":1,"at":{"x":10,"y":20}}}`.
//! An optional string `id` is echoed on the reply for correlation.
//!
//! Every line gets exactly one reply line: `status: "done"` with the engine
//! actions and an optional `data` payload, or `status: "error"` with a
//! grepable `code`. Errors never end the stream.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stage::align::{AlignMode, AlignTarget};
use stage::doc::{DataSource, Element, ElementId, ElementPatch};
use stage::drag::SnapGuides;
use stage::engine::{Action, EngineCore};
use stage::geometry::Axis;
use stage::input::{InputEvent, Modifiers};
use stage::layers::{Direction, layer_list};
use tracing::{debug, warn};

use crate::broadcast::BroadcastSnapshot;
use crate::error::{CommandError, ErrorCode};
use crate::session::Session;

// =============================================================================
// COMMANDS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    /// Feed one raw input event through the interaction state machine.
    Input { event: InputEvent },
    Select { ids: Vec<ElementId> },
    /// Click on a layer-list row.
    SelectLayer {
        id: ElementId,
        #[serde(default)]
        modifiers: Modifiers,
    },
    ClearSelection,
    Align {
        mode: AlignMode,
        #[serde(default)]
        target: AlignTarget,
    },
    Distribute { axis: Axis },
    MoveLayer { id: ElementId, direction: Direction },
    /// Drag-reorder in the layer list; indices are list rows, top first.
    ReorderLayers { from: usize, to: usize },
    BringToFront { id: ElementId },
    SendToBack { id: ElementId },
    AddElement { element: Element },
    InsertImage {
        src: String,
        #[serde(default)]
        natural_width: Option<f64>,
        #[serde(default)]
        natural_height: Option<f64>,
    },
    UpdateElement { id: ElementId, patch: ElementPatch },
    DeleteElements { ids: Vec<ElementId> },
    Duplicate,
    SetDataSource {
        id: ElementId,
        source: DataSource,
        #[serde(default)]
        path: Option<String>,
    },
    /// Write into the data namespace that bound elements read from.
    SetData { path: String, value: Value },
    SetSnap { enabled: bool },
    FitToContainer { width: f64 },
    OpenLayout { id: String },
    Save,
    Preview { label: String },
    Take,
    Snapshot,
    Layers,
    Render,
}

// =============================================================================
// REPLIES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Done,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: ReplyStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub retryable: bool,
}

impl Reply {
    fn done(id: Option<String>, outcome: Outcome) -> Self {
        Self {
            id,
            status: ReplyStatus::Done,
            actions: outcome.actions,
            data: outcome.data,
            code: None,
            message: None,
            retryable: false,
        }
    }

    fn error(id: Option<String>, err: &CommandError) -> Self {
        Self {
            id,
            status: ReplyStatus::Error,
            actions: Vec::new(),
            data: None,
            code: Some(err.error_code()),
            message: Some(err.to_string()),
            retryable: err.retryable(),
        }
    }
}

/// Result of a successful command.
#[derive(Debug, Default)]
pub struct Outcome {
    pub actions: Vec<Action>,
    pub data: Option<Value>,
}

impl Outcome {
    fn actions(actions: Vec<Action>) -> Self {
        Self { actions, data: None }
    }

    fn data<T: Serialize>(value: &T) -> Result<Self, CommandError> {
        let data = serde_json::to_value(value).map_err(CommandError::Encode)?;
        Ok(Self { actions: Vec::new(), data: Some(data) })
    }
}

/// Full observable state, returned by `snapshot`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView<'a> {
    layout: stage::doc::LayoutDocument,
    selection: &'a [ElementId],
    broadcast: BroadcastSnapshot,
    guides: SnapGuides,
    snap: bool,
    scale: f64,
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Parse and run one line, always producing a reply.
pub async fn handle_line(line: &str, session: &mut Session) -> Reply {
    let (id, parsed) = parse_line(line);
    let result = match parsed {
        Ok(command) => {
            debug!(?command, "command");
            command.execute(session).await
        }
        Err(e) => Err(e),
    };
    match result {
        Ok(outcome) => Reply::done(id, outcome),
        Err(e) => {
            warn!(error = %e, code = e.error_code(), "command failed");
            Reply::error(id, &e)
        }
    }
}

fn parse_line(line: &str) -> (Option<String>, Result<Command, CommandError>) {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => return (None, Err(e.into())),
    };
    let id = value.get("id").and_then(Value::as_str).map(str::to_owned);
    (id, serde_json::from_value(value).map_err(CommandError::from))
}

impl Command {
    /// Run against `session`.
    ///
    /// # Errors
    ///
    /// Only `save` and reply encoding can fail; editing commands are
    /// tolerant no-ops on unknown ids.
    pub async fn execute(self, session: &mut Session) -> Result<Outcome, CommandError> {
        let actions = match self {
            Self::Input { event } => session.apply(|engine| engine.handle_event(event)),
            Self::Select { ids } => session.apply(|engine| engine.set_selection(&ids)),
            Self::SelectLayer { id, modifiers } => session.apply(|engine| engine.select_from_layer_list(&id, modifiers)),
            Self::ClearSelection => session.apply(EngineCore::clear_selection),
            Self::Align { mode, target } => session.apply(|engine| engine.align(mode, target)),
            Self::Distribute { axis } => session.apply(|engine| engine.distribute(axis)),
            Self::MoveLayer { id, direction } => session.apply(|engine| engine.move_layer(&id, direction)),
            Self::ReorderLayers { from, to } => session.apply(|engine| engine.reorder_layers(from, to)),
            Self::BringToFront { id } => session.apply(|engine| engine.bring_to_front(&id)),
            Self::SendToBack { id } => session.apply(|engine| engine.send_to_back(&id)),
            Self::AddElement { element } => session.apply(|engine| engine.add_element(element)),
            Self::InsertImage { src, natural_width, natural_height } => {
                let natural = natural_width.zip(natural_height);
                session.apply(|engine| engine.insert_image(&src, natural))
            }
            Self::UpdateElement { id, patch } => session.apply(|engine| engine.update_element(&id, &patch)),
            Self::DeleteElements { ids } => session.apply(|engine| engine.remove_elements(&ids)),
            Self::Duplicate => session.apply(EngineCore::duplicate_selection),
            Self::SetDataSource { id, source, path } => {
                session.apply(|engine| engine.set_data_source(&id, source, path))
            }
            Self::SetData { path, value } => session.apply(|engine| engine.set_data(&path, value)),
            Self::SetSnap { enabled } => session.apply(|engine| {
                engine.set_snap(enabled);
                Vec::new()
            }),
            Self::FitToContainer { width } => session.apply(|engine| engine.fit_to_container(width)),
            Self::OpenLayout { id } => session.open_layout(&id).await,
            Self::Save => {
                session.save().await?;
                Vec::new()
            }
            Self::Preview { label } => {
                session.set_preview(label);
                return Outcome::data(&session.broadcast().snapshot());
            }
            Self::Take => {
                // Persistence settles in the background and logs its own outcome.
                let _pending = session.take();
                return Outcome::data(&session.broadcast().snapshot());
            }
            Self::Snapshot => return Outcome::data(&view(session)),
            Self::Layers => return Outcome::data(&layer_list(session.engine().layout())),
            Self::Render => return Outcome::data(&session.engine().display_list()),
        };
        Ok(Outcome::actions(actions))
    }
}

fn view(session: &Session) -> SessionView<'_> {
    let engine = session.engine();
    SessionView {
        layout: engine.layout().to_document(),
        selection: engine.selection().ids(),
        broadcast: session.broadcast().snapshot(),
        guides: engine.ui.guides,
        snap: engine.ui.snap.enabled,
        scale: engine.camera().scale,
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
