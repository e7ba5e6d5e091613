//! Input model: modifier keys, buttons, raw events, and the gesture state machine.
//!
//! `InputEvent` is the unit the interaction engine consumes; events arrive
//! already expressed in viewport pixels and are mapped to stage space by the
//! engine's camera. `InputState` is the active gesture tracked between
//! pointer-down and pointer-up, carrying the session that computes positions
//! for each move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{NUDGE_STEP, NUDGE_STEP_LARGE};
use crate::drag::{DragSession, ResizeSession, SnapGuides, SnapSettings};

/// Identifies one pointer (mouse, pen, or touch contact) across a gesture.
pub type PointerId = u32;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl or Command: toggle membership on click, shortcut prefix on keys.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }

    /// Shift: range-select on click, axis lock while dragging.
    #[must_use]
    pub fn range(self) -> bool {
        self.shift
    }

    /// Whether any modifier asks to keep the current selection on a background click.
    #[must_use]
    pub fn preserves_selection(self) -> bool {
        self.command() || self.shift
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button, pen tip, or touch contact.
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// A keyboard key, named as a browser reports it (`"ArrowUp"`, `"Delete"`, `"d"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Stage-space nudge for an arrow key, or `None` for any other key.
    #[must_use]
    pub fn nudge(&self, modifiers: Modifiers) -> Option<(f64, f64)> {
        let step = if modifiers.shift { NUDGE_STEP_LARGE } else { NUDGE_STEP };
        match self.0.as_str() {
            "ArrowLeft" => Some((-step, 0.0)),
            "ArrowRight" => Some((step, 0.0)),
            "ArrowUp" => Some((0.0, -step)),
            "ArrowDown" => Some((0.0, step)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }

    /// Ctrl/Cmd + D.
    #[must_use]
    pub fn is_duplicate(&self, modifiers: Modifiers) -> bool {
        modifiers.command() && self.0.eq_ignore_ascii_case("d")
    }
}

/// A raw input event in viewport coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum InputEvent {
    PointerDown {
        pointer_id: PointerId,
        at: Point,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        pointer_id: PointerId,
        at: Point,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        pointer_id: PointerId,
        at: Point,
    },
    /// The platform aborted the gesture. Terminal, like `PointerUp`.
    PointerCancel {
        pointer_id: PointerId,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// The pointer this event belongs to, if it is a pointer event.
    #[must_use]
    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::PointerDown { pointer_id, .. }
            | Self::PointerMove { pointer_id, .. }
            | Self::PointerUp { pointer_id, .. }
            | Self::PointerCancel { pointer_id } => Some(*pointer_id),
            Self::KeyDown { .. } => None,
        }
    }
}

/// Editor settings and transient feedback visible to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub snap: SnapSettings,
    /// Guides to draw for the current drag; cleared when the gesture ends.
    pub guides: SnapGuides,
}

/// Internal state for the interaction state machine.
///
/// `Selecting` is entered on pointer-down over a selectable element and
/// becomes `Dragging` on the first move, so a plain click never produces a
/// layout change.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer is down on an element; no movement yet.
    Selecting { session: DragSession },
    /// The selection is being moved.
    Dragging { session: DragSession },
    /// A resize handle of the single selected element is being dragged.
    Resizing { session: ResizeSession },
}

impl InputState {
    /// Pointer that owns the current gesture.
    #[must_use]
    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::Idle => None,
            Self::Selecting { session } | Self::Dragging { session } => Some(session.pointer_id),
            Self::Resizing { session } => Some(session.pointer_id),
        }
    }

    /// Whether a pointer gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
