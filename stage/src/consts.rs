//! Shared numeric constants for the stage crate.

// ── Stage ───────────────────────────────────────────────────────

/// Long edge of the canonical stage resolution, in stage pixels.
pub const STAGE_LONG_EDGE: f64 = 1920.0;

/// Short edge of the canonical stage resolution, in stage pixels.
pub const STAGE_SHORT_EDGE: f64 = 1080.0;

// ── Snapping ────────────────────────────────────────────────────

/// Grid step used when snapping a dragged element, in stage pixels.
pub const GRID_STEP: f64 = 10.0;

/// Distance within which an edge or center snaps to a stage guide, in stage pixels.
pub const SNAP_THRESHOLD: f64 = 6.0;

// ── Keyboard ────────────────────────────────────────────────────

/// Arrow-key nudge distance in stage pixels.
pub const NUDGE_STEP: f64 = 1.0;

/// Arrow-key nudge distance with Shift held, in stage pixels.
pub const NUDGE_STEP_LARGE: f64 = 10.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── Elements ────────────────────────────────────────────────────

/// Smallest width or height a resize gesture can produce, in stage pixels.
pub const MIN_ELEMENT_SIZE: f64 = 8.0;

/// Font size given to new text elements.
pub const DEFAULT_FONT_SIZE: f64 = 48.0;

/// Offset applied to duplicated elements so the copy is visible, in stage pixels.
pub const DUPLICATE_OFFSET: f64 = GRID_STEP;
