//! Scene-editing engine for broadcast graphics layouts.
//!
//! This crate owns everything between raw pointer/keyboard input and the
//! layout document: the element model, selection, drag and resize with
//! snapping, alignment, layer order, and data-binding resolution. It performs
//! no I/O. The host feeds [`input::InputEvent`]s into an
//! [`engine::EngineCore`], reacts to the returned [`engine::Action`]s, and is
//! responsible for persisting layouts and drawing the display list.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`], the interaction state machine |
//! | [`doc`] | Elements, patches, and the copy-on-write layout |
//! | [`selection`] | Ordered selection with primary semantics |
//! | [`drag`] | Drag and resize sessions, grid and guide snapping |
//! | [`align`] | Alignment and even distribution |
//! | [`layers`] | Layer list view and stacking moves |
//! | [`binding`] | Data namespace and binding resolution |
//! | [`render`] | Display list and editing overlay for an external renderer |
//! | [`hit`] | Hit-testing against elements and resize handles |
//! | [`input`] | Input event types and the gesture state |
//! | [`camera`] | Viewport to stage coordinate mapping |
//! | [`geometry`] | Rectangles, grid snap, axis lock, fit-to-stage |
//! | [`consts`] | Stage resolution, grid, thresholds |

pub mod align;
pub mod binding;
pub mod camera;
pub mod consts;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod layers;
pub mod render;
pub mod selection;
