use std::collections::VecDeque;

use serde::Serialize;
use serde_json::Value;

use crate::align::{self, AlignMode, AlignTarget};
use crate::binding::DataNamespace;
use crate::camera::{Camera, Point};
use crate::consts::DUPLICATE_OFFSET;
use crate::doc::{DataSource, Element, ElementId, ElementKind, ElementPatch, Layout};
use crate::drag::{DragSession, ResizeSession, SnapGuides};
use crate::geometry::{Axis, fit_to_stage};
use crate::hit::{Hit, HitPart, hit_test};
use crate::input::{Button, InputEvent, InputState, Key, Modifiers, PointerId, UiState};
use crate::layers::{self, Direction};
use crate::render::{self, Overlay, RenderItem};
use crate::selection::Selection;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What changed as a result of an event, for the host to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// The layout was replaced; persist and redraw.
    LayoutChanged,
    SelectionChanged,
    /// Snap guide visibility changed.
    GuidesChanged,
    /// Only the presentation changed (camera, data feed).
    RenderNeeded,
}

/// The canvas interaction state machine and the editing state it drives.
///
/// The layout is only ever replaced, never edited in place, so a clone taken
/// by a renderer or persistence task stays a consistent snapshot. The
/// selection is pruned after every replacement that removes elements.
#[derive(Debug, Clone)]
pub struct EngineCore {
    layout: Layout,
    selection: Selection,
    camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub data: DataNamespace,
    queue: VecDeque<InputEvent>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(Layout::builtin_default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            selection: Selection::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            data: DataNamespace::new(),
            queue: VecDeque::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.layout.get(id)
    }

    /// Visible elements with bound content resolved, bottom first.
    #[must_use]
    pub fn display_list(&self) -> Vec<RenderItem> {
        render::display_list(&self.layout, &self.data)
    }

    /// Selection chrome and active guides.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        render::overlay(&self.layout, &self.selection, self.ui.guides)
    }

    // --- Event queue ---

    /// Queue an event for the next [`EngineCore::process`] call.
    pub fn enqueue(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Handle every queued event in arrival order.
    pub fn process(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Some(event) = self.queue.pop_front() {
            for action in self.handle_event(event) {
                if !actions.contains(&action) {
                    actions.push(action);
                }
            }
        }
        actions
    }

    /// Handle one input event immediately.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::PointerDown { pointer_id, at, button, modifiers } => {
                self.on_pointer_down(pointer_id, at, button, modifiers)
            }
            InputEvent::PointerMove { pointer_id, at, modifiers } => self.on_pointer_move(pointer_id, at, modifiers),
            InputEvent::PointerUp { pointer_id, .. } | InputEvent::PointerCancel { pointer_id } => {
                self.on_pointer_end(pointer_id)
            }
            InputEvent::KeyDown { key, modifiers } => self.on_key_down(&key, modifiers),
        }
    }

    // --- Pointer ---

    /// Pointer pressed at viewport point `screen`.
    ///
    /// Any gesture in progress is discarded first; only one gesture exists at
    /// a time.
    pub fn on_pointer_down(
        &mut self,
        pointer_id: PointerId,
        screen: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_gesture(&mut actions);
        if button != Button::Primary {
            return actions;
        }

        let stage_pt = self.camera.screen_to_stage(screen);
        match hit_test(stage_pt, &self.layout, &self.camera, &self.selection) {
            None => {
                if !modifiers.preserves_selection() && !self.selection.is_empty() {
                    self.selection.clear();
                    actions.push(Action::SelectionChanged);
                }
            }
            Some(Hit { element_id, part: HitPart::ResizeHandle(anchor) }) => {
                if let Some(session) = ResizeSession::start(pointer_id, &element_id, anchor, stage_pt, &self.layout) {
                    self.input = InputState::Resizing { session };
                }
            }
            Some(Hit { element_id, part: HitPart::Body }) => {
                let before = self.selection.clone();
                if modifiers.command() {
                    self.selection.toggle(element_id.as_str());
                } else if modifiers.range() {
                    self.selection.select_range(&self.layout, &element_id);
                } else if !self.selection.contains(&element_id) {
                    self.selection.select_only(element_id.as_str());
                }
                if self.selection != before {
                    actions.push(Action::SelectionChanged);
                }
                if self.selection.contains(&element_id) {
                    if let Some(session) = DragSession::start(pointer_id, stage_pt, &self.layout, &self.selection) {
                        self.input = InputState::Selecting { session };
                    }
                }
            }
        }
        actions
    }

    /// Pointer moved. Events from a pointer that does not own the current
    /// gesture are ignored.
    pub fn on_pointer_move(&mut self, pointer_id: PointerId, screen: Point, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.input.pointer_id() != Some(pointer_id) {
            return actions;
        }
        let stage_pt = self.camera.screen_to_stage(screen);

        match std::mem::take(&mut self.input) {
            InputState::Idle => {}
            InputState::Selecting { mut session } | InputState::Dragging { mut session } => {
                let update = session.update(stage_pt, modifiers.shift, self.ui.snap, self.layout.stage_size());
                self.input = InputState::Dragging { session };
                let next = self.layout.set_positions(&update.positions);
                self.replace_layout(next, &mut actions);
                self.set_guides(update.guides, &mut actions);
            }
            InputState::Resizing { session } => {
                let r = session.update(stage_pt, self.ui.snap);
                let patch = ElementPatch {
                    x: Some(r.x),
                    y: Some(r.y),
                    width: Some(r.width),
                    height: Some(r.height),
                    ..ElementPatch::default()
                };
                let next = self.layout.update_element(&session.element_id, &patch);
                self.input = InputState::Resizing { session };
                self.replace_layout(next, &mut actions);
            }
        }
        actions
    }

    /// Pointer released or cancelled: both end the gesture owned by `pointer_id`.
    pub fn on_pointer_end(&mut self, pointer_id: PointerId) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.input.pointer_id() == Some(pointer_id) {
            self.end_gesture(&mut actions);
        }
        actions
    }

    // --- Keyboard ---

    /// Key pressed. Layout-changing keys are ignored while a gesture is active.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.is_escape() {
            let mut actions = Vec::new();
            self.end_gesture(&mut actions);
            if !self.selection.is_empty() {
                self.selection.clear();
                actions.push(Action::SelectionChanged);
            }
            return actions;
        }
        if self.input.is_active() {
            return Vec::new();
        }
        if let Some((dx, dy)) = key.nudge(modifiers) {
            return self.nudge_selection(dx, dy);
        }
        if key.is_delete() {
            return self.delete_selection();
        }
        if key.is_duplicate(modifiers) {
            return self.duplicate_selection();
        }
        Vec::new()
    }

    /// Move every selected, unlocked element by `(dx, dy)` in one replacement.
    pub fn nudge_selection(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        let positions: Vec<(ElementId, f64, f64)> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| self.layout.get(id))
            .filter(|el| !el.locked)
            .map(|el| (el.id.clone(), el.geometry.x + dx, el.geometry.y + dy))
            .collect();
        let next = self.layout.set_positions(&positions);
        self.commit(next)
    }

    /// Remove the selected elements and clear the selection.
    pub fn delete_selection(&mut self) -> Vec<Action> {
        let ids = self.selection.ids().to_vec();
        self.remove_elements(&ids)
    }

    /// Copy the selection one grid step down-right; the copies become the selection.
    pub fn duplicate_selection(&mut self) -> Vec<Action> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        let (next, copies) =
            self.layout.duplicate_elements(self.selection.ids(), DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        let mut actions = self.commit(next);
        self.selection = Selection::from_ids(copies);
        actions.push(Action::SelectionChanged);
        actions
    }

    // --- Layout ---

    /// Replace the whole layout, e.g. after loading a document.
    pub fn load_layout(&mut self, layout: Layout) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_gesture(&mut actions);
        self.replace_layout(layout, &mut actions);
        actions
    }

    /// Append `el` on top of the stack and select it. Duplicate ids and
    /// elements with negative size or opacity above 100 are ignored.
    pub fn add_element(&mut self, el: Element) -> Vec<Action> {
        if self.layout.contains(&el.id) || el.validate().is_err() {
            return Vec::new();
        }
        let id = el.id.clone();
        let next = self.layout.add_element(el);
        let mut actions = self.commit(next);
        self.selection.select_only(id);
        actions.push(Action::SelectionChanged);
        actions
    }

    /// Add an image element sized to fit the stage and centred on it.
    ///
    /// `natural` is the image's pixel size, when known.
    pub fn insert_image(&mut self, src: &str, natural: Option<(f64, f64)>) -> Vec<Action> {
        let (stage_w, stage_h) = self.layout.stage_size();
        let mut el = Element::with_new_id("Image", ElementKind::image(src));
        if let Some((w, h)) = natural {
            let (w, h) = fit_to_stage(w, h, stage_w, stage_h);
            el = el.sized(w, h);
        }
        let (w, h) = (el.geometry.width, el.geometry.height);
        el = el.at((stage_w - w) / 2.0, (stage_h - h) / 2.0);
        self.add_element(el)
    }

    /// Apply a sparse patch to one element. Unknown ids are a no-op.
    pub fn update_element(&mut self, id: &str, patch: &ElementPatch) -> Vec<Action> {
        let next = self.layout.update_element(id, patch);
        self.commit(next)
    }

    /// Remove elements and prune them from the selection.
    pub fn remove_elements(&mut self, ids: &[ElementId]) -> Vec<Action> {
        let next = self.layout.remove_elements(ids);
        self.commit(next)
    }

    /// Switch an element's data source. Switching to static drops its path.
    pub fn set_data_source(&mut self, id: &str, source: DataSource, path: Option<String>) -> Vec<Action> {
        let patch = ElementPatch { data_source: Some(source), data_path: path, ..ElementPatch::default() };
        self.update_element(id, &patch)
    }

    // --- Selection ---

    /// Select from the layer list. Unlike pointer selection this accepts
    /// locked and hidden elements.
    pub fn select_from_layer_list(&mut self, id: &str, modifiers: Modifiers) -> Vec<Action> {
        if !self.layout.contains(id) {
            return Vec::new();
        }
        let before = self.selection.clone();
        if modifiers.command() {
            self.selection.toggle(id);
        } else if modifiers.range() {
            self.selection.select_range(&self.layout, id);
        } else {
            self.selection.select_only(id);
        }
        if self.selection == before { Vec::new() } else { vec![Action::SelectionChanged] }
    }

    /// Replace the selection with the known ids among `ids`.
    pub fn set_selection(&mut self, ids: &[ElementId]) -> Vec<Action> {
        let next = Selection::from_ids(ids.iter().filter(|id| self.layout.contains(id)).cloned());
        if next == self.selection {
            return Vec::new();
        }
        self.selection = next;
        vec![Action::SelectionChanged]
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        self.set_selection(&[])
    }

    // --- Arrange ---

    pub fn align(&mut self, mode: AlignMode, target: AlignTarget) -> Vec<Action> {
        let next = align::align(&self.layout, &self.selection, mode, target);
        self.commit(next)
    }

    pub fn distribute(&mut self, axis: Axis) -> Vec<Action> {
        let next = align::distribute(&self.layout, &self.selection, axis);
        self.commit(next)
    }

    pub fn move_layer(&mut self, id: &str, direction: Direction) -> Vec<Action> {
        let next = layers::move_element(&self.layout, id, direction);
        self.commit(next)
    }

    /// Drag-to-reorder in the layer list (top-first rows).
    pub fn reorder_layers(&mut self, from_ui: usize, to_ui: usize) -> Vec<Action> {
        let next = layers::reorder_from_ui(&self.layout, from_ui, to_ui);
        self.commit(next)
    }

    pub fn bring_to_front(&mut self, id: &str) -> Vec<Action> {
        let next = layers::bring_to_front(&self.layout, id);
        self.commit(next)
    }

    pub fn send_to_back(&mut self, id: &str) -> Vec<Action> {
        let next = layers::send_to_back(&self.layout, id);
        self.commit(next)
    }

    // --- Settings / view ---

    pub fn set_snap(&mut self, enabled: bool) {
        self.ui.snap.enabled = enabled;
    }

    /// Scale the camera so the stage fills a container `container_width` wide.
    pub fn fit_to_container(&mut self, container_width: f64) -> Vec<Action> {
        self.set_scale(Camera::fit_scale(container_width, self.layout.stage_size().0))
    }

    /// Set viewport pixels per stage pixel. Zero, negative and non-finite
    /// scales are ignored.
    pub fn set_scale(&mut self, scale: f64) -> Vec<Action> {
        if scale <= 0.0 || !scale.is_finite() || (scale - self.camera.scale).abs() < f64::EPSILON {
            return Vec::new();
        }
        self.camera.scale = scale;
        vec![Action::RenderNeeded]
    }

    /// Write a value into the data namespace.
    pub fn set_data(&mut self, path: &str, value: Value) -> Vec<Action> {
        self.data.set(path, value);
        vec![Action::RenderNeeded]
    }

    // --- Internals ---

    fn commit(&mut self, next: Layout) -> Vec<Action> {
        let mut actions = Vec::new();
        self.replace_layout(next, &mut actions);
        actions
    }

    fn replace_layout(&mut self, next: Layout, actions: &mut Vec<Action>) {
        if next == self.layout {
            return;
        }
        self.layout = next;
        actions.push(Action::LayoutChanged);
        if self.selection.retain_existing(&self.layout) {
            actions.push(Action::SelectionChanged);
        }
    }

    fn set_guides(&mut self, guides: SnapGuides, actions: &mut Vec<Action>) {
        if guides != self.ui.guides {
            self.ui.guides = guides;
            actions.push(Action::GuidesChanged);
        }
    }

    fn end_gesture(&mut self, actions: &mut Vec<Action>) {
        self.input = InputState::Idle;
        self.set_guides(SnapGuides::default(), actions);
    }
}
