//! Document model: stage elements, their properties, and the layout that
//! orders them.
//!
//! This module defines what is on the stage (`Element`, `ElementKind`), a
//! sparse-update type for inspector edits (`ElementPatch`), and the layout
//! value that owns the ordered element sequence (`Layout`).
//!
//! A `Layout` is never mutated in place. Every operation borrows the current
//! value and returns a new one; elements are held behind `Arc` so a new
//! layout shares every element it did not touch with its predecessor. Any
//! renderer or persistence pass holding an older `Layout` keeps reading one
//! consistent snapshot.
//!
//! Sequence order is paint order: later elements draw on top.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_FONT_SIZE, STAGE_LONG_EDGE, STAGE_SHORT_EDGE};
use crate::geometry::Rect;

/// Unique identifier for an element within a layout.
pub type ElementId = String;

/// Errors raised while reading a layout document.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The document is not valid JSON or is missing required fields.
    #[error("malformed layout document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two elements share the same id.
    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),
    /// An element violates a geometry or appearance invariant.
    #[error("invalid element {id}: {reason}")]
    InvalidElement { id: ElementId, reason: &'static str },
}

// =============================================================================
// ELEMENT
// =============================================================================

/// What an element is, with the fields only that kind carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// Literal or bound text.
    Text {
        text: String,
        #[serde(rename = "fontSize")]
        font_size: f64,
    },
    /// An image referenced by URL.
    Image { src: String },
    /// A filled, bordered box.
    #[serde(alias = "rectangle")]
    Shape,
    /// A grouping placeholder. Children are referenced by id, never embedded.
    Container {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<ElementId>,
    },
}

impl ElementKind {
    /// A text kind with the default font size.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into(), font_size: DEFAULT_FONT_SIZE }
    }

    /// An image kind referencing `src`.
    #[must_use]
    pub fn image(src: impl Into<String>) -> Self {
        Self::Image { src: src.into() }
    }

    /// An empty container kind.
    #[must_use]
    pub fn container() -> Self {
        Self::Container { children: Vec::new() }
    }

    /// Lowercase kind name as it appears in documents.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Shape => "shape",
            Self::Container { .. } => "container",
        }
    }
}

/// Position, size, and blending shared by every element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Left edge in stage pixels.
    pub x: f64,
    /// Top edge in stage pixels.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees; visual only, ignored by hit-testing.
    pub rotation: f64,
    /// Linear alpha, 0..=100.
    pub opacity: u8,
}

impl Default for Geometry {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, width: 200.0, height: 100.0, rotation: 0.0, opacity: 100 }
    }
}

/// Fill and border colors shared by every element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    /// Fill color as a CSS color string.
    pub fill: String,
    /// Border color as a CSS color string.
    pub border_color: String,
    /// Border width in stage pixels.
    pub border_width: f64,
}

impl Default for Appearance {
    fn default() -> Self {
        Self { fill: "#111827".into(), border_color: "#1f2937".into(), border_width: 0.0 }
    }
}

/// Where an element's displayed content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "dataSource", rename_all = "lowercase")]
pub enum DataBinding {
    /// Render the element's own literal content.
    #[default]
    Static,
    /// Render the value found at `path` in the external data namespace.
    #[serde(alias = "supabase")]
    External {
        #[serde(rename = "dataPath")]
        path: String,
    },
}

/// Binding selector without a path, used by inspector edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Static,
    External,
}

impl DataBinding {
    #[must_use]
    pub fn source(&self) -> DataSource {
        match self {
            Self::Static => DataSource::Static,
            Self::External { .. } => DataSource::External,
        }
    }

    /// The bound path, when external.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Static => None,
            Self::External { path } => Some(path),
        }
    }
}

/// A positioned visual node on the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable identity; the correlation key for selection, drag, and reorder.
    pub id: ElementId,
    /// Human label shown in the layer list.
    pub name: String,
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(flatten)]
    pub appearance: Appearance,
    /// Excluded from pointer-initiated selection and drag.
    pub locked: bool,
    /// Excluded from rendering and pointer hit-testing.
    pub hidden: bool,
    #[serde(flatten)]
    pub binding: DataBinding,
}

impl Element {
    /// Create an element with default geometry and appearance.
    #[must_use]
    pub fn new(id: impl Into<ElementId>, name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            geometry: Geometry::default(),
            appearance: Appearance::default(),
            locked: false,
            hidden: false,
            binding: DataBinding::Static,
        }
    }

    /// Create an element with a freshly generated id.
    #[must_use]
    pub fn with_new_id(name: impl Into<String>, kind: ElementKind) -> Self {
        Self::new(Uuid::new_v4().to_string(), name, kind)
    }

    /// Builder: set the top-left position.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.geometry.x = x;
        self.geometry.y = y;
        self
    }

    /// Builder: set the size. Negative values clamp to zero.
    #[must_use]
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.geometry.width = width.max(0.0);
        self.geometry.height = height.max(0.0);
        self
    }

    /// Bounding box in stage space (rotation ignored).
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.geometry.x, self.geometry.y, self.geometry.width, self.geometry.height)
    }

    /// Whether pointer gestures may select or drag this element.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.locked && !self.hidden
    }

    /// The element's literal content: text for text, source for images.
    #[must_use]
    pub fn static_content(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { text, .. } => Some(text),
            ElementKind::Image { src } => Some(src),
            ElementKind::Shape | ElementKind::Container { .. } => None,
        }
    }

    /// Check the geometry and appearance invariants every stored element holds.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidElement`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let invalid = |reason| Err(LayoutError::InvalidElement { id: self.id.clone(), reason });
        let g = &self.geometry;
        if g.width.is_nan() || g.height.is_nan() || g.width < 0.0 || g.height < 0.0 {
            return invalid("width and height must be non-negative");
        }
        if g.opacity > 100 {
            return invalid("opacity must be within 0..=100");
        }
        if self.appearance.border_width.is_nan() || self.appearance.border_width < 0.0 {
            return invalid("border width must be non-negative");
        }
        if !g.x.is_finite() || !g.y.is_finite() || !g.rotation.is_finite() {
            return invalid("position and rotation must be finite");
        }
        Ok(())
    }
}

/// Sparse update for an element. Only present fields are applied.
///
/// Kind-specific fields (`text`, `font_size`, `src`) are ignored on elements
/// of another kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Clamped to zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Clamped to zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Clamped to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Clamped to zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Switching to `Static` drops any bound path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
    /// Only meaningful when the resulting binding is external.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,
}

impl ElementPatch {
    /// Patch that moves an element to `(x, y)`.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Self::default() }
    }

    /// Apply every present field to `el`, enforcing element invariants.
    pub fn apply_to(&self, el: &mut Element) {
        if let Some(name) = &self.name {
            el.name.clone_from(name);
        }
        let g = &mut el.geometry;
        if let Some(x) = self.x {
            g.x = x;
        }
        if let Some(y) = self.y {
            g.y = y;
        }
        if let Some(w) = self.width {
            g.width = w.max(0.0);
        }
        if let Some(h) = self.height {
            g.height = h.max(0.0);
        }
        if let Some(r) = self.rotation {
            g.rotation = r;
        }
        if let Some(o) = self.opacity {
            g.opacity = o.min(100);
        }
        let a = &mut el.appearance;
        if let Some(fill) = &self.fill {
            a.fill.clone_from(fill);
        }
        if let Some(color) = &self.border_color {
            a.border_color.clone_from(color);
        }
        if let Some(bw) = self.border_width {
            a.border_width = bw.max(0.0);
        }
        if let Some(locked) = self.locked {
            el.locked = locked;
        }
        if let Some(hidden) = self.hidden {
            el.hidden = hidden;
        }
        match &mut el.kind {
            ElementKind::Text { text, font_size } => {
                if let Some(t) = &self.text {
                    text.clone_from(t);
                }
                if let Some(fs) = self.font_size {
                    *font_size = fs.max(0.0);
                }
            }
            ElementKind::Image { src } => {
                if let Some(s) = &self.src {
                    src.clone_from(s);
                }
            }
            ElementKind::Shape | ElementKind::Container { .. } => {}
        }
        self.apply_binding(el);
    }

    fn apply_binding(&self, el: &mut Element) {
        match (self.data_source, &el.binding) {
            (Some(DataSource::Static), _) => el.binding = DataBinding::Static,
            (Some(DataSource::External), DataBinding::External { path }) => {
                let path = self.data_path.clone().unwrap_or_else(|| path.clone());
                el.binding = DataBinding::External { path };
            }
            (Some(DataSource::External), DataBinding::Static) => {
                el.binding = DataBinding::External { path: self.data_path.clone().unwrap_or_default() };
            }
            (None, DataBinding::External { .. }) => {
                if let Some(path) = &self.data_path {
                    el.binding = DataBinding::External { path: path.clone() };
                }
            }
            (None, DataBinding::Static) => {}
        }
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Stage orientation; fixes the canonical stage resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1920x1080.
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    /// 1080x1920.
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// Stage `(width, height)` in stage pixels.
    #[must_use]
    pub fn stage_size(self) -> (f64, f64) {
        match self {
            Self::Landscape => (STAGE_LONG_EDGE, STAGE_SHORT_EDGE),
            Self::Portrait => (STAGE_SHORT_EDGE, STAGE_LONG_EDGE),
        }
    }
}

/// Where `reorder` places the moved element relative to the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Directly beneath the target in paint order.
    Before(ElementId),
    /// Directly above the target in paint order.
    After(ElementId),
}

/// The persisted document form of a [`Layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    pub id: String,
    pub name: String,
    pub aspect_ratio: AspectRatio,
    pub elements: Vec<Element>,
}

/// An ordered, copy-on-write sequence of elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "LayoutDocument", try_from = "LayoutDocument")]
pub struct Layout {
    pub id: String,
    pub name: String,
    pub aspect_ratio: AspectRatio,
    elements: Vec<Arc<Element>>,
}

impl Layout {
    /// An empty layout.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, aspect_ratio: AspectRatio) -> Self {
        Self { id: id.into(), name: name.into(), aspect_ratio, elements: Vec::new() }
    }

    /// The built-in layout used at session start and when a stored document
    /// cannot be read.
    #[must_use]
    pub fn builtin_default() -> Self {
        let mut bg = Element::new("bg", "Background", ElementKind::Shape).sized(STAGE_LONG_EDGE, STAGE_SHORT_EDGE);
        bg.appearance.fill = "#0a0a0f".into();
        bg.locked = true;

        let mut score = Element::new("score", "Scorebug", ElementKind::container())
            .at(64.0, 860.0)
            .sized(520.0, 160.0);
        score.geometry.opacity = 95;
        score.appearance = Appearance { fill: "#101827".into(), border_color: "#2563eb".into(), border_width: 2.0 };
        score.binding = DataBinding::External { path: "game.score.home".into() };

        let mut lower_third = Element::new("lower-third", "Lower Third", ElementKind::text("Player Name · Position"))
            .at(220.0, 640.0)
            .sized(1480.0, 120.0);
        lower_third.appearance = Appearance { fill: "#111827".into(), border_color: "#475569".into(), border_width: 1.0 };
        lower_third.binding = DataBinding::External { path: "player.name".into() };

        let mut logo = Element::new("logo", "Team Logo", ElementKind::image("logo.png"))
            .at(1600.0, 48.0)
            .sized(240.0, 240.0);
        logo.appearance = Appearance { fill: "#0f172a".into(), border_color: "#334155".into(), border_width: 1.0 };

        let elements = [bg, score, lower_third, logo].into_iter().map(Arc::new).collect();
        Self { id: "default".into(), name: "Default Layout".into(), aspect_ratio: AspectRatio::Landscape, elements }
    }

    /// Build a layout from an element list, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] on duplicate ids or invalid element geometry.
    pub fn from_elements(
        id: impl Into<String>,
        name: impl Into<String>,
        aspect_ratio: AspectRatio,
        elements: Vec<Element>,
    ) -> Result<Self, LayoutError> {
        let mut seen = HashSet::new();
        for el in &elements {
            el.validate()?;
            if !seen.insert(el.id.as_str()) {
                return Err(LayoutError::DuplicateId(el.id.clone()));
            }
        }
        let elements = elements.into_iter().map(Arc::new).collect();
        Ok(Self { id: id.into(), name: name.into(), aspect_ratio, elements })
    }

    /// Parse a JSON layout document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the JSON is malformed, a field is missing,
    /// or the elements violate layout invariants.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let doc: LayoutDocument = serde_json::from_str(json)?;
        Self::try_from(doc)
    }

    /// Serialize to a JSON layout document.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization itself fails.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(&self.to_document())?)
    }

    /// Deep copy into the document form.
    #[must_use]
    pub fn to_document(&self) -> LayoutDocument {
        LayoutDocument {
            id: self.id.clone(),
            name: self.name.clone(),
            aspect_ratio: self.aspect_ratio,
            elements: self.elements.iter().map(|el| Element::clone(el)).collect(),
        }
    }

    /// Stage `(width, height)` for this layout's aspect ratio.
    #[must_use]
    pub fn stage_size(&self) -> (f64, f64) {
        self.aspect_ratio.stage_size()
    }

    // --- Queries ---

    /// Elements in paint order (bottom first).
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &Element> + ExactSizeIterator {
        self.elements.iter().map(AsRef::as_ref)
    }

    /// Element ids in paint order.
    #[must_use]
    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|el| el.id.clone()).collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id).map(AsRef::as_ref)
    }

    /// Paint-order index of `id`.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `self` and `other` hold the same `Arc` for element `id`.
    #[must_use]
    pub fn shares_element(&self, other: &Layout, id: &str) -> bool {
        match (self.elements.iter().find(|e| e.id == id), other.elements.iter().find(|e| e.id == id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    // --- Mutations (each returns a new layout) ---

    /// Append `el` on top of the stack. An id already present or an element
    /// failing [`Element::validate`] is a no-op.
    #[must_use]
    pub fn add_element(&self, el: Element) -> Layout {
        self.insert_element(self.len(), el)
    }

    /// Insert `el` at paint-order `index` (clamped). An id already present or
    /// an element failing [`Element::validate`] is a no-op.
    #[must_use]
    pub fn insert_element(&self, index: usize, el: Element) -> Layout {
        if self.contains(&el.id) || el.validate().is_err() {
            return self.clone();
        }
        let mut next = self.clone();
        let index = index.min(next.elements.len());
        next.elements.insert(index, Arc::new(el));
        next
    }

    /// Remove every element whose id is in `ids`. Unknown ids are ignored.
    #[must_use]
    pub fn remove_elements(&self, ids: &[ElementId]) -> Layout {
        let mut next = self.clone();
        next.elements.retain(|el| !ids.contains(&el.id));
        next
    }

    /// Apply `patch` to element `id`. An unknown id is a no-op.
    #[must_use]
    pub fn update_element(&self, id: &str, patch: &ElementPatch) -> Layout {
        self.update_with(id, |el| patch.apply_to(el))
    }

    /// Run `f` against a copy of element `id`. An unknown id is a no-op.
    #[must_use]
    pub fn update_with<F>(&self, id: &str, f: F) -> Layout
    where
        F: FnOnce(&mut Element),
    {
        let Some(index) = self.index_of(id) else {
            return self.clone();
        };
        let mut next = self.clone();
        let mut el = Element::clone(&next.elements[index]);
        f(&mut el);
        next.elements[index] = Arc::new(el);
        next
    }

    /// Set the positions of several elements in one replacement.
    ///
    /// Unknown ids are skipped.
    #[must_use]
    pub fn set_positions(&self, positions: &[(ElementId, f64, f64)]) -> Layout {
        let mut next = self.clone();
        for (id, x, y) in positions {
            let Some(slot) = next.elements.iter_mut().find(|el| &el.id == id) else {
                continue;
            };
            if slot.geometry.x == *x && slot.geometry.y == *y {
                continue;
            }
            let mut el = Element::clone(slot);
            el.geometry.x = *x;
            el.geometry.y = *y;
            *slot = Arc::new(el);
        }
        next
    }

    /// Move `id` directly before or after another element in paint order.
    ///
    /// No-op when either id is unknown or both are the same element.
    #[must_use]
    pub fn reorder(&self, id: &str, placement: &Placement) -> Layout {
        let target = match placement {
            Placement::Before(t) | Placement::After(t) => t.as_str(),
        };
        if id == target {
            return self.clone();
        }
        let (Some(from), Some(_)) = (self.index_of(id), self.index_of(target)) else {
            return self.clone();
        };
        let mut next = self.clone();
        let moved = next.elements.remove(from);
        let Some(target_index) = next.index_of(target) else {
            return self.clone();
        };
        let to = match placement {
            Placement::Before(_) => target_index,
            Placement::After(_) => target_index + 1,
        };
        next.elements.insert(to, moved);
        next
    }

    /// Move `id` to paint-order `index` (clamped). Unknown ids are a no-op.
    #[must_use]
    pub fn move_to_index(&self, id: &str, index: usize) -> Layout {
        let Some(from) = self.index_of(id) else {
            return self.clone();
        };
        let mut next = self.clone();
        let moved = next.elements.remove(from);
        let to = index.min(next.elements.len());
        next.elements.insert(to, moved);
        next
    }

    /// Swap the elements at two paint-order indices. Out-of-range is a no-op.
    #[must_use]
    pub fn swap(&self, a: usize, b: usize) -> Layout {
        let mut next = self.clone();
        if a < next.elements.len() && b < next.elements.len() {
            next.elements.swap(a, b);
        }
        next
    }

    /// Copy every listed element, offset by `(dx, dy)`, with fresh ids.
    ///
    /// Each copy is inserted directly above its original. Returns the new
    /// layout and the ids of the copies in paint order.
    #[must_use]
    pub fn duplicate_elements(&self, ids: &[ElementId], dx: f64, dy: f64) -> (Layout, Vec<ElementId>) {
        let mut next = self.clone();
        let mut copies = Vec::new();
        let mut index = 0;
        while index < next.elements.len() {
            let original = &next.elements[index];
            if !ids.contains(&original.id) {
                index += 1;
                continue;
            }
            let mut copy = Element::clone(original);
            copy.id = Uuid::new_v4().to_string();
            copy.name = format!("{} Copy", original.name);
            copy.geometry.x += dx;
            copy.geometry.y += dy;
            copies.push(copy.id.clone());
            next.elements.insert(index + 1, Arc::new(copy));
            index += 2;
        }
        (next, copies)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::builtin_default()
    }
}

impl From<Layout> for LayoutDocument {
    fn from(layout: Layout) -> Self {
        layout.to_document()
    }
}

impl TryFrom<LayoutDocument> for Layout {
    type Error = LayoutError;

    fn try_from(doc: LayoutDocument) -> Result<Self, Self::Error> {
        Layout::from_elements(doc.id, doc.name, doc.aspect_ratio, doc.elements)
    }
}
