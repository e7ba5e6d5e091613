//! Data binding resolver: maps an element's binding to display content.
//!
//! External data arrives as an arbitrary JSON tree (`DataNamespace`)
//! addressed by dot paths such as `game.score.home`. Numeric segments index
//! into arrays. Resolution never fails: a missing path, or a value that has no
//! sensible text form, falls back to the element's static content.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::doc::{DataBinding, Element};

/// Read-only view of the external data feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataNamespace(Value);

impl DataNamespace {
    /// An empty namespace; every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self(Value::Object(Map::new()))
    }

    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Value at `path`, or `None` if any segment is missing.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return None;
        }
        path.split('.').try_fold(&self.0, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => match segment.parse::<usize>() {
                Ok(i) => items.get(i),
                Err(_) => None,
            },
            _ => None,
        })
    }

    /// Text form of the value at `path`. Strings, numbers, and booleans
    /// convert; null, objects, and arrays do not.
    #[must_use]
    pub fn lookup_text(&self, path: &str) -> Option<String> {
        match self.lookup(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Object(_) | Value::Array(_) => None,
        }
    }

    /// Write `value` at `path`, creating intermediate objects and replacing
    /// any non-object node on the way.
    pub fn set(&mut self, path: &str, value: Value) {
        if path.is_empty() {
            return;
        }
        let mut node = &mut self.0;
        for segment in path.split('.') {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            let Value::Object(map) = node else {
                return;
            };
            node = map.entry(segment).or_insert(Value::Null);
        }
        *node = value;
    }
}

/// Content an element displays after binding resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "from", content = "value", rename_all = "lowercase")]
pub enum ResolvedContent {
    /// Taken from the data namespace.
    Bound(String),
    /// The element's literal text or source.
    Static(String),
    /// Nothing to display beyond fill and border.
    Empty,
}

impl ResolvedContent {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bound(s) | Self::Static(s) => Some(s),
            Self::Empty => None,
        }
    }
}

/// Resolve what `element` should display against `ns`.
#[must_use]
pub fn resolve(element: &Element, ns: &DataNamespace) -> ResolvedContent {
    if let DataBinding::External { path } = &element.binding {
        if let Some(text) = ns.lookup_text(path) {
            return ResolvedContent::Bound(text);
        }
    }
    match element.static_content() {
        Some(content) => ResolvedContent::Static(content.to_owned()),
        None => ResolvedContent::Empty,
    }
}
