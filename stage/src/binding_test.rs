use serde_json::json;

use super::*;
use crate::doc::{DataBinding, DataSource, ElementKind, ElementPatch};

fn ns() -> DataNamespace {
    DataNamespace::from_value(json!({
        "game": { "score": { "home": 3, "away": "2" }, "live": true, "period": null },
        "players": [ { "name": "Ada" }, { "name": "Grace" } ],
    }))
}

fn bound_text(path: &str) -> Element {
    let mut el = Element::new("t", "T", ElementKind::text("fallback"));
    el.binding = DataBinding::External { path: path.into() };
    el
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn lookup_nested_path() {
    assert_eq!(ns().lookup("game.score.home"), Some(&json!(3)));
}

#[test]
fn lookup_array_index() {
    assert_eq!(ns().lookup_text("players.1.name").as_deref(), Some("Grace"));
}

#[test]
fn lookup_missing_segment() {
    assert!(ns().lookup("game.score.overtime").is_none());
    assert!(ns().lookup("game.score.home.deeper").is_none());
    assert!(ns().lookup("players.x").is_none());
}

#[test]
fn lookup_empty_path_misses() {
    assert!(ns().lookup("").is_none());
}

#[test]
fn lookup_text_converts_scalars() {
    let n = ns();
    assert_eq!(n.lookup_text("game.score.home").as_deref(), Some("3"));
    assert_eq!(n.lookup_text("game.score.away").as_deref(), Some("2"));
    assert_eq!(n.lookup_text("game.live").as_deref(), Some("true"));
    assert!(n.lookup_text("game.period").is_none());
    assert!(n.lookup_text("game.score").is_none());
}

#[test]
fn set_creates_intermediate_objects() {
    let mut n = DataNamespace::new();
    n.set("weather.city.temp", json!(21));
    assert_eq!(n.lookup_text("weather.city.temp").as_deref(), Some("21"));
}

#[test]
fn set_replaces_scalar_on_path() {
    let mut n = ns();
    n.set("game.live.flag", json!("x"));
    assert_eq!(n.lookup_text("game.live.flag").as_deref(), Some("x"));
}

// =============================================================
// Resolve
// =============================================================

#[test]
fn external_binding_resolves_from_namespace() {
    assert_eq!(resolve(&bound_text("game.score.home"), &ns()), ResolvedContent::Bound("3".into()));
}

#[test]
fn missing_path_falls_back_to_static() {
    assert_eq!(resolve(&bound_text("game.nope"), &ns()), ResolvedContent::Static("fallback".into()));
}

#[test]
fn static_binding_ignores_namespace() {
    let el = Element::new("t", "T", ElementKind::text("game.score.home"));
    assert_eq!(resolve(&el, &ns()), ResolvedContent::Static("game.score.home".into()));
}

#[test]
fn image_falls_back_to_src() {
    let mut el = Element::new("i", "I", ElementKind::image("logo.png"));
    el.binding = DataBinding::External { path: "team.logo".into() };
    assert_eq!(resolve(&el, &ns()).as_str(), Some("logo.png"));
}

#[test]
fn bound_shape_resolves_when_present() {
    let mut el = Element::new("s", "S", ElementKind::Shape);
    el.binding = DataBinding::External { path: "game.score.away".into() };
    assert_eq!(resolve(&el, &ns()).as_str(), Some("2"));
}

#[test]
fn unbound_shape_is_empty() {
    let el = Element::new("s", "S", ElementKind::Shape);
    assert_eq!(resolve(&el, &ns()), ResolvedContent::Empty);
}

#[test]
fn switching_to_static_then_back_does_not_restore_path() {
    let mut el = bound_text("game.score.home");
    ElementPatch { data_source: Some(DataSource::Static), ..ElementPatch::default() }.apply_to(&mut el);
    ElementPatch { data_source: Some(DataSource::External), ..ElementPatch::default() }.apply_to(&mut el);
    assert_eq!(el.binding, DataBinding::External { path: String::new() });
    assert_eq!(resolve(&el, &ns()), ResolvedContent::Static("fallback".into()));
}
