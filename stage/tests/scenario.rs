//! End-to-end editing scenario driven only through the public API.

#![allow(clippy::float_cmp)]

use stage::camera::Point;
use stage::doc::{AspectRatio, Element, ElementKind, Layout};
use stage::engine::{Action, EngineCore};
use stage::input::{Button, InputEvent, Modifiers};
use stage::layers::Direction;

fn show() -> Layout {
    Layout::new("show", "Evening Show", AspectRatio::Landscape)
        .add_element(Element::new("bg", "Background", ElementKind::Shape).sized(1920.0, 1080.0))
        .add_element(
            Element::new("headline", "Headline", ElementKind::text("Breaking"))
                .at(160.0, 120.0)
                .sized(800.0, 120.0),
        )
        .add_element(Element::new("ticker", "Ticker", ElementKind::text("Markets")).at(0.0, 980.0).sized(1920.0, 100.0))
}

fn x_of(core: &EngineCore, id: &str) -> f64 {
    core.element(id).map(|el| el.geometry.x).unwrap_or(f64::NAN)
}

#[test]
fn select_drag_reorder_and_round_trip() {
    let mut core = EngineCore::new(show());
    core.set_snap(false);
    core.set_scale(0.5);

    // Select headline and drag it 100 stage px to the right (50 viewport px at half scale).
    for event in [
        InputEvent::PointerDown {
            pointer_id: 1,
            at: Point::new(200.0, 80.0),
            button: Button::Primary,
            modifiers: Modifiers::default(),
        },
        InputEvent::PointerMove { pointer_id: 1, at: Point::new(225.0, 80.0), modifiers: Modifiers::default() },
        InputEvent::PointerMove { pointer_id: 1, at: Point::new(250.0, 80.0), modifiers: Modifiers::default() },
        InputEvent::PointerUp { pointer_id: 1, at: Point::new(250.0, 80.0) },
    ] {
        core.enqueue(event);
    }
    let actions = core.process();
    assert!(actions.contains(&Action::LayoutChanged));

    assert_eq!(core.selection().ids(), ["headline"]);
    assert_eq!(x_of(&core, "headline"), 260.0);
    assert_eq!(x_of(&core, "bg"), 0.0);
    assert_eq!(x_of(&core, "ticker"), 0.0);

    // bg is already at the bottom.
    let before = core.layout().clone();
    assert!(core.move_layer("bg", Direction::Down).is_empty());
    assert_eq!(*core.layout(), before);

    // The edited layout survives a document round trip unchanged.
    let json = core.layout().to_json().unwrap();
    let parsed = Layout::from_json(&json).unwrap();
    assert_eq!(parsed, *core.layout());
    assert_eq!(parsed.ids(), ["bg", "headline", "ticker"]);
}

#[test]
fn malformed_document_is_rejected_whole() {
    let json = r#"{"id":"x","name":"x","aspectRatio":"16:9","elements":[{"id":"a","type":"shape"}]}"#;
    assert!(Layout::from_json(json).is_err());
}
