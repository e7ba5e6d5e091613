use super::*;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_string())
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_environment_yields_defaults() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.autosave, Duration::from_millis(DEFAULT_AUTOSAVE_MS));
    assert_eq!(cfg.control_room_id, DEFAULT_CONTROL_ROOM_ID);
    assert!(cfg.store_dir.is_none());
    assert!(cfg.snap);
}

#[test]
fn overrides_are_applied() {
    let cfg = Config::from_lookup(lookup(&[
        ("ONAIR_STORE_DIR", "/var/lib/onair"),
        ("ONAIR_CONTROL_ROOM_ID", "studio-b"),
        ("ONAIR_LAYOUT_ID", "evening"),
        ("ONAIR_AUTOSAVE_MS", "1200"),
        ("ONAIR_SNAP", "false"),
        ("ONAIR_CANVAS_SCALE", "0.25"),
        ("ONAIR_PREVIEW", "Segment 1"),
        ("ONAIR_PROGRAM", "Bars"),
    ]))
    .unwrap();
    assert_eq!(cfg.store_dir, Some(PathBuf::from("/var/lib/onair")));
    assert_eq!(cfg.control_room_id, "studio-b");
    assert_eq!(cfg.layout_id, "evening");
    assert_eq!(cfg.autosave, Duration::from_millis(1200));
    assert!(!cfg.snap);
    assert!((cfg.canvas_scale - 0.25).abs() < f64::EPSILON);
    assert_eq!(cfg.initial_preview, "Segment 1");
    assert_eq!(cfg.initial_program, "Bars");
}

#[test]
fn unparseable_numbers_fall_back() {
    let cfg = Config::from_lookup(lookup(&[("ONAIR_AUTOSAVE_MS", "soon"), ("ONAIR_CANVAS_SCALE", "-2")])).unwrap();
    assert_eq!(cfg.autosave, Duration::from_millis(DEFAULT_AUTOSAVE_MS));
    assert!((cfg.canvas_scale - DEFAULT_CANVAS_SCALE).abs() < f64::EPSILON);
}

#[test]
fn blank_strings_fall_back() {
    let cfg = Config::from_lookup(lookup(&[("ONAIR_STORE_DIR", "  "), ("ONAIR_LAYOUT_ID", "")])).unwrap();
    assert!(cfg.store_dir.is_none());
    assert_eq!(cfg.layout_id, DEFAULT_LAYOUT_ID);
}

#[test]
fn invalid_bool_is_an_error() {
    let err = Config::from_lookup(lookup(&[("ONAIR_SNAP", "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBool { var: "ONAIR_SNAP", value: "maybe".into() });
    assert!(err.to_string().contains("ONAIR_SNAP"));
}

#[test]
fn bool_spellings() {
    for (raw, expected) in [("1", true), ("YES", true), ("on", true), ("0", false), ("Off", false), ("no", false)] {
        let cfg = Config::from_lookup(lookup(&[("ONAIR_SNAP", raw)])).unwrap();
        assert_eq!(cfg.snap, expected, "{raw}");
    }
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("ONAIR_CONTROL_ROOM_ID", "__test_room__");
        std::env::remove_var("ONAIR_SNAP");
    }
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.control_room_id, "__test_room__");
    unsafe { std::env::remove_var("ONAIR_CONTROL_ROOM_ID") };
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u64 = env_parse(None, 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_trims_and_parses() {
    let val: u64 = env_parse(Some(" 99 ".into()), 0);
    assert_eq!(val, 99);
}

#[test]
fn env_parse_invalid_returns_default() {
    let val: u64 = env_parse(Some("notanumber".into()), 7);
    assert_eq!(val, 7);
}
