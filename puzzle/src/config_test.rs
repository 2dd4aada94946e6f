use super::*;

#[test]
fn defaults_match_stock_widget() {
    let cfg = PuzzleConfig::default();
    assert_eq!(cfg.shuffle_delay_ms, 2000);
    assert_eq!(cfg.scramble_ms, 1000);
    assert_eq!(cfg.preview_ms, 500);
    assert_eq!(cfg.celebration_delay_ms, 500);
    assert_eq!(cfg.celebration_ms, 5000);
    assert_eq!(cfg.hint_after_attempts, 10);
    assert_eq!(cfg.default_image().as_str(), DEFAULT_IMAGE_PATH);
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_object_is_all_defaults() {
    let cfg = PuzzleConfig::from_json("{}").unwrap();
    assert_eq!(cfg, PuzzleConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = PuzzleConfig::from_json(r#"{ "hint_after_attempts": 25, "preview_ms": 800 }"#).unwrap();
    assert_eq!(cfg.hint_after_attempts, 25);
    assert_eq!(cfg.preview_ms, 800);
    assert_eq!(cfg.shuffle_delay_ms, 2000);
}

#[test]
fn default_image_override() {
    let cfg = PuzzleConfig::from_json(r#"{ "default_image": "/assets/us.jpg" }"#).unwrap();
    assert_eq!(cfg.default_image().as_str(), "/assets/us.jpg");
}

#[test]
fn unknown_field_is_rejected() {
    let err = PuzzleConfig::from_json(r#"{ "hint_after": 3 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let err = PuzzleConfig::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid puzzle config JSON"));
}

#[test]
fn zero_hint_threshold_is_rejected() {
    let err = PuzzleConfig::from_json(r#"{ "hint_after_attempts": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "hint_after_attempts", value: 0, .. }));
}

#[test]
fn oversized_timer_is_rejected() {
    let err = PuzzleConfig::from_json(r#"{ "scramble_ms": 600000 }"#).unwrap_err();
    assert_eq!(err.to_string(), "scramble_ms must be between 0 and 60000, got 600000");
}

#[test]
fn blank_default_image_is_rejected() {
    let err = PuzzleConfig::from_json(r#"{ "default_image": "  " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyDefaultImage));
}

#[test]
fn zero_delays_are_allowed() {
    let cfg = PuzzleConfig::from_json(r#"{ "shuffle_delay_ms": 0, "scramble_ms": 0 }"#).unwrap();
    assert_eq!(cfg.shuffle_delay_ms, 0);
}
