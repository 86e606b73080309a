use super::*;

#[test]
fn missing_or_blank_config_uses_defaults() {
    assert_eq!(parse(None), WallConfig::default());
    assert_eq!(parse(Some("  \n ")), WallConfig::default());
}

#[test]
fn partial_config_overrides_named_fields() {
    let config = parse(Some(r#"{ "navbar_threshold_px": 120, "default_mode": "3x3" }"#));
    assert_eq!(config.navbar_threshold_px, 120.0);
    assert_eq!(config.default_mode, wall::LayoutMode::ThreeByThree);
    assert_eq!(config.max_file_bytes, WallConfig::default().max_file_bytes);
}

#[test]
fn malformed_config_falls_back() {
    assert_eq!(parse(Some("{ nope")), WallConfig::default());
}
