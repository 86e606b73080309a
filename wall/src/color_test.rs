use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
}

#[test]
fn hsl_primaries() {
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
    assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
    assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
    assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), (255, 0, 0));
}

#[test]
fn hsl_greys_ignore_hue() {
    assert_eq!(hsl_to_rgb(200.0, 0.0, 1.0), (255, 255, 255));
    assert_eq!(hsl_to_rgb(17.0, 0.0, 0.0), (0, 0, 0));
}

#[test]
fn lightness_round_trips_through_hsl() {
    let (r, g, b) = hsl_to_rgb(75.0, 0.7, 0.8);
    assert!((lightness(r, g, b) - 0.8).abs() < 0.01);
}

#[test]
fn shade_darkens_and_passes_through_invalid() {
    assert_eq!(shade("#ffffff", 0.5), "#808080");
    assert_eq!(shade("tomato", 0.5), "tomato");
}
