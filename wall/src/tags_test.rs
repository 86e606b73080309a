use super::*;
use crate::color::{lightness, parse_hex_rgb};

#[test]
fn get_or_create_is_idempotent() {
    let mut tags = TagRegistry::new();
    let a = tags.get_or_create("drone");
    let b = tags.get_or_create("drone");
    assert_eq!(a, b);
    assert_eq!(tags.len(), 1);
}

#[test]
fn names_are_trimmed() {
    let mut tags = TagRegistry::new();
    let tag = tags.get_or_create("  cam 2 ");
    assert_eq!(tag.map(|t| t.name), Ok("cam 2".to_owned()));
    assert!(tags.contains("cam 2"));
}

#[test]
fn rejects_blank_and_long_names() {
    let mut tags = TagRegistry::new();
    assert_eq!(tags.get_or_create("   "), Err(TagError::EmptyName));
    let long = "x".repeat(MAX_TAG_LEN + 1);
    assert_eq!(tags.get_or_create(&long), Err(TagError::TooLong { len: MAX_TAG_LEN + 1, max: MAX_TAG_LEN }));
    assert!(tags.is_empty());
}

#[test]
fn iteration_follows_insertion_order() {
    let mut tags = TagRegistry::new();
    for name in ["zeta", "alpha", "mid"] {
        assert!(tags.get_or_create(name).is_ok());
    }
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn delete_removes_only_named_tag() {
    let mut tags = TagRegistry::new();
    assert!(tags.get_or_create("a").is_ok());
    assert!(tags.get_or_create("b").is_ok());
    assert!(tags.delete("a"));
    assert!(!tags.delete("a"));
    assert!(tags.contains("b"));
    assert_eq!(tags.len(), 1);
}

#[test]
fn recreated_tag_gets_same_color() {
    let mut tags = TagRegistry::new();
    let first = tags.get_or_create("night").map(|t| t.color);
    tags.delete("night");
    let second = tags.get_or_create("night").map(|t| t.color);
    assert_eq!(first, second);
}

#[test]
fn pastel_color_is_deterministic_and_light() {
    for name in ["a", "b", "interview", "b-roll", "wide shot", "日本"] {
        let color = pastel_color(name);
        assert_eq!(color, pastel_color(name));
        let Some((r, g, b)) = parse_hex_rgb(&color) else {
            panic!("{color} should be #rrggbb");
        };
        assert!(lightness(r, g, b) >= 0.75, "{name} -> {color} is not pastel");
    }
}

#[test]
fn border_color_is_darker() {
    let tag = Tag { name: "x".to_owned(), color: "#ccddee".to_owned() };
    let Some((r, _, _)) = parse_hex_rgb(&tag.border_color()) else {
        panic!("border should parse");
    };
    assert!(r < 0xcc);
}

#[test]
fn name_hash_matches_fnv1a_reference_values() {
    assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn badge_text_contrasts_with_tag_color() {
    let pastel = Tag { name: "a".to_owned(), color: "#ccddee".to_owned() };
    assert_eq!(pastel.text_color(), "#222222");
    let dark = Tag { name: "b".to_owned(), color: "#203040".to_owned() };
    assert_eq!(dark.text_color(), "#ffffff");
    assert!(pastel.badge_style().contains("background-color: #ccddee;"));
    assert!(pastel.badge_style().contains("color: #222222;"));
}
