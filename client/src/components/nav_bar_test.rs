use super::*;

#[test]
fn play_label_follows_any_playing() {
    assert_eq!(play_all_label(true), "Pause all");
    assert_eq!(play_all_label(false), "Play all");
}

#[test]
fn mute_label_unmutes_only_when_everything_is_muted() {
    assert_eq!(mute_all_label(true), "Unmute all");
    assert_eq!(mute_all_label(false), "Mute all");
}

#[test]
fn summary_counts_loaded_cells() {
    assert_eq!(load_summary(3, 4), "3/4 loaded");
}
