use super::*;

fn ui() -> UiState {
    UiState::new(NavbarMachine::new(80.0, 2_000.0, 0.0), Throttle::new(50.0), Debounce::new(150.0))
}

// =============================================================
// resolve_drop
// =============================================================

#[test]
fn cell_onto_other_cell_swaps() {
    assert_eq!(resolve_drop(Some(1), Some(3), 0), DropAction::Swap { from: 1, to: 3 });
}

#[test]
fn cell_onto_itself_is_ignored() {
    assert_eq!(resolve_drop(Some(2), Some(2), 0), DropAction::Ignore);
    assert_eq!(resolve_drop(None, Some(2), 0), DropAction::Ignore);
    assert_eq!(resolve_drop(Some(2), None, 0), DropAction::Ignore);
}

#[test]
fn single_file_on_cell_loads_into_it() {
    assert_eq!(resolve_drop(None, Some(4), 1), DropAction::LoadInto { index: 4 });
    assert_eq!(resolve_drop(Some(0), Some(4), 1), DropAction::LoadInto { index: 4 });
}

#[test]
fn many_files_or_background_drop_load_as_batch() {
    assert_eq!(resolve_drop(None, Some(4), 3), DropAction::LoadBatch);
    assert_eq!(resolve_drop(None, None, 1), DropAction::LoadBatch);
}

// =============================================================
// Drag bookkeeping
// =============================================================

#[test]
fn end_drag_returns_source_and_clears_highlight() {
    let mut state = ui();
    state.begin_drag(2);
    state.drop_target = Some(5);
    state.file_hover = true;
    assert_eq!(state.end_drag(), Some(2));
    assert_eq!(state.drag_from, None);
    assert_eq!(state.drop_target, None);
    assert!(!state.file_hover);
    assert_eq!(state.end_drag(), None);
}

#[test]
fn forget_cells_from_drops_stale_indexes() {
    let mut state = ui();
    state.begin_drag(7);
    state.drop_target = Some(1);
    state.open_tag_menu(6, 10.0);
    state.forget_cells_from(4, 20.0);
    assert_eq!(state.drag_from, None);
    assert_eq!(state.drop_target, Some(1));
    assert_eq!(state.tag_menu_for, None);
    assert!(!state.navbar.is_pinned());
    assert_eq!(state.navbar.hide_deadline(), Some(2_020.0));
}

// =============================================================
// Tag menu
// =============================================================

#[test]
fn tag_menu_pins_navbar_until_closed() {
    let mut state = ui();
    state.tag_draft = "stale".to_owned();
    state.open_tag_menu(1, 0.0);
    assert_eq!(state.tag_menu_for, Some(1));
    assert!(state.tag_draft.is_empty());
    assert!(state.navbar.is_pinned());

    state.poll_navbar(10_000.0);
    assert!(state.navbar.is_visible());

    state.close_tag_menu(10_000.0);
    assert_eq!(state.tag_menu_for, None);
    assert!(!state.navbar.is_pinned());
    state.poll_navbar(12_000.0);
    assert!(!state.navbar.is_visible());
}

#[test]
fn closing_without_open_menu_leaves_navbar_alone() {
    let mut state = ui();
    state.close_tag_menu(500.0);
    assert_eq!(state.navbar.hide_deadline(), Some(2_000.0));
}

// =============================================================
// Pointer sampling and navbar polling
// =============================================================

#[test]
fn pointer_samples_are_throttled_but_latest_is_kept() {
    let mut state = ui();
    assert!(state.sample_pointer(300.0, 0.0));
    assert!(!state.sample_pointer(10.0, 20.0));
    assert_eq!(state.pointer_y, Some(10.0));
    assert!(state.sample_pointer(12.0, 60.0));
    assert_eq!(state.pointer_y, Some(12.0));
}

#[test]
fn throttled_final_sample_keeps_navbar_visible() {
    let mut state = ui();
    assert!(state.sample_pointer(300.0, 0.0));
    assert!(!state.sample_pointer(10.0, 20.0));
    state.poll_navbar(2_100.0);
    assert!(state.navbar.is_visible());
}

#[test]
fn poll_without_pointer_hides_after_delay() {
    let mut state = ui();
    state.poll_navbar(1_999.0);
    assert!(state.navbar.is_visible());
    state.poll_navbar(2_000.0);
    assert!(!state.navbar.is_visible());
}

#[test]
fn poll_with_pointer_near_top_keeps_navbar() {
    let mut state = ui();
    assert!(state.sample_pointer(40.0, 0.0));
    state.poll_navbar(5_000.0);
    assert!(state.navbar.is_visible());

    assert!(state.sample_pointer(400.0, 5_100.0));
    state.poll_navbar(5_100.0);
    assert!(state.navbar.is_visible());
    state.poll_navbar(7_100.0);
    assert!(!state.navbar.is_visible());

    assert!(state.sample_pointer(0.0, 7_200.0));
    state.poll_navbar(7_200.0);
    assert!(state.navbar.is_visible());
}

#[test]
fn default_uses_wall_constants() {
    let state = UiState::default();
    assert!(state.navbar.is_visible());
    assert_eq!(state.navbar.hide_deadline(), Some(wall::consts::NAVBAR_HIDE_DELAY_MS));
    assert_eq!(state.viewport, (0.0, 0.0));
}
