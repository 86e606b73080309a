use super::*;

fn machine() -> NavbarMachine {
    NavbarMachine::new(80.0, 2000.0, 0.0)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn starts_visible_with_hide_armed() {
    let nav = machine();
    assert!(nav.is_visible());
    assert_eq!(nav.hide_deadline(), Some(2000.0));
}

#[test]
fn hides_after_initial_delay_without_pointer() {
    let mut nav = machine();
    assert_eq!(nav.tick(1999.0), NavbarState::Visible);
    assert_eq!(nav.tick(2000.0), NavbarState::Hidden);
}

#[test]
fn default_uses_constants() {
    let nav = NavbarMachine::default();
    assert_eq!(nav.hide_deadline(), Some(NAVBAR_HIDE_DELAY_MS));
}

// =============================================================
// Pointer polling
// =============================================================

#[test]
fn pointer_in_zone_keeps_visible_and_cancels_hide() {
    let mut nav = machine();
    assert_eq!(nav.on_pointer(10.0, 500.0), NavbarState::Visible);
    assert_eq!(nav.hide_deadline(), None);
    assert_eq!(nav.tick(10_000.0), NavbarState::Visible);
}

#[test]
fn threshold_boundary_counts_as_inside() {
    let mut nav = machine();
    nav.on_pointer(80.0, 0.0);
    assert_eq!(nav.hide_deadline(), None);
}

#[test]
fn leaving_zone_arms_hide_after_delay() {
    let mut nav = machine();
    nav.on_pointer(10.0, 0.0);
    assert_eq!(nav.on_pointer(400.0, 1000.0), NavbarState::Visible);
    assert_eq!(nav.hide_deadline(), Some(3000.0));
    assert_eq!(nav.on_pointer(420.0, 2999.0), NavbarState::Visible);
    assert_eq!(nav.on_pointer(420.0, 3000.0), NavbarState::Hidden);
}

#[test]
fn repeated_samples_outside_do_not_extend_deadline() {
    let mut nav = machine();
    nav.on_pointer(10.0, 0.0);
    nav.on_pointer(300.0, 100.0);
    nav.on_pointer(310.0, 1500.0);
    assert_eq!(nav.hide_deadline(), Some(2100.0));
}

#[test]
fn reentering_zone_shows_hidden_bar() {
    let mut nav = machine();
    nav.tick(5000.0);
    assert!(!nav.is_visible());
    assert_eq!(nav.on_pointer(400.0, 5100.0), NavbarState::Hidden);
    assert_eq!(nav.hide_deadline(), None);
    assert_eq!(nav.on_pointer(5.0, 5200.0), NavbarState::Visible);
}

// =============================================================
// Pin and reveal
// =============================================================

#[test]
fn pinned_bar_never_hides() {
    let mut nav = machine();
    nav.pin(true, 0.0);
    assert_eq!(nav.on_pointer(900.0, 100.0), NavbarState::Visible);
    assert_eq!(nav.tick(100_000.0), NavbarState::Visible);
    assert!(nav.is_pinned());
}

#[test]
fn unpin_arms_fresh_hide() {
    let mut nav = machine();
    nav.pin(true, 0.0);
    nav.pin(false, 10_000.0);
    assert_eq!(nav.hide_deadline(), Some(12_000.0));
    assert_eq!(nav.tick(12_000.0), NavbarState::Hidden);
}

#[test]
fn reveal_shows_for_one_delay() {
    let mut nav = machine();
    nav.tick(3000.0);
    nav.reveal(3000.0);
    assert!(nav.is_visible());
    assert_eq!(nav.tick(4999.0), NavbarState::Visible);
    assert_eq!(nav.tick(5000.0), NavbarState::Hidden);
}
