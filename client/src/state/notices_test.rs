use super::*;

// =============================================================
// NoticeState
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::info("one"));
    let b = state.push(Notice::warning("two"));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].notice.level, NoticeLevel::Warning);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::info("one"));
    let b = state.push(Notice::error("two"));
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::info("one"));
    state.dismiss(a);
    let b = state.push(Notice::info("two"));
    assert_ne!(a, b);
}

// =============================================================
// SignalNotifier
// =============================================================

#[test]
fn signal_notifier_queues_notices() {
    let owner = Owner::new();
    owner.with(|| {
        let notices = RwSignal::new(NoticeState::default());
        let notifier = SignalNotifier::new(notices, 4_000);
        notifier.notify(Notice::warning("clip.avi: unsupported type"));
        notifier.notify(Notice::info("added a row"));
        let items = notices.get_untracked().items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].notice.message, "clip.avi: unsupported type");
    });
}
