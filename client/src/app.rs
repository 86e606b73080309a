//! Root application component with context providers and window listeners.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use wall::consts::{POINTER_THROTTLE_MS, RESIZE_DEBOUNCE_MS};
use wall::timing::{Debounce, Throttle};
use wall::{NavbarMachine, Wall};

use crate::components::{nav_bar::NavBar, notice_tray::NoticeTray, tag_menu::TagMenu, video_grid::VideoGrid};
use crate::state::notices::{NoticeState, SignalNotifier};
use crate::state::ui::UiState;
use crate::util::browser::{now_ms, viewport_size};

/// Root application component.
///
/// Reads the page config, builds the wall, and provides the shared state
/// contexts every component expects.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = crate::util::config::load();
    let notices = RwSignal::new(NoticeState::default());
    let notifier = SignalNotifier::new(notices, config.notice_lifetime_ms);
    let wall = RwSignal::new(Wall::from_config(&config, &notifier));

    let mut ui_state = UiState::new(
        NavbarMachine::new(config.navbar_threshold_px, config.navbar_hide_delay_ms, now_ms()),
        Throttle::new(POINTER_THROTTLE_MS),
        Debounce::new(RESIZE_DEBOUNCE_MS),
    );
    ui_state.viewport = viewport_size();
    let ui = RwSignal::new(ui_state);

    provide_context(wall);
    provide_context(ui);
    provide_context(notices);
    provide_context(notifier);

    // Eject and relayout can shrink the grid under an open menu or a drag.
    Effect::new(move || {
        let len = wall.with(|w| w.cells().len());
        ui.update(|u| u.forget_cells_from(len, now_ms()));
    });

    #[cfg(feature = "csr")]
    {
        install_window_listeners(ui);
    }

    view! {
        <Title text="Video Wall"/>
        <Meta name="description" content="Play many local videos side by side"/>

        <NavBar/>
        <VideoGrid/>
        <TagMenu/>
        <NoticeTray/>
    }
}

/// Pointer, resize, and key listeners plus the navbar poll loop.
///
/// Pointer and resize events only record samples; the poll loop applies them
/// so the UI signal is notified only when something visible changes.
#[cfg(feature = "csr")]
fn install_window_listeners(ui: RwSignal<UiState>) {
    use gloo_timers::callback::Interval;
    use wall::consts::NAVBAR_POLL_MS;

    let pointer = window_event_listener(leptos::ev::pointermove, move |ev| {
        let y = f64::from(ev.client_y());
        let now = now_ms();
        let admitted = ui.update_untracked(|u| u.sample_pointer(y, now)) == Some(true);
        if admitted {
            ui.maybe_update(|u| {
                let before = u.navbar.state();
                u.poll_navbar(now);
                before != u.navbar.state()
            });
        }
    });
    let resize = window_event_listener(leptos::ev::resize, move |_| {
        ui.update_untracked(|u| u.resize_debounce.schedule(now_ms()));
    });
    let keys = window_event_listener(leptos::ev::keydown, move |ev| {
        let now = now_ms();
        if ev.key() == "Escape" {
            ui.update(|u| u.close_tag_menu(now));
        } else if ui.with_untracked(|u| !u.navbar.is_visible()) {
            ui.update(|u| u.navbar.reveal(now));
        }
    });
    on_cleanup(move || {
        pointer.remove();
        resize.remove();
        keys.remove();
    });

    Interval::new(NAVBAR_POLL_MS, move || {
        let now = now_ms();
        ui.maybe_update(|u| {
            let before = u.navbar.state();
            u.poll_navbar(now);
            let settled = u.resize_debounce.fire(now);
            if settled {
                u.viewport = viewport_size();
            }
            settled || before != u.navbar.state()
        });
    })
    .forget();
}
