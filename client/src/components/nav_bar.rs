//! Top navbar with wall-wide controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar slides away when the pointer leaves the top of the viewport
//! (see `wall::navbar`); every control here acts on the whole wall.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use wall::consts::FILTER_ALL_SENTINEL;
use wall::{TagFilter, Wall};

use crate::state::notices::SignalNotifier;
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let wall = expect_context::<RwSignal<Wall>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifier = expect_context::<SignalNotifier>();

    let class = move || if ui.with(|u| u.navbar.is_visible()) { "navbar" } else { "navbar navbar--hidden" };
    let mode_label = move || wall.with(|w| w.mode().label());
    let aspect_label = move || wall.with(|w| w.aspect().label());
    let play_label = move || play_all_label(wall.with(|w| w.grid().any_playing()));
    let mute_label = move || mute_all_label(wall.with(|w| w.cells().iter().all(|c| c.muted)));
    let summary = move || wall.with(|w| load_summary(w.grid().loaded_count(), w.cells().len()));
    let has_videos = move || wall.with(|w| w.grid().loaded_count() > 0);
    let filter_value = move || wall.with(|w| w.filter().select_value().to_owned());
    let tag_names = move || wall.with(|w| w.tags().iter().map(|t| t.name.clone()).collect::<Vec<_>>());

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let mut picked = crate::util::files::PickedFiles::from_list(input.files());
            let metas = picked.metas();
            if let Some(report) = wall.try_update(|w| w.load_files(metas, |m| picked.object_url(m), &notifier)) {
                crate::components::drop::log_report("picker", &report);
            }
            // Reset so picking the same files again still fires `change`.
            input.set_value("");
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, notifier);
        }
    };
    let on_filter = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        wall.update(|w| w.set_filter(TagFilter::from_select_value(&value)));
    };
    let on_clear = move |_| {
        let released = wall.try_update(Wall::clear_all).unwrap_or_default();
        crate::util::files::revoke_all(released.iter().map(|s| s.url.as_str()));
    };

    view! {
        <nav class=class>
            <span class="navbar__brand">"Video Wall"</span>
            <span class="navbar__divider"></span>

            <button class="btn" on:click=move |_| wall.update(Wall::toggle_layout) title="Switch grid density">
                {mode_label}
            </button>
            <button class="btn" on:click=move |_| wall.update(Wall::toggle_aspect) title="Switch aspect ratio">
                {aspect_label}
            </button>
            <span class="navbar__divider"></span>

            <button
                class="btn"
                disabled=move || !has_videos()
                on:click=move |_| {
                    wall.update(|w| {
                        w.toggle_play_all();
                    });
                }
            >
                {play_label}
            </button>
            <button
                class="btn"
                disabled=move || !has_videos()
                on:click=move |_| {
                    wall.update(|w| {
                        w.toggle_mute_all();
                    });
                }
            >
                {mute_label}
            </button>
            <span class="navbar__divider"></span>

            <label class="btn navbar__picker">
                "Add videos"
                <input type="file" multiple=true accept="video/*" on:change=on_pick/>
            </label>
            <button class="btn" disabled=move || !has_videos() on:click=on_clear>"Clear"</button>
            <span class="navbar__divider"></span>

            <select class="navbar__filter" prop:value=filter_value on:change=on_filter title="Show only one tag">
                <option value=FILTER_ALL_SENTINEL>"All videos"</option>
                <For
                    each=tag_names
                    key=String::clone
                    children=move |name| {
                        let value = name.clone();
                        view! { <option value=value>{name}</option> }
                    }
                />
            </select>

            <span class="navbar__spacer"></span>
            <span class="navbar__summary">{summary}</span>
        </nav>
    }
}

fn play_all_label(any_playing: bool) -> &'static str {
    if any_playing { "Pause all" } else { "Play all" }
}

fn mute_all_label(all_muted: bool) -> &'static str {
    if all_muted { "Unmute all" } else { "Mute all" }
}

fn load_summary(loaded: usize, cells: usize) -> String {
    format!("{loaded}/{cells} loaded")
}
