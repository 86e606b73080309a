//! One tile of the wall: a `<video>` element plus its overlay controls.
//!
//! DESIGN
//! ======
//! A cell component is keyed by the cell's id, not its index, so the same
//! `<video>` element follows its video through swaps and relayouts. The
//! index is looked up reactively whenever an action needs it. The wall
//! model is the source of truth for play/pause/mute; effects push it into
//! the element and media events mirror user-driven changes back.

#[cfg(test)]
#[path = "video_cell_test.rs"]
mod video_cell_test;

use leptos::prelude::*;
use wall::{CellId, CellState, Tag, Wall};

use crate::components::drop::apply_drop;
use crate::state::notices::SignalNotifier;
use crate::state::ui::UiState;
use crate::util::browser::now_ms;

#[component]
pub fn VideoCell(id: CellId) -> impl IntoView {
    let wall = expect_context::<RwSignal<Wall>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifier = expect_context::<SignalNotifier>();
    let video_ref = NodeRef::<leptos::html::Video>::new();

    let cell = Memo::new(move |_| wall.with(|w| w.cells().iter().find(|c| c.id == id).cloned()));
    let index = Memo::new(move |_| wall.with(|w| w.cells().iter().position(|c| c.id == id)));
    let tag = Memo::new(move |_| index.get().and_then(|i| wall.with(|w| w.tag_for(i).cloned())));

    let is_loaded = move || cell.get().is_some_and(|c| !c.is_empty());
    let src = move || cell.get().and_then(|c| c.source).map(|s| s.url);
    let title = move || cell.get().and_then(|c| c.title().map(str::to_owned)).unwrap_or_default();
    let is_muted = move || cell.get().is_none_or(|c| c.muted);

    let class = move || {
        let i = index.get();
        let visible = i.is_some_and(|i| wall.with(|w| w.is_visible(i)));
        let state = ui.get();
        cell_class(cell.get().as_ref(), visible, i.is_some() && state.drop_target == i, state.drag_from == i)
    };

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let Some(video) = video_ref.get() else {
                return;
            };
            let Some(c) = cell.get() else {
                return;
            };
            if c.is_empty() {
                return;
            }
            video.set_loop(true);
            crate::util::media::set_muted(&video, c.muted);
            crate::util::media::seek(&video, c.position);
            crate::util::media::set_playing(&video, c.playing);
        });
    }

    let sync = move |playing: Option<bool>| {
        let (Some(i), Some(video)) = (index.get_untracked(), video_ref.get_untracked()) else {
            return;
        };
        let position = video.current_time();
        match playing {
            Some(playing) if cell.get_untracked().is_some_and(|c| c.playing != playing) => {
                wall.update(|w| w.sync_playback(i, playing, position));
            }
            // Position only matters across relayouts, so skip the re-render.
            _ => {
                wall.update_untracked(|w| w.record_position(i, position));
            }
        }
    };

    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        let Some(i) = index.get_untracked() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            if let Some(dt) = ev.data_transfer() {
                dt.set_effect_allowed("move");
                if let Err(e) = dt.set_data("text/plain", &i.to_string()) {
                    log::warn!("drag data unavailable: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = &ev;
        ui.update(|u| u.begin_drag(i));
    };
    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        let i = index.get_untracked();
        if ui.with_untracked(|u| u.drop_target != i) {
            ui.update(|u| u.drop_target = i);
        }
    };
    let on_dragleave = move |_| {
        let i = index.get_untracked();
        if ui.with_untracked(|u| u.drop_target == i) {
            ui.update(|u| u.drop_target = None);
        }
    };
    let on_drop = move |ev: leptos::ev::DragEvent| apply_drop(&ev, index.get_untracked(), wall, ui, notifier);
    let on_dragend = move |_| {
        ui.update(|u| {
            u.end_drag();
        });
    };

    let on_toggle_play = move |_| {
        if let Some(i) = index.get_untracked() {
            wall.update(|w| {
                w.toggle_play(i);
            });
        }
    };
    let on_toggle_mute = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(i) = index.get_untracked() {
            wall.update(|w| {
                w.toggle_mute(i);
            });
        }
    };
    let on_tag = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(i) = index.get_untracked() {
            ui.update(|u| u.open_tag_menu(i, now_ms()));
        }
    };
    let on_eject = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let Some(i) = index.get_untracked() else {
            return;
        };
        if let Some(source) = wall.try_update(|w| w.eject(i, &notifier)).flatten() {
            crate::util::files::revoke(&source.url);
        }
    };

    view! {
        <div
            class=class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <Show
                when=is_loaded
                fallback=|| view! { <div class="cell__placeholder">"Drop a video here"</div> }
            >
                <video
                    class="cell__video"
                    node_ref=video_ref
                    src=src
                    playsinline=true
                    preload="metadata"
                    prop:muted=is_muted
                    on:click=on_toggle_play
                    on:play=move |_| sync(Some(true))
                    on:pause=move |_| sync(Some(false))
                    on:ended=move |_| sync(Some(false))
                    on:timeupdate=move |_| sync(None)
                ></video>
                <div class="cell__overlay">
                    <span class="cell__title" title=title>{title}</span>
                    {move || tag.get().map(|t| view! { <TagBadge tag=t/> })}
                    <span class="cell__spacer"></span>
                    <button class="btn cell__btn" on:click=on_toggle_mute title="Toggle sound">
                        {move || if is_muted() { "🔇" } else { "🔊" }}
                    </button>
                    <button class="btn cell__btn" on:click=on_tag title="Tag video">"#"</button>
                    <button class="btn cell__btn" on:click=on_eject title="Remove video">"⏏"</button>
                </div>
            </Show>
        </div>
    }
}

/// Tag badge; clicking it filters the wall to this tag, or back to all videos.
#[component]
fn TagBadge(tag: Tag) -> impl IntoView {
    let wall = expect_context::<RwSignal<Wall>>();
    let style = tag.badge_style();
    let name = tag.name.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        wall.update(|w| w.toggle_filter(&name));
    };
    view! {
        <button class="cell__tag" style=style title="Show only this tag" on:click=on_click>
            {tag.name}
        </button>
    }
}

fn cell_class(cell: Option<&CellState>, visible: bool, drop_target: bool, dragging: bool) -> String {
    let mut class = String::from("cell");
    if cell.is_none_or(CellState::is_empty) {
        class.push_str(" cell--empty");
    }
    if cell.is_some_and(|c| c.playing) {
        class.push_str(" cell--playing");
    }
    if !visible {
        class.push_str(" cell--filtered");
    }
    if drop_target {
        class.push_str(" cell--drop-target");
    }
    if dragging {
        class.push_str(" cell--dragging");
    }
    class
}
