//! The wall itself: a CSS grid of [`VideoCell`]s that also accepts file drops.

use leptos::prelude::*;
use wall::Wall;

use crate::components::drop::apply_drop;
use crate::components::video_cell::VideoCell;
use crate::state::notices::SignalNotifier;
use crate::state::ui::UiState;

#[component]
pub fn VideoGrid() -> impl IntoView {
    let wall = expect_context::<RwSignal<Wall>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifier = expect_context::<SignalNotifier>();

    let class = move || {
        let aspect = wall.with(Wall::aspect).css_class();
        if ui.with(|u| u.file_hover) { format!("wall {aspect} wall--file-hover") } else { format!("wall {aspect}") }
    };
    let columns = move || format!("repeat({}, minmax(0, 1fr))", wall.with(|w| w.grid().columns()));
    let max_width = move || {
        let (width, height) = ui.with(|u| u.viewport);
        if width <= 0.0 {
            return "none".to_owned();
        }
        let fitted = wall.with(|w| w.layout().fit_width(w.aspect(), width, height));
        format!("{fitted:.0}px")
    };
    let cell_ids = move || wall.with(|w| w.cells().iter().map(|c| c.id).collect::<Vec<_>>());

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        let carrying_files = ui.with_untracked(|u| u.drag_from.is_none());
        if carrying_files && !ui.with_untracked(|u| u.file_hover) {
            ui.update(|u| u.file_hover = true);
        }
    };
    let on_dragleave = move |_| {
        if ui.with_untracked(|u| u.file_hover) {
            ui.update(|u| u.file_hover = false);
        }
    };
    let on_drop = move |ev: leptos::ev::DragEvent| apply_drop(&ev, None, wall, ui, notifier);

    view! {
        <main
            class=class
            style:grid-template-columns=columns
            style:max-width=max_width
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <For each=cell_ids key=|id| *id children=move |id| view! { <VideoCell id=id/> }/>
        </main>
    }
}
