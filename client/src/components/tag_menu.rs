//! Tag picker for one cell: create, pick, clear, and delete tags.
//!
//! Opening the menu pins the navbar; closing it arms the normal hide delay.

use leptos::prelude::*;
use wall::Wall;

use crate::state::notices::SignalNotifier;
use crate::state::ui::UiState;
use crate::util::browser::now_ms;

#[component]
pub fn TagMenu() -> impl IntoView {
    let wall = expect_context::<RwSignal<Wall>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifier = expect_context::<SignalNotifier>();

    let target = move || ui.with(|u| u.tag_menu_for);
    let current = move || target().and_then(|i| wall.with(|w| w.tag_for(i).map(|t| t.name.clone())));
    let tags = move || wall.with(|w| w.tags().iter().cloned().collect::<Vec<_>>());
    let heading = move || {
        target()
            .and_then(|i| wall.with(|w| w.cells().get(i).and_then(|c| c.title().map(str::to_owned))))
            .unwrap_or_else(|| "Tag video".to_owned())
    };

    let close = move || ui.update(|u| u.close_tag_menu(now_ms()));
    let assign = move |name: String| {
        let Some(i) = ui.with_untracked(|u| u.tag_menu_for) else {
            return;
        };
        let tagged = wall.try_update(|w| w.tag_cell(i, &name, &notifier)).flatten();
        if tagged.is_some() {
            close();
        }
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        assign(ui.with_untracked(|u| u.tag_draft.clone()));
    };
    let on_clear = move |_| {
        if let Some(i) = ui.with_untracked(|u| u.tag_menu_for) {
            wall.update(|w| w.untag_cell(i, &notifier));
        }
        close();
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            close();
        }
    };

    view! {
        <Show when=move || target().is_some()>
            <div class="tag-menu__backdrop" on:click=move |_| close()>
                <div
                    class="tag-menu"
                    role="dialog"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="tag-menu__heading">{heading}</div>
                    <form class="tag-menu__form" on:submit=on_submit>
                        <input
                            class="tag-menu__input"
                            type="text"
                            placeholder="New or existing tag"
                            maxlength=wall::consts::MAX_TAG_LEN.to_string()
                            autofocus=true
                            prop:value=move || ui.with(|u| u.tag_draft.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ui.update(|u| u.tag_draft = value);
                            }
                        />
                        <button class="btn" type="submit">"Tag"</button>
                    </form>
                    <ul class="tag-menu__list">
                        <For
                            each=tags
                            key=|tag| tag.name.clone()
                            children=move |tag| {
                                let pick_name = tag.name.clone();
                                let delete_name = tag.name.clone();
                                let selected_name = tag.name.clone();
                                let style = tag.badge_style();
                                view! {
                                    <li class=move || {
                                        if current().as_deref() == Some(selected_name.as_str()) {
                                            "tag-menu__item tag-menu__item--selected"
                                        } else {
                                            "tag-menu__item"
                                        }
                                    }>
                                        <button class="tag-menu__pick" style=style on:click=move |_| assign(pick_name.clone())>
                                            {tag.name}
                                        </button>
                                        <button
                                            class="btn tag-menu__delete"
                                            title="Delete tag everywhere"
                                            on:click=move |_| {
                                                wall.update(|w| {
                                                    w.delete_tag(&delete_name);
                                                });
                                            }
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <div class="tag-menu__actions">
                        <button class="btn" on:click=on_clear disabled=move || current().is_none()>"Remove tag"</button>
                        <button class="btn" on:click=move |_| close()>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
