//! Corner stack of transient notices.

use leptos::prelude::*;

use crate::state::notices::NoticeState;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let class = format!("notice {}", item.notice.level.css_class());
                    view! {
                        <div class=class role="status" on:click=move |_| notices.update(|n| n.dismiss(id))>
                            {item.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
