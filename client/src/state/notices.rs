//! Toast queue fed by the wall's notification hook.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::*;
use wall::{Notice, NoticeLevel, Notifier};

/// A notice with a stable id so the tray can key and dismiss it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeItem {
    pub id: u64,
    pub notice: Notice,
}

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    next_id: u64,
    pub items: Vec<NoticeItem>,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(NoticeItem { id, notice });
        id
    }

    /// Remove a notice. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }
}

/// [`Notifier`] that logs each notice and queues it in a `RwSignal<NoticeState>`.
///
/// Queued notices dismiss themselves after `lifetime_ms` in the browser.
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    notices: RwSignal<NoticeState>,
    lifetime_ms: u32,
}

impl SignalNotifier {
    #[must_use]
    pub fn new(notices: RwSignal<NoticeState>, lifetime_ms: u32) -> Self {
        Self { notices, lifetime_ms }
    }
}

impl Notifier for SignalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => log::info!("{}", notice.message),
            NoticeLevel::Warning => log::warn!("{}", notice.message),
            NoticeLevel::Error => log::error!("{}", notice.message),
        }
        let mut id = 0;
        self.notices.update(|n| id = n.push(notice));

        #[cfg(feature = "csr")]
        {
            let notices = self.notices;
            gloo_timers::callback::Timeout::new(self.lifetime_ms, move || {
                notices.update(|n| n.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, self.lifetime_ms);
        }
    }
}
