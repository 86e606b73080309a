//! Video wall components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `RwSignal<Wall>`, `RwSignal<UiState>`
//! and `RwSignal<NoticeState>` provided by `App`, and report problems through
//! the `SignalNotifier` context.

pub mod drop;
pub mod nav_bar;
pub mod notice_tray;
pub mod tag_menu;
pub mod video_cell;
pub mod video_grid;
