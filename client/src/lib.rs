//! # client
//!
//! Leptos + WASM front-end for the video wall.
//!
//! All wall decisions live in the `wall` crate; this crate turns browser
//! events (drops, picks, drags, pointer moves, media events) into calls on a
//! shared `wall::Wall` signal and pushes the resulting state back into the
//! DOM. Browser-only glue is gated behind the `csr` feature so the state and
//! component modules still build and test natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Install logging and the panic hook, then mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    log::info!("video wall starting");
    leptos::mount::mount_to_body(app::App);
}
