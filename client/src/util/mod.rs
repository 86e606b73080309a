//! Browser glue shared by components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules wrap `web-sys` calls (files, object URLs, media elements,
//! clocks, the config script tag) so components stay declarative. Each
//! browser call is gated behind `csr` with a native no-op so the pure helpers
//! keep their unit tests.

pub mod browser;
pub mod config;
pub mod files;
pub mod media;
