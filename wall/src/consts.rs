//! Shared numeric and string constants for the wall crate.

// ── Files ───────────────────────────────────────────────────────

/// Largest file accepted into a cell, in bytes (2 GiB).
pub const MAX_FILE_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// MIME types a `<video>` element can reasonably play without transcoding.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "video/mp4",
    "video/webm",
    "video/ogg",
    "video/quicktime",
    "video/x-matroska",
    "video/x-m4v",
];

/// Extension fallbacks for browsers that report an empty `File.type`.
pub const EXTENSION_MIME_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("webm", "video/webm"),
    ("ogv", "video/ogg"),
    ("mov", "video/quicktime"),
    ("mkv", "video/x-matroska"),
];

// ── Tags ────────────────────────────────────────────────────────

/// Longest tag name accepted, in characters.
pub const MAX_TAG_LEN: usize = 32;

/// HSL saturation used for tag colors.
pub const TAG_SATURATION: f64 = 0.70;

/// HSL lightness used for tag colors. High enough that dark badge text stays readable.
pub const TAG_LIGHTNESS: f64 = 0.80;

/// Multiplier applied to a tag color to derive its badge border.
pub const TAG_BORDER_SHADE: f64 = 0.75;

/// Select-element value that means "show every cell".
pub const FILTER_ALL_SENTINEL: &str = "__all__";

// ── Navbar ──────────────────────────────────────────────────────

/// Distance from the top edge, in CSS pixels, inside which the navbar stays visible.
pub const NAVBAR_THRESHOLD_PX: f64 = 80.0;

/// Time after leaving the threshold zone before the navbar hides.
pub const NAVBAR_HIDE_DELAY_MS: f64 = 2000.0;

/// Interval at which the client polls the last pointer position.
pub const NAVBAR_POLL_MS: u32 = 100;

// ── Client timing ───────────────────────────────────────────────

/// Minimum spacing between handled pointer-move events.
pub const POINTER_THROTTLE_MS: f64 = 50.0;

/// Quiet period after the last resize event before the grid is re-measured.
pub const RESIZE_DEBOUNCE_MS: f64 = 150.0;

/// How long a notice stays on screen.
pub const NOTICE_LIFETIME_MS: u32 = 4000;
