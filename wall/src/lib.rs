//! State engine for the video wall.
//!
//! This crate owns every decision the wall makes: how many cells a layout
//! has, where dropped files land, what survives a layout or aspect change,
//! how two cells trade places, which tags exist and what color they are, and
//! when the navigation bar should hide. It never touches the DOM. The
//! `client` crate wires browser events into these types and pushes the
//! resulting state back into `<video>` elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`wall`] | Top-level [`wall::Wall`] façade the UI holds in one signal |
//! | [`grid`] | Ordered cell list: loading, growth, relayout, swap, playback |
//! | [`cell`] | Per-cell video state and sources |
//! | [`layout`] | Layout modes, aspect ratios, and the layout lookup table |
//! | [`validate`] | File metadata and MIME/size validation |
//! | [`tags`] | Insertion-ordered tag registry with pastel colors |
//! | [`filter`] | Tag filter with the "show all" sentinel |
//! | [`navbar`] | Auto-hide state machine for the navigation bar |
//! | [`timing`] | Debounce and throttle helpers driven by caller timestamps |
//! | [`notify`] | Notification hook used to surface local errors |
//! | [`color`] | HSL and hex color helpers |
//! | [`config`] | Runtime configuration with serde defaults |
//! | [`consts`] | Shared numeric and string constants |

pub mod cell;
pub mod color;
pub mod config;
pub mod consts;
pub mod filter;
pub mod grid;
pub mod layout;
pub mod navbar;
pub mod notify;
pub mod tags;
pub mod timing;
pub mod validate;
pub mod wall;

pub use cell::{CellId, CellState, VideoSource};
pub use config::WallConfig;
pub use filter::TagFilter;
pub use grid::{Grid, GridError, LoadReport};
pub use layout::{AspectRatio, LayoutMode, LayoutSpec, LayoutTable};
pub use navbar::{NavbarMachine, NavbarState};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use tags::{Tag, TagError, TagRegistry};
pub use validate::{FileMeta, LoadError, Validator};
pub use wall::Wall;
