//! Per-cell video state.
//!
//! A cell is one grid slot holding at most one video. The whole struct,
//! including its `id`, moves when cells are swapped or a relayout restores
//! snapshots, so the UI can key `<video>` elements by id and keep them alive.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::FileMeta;

/// Stable identifier for a cell.
pub type CellId = Uuid;

/// Where a cell's video comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    /// Blob URI created from the dropped or picked file.
    pub url: String,
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl VideoSource {
    #[must_use]
    pub fn from_meta(meta: &FileMeta, url: String) -> Self {
        Self { url, name: meta.name.clone(), mime: meta.effective_mime(), size: meta.size }
    }
}

/// Full state of one grid slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellState {
    pub id: CellId,
    pub source: Option<VideoSource>,
    pub tag: Option<String>,
    /// Playback position in seconds.
    pub position: f64,
    pub playing: bool,
    pub muted: bool,
}

impl CellState {
    /// A fresh empty cell. Cells start muted so autoplay policies allow `play()`.
    #[must_use]
    pub fn empty() -> Self {
        Self { id: Uuid::new_v4(), source: None, tag: None, position: 0.0, playing: false, muted: true }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
    }

    /// Put a new source into the cell, resetting playback. Returns the old source.
    pub fn load(&mut self, source: VideoSource) -> Option<VideoSource> {
        self.position = 0.0;
        self.playing = false;
        self.source.replace(source)
    }

    /// Empty the cell. Returns the source so the caller can release its URL.
    pub fn eject(&mut self) -> Option<VideoSource> {
        self.tag = None;
        self.position = 0.0;
        self.playing = false;
        self.source.take()
    }

    /// Display name of the loaded file, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.name.as_str())
    }

    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tag.as_deref() == Some(name)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::empty()
    }
}
