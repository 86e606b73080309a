//! Runtime configuration.
//!
//! Every field has a default, so a config document only needs the keys it
//! wants to change. The client reads an optional JSON block from the host
//! page; everything else falls back to [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ACCEPTED_MIME_TYPES, MAX_FILE_BYTES, NAVBAR_HIDE_DELAY_MS, NAVBAR_THRESHOLD_PX, NOTICE_LIFETIME_MS,
};
use crate::layout::{AspectRatio, LayoutEntry, LayoutError, LayoutMode, LayoutTable};
use crate::validate::Validator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub accepted_mime_types: Vec<String>,
    pub max_file_bytes: u64,
    pub navbar_threshold_px: f64,
    pub navbar_hide_delay_ms: f64,
    pub notice_lifetime_ms: u32,
    pub default_mode: LayoutMode,
    pub default_aspect: AspectRatio,
    /// Replacement layout table; `None` uses the built-in one.
    pub layouts: Option<Vec<LayoutEntry>>,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            accepted_mime_types: ACCEPTED_MIME_TYPES.iter().map(|m| (*m).to_owned()).collect(),
            max_file_bytes: MAX_FILE_BYTES,
            navbar_threshold_px: NAVBAR_THRESHOLD_PX,
            navbar_hide_delay_ms: NAVBAR_HIDE_DELAY_MS,
            notice_lifetime_ms: NOTICE_LIFETIME_MS,
            default_mode: LayoutMode::default(),
            default_aspect: AspectRatio::default(),
            layouts: None,
        }
    }
}

impl WallConfig {
    /// Parse a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn validator(&self) -> Validator {
        Validator::new(self.accepted_mime_types.iter().cloned(), self.max_file_bytes)
    }

    /// The configured layout table, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if a configured table fails validation.
    pub fn layout_table(&self) -> Result<LayoutTable, LayoutError> {
        match &self.layouts {
            Some(entries) => LayoutTable::from_entries(entries.clone()),
            None => Ok(LayoutTable::builtin()),
        }
    }
}
