//! File metadata and the MIME/size checks applied before a file reaches a cell.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ACCEPTED_MIME_TYPES, EXTENSION_MIME_TYPES, MAX_FILE_BYTES};

/// What the wall needs to know about a dropped or picked file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    /// `File.type` as reported by the browser; may be empty.
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), mime: mime.into(), size }
    }

    /// Lowercased extension after the last dot.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Essence of the reported MIME type, or a guess from the extension when
    /// the browser reported nothing.
    #[must_use]
    pub fn effective_mime(&self) -> String {
        let essence = self.mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        if !essence.is_empty() {
            return essence;
        }
        self.extension()
            .and_then(|ext| EXTENSION_MIME_TYPES.iter().find(|(e, _)| *e == ext))
            .map_or_else(String::new, |(_, mime)| (*mime).to_owned())
    }
}

/// Why a file was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("{name}: unsupported file type \"{mime}\"")]
    UnsupportedType { name: String, mime: String },
    #[error("{name}: {size} bytes exceeds the {limit} byte limit")]
    TooLarge { name: String, size: u64, limit: u64 },
    #[error("{name}: file is empty")]
    EmptyFile { name: String },
    #[error("{name}: could not create a playable source")]
    SourceUnavailable { name: String },
}

impl LoadError {
    /// Name of the file the error refers to.
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::UnsupportedType { name, .. }
            | Self::TooLarge { name, .. }
            | Self::EmptyFile { name }
            | Self::SourceUnavailable { name } => name,
        }
    }
}

/// MIME allow-list plus a size ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    accepted: Vec<String>,
    max_bytes: u64,
}

impl Validator {
    #[must_use]
    pub fn new(accepted: impl IntoIterator<Item = impl Into<String>>, max_bytes: u64) -> Self {
        let accepted = accepted.into_iter().map(|m| m.into().to_ascii_lowercase()).collect();
        Self { accepted, max_bytes }
    }

    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Check a single file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnsupportedType`] when the effective MIME type is
    /// not on the allow-list, [`LoadError::EmptyFile`] for zero-byte files and
    /// [`LoadError::TooLarge`] above the size ceiling.
    pub fn validate(&self, file: &FileMeta) -> Result<(), LoadError> {
        let mime = file.effective_mime();
        if !self.accepted.iter().any(|m| *m == mime) {
            return Err(LoadError::UnsupportedType { name: file.name.clone(), mime: file.mime.clone() });
        }
        if file.size == 0 {
            return Err(LoadError::EmptyFile { name: file.name.clone() });
        }
        if file.size > self.max_bytes {
            return Err(LoadError::TooLarge { name: file.name.clone(), size: file.size, limit: self.max_bytes });
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ACCEPTED_MIME_TYPES.iter().copied(), MAX_FILE_BYTES)
    }
}
