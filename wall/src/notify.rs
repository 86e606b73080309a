//! Notification hook for local errors and status messages.
//!
//! The wall reports rejected files and similar problems through
//! [`Notifier`] instead of returning them up the stack; the client decides
//! how to show them.

use crate::grid::GridError;
use crate::tags::TagError;
use crate::validate::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notice--info",
            Self::Warning => "notice--warning",
            Self::Error => "notice--error",
        }
    }
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

impl From<&LoadError> for Notice {
    fn from(e: &LoadError) -> Self {
        Self::warning(e.to_string())
    }
}

impl From<&TagError> for Notice {
    fn from(e: &TagError) -> Self {
        Self::warning(e.to_string())
    }
}

impl From<&GridError> for Notice {
    fn from(e: &GridError) -> Self {
        match e {
            GridError::Load(inner) => Self::from(inner),
            other => Self::error(other.to_string()),
        }
    }
}

/// Receives notices raised by wall operations.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}
