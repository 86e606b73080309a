//! Tag filter: which cells are visible.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::cell::CellState;
use crate::consts::FILTER_ALL_SENTINEL;

/// Either every cell, or only cells tagged with one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Parse a `<select>` value. The sentinel and the empty string mean "show all".
    #[must_use]
    pub fn from_select_value(value: &str) -> Self {
        match value.trim() {
            "" | FILTER_ALL_SENTINEL => Self::All,
            name => Self::Tag(name.to_owned()),
        }
    }

    /// Value to put on the matching `<option>`.
    #[must_use]
    pub fn select_value(&self) -> &str {
        match self {
            Self::All => FILTER_ALL_SENTINEL,
            Self::Tag(name) => name.as_str(),
        }
    }

    /// Selecting the active tag again switches back to "show all".
    #[must_use]
    pub fn toggled(&self, name: &str) -> Self {
        match self {
            Self::Tag(active) if active == name => Self::All,
            _ => Self::Tag(name.to_owned()),
        }
    }

    #[must_use]
    pub fn is_tag(&self, name: &str) -> bool {
        matches!(self, Self::Tag(active) if active == name)
    }

    #[must_use]
    pub fn matches(&self, cell: &CellState) -> bool {
        match self {
            Self::All => true,
            Self::Tag(name) => cell.has_tag(name),
        }
    }
}
