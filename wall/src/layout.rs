//! Layout modes, aspect ratios, and the `(mode, aspect) -> cells/columns` table.
//!
//! The table is data, not code: it ships as `layouts.json` and can be
//! replaced through [`crate::config::WallConfig`]. Every entry must describe
//! whole rows, because grid growth and relayout both work in full rows.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::fmt;

use serde::{Deserialize, Serialize};

const BUILTIN_LAYOUTS: &str = include_str!("layouts.json");

/// Grid density selected in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Two rows by two columns (landscape).
    #[default]
    #[serde(rename = "2x2")]
    TwoByTwo,
    /// Three rows by three columns (landscape).
    #[serde(rename = "3x3")]
    ThreeByThree,
}

impl LayoutMode {
    pub const ALL: [Self; 2] = [Self::TwoByTwo, Self::ThreeByThree];

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::TwoByTwo => Self::ThreeByThree,
            Self::ThreeByThree => Self::TwoByTwo,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoByTwo => "2x2",
            Self::ThreeByThree => "3x3",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shape of each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9 cells.
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16 cells, for phone-shot footage.
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: [Self; 2] = [Self::Landscape, Self::Portrait];

    /// The other aspect ratio.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Landscape => Self::Portrait,
            Self::Portrait => Self::Landscape,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
        }
    }

    /// Width divided by height.
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self {
            Self::Landscape => 16.0 / 9.0,
            Self::Portrait => 9.0 / 16.0,
        }
    }

    /// CSS class applied to the grid container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Landscape => "wall--landscape",
            Self::Portrait => "wall--portrait",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cell and column counts for one `(mode, aspect)` combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub cells: usize,
    pub columns: usize,
}

impl LayoutSpec {
    #[must_use]
    pub fn rows(self) -> usize {
        self.cells.div_ceil(self.columns.max(1))
    }

    /// Widest grid, in pixels, whose base rows of `aspect` cells fit inside
    /// a `width` x `height` viewport. Rows added by growth scroll.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fit_width(self, aspect: AspectRatio, width: f64, height: f64) -> f64 {
        if width <= 0.0 || height <= 0.0 {
            return width.max(0.0);
        }
        let columns = self.columns.max(1) as f64;
        let rows = self.rows().max(1) as f64;
        let height_bound = height / rows * aspect.ratio() * columns;
        width.min(height_bound)
    }

    /// Smallest multiple of `columns` that is at least `count`.
    #[must_use]
    pub fn round_up_to_rows(self, count: usize) -> usize {
        let columns = self.columns.max(1);
        count.div_ceil(columns) * columns
    }
}

/// One row of the layout table as it appears in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub mode: LayoutMode,
    pub aspect: AspectRatio,
    pub cells: usize,
    pub columns: usize,
}

impl LayoutEntry {
    #[must_use]
    pub fn spec(self) -> LayoutSpec {
        LayoutSpec { cells: self.cells, columns: self.columns }
    }
}

/// Error returned by [`LayoutTable::from_json`] and [`LayoutTable::from_entries`].
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("failed to parse layout table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("layout {mode} {aspect} has no columns")]
    ZeroColumns { mode: LayoutMode, aspect: AspectRatio },
    #[error("layout {mode} {aspect} has no cells")]
    ZeroCells { mode: LayoutMode, aspect: AspectRatio },
    #[error("layout {mode} {aspect}: {cells} cells do not fill {columns} columns evenly")]
    RaggedRows { mode: LayoutMode, aspect: AspectRatio, cells: usize, columns: usize },
    #[error("layout {mode} {aspect} is listed twice")]
    Duplicate { mode: LayoutMode, aspect: AspectRatio },
    #[error("layout {mode} {aspect} is missing")]
    Missing { mode: LayoutMode, aspect: AspectRatio },
}

#[derive(Deserialize)]
struct LayoutDocument {
    layouts: Vec<LayoutEntry>,
}

/// Read-only lookup from `(mode, aspect)` to [`LayoutSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    entries: Vec<LayoutEntry>,
}

impl LayoutTable {
    /// Parse a `{ "layouts": [...] }` document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the JSON is malformed or the entries fail
    /// [`LayoutTable::from_entries`] validation.
    pub fn from_json(raw: &str) -> Result<Self, LayoutError> {
        let doc: LayoutDocument = serde_json::from_str(raw)?;
        Self::from_entries(doc.layouts)
    }

    /// Build a table, requiring exactly one whole-row entry per combination.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] for zero counts, ragged rows, duplicates, or a
    /// missing combination.
    pub fn from_entries(entries: Vec<LayoutEntry>) -> Result<Self, LayoutError> {
        for (i, entry) in entries.iter().enumerate() {
            let (mode, aspect) = (entry.mode, entry.aspect);
            if entry.columns == 0 {
                return Err(LayoutError::ZeroColumns { mode, aspect });
            }
            if entry.cells == 0 {
                return Err(LayoutError::ZeroCells { mode, aspect });
            }
            if entry.cells % entry.columns != 0 {
                return Err(LayoutError::RaggedRows { mode, aspect, cells: entry.cells, columns: entry.columns });
            }
            if entries[..i].iter().any(|e| e.mode == mode && e.aspect == aspect) {
                return Err(LayoutError::Duplicate { mode, aspect });
            }
        }
        for mode in LayoutMode::ALL {
            for aspect in AspectRatio::ALL {
                if !entries.iter().any(|e| e.mode == mode && e.aspect == aspect) {
                    return Err(LayoutError::Missing { mode, aspect });
                }
            }
        }
        Ok(Self { entries })
    }

    /// The table shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_LAYOUTS) {
            Ok(table) => table,
            Err(e) => {
                log::error!("builtin layout table rejected: {e}");
                Self::fallback()
            }
        }
    }

    fn fallback() -> Self {
        let entries = LayoutMode::ALL
            .into_iter()
            .flat_map(|mode| AspectRatio::ALL.into_iter().map(move |aspect| (mode, aspect)))
            .map(|(mode, aspect)| {
                let spec = fallback_spec(mode, aspect);
                LayoutEntry { mode, aspect, cells: spec.cells, columns: spec.columns }
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn lookup(&self, mode: LayoutMode, aspect: AspectRatio) -> LayoutSpec {
        self.entries
            .iter()
            .find(|e| e.mode == mode && e.aspect == aspect)
            .map_or_else(|| fallback_spec(mode, aspect), |e| e.spec())
    }

    #[must_use]
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Portrait cells are narrow, so each portrait layout doubles the column count.
fn fallback_spec(mode: LayoutMode, aspect: AspectRatio) -> LayoutSpec {
    let side = match mode {
        LayoutMode::TwoByTwo => 2,
        LayoutMode::ThreeByThree => 3,
    };
    match aspect {
        AspectRatio::Landscape => LayoutSpec { cells: side * side, columns: side },
        AspectRatio::Portrait => LayoutSpec { cells: side * side * 2, columns: side * 2 },
    }
}
