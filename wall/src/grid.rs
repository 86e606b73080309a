//! Grid controller: the ordered list of cells and every mutation on it.
//!
//! Invariants:
//! - `cells.len()` is always a multiple of `layout.columns` and never below
//!   `layout.cells`. Growth happens in full rows.
//! - Empty cells carry no tag and are never playing.
//! - No operation drops a loaded video except an explicit eject or replace,
//!   both of which hand the old [`VideoSource`] back to the caller.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::cell::{CellState, VideoSource};
use crate::layout::LayoutSpec;
use crate::validate::{FileMeta, LoadError, Validator};

/// Error returned by index-addressed grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell {index} does not exist (grid has {len} cells)")]
    NoSuchCell { index: usize, len: usize },
    #[error("cell {index} has no video")]
    EmptyCell { index: usize },
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// A file that landed in a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub name: String,
}

/// Outcome of [`Grid::load_files`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub placed: Vec<Placement>,
    pub rejected: Vec<LoadError>,
    /// Cells appended to make room, always a whole number of rows.
    pub added_cells: usize,
}

impl LoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Ordered cells laid out in `layout.columns` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<CellState>,
    layout: LayoutSpec,
}

impl Grid {
    #[must_use]
    pub fn new(layout: LayoutSpec) -> Self {
        let layout = sanitize(layout);
        let cells = (0..layout.cells).map(|_| CellState::empty()).collect();
        Self { cells, layout }
    }

    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&CellState> {
        self.cells.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn layout(&self) -> LayoutSpec {
        self.layout
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.layout.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len() / self.layout.columns
    }

    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.loaded_count()
    }

    #[must_use]
    pub fn any_playing(&self) -> bool {
        self.cells.iter().any(|c| c.playing)
    }

    /// Validate and place a batch of files into empty cells, in grid order.
    ///
    /// Rejected files are reported and skipped; they neither consume a cell
    /// nor cause growth. `make_source` is called once per accepted file and
    /// may return `None` if no playable URL could be created.
    pub fn load_files<F>(&mut self, files: Vec<FileMeta>, validator: &Validator, mut make_source: F) -> LoadReport
    where
        F: FnMut(&FileMeta) -> Option<String>,
    {
        let mut report = LoadReport::default();
        let mut accepted = Vec::with_capacity(files.len());
        for file in files {
            match validator.validate(&file) {
                Ok(()) => accepted.push(file),
                Err(e) => {
                    log::debug!("rejected {}: {e}", file.name);
                    report.rejected.push(e);
                }
            }
        }

        let mut sources = Vec::with_capacity(accepted.len());
        for file in accepted {
            match make_source(&file) {
                Some(url) => sources.push(VideoSource::from_meta(&file, url)),
                None => report.rejected.push(LoadError::SourceUnavailable { name: file.name }),
            }
        }

        let free = self.empty_count();
        if sources.len() > free {
            report.added_cells = self.grow_to_fit(sources.len() - free);
        }

        for source in sources {
            let Some(index) = self.cells.iter().position(CellState::is_empty) else {
                break;
            };
            let name = source.name.clone();
            self.cells[index].load(source);
            report.placed.push(Placement { index, name });
        }
        report
    }

    /// Validate a single file and load it into `index`, replacing whatever is there.
    ///
    /// The cell keeps its id, tag, and mute setting. Returns the replaced source.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoSuchCell`] for a bad index and
    /// [`GridError::Load`] when validation or source creation fails.
    pub fn load_into<F>(
        &mut self,
        index: usize,
        file: FileMeta,
        validator: &Validator,
        make_source: F,
    ) -> Result<Option<VideoSource>, GridError>
    where
        F: FnOnce(&FileMeta) -> Option<String>,
    {
        self.check(index)?;
        validator.validate(&file)?;
        let url = make_source(&file).ok_or_else(|| LoadError::SourceUnavailable { name: file.name.clone() })?;
        Ok(self.cells[index].load(VideoSource::from_meta(&file, url)))
    }

    /// Rebuild the grid for a new layout, carrying every loaded cell across.
    ///
    /// Loaded cells are snapshotted in grid order and restored into the
    /// leading slots; the grid grows in full rows if they do not fit.
    pub fn relayout(&mut self, layout: LayoutSpec) {
        let layout = sanitize(layout);
        let mut cells: Vec<CellState> = self.cells.drain(..).filter(|c| !c.is_empty()).collect();
        let restored = cells.len();
        let target = layout.cells.max(layout.round_up_to_rows(restored));
        cells.resize_with(target, CellState::empty);
        self.cells = cells;
        self.layout = layout;
        log::debug!("relayout to {}x{} cells, restored {restored}", self.rows(), layout.columns);
    }

    /// Swap the full state of two cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoSuchCell`] if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), GridError> {
        self.check(a)?;
        self.check(b)?;
        if a != b {
            self.cells.swap(a, b);
        }
        Ok(())
    }

    /// Pause everything if anything is playing, otherwise play every loaded cell.
    ///
    /// Returns whether the wall is now playing.
    pub fn toggle_play_all(&mut self) -> bool {
        let next = !self.any_playing();
        for cell in self.cells.iter_mut().filter(|c| !c.is_empty()) {
            cell.playing = next;
        }
        next && self.loaded_count() > 0
    }

    /// Toggle one cell's playing flag.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoSuchCell`] or [`GridError::EmptyCell`].
    pub fn toggle_play(&mut self, index: usize) -> Result<bool, GridError> {
        let cell = self.loaded_mut(index)?;
        cell.playing = !cell.playing;
        Ok(cell.playing)
    }

    /// Mirror the element's own play/pause/ended events back into the model.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoSuchCell`] or [`GridError::EmptyCell`].
    pub fn set_playing(&mut self, index: usize, playing: bool) -> Result<(), GridError> {
        self.loaded_mut(index)?.playing = playing;
        Ok(())
    }

    /// Record the current playback position reported by the element.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoSuchCell`] or [`GridError::EmptyCell`].
    pub fn record_position(&mut self, index: usize, seconds: f64) -> Result<(), GridError> {
        let cell = self.loaded_mut(index)?;
        cell.position = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        Ok(())
    }

    pub fn set_muted_all(&mut self, muted: bool) {
        for cell in &mut self.cells {
            cell.muted = muted;
        }
    }

    /// # Errors
    ///
    /// Returns [`GridError::NoSuchCell`].
    pub fn toggle_mute(&mut self, index: usize) -> Result<bool, GridError> {
        self.check(index)?;
        let cell = &mut self.cells[index];
        cell.muted = !cell.muted;
        Ok(cell.muted)
    }

    /// Empty a cell, returning its source so the caller can release the URL.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoSuchCell`].
    pub fn clear(&mut self, index: usize) -> Result<Option<VideoSource>, GridError> {
        self.check(index)?;
        Ok(self.cells[index].eject())
    }

    /// Check that `index` names a cell holding a video.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoSuchCell`] or [`GridError::EmptyCell`].
    pub fn check_loaded(&self, index: usize) -> Result<(), GridError> {
        self.check(index)?;
        if self.cells[index].is_empty() {
            return Err(GridError::EmptyCell { index });
        }
        Ok(())
    }

    /// Assign or remove a cell's tag.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoSuchCell`], or [`GridError::EmptyCell`] when
    /// assigning a tag to a cell with no video.
    pub fn set_tag(&mut self, index: usize, tag: Option<String>) -> Result<(), GridError> {
        if tag.is_some() {
            self.check_loaded(index)?;
        } else {
            self.check(index)?;
        }
        self.cells[index].tag = tag;
        Ok(())
    }

    /// Strip `name` from every cell that carries it. Returns how many were cleared.
    pub fn clear_tag_everywhere(&mut self, name: &str) -> usize {
        let mut cleared = 0;
        for cell in self.cells.iter_mut().filter(|c| c.has_tag(name)) {
            cell.tag = None;
            cleared += 1;
        }
        cleared
    }

    /// Drop trailing rows that are entirely empty, down to the layout's base size.
    ///
    /// Returns how many cells were removed.
    pub fn compact(&mut self) -> usize {
        let columns = self.layout.columns;
        let mut removed = 0;
        while self.cells.len() > self.layout.cells {
            let start = self.cells.len() - columns;
            if !self.cells[start..].iter().all(CellState::is_empty) {
                break;
            }
            self.cells.truncate(start);
            removed += columns;
        }
        removed
    }

    /// Release every source, leaving the grid at its base size.
    pub fn drain_sources(&mut self) -> Vec<VideoSource> {
        let sources = self.cells.iter_mut().filter_map(CellState::eject).collect();
        self.compact();
        sources
    }

    fn grow_to_fit(&mut self, overflow: usize) -> usize {
        let added = self.layout.round_up_to_rows(overflow);
        self.cells.extend((0..added).map(|_| CellState::empty()));
        log::info!("grid grew by {added} cells to {}", self.cells.len());
        added
    }

    fn check(&self, index: usize) -> Result<(), GridError> {
        if index < self.cells.len() {
            Ok(())
        } else {
            Err(GridError::NoSuchCell { index, len: self.cells.len() })
        }
    }

    fn loaded_mut(&mut self, index: usize) -> Result<&mut CellState, GridError> {
        self.check_loaded(index)?;
        Ok(&mut self.cells[index])
    }
}

/// Force a usable layout: at least one column and whole rows.
fn sanitize(layout: LayoutSpec) -> LayoutSpec {
    let columns = layout.columns.max(1);
    let cells = layout.cells.max(columns).div_ceil(columns) * columns;
    LayoutSpec { cells, columns }
}
