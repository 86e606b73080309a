//! Top-level façade tying grid, tags, filter, and layout together.
//!
//! The client keeps one `Wall` in an `RwSignal` and calls these methods from
//! event handlers. Operations that can fail on user input (bad files, bad tag
//! names) report through a [`Notifier`] and return a plain outcome, so the
//! handlers stay one-liners.

#[cfg(test)]
#[path = "wall_test.rs"]
mod wall_test;

use crate::cell::{CellState, VideoSource};
use crate::config::WallConfig;
use crate::filter::TagFilter;
use crate::grid::{Grid, GridError, LoadReport};
use crate::layout::{AspectRatio, LayoutMode, LayoutSpec, LayoutTable};
use crate::notify::{Notice, Notifier};
use crate::tags::{Tag, TagRegistry};
use crate::validate::{FileMeta, Validator};

#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    grid: Grid,
    tags: TagRegistry,
    filter: TagFilter,
    mode: LayoutMode,
    aspect: AspectRatio,
    table: LayoutTable,
    validator: Validator,
}

impl Wall {
    #[must_use]
    pub fn new(table: LayoutTable, validator: Validator, mode: LayoutMode, aspect: AspectRatio) -> Self {
        let grid = Grid::new(table.lookup(mode, aspect));
        Self { grid, tags: TagRegistry::new(), filter: TagFilter::All, mode, aspect, table, validator }
    }

    /// Build from configuration, falling back to the built-in layout table
    /// (with a notice) if the configured one is invalid.
    pub fn from_config(config: &WallConfig, notifier: &impl Notifier) -> Self {
        let table = config.layout_table().unwrap_or_else(|e| {
            log::warn!("ignoring configured layouts: {e}");
            notifier.notify(Notice::warning(format!("Ignoring configured layouts: {e}")));
            LayoutTable::builtin()
        });
        Self::new(table, config.validator(), config.default_mode, config.default_aspect)
    }

    // ── Accessors ───────────────────────────────────────────────

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        self.grid.cells()
    }

    #[must_use]
    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    #[must_use]
    pub fn filter(&self) -> &TagFilter {
        &self.filter
    }

    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    #[must_use]
    pub fn aspect(&self) -> AspectRatio {
        self.aspect
    }

    #[must_use]
    pub fn layout(&self) -> LayoutSpec {
        self.grid.layout()
    }

    #[must_use]
    pub fn tag_for(&self, index: usize) -> Option<&Tag> {
        let name = self.grid.cell(index)?.tag.as_deref()?;
        self.tags.get(name)
    }

    // ── Layout ──────────────────────────────────────────────────

    pub fn set_layout(&mut self, mode: LayoutMode) {
        self.mode = mode;
        self.apply_layout();
    }

    pub fn set_aspect(&mut self, aspect: AspectRatio) {
        self.aspect = aspect;
        self.apply_layout();
    }

    pub fn toggle_layout(&mut self) {
        self.set_layout(self.mode.toggled());
    }

    pub fn toggle_aspect(&mut self) {
        self.set_aspect(self.aspect.toggled());
    }

    fn apply_layout(&mut self) {
        let spec = self.table.lookup(self.mode, self.aspect);
        self.grid.relayout(spec);
    }

    // ── Loading ─────────────────────────────────────────────────

    /// Load a batch into empty cells; each rejection becomes a notice.
    pub fn load_files<F>(&mut self, files: Vec<FileMeta>, make_source: F, notifier: &impl Notifier) -> LoadReport
    where
        F: FnMut(&FileMeta) -> Option<String>,
    {
        let report = self.grid.load_files(files, &self.validator, make_source);
        for rejection in &report.rejected {
            notifier.notify(Notice::from(rejection));
        }
        if report.added_cells > 0 {
            notifier.notify(Notice::info(format!("Added {} cells to fit new videos", report.added_cells)));
        }
        report
    }

    /// Load one file into a specific cell. Returns the replaced source, if any.
    pub fn load_into<F>(
        &mut self,
        index: usize,
        file: FileMeta,
        make_source: F,
        notifier: &impl Notifier,
    ) -> Option<VideoSource>
    where
        F: FnOnce(&FileMeta) -> Option<String>,
    {
        match self.grid.load_into(index, file, &self.validator, make_source) {
            Ok(replaced) => replaced,
            Err(e) => {
                report(notifier, &e);
                None
            }
        }
    }

    /// Eject a cell and shrink trailing empty rows. Returns the source to release.
    pub fn eject(&mut self, index: usize, notifier: &impl Notifier) -> Option<VideoSource> {
        match self.grid.clear(index) {
            Ok(source) => {
                self.grid.compact();
                source
            }
            Err(e) => {
                report(notifier, &e);
                None
            }
        }
    }

    /// Eject everything. Returns the sources to release.
    pub fn clear_all(&mut self) -> Vec<VideoSource> {
        self.grid.drain_sources()
    }

    // ── Cell interaction ────────────────────────────────────────

    /// Swap two cells (drag-and-drop).
    pub fn swap(&mut self, from: usize, to: usize, notifier: &impl Notifier) -> bool {
        match self.grid.swap(from, to) {
            Ok(()) => from != to,
            Err(e) => {
                report(notifier, &e);
                false
            }
        }
    }

    pub fn toggle_play_all(&mut self) -> bool {
        self.grid.toggle_play_all()
    }

    /// Returns `true` if the cell is now playing; empty or missing cells stay stopped.
    pub fn toggle_play(&mut self, index: usize) -> bool {
        self.grid.toggle_play(index).unwrap_or(false)
    }

    /// Mirror element state into the model. Stale indexes are ignored.
    pub fn sync_playback(&mut self, index: usize, playing: bool, position: f64) {
        if let Err(e) = self.grid.set_playing(index, playing).and_then(|()| self.grid.record_position(index, position)) {
            log::debug!("ignoring playback sync: {e}");
        }
    }

    pub fn record_position(&mut self, index: usize, seconds: f64) {
        if let Err(e) = self.grid.record_position(index, seconds) {
            log::debug!("ignoring position update: {e}");
        }
    }

    /// Mute everything if anything is audible, otherwise unmute everything.
    pub fn toggle_mute_all(&mut self) -> bool {
        let muted = self.cells().iter().any(|c| !c.muted);
        self.grid.set_muted_all(muted);
        muted
    }

    pub fn toggle_mute(&mut self, index: usize) -> bool {
        self.grid.toggle_mute(index).unwrap_or(true)
    }

    // ── Tags ────────────────────────────────────────────────────

    /// Create-or-get `name` and assign it to a cell.
    pub fn tag_cell(&mut self, index: usize, name: &str, notifier: &impl Notifier) -> Option<Tag> {
        if let Err(e) = self.grid.check_loaded(index) {
            report(notifier, &e);
            return None;
        }
        let tag = match self.tags.get_or_create(name) {
            Ok(tag) => tag,
            Err(e) => {
                notifier.notify(Notice::from(&e));
                return None;
            }
        };
        match self.grid.set_tag(index, Some(tag.name.clone())) {
            Ok(()) => Some(tag),
            Err(e) => {
                report(notifier, &e);
                None
            }
        }
    }

    pub fn untag_cell(&mut self, index: usize, notifier: &impl Notifier) {
        if let Err(e) = self.grid.set_tag(index, None) {
            report(notifier, &e);
        }
    }

    /// Delete a tag everywhere: registry, every cell carrying it, and the
    /// active filter if it pointed at it. Returns how many cells were cleared.
    pub fn delete_tag(&mut self, name: &str) -> usize {
        if !self.tags.delete(name) {
            return 0;
        }
        let cleared = self.grid.clear_tag_everywhere(name);
        if self.filter.is_tag(name) {
            self.filter = TagFilter::All;
        }
        log::info!("deleted tag {name}, cleared {cleared} cells");
        cleared
    }

    // ── Filtering ───────────────────────────────────────────────

    /// Set the filter; unknown tag names fall back to "show all".
    pub fn set_filter(&mut self, filter: TagFilter) {
        self.filter = match filter {
            TagFilter::Tag(name) if !self.tags.contains(&name) => TagFilter::All,
            other => other,
        };
    }

    pub fn toggle_filter(&mut self, name: &str) {
        self.set_filter(self.filter.toggled(name));
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.grid.cell(index).is_some_and(|c| self.filter.matches(c))
    }

    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.grid.len()).filter(|&i| self.is_visible(i)).collect()
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::new(LayoutTable::builtin(), Validator::default(), LayoutMode::default(), AspectRatio::default())
    }
}

fn report(notifier: &impl Notifier, e: &GridError) {
    log::warn!("{e}");
    notifier.notify(Notice::from(e));
}
