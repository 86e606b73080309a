//! Presentation state: navbar, drag-and-drop bookkeeping, and the tag menu.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use wall::NavbarMachine;
use wall::timing::{Debounce, Throttle};

/// What a drop onto a cell should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropAction {
    /// A cell was dragged onto another cell.
    Swap { from: usize, to: usize },
    /// One file dropped onto a specific cell replaces its video.
    LoadInto { index: usize },
    /// Several files go into empty cells in order.
    LoadBatch,
    Ignore,
}

/// Decide what a drop means from the drag source and the number of files carried.
///
/// Files take precedence over an in-progress cell drag.
pub fn resolve_drop(drag_from: Option<usize>, target: Option<usize>, file_count: usize) -> DropAction {
    match (file_count, target, drag_from) {
        (0, Some(to), Some(from)) if from != to => DropAction::Swap { from, to },
        (0, _, _) => DropAction::Ignore,
        (1, Some(index), _) => DropAction::LoadInto { index },
        _ => DropAction::LoadBatch,
    }
}

/// UI state shared through context as `RwSignal<UiState>`.
#[derive(Clone, Debug)]
pub struct UiState {
    pub navbar: NavbarMachine,
    /// Latest pointer distance from the top of the viewport, applied by the poll loop.
    pub pointer_y: Option<f64>,
    pub pointer_throttle: Throttle,
    pub resize_debounce: Debounce,
    /// Cell index currently being dragged.
    pub drag_from: Option<usize>,
    /// Cell index currently under a drag, for the drop highlight.
    pub drop_target: Option<usize>,
    /// Files are being dragged over the wall.
    pub file_hover: bool,
    /// Cell whose tag menu is open.
    pub tag_menu_for: Option<usize>,
    pub tag_draft: String,
    /// Viewport width and height, refreshed after resizes settle.
    pub viewport: (f64, f64),
}

impl UiState {
    #[must_use]
    pub fn new(navbar: NavbarMachine, pointer_throttle: Throttle, resize_debounce: Debounce) -> Self {
        Self {
            navbar,
            pointer_y: None,
            pointer_throttle,
            resize_debounce,
            drag_from: None,
            drop_target: None,
            file_hover: false,
            tag_menu_for: None,
            tag_draft: String::new(),
            viewport: (0.0, 0.0),
        }
    }

    pub fn begin_drag(&mut self, index: usize) {
        self.drag_from = Some(index);
        self.drop_target = None;
    }

    /// Clear drag bookkeeping, returning the cell that was being dragged.
    pub fn end_drag(&mut self) -> Option<usize> {
        self.drop_target = None;
        self.file_hover = false;
        self.drag_from.take()
    }

    /// Open the tag menu for a cell, holding the navbar open while it is up.
    pub fn open_tag_menu(&mut self, index: usize, now_ms: f64) {
        self.tag_menu_for = Some(index);
        self.tag_draft.clear();
        self.navbar.pin(true, now_ms);
    }

    pub fn close_tag_menu(&mut self, now_ms: f64) {
        if self.tag_menu_for.take().is_some() {
            self.navbar.pin(false, now_ms);
        }
        self.tag_draft.clear();
    }

    /// Record the latest pointer sample. Returns whether the throttle admits an
    /// immediate navbar update; rejected samples are still applied by the next poll.
    pub fn sample_pointer(&mut self, y: f64, now_ms: f64) -> bool {
        self.pointer_y = Some(y);
        self.pointer_throttle.admit(now_ms)
    }

    /// One poll step: feed the latest pointer sample (or just time) to the navbar.
    pub fn poll_navbar(&mut self, now_ms: f64) {
        match self.pointer_y {
            Some(y) => {
                self.navbar.on_pointer(y, now_ms);
            }
            None => {
                self.navbar.tick(now_ms);
            }
        }
    }

    /// Keep grid indexes valid after the cell list shrinks.
    pub fn forget_cells_from(&mut self, len: usize, now_ms: f64) {
        if self.drag_from.is_some_and(|i| i >= len) {
            self.drag_from = None;
        }
        if self.drop_target.is_some_and(|i| i >= len) {
            self.drop_target = None;
        }
        if self.tag_menu_for.is_some_and(|i| i >= len) {
            self.tag_menu_for = None;
            self.navbar.pin(false, now_ms);
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        use wall::consts::{POINTER_THROTTLE_MS, RESIZE_DEBOUNCE_MS};
        Self::new(NavbarMachine::default(), Throttle::new(POINTER_THROTTLE_MS), Debounce::new(RESIZE_DEBOUNCE_MS))
    }
}
