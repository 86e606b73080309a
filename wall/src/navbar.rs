//! Navbar auto-hide state machine.
//!
//! Two states, `Visible` and `Hidden`. The client polls the last known
//! pointer position and feeds it here with a timestamp; the machine never
//! reads a clock itself, which keeps it deterministic under test.
//!
//! ```text
//!            pointer within threshold / reveal
//!   Hidden ─────────────────────────────────────▶ Visible
//!     ▲                                             │
//!     │   tick() after hide deadline                │ pointer leaves zone
//!     └──────────────── (armed) ◀───────────────────┘
//! ```

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::consts::{NAVBAR_HIDE_DELAY_MS, NAVBAR_THRESHOLD_PX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarState {
    #[default]
    Visible,
    Hidden,
}

/// Visibility of the navbar plus the pending hide deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarMachine {
    state: NavbarState,
    threshold_px: f64,
    hide_delay_ms: f64,
    hide_at: Option<f64>,
    pinned: bool,
}

impl NavbarMachine {
    /// Start visible, with a hide already armed from `now_ms`.
    #[must_use]
    pub fn new(threshold_px: f64, hide_delay_ms: f64, now_ms: f64) -> Self {
        let hide_delay_ms = hide_delay_ms.max(0.0);
        Self {
            state: NavbarState::Visible,
            threshold_px: threshold_px.max(0.0),
            hide_delay_ms,
            hide_at: Some(now_ms + hide_delay_ms),
            pinned: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> NavbarState {
        self.state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == NavbarState::Visible
    }

    #[must_use]
    pub fn hide_deadline(&self) -> Option<f64> {
        self.hide_at
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Feed a pointer sample: `y` is the distance from the top of the viewport.
    pub fn on_pointer(&mut self, y: f64, now_ms: f64) -> NavbarState {
        if self.pinned || y <= self.threshold_px {
            self.state = NavbarState::Visible;
            self.hide_at = None;
        } else if self.state == NavbarState::Visible && self.hide_at.is_none() {
            self.hide_at = Some(now_ms + self.hide_delay_ms);
        }
        self.tick(now_ms)
    }

    /// Advance time; hides once the armed deadline has passed.
    pub fn tick(&mut self, now_ms: f64) -> NavbarState {
        if !self.pinned {
            if let Some(at) = self.hide_at {
                if now_ms >= at {
                    self.state = NavbarState::Hidden;
                    self.hide_at = None;
                }
            }
        }
        self.state
    }

    /// Hold the navbar open (e.g. while a menu is open). Unpinning arms a fresh hide.
    pub fn pin(&mut self, pinned: bool, now_ms: f64) {
        self.pinned = pinned;
        self.state = NavbarState::Visible;
        self.hide_at = if pinned { None } else { Some(now_ms + self.hide_delay_ms) };
    }

    /// Show for one delay period, for keyboard and touch users.
    pub fn reveal(&mut self, now_ms: f64) {
        self.state = NavbarState::Visible;
        if !self.pinned {
            self.hide_at = Some(now_ms + self.hide_delay_ms);
        }
    }
}

impl Default for NavbarMachine {
    fn default() -> Self {
        Self::new(NAVBAR_THRESHOLD_PX, NAVBAR_HIDE_DELAY_MS, 0.0)
    }
}
