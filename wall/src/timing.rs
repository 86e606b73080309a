//! Debounce and throttle helpers.
//!
//! Both take caller-supplied millisecond timestamps instead of reading a
//! clock, so the client can drive them from `performance.now()` and tests can
//! drive them from plain numbers.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// Fires once after a quiet period. Each `schedule` overwrites the pending deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms: delay_ms.max(0.0), deadline: None }
    }

    pub fn schedule(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(at) if now_ms >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Admits at most one event per interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms: interval_ms.max(0.0), last: None }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        let open = self.last.is_none_or(|last| now_ms - last >= self.interval_ms);
        if open {
            self.last = Some(now_ms);
        }
        open
    }
}
