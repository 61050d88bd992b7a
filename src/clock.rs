//! Time source for the footer year

use chrono::Datelike;

/// Source of the year printed in the footer
pub trait Clock: Send + Sync {
    /// Calendar year at the moment of the call
    fn current_year(&self) -> i32;
}

/// Reads the local system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year. Used for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
