//! # Search Budget
//!
//! Options that bound a Hamiltonian search, and the per-run budget that
//! enforces them.
//!
//! The wall clock is consulted only every `clock_check_mask + 1` steps
//! (`(steps & mask) == 0`), so a limit costs almost nothing on the hot path.
//! The interrupt flag is a plain atomic load and is read on every step.
//!
//! ```rust
//! use circuitpath::search::SearchOptions;
//! use std::sync::atomic::AtomicBool;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let stop = Arc::new(AtomicBool::new(false));
//! let options = SearchOptions::default()
//!     .with_time_limit(Duration::from_millis(250))
//!     .with_interrupt(stop.clone());
//! assert!(options.time_limit.is_some());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::SearchError;

/// Limits applied to a single search invocation
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Abort with [`SearchError::TimedOut`] once this much time has passed
    pub time_limit: Option<Duration>,

    /// Abort with [`SearchError::Interrupted`] once this flag is set
    pub interrupt: Option<Arc<AtomicBool>>,

    /// Check the clock when `(steps & clock_check_mask) == 0`
    pub clock_check_mask: u64,
}

impl SearchOptions {
    /// Check the clock every 4,096 steps (2^12).
    pub const DEFAULT_CLOCK_CHECK_MASK: u64 = 0xFFF;

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn with_clock_check_mask(mut self, mask: u64) -> Self {
        self.clock_check_mask = mask;
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.time_limit.is_none() && self.interrupt.is_none()
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            time_limit: None,
            interrupt: None,
            clock_check_mask: Self::DEFAULT_CLOCK_CHECK_MASK,
        }
    }
}

/// Running budget for one search
#[derive(Debug)]
pub(crate) struct SearchBudget<'a> {
    options: &'a SearchOptions,
    start_time: Instant,
    steps: u64,
}

impl<'a> SearchBudget<'a> {
    pub(crate) fn start(options: &'a SearchOptions) -> Self {
        Self {
            options,
            start_time: Instant::now(),
            steps: 0,
        }
    }

    #[inline]
    pub(crate) fn on_step(&mut self) -> Result<(), SearchError> {
        self.steps = self.steps.wrapping_add(1);

        if let Some(flag) = &self.options.interrupt {
            if flag.load(Ordering::Relaxed) {
                return Err(SearchError::Interrupted);
            }
        }

        if let Some(limit) = self.options.time_limit {
            if (self.steps & self.options.clock_check_mask) == 0 {
                let elapsed = self.start_time.elapsed();
                if elapsed >= limit {
                    return Err(SearchError::TimedOut { elapsed });
                }
            }
        }
        Ok(())
    }

    pub(crate) fn steps(&self) -> u64 {
        self.steps
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
