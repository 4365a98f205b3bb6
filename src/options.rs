//! Tunables for a layout run.

use crate::candidates::MAX_WORD_LEN;
use std::time::Duration;

/// Number of placement attempts per run.
pub const DEFAULT_ATTEMPTS: usize = 3;
/// Side length of the square scratch grid.
pub const DEFAULT_SCRATCH_SIZE: usize = 30;
/// Blank cells kept around the letters after trimming.
pub const DEFAULT_PADDING: usize = 1;
/// Wall-clock budget for the whole search (in seconds).
pub const DEFAULT_TIME_BUDGET: u64 = 5;
/// Smallest scratch grid that still fits the longest word plus padding on both ends.
pub const MIN_SCRATCH_SIZE: usize = MAX_WORD_LEN + 2;

/// Options for [`crate::generate_layout`].
///
/// Fields are public for reading; use the `with_*` builders to change them so
/// values stay in range.
///
/// ```
/// use crossgrid::LayoutOptions;
///
/// let opts = LayoutOptions::default().with_seed(7).with_attempts(0);
/// assert_eq!(opts.attempts, 1);
/// assert_eq!(opts.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    pub attempts: usize,
    pub scratch_size: usize,
    pub padding: usize,
    /// Seeds the per-attempt shuffles; the same seed yields the same layout.
    pub seed: u64,
    /// `None` disables the budget.
    pub time_budget: Option<Duration>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            scratch_size: DEFAULT_SCRATCH_SIZE,
            padding: DEFAULT_PADDING,
            seed: 0,
            time_budget: Some(Duration::from_secs(DEFAULT_TIME_BUDGET)),
        }
    }
}

impl LayoutOptions {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// At least one attempt always runs.
    #[must_use]
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// Clamped up to [`MIN_SCRATCH_SIZE`].
    #[must_use]
    pub fn with_scratch_size(mut self, size: usize) -> Self {
        self.scratch_size = size.max(MIN_SCRATCH_SIZE);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }
}
