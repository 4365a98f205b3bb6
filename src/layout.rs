//! The layout engine driver.
//!
//! Pipeline: preprocess → N placement attempts → score and keep the best →
//! trim → number. Each attempt owns its own scratch board and RNG, so
//! nothing is shared between attempts or between calls.
//!
//! # Examples
//!
//! ```
//! use crossgrid::{generate_layout, ClueInput, LayoutOptions};
//!
//! let clues = vec![
//!     ClueInput::new("Red planet", "mars"),
//!     ClueInput::new("Ringed planet", "saturn"),
//!     ClueInput::new("Our star", "sun"),
//!     ClueInput::new("Space rock", "asteroid"),
//! ];
//! let layout = generate_layout(&clues, &LayoutOptions::default().with_seed(1))?;
//! assert!(layout.entries.len() >= 3);
//! println!("{layout}");
//! # Ok::<(), crossgrid::errors::LayoutError>(())
//! ```

use crate::candidates::{prepare_candidates, ClueInput};
use crate::errors::{LayoutError, MIN_LAYOUT_WORDS};
use crate::grid::{Direction, Grid};
use crate::numbering::{number_entries, Entry};
use crate::options::{LayoutOptions, MIN_SCRATCH_SIZE};
use crate::placement::Attempt;
use crate::scoring::AttemptScore;
use crate::trim::trim;
use instant::Instant;
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// How the search ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutStatus {
    /// The winning attempt placed every candidate.
    AllPlaced,
    /// Every attempt ran; some candidates could not be placed.
    AttemptsExhausted,
    /// The time budget expired before all attempts ran. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Diagnostics about the run that produced a [`Layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStats {
    pub attempts_run: usize,
    pub winning_attempt: usize,
    pub score: AttemptScore,
    pub status: LayoutStatus,
    /// Candidates left out of the winning attempt.
    pub unplaced: Vec<String>,
}

/// A finished crossword: the trimmed grid plus its numbered entries.
///
/// Serializes to `{ "grid": string[][], "entries": [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub grid: Grid,
    pub entries: Vec<Entry>,
    #[serde(skip)]
    pub stats: LayoutStats,
}

impl Layout {
    pub fn across(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.direction == Direction::Across)
    }

    pub fn down(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.direction == Direction::Down)
    }

    /// Look up an entry by clue number and direction, e.g. "3 down".
    #[must_use]
    pub fn entry(&self, number: u32, direction: Direction) -> Option<&Entry> {
        self.entries.iter().find(|e| e.number == number && e.direction == direction)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)?;
        for (heading, entries) in [("ACROSS", self.across().collect::<Vec<_>>()), ("DOWN", self.down().collect())] {
            writeln!(f, "\n{heading}")?;
            for e in entries {
                writeln!(f, "{:>3}. {} ({})", e.number, e.clue, e.answer.len())?;
            }
        }
        Ok(())
    }
}

/// Simple helper to enforce a wall-clock time limit.
struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Build a crossword from raw clue/answer records.
///
/// Attempt 0 always runs. Later attempts are skipped once the time budget is
/// spent, and the search stops early as soon as an attempt places every word.
///
/// # Errors
///
/// - [`LayoutError::TooFewValidWords`] if fewer than three answers survive preprocessing.
/// - [`LayoutError::LayoutConstructionFailed`] if no attempt placed at least three words.
pub fn generate_layout(inputs: &[ClueInput], options: &LayoutOptions) -> Result<Layout, LayoutError> {
    let candidates = prepare_candidates(inputs)?;

    let scratch_size = options.scratch_size.max(MIN_SCRATCH_SIZE);
    let attempts = options.attempts.max(1);
    let budget = options.time_budget.map(TimeBudget::new);

    debug!(
        "laying out {} candidate(s): {} attempt(s) on a {scratch_size}x{scratch_size} grid, seed {}",
        candidates.len(),
        attempts,
        options.seed
    );

    let mut best: Option<(Attempt, AttemptScore)> = None;
    let mut best_placed = 0;
    let mut attempts_run = 0;
    let mut timed_out: Option<Duration> = None;

    for index in 0..attempts {
        if let Some(b) = budget.as_ref().filter(|b| index > 0 && b.expired()) {
            warn!("time budget of {:?} spent after {attempts_run} attempt(s)", b.limit);
            timed_out = Some(b.elapsed());
            break;
        }

        let attempt = Attempt::run(index, &candidates, scratch_size, options.seed);
        attempts_run += 1;
        best_placed = best_placed.max(attempt.placed.len());

        if attempt.placed.len() < MIN_LAYOUT_WORDS {
            debug!("attempt {index} discarded: only {} word(s) placed", attempt.placed.len());
            continue;
        }

        let score = AttemptScore::compute(attempt.board.grid(), attempt.placed.len(), candidates.len());
        debug!(
            "attempt {index} score {:.2} (placement {:.2}, density {:.2}, shape {:.2})",
            score.total, score.placement, score.density, score.shape
        );

        let complete = attempt.placed_all();
        if best.as_ref().map_or(true, |(_, incumbent)| score.beats(incumbent)) {
            best = Some((attempt, score));
        }
        if complete {
            debug!("attempt {index} placed every word; stopping early");
            break;
        }
    }

    let Some((winner, score)) = best else {
        return Err(LayoutError::LayoutConstructionFailed { best_placed, candidates: candidates.len() });
    };

    let status = if winner.placed_all() {
        LayoutStatus::AllPlaced
    } else if let Some(elapsed) = timed_out {
        LayoutStatus::TimedOut { elapsed }
    } else {
        LayoutStatus::AttemptsExhausted
    };

    info!(
        "chose attempt {} of {attempts_run}: {}/{} word(s), score {:.2}",
        winner.index,
        winner.placed.len(),
        candidates.len(),
        score.total
    );

    let Attempt { index: winning_attempt, board, placed, skipped } = winner;
    let (grid, placed) = trim(&board.into_grid(), placed, options.padding);
    let entries = number_entries(placed);

    let layout = Layout {
        grid,
        entries,
        stats: LayoutStats { attempts_run, winning_attempt, score, status, unplaced: skipped },
    };

    debug_assert!(
        crate::validate::check_layout(&layout, options.padding).is_empty(),
        "layout violates crossword invariants: {:?}",
        crate::validate::check_layout(&layout, options.padding)
    );

    Ok(layout)
}
