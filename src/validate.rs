//! Structural checks for a finished [`Layout`].
//!
//! [`check_layout`] reports every way a layout breaks the crossword rules:
//! entries that do not read back from the grid, letter runs no entry accounts
//! for, entries that run on into a neighbouring letter, wrong clue numbers,
//! too few entries, and excess blank border.

use crate::errors::MIN_LAYOUT_WORDS;
use crate::grid::{Direction, Position};
use crate::layout::Layout;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("{number} {direction}: expected {expected}, grid reads {found:?}")]
    EntryMismatch { number: u32, direction: Direction, expected: String, found: Option<String> },

    #[error("{number} {direction} runs on into a neighbouring letter")]
    RunOn { number: u32, direction: Direction },

    #[error("letters {text} {direction} at {start} are not an entry")]
    UndeclaredRun { start: Position, direction: Direction, text: String },

    #[error("{answer} is numbered {found}, expected {expected}")]
    NumberMismatch { answer: String, expected: u32, found: u32 },

    #[error("only {found} entries, at least {} required", MIN_LAYOUT_WORDS)]
    TooFewEntries { found: usize },

    #[error("{blank} blank line(s) on the {side} edge, at most {padding} allowed")]
    ExcessBorder { side: &'static str, blank: usize, padding: usize },
}

/// Check `layout` against the crossword invariants, allowing up to `padding`
/// blank rows/columns on each edge. An empty result means the layout is sound.
#[must_use]
pub fn check_layout(layout: &Layout, padding: usize) -> Vec<Violation> {
    let mut violations = Vec::new();
    let grid = &layout.grid;

    if layout.entries.len() < MIN_LAYOUT_WORDS {
        violations.push(Violation::TooFewEntries { found: layout.entries.len() });
    }

    // every entry reads back and is capped at both ends
    for e in &layout.entries {
        let found = grid.read(e.position, e.direction, e.answer.len());
        if found.as_deref() != Some(e.answer.as_str()) {
            violations.push(Violation::EntryMismatch {
                number: e.number,
                direction: e.direction,
                expected: e.answer.clone(),
                found,
            });
            continue;
        }
        let before_open = e.position.back(e.direction).map_or(true, |p| grid.is_open(p));
        let after_open = grid.is_open(e.position.step(e.direction, e.answer.len()));
        if !(before_open && after_open) {
            violations.push(Violation::RunOn { number: e.number, direction: e.direction });
        }
    }

    // every run of letters is exactly one entry
    let declared: BTreeSet<(Position, Direction, &str)> =
        layout.entries.iter().map(|e| (e.position, e.direction, e.answer.as_str())).collect();
    for run in grid.runs() {
        if !declared.contains(&(run.start, run.direction, run.text.as_str())) {
            violations.push(Violation::UndeclaredRun { start: run.start, direction: run.direction, text: run.text });
        }
    }

    // numbers follow distinct start cells in reading order
    let starts: BTreeSet<Position> = layout.entries.iter().map(|e| e.position).collect();
    let expected: HashMap<Position, u32> = starts.into_iter().zip(1..).collect();
    for e in &layout.entries {
        let want = expected[&e.position];
        if e.number != want {
            violations.push(Violation::NumberMismatch { answer: e.answer.clone(), expected: want, found: e.number });
        }
    }

    if let Some(bbox) = grid.bounding_box() {
        let borders = [
            ("top", bbox.min_row),
            ("bottom", grid.height() - 1 - bbox.max_row),
            ("left", bbox.min_col),
            ("right", grid.width() - 1 - bbox.max_col),
        ];
        for (side, blank) in borders {
            if blank > padding {
                violations.push(Violation::ExcessBorder { side, blank, padding });
            }
        }
    }

    violations
}
