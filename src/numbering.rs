//! Conventional crossword clue numbering.
//!
//! Entries are walked in reading order (row, then column). Each distinct start
//! cell gets the next number; an Across and a Down entry that start on the same
//! cell share one number.

use crate::grid::{Direction, Position};
use crate::placement::PlacedWord;
use serde::Serialize;
use std::collections::HashMap;

/// A numbered entry of a finished layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub answer: String,
    pub clue: String,
    pub position: Position,
    pub direction: Direction,
    pub number: u32,
}

/// Sort `words` into reading order and assign clue numbers starting at 1.
///
/// Across sorts before Down on a shared start cell.
#[must_use]
pub fn number_entries(mut words: Vec<PlacedWord>) -> Vec<Entry> {
    words.sort_by_key(|w| (w.position, w.direction));

    let mut numbers: HashMap<Position, u32> = HashMap::with_capacity(words.len());
    let mut next = 1;

    words
        .into_iter()
        .map(|w| {
            let number = *numbers.entry(w.position).or_insert_with(|| {
                let n = next;
                next += 1;
                n
            });
            Entry { answer: w.answer, clue: w.clue, position: w.position, direction: w.direction, number }
        })
        .collect()
}
