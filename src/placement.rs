//! Greedy constrained placement of candidates on a scratch grid.
//!
//! One [`Attempt`] owns one scratch [`Board`]: the seed word goes down
//! unconditionally, then every other candidate is placed where it crosses the
//! most existing letters. A candidate with no valid spot is skipped for that
//! attempt only.
//!
//! # Validity
//!
//! Placing `w` at `(pos, dir)` is valid iff
//! - it fits inside the board;
//! - the cells just before its first letter and just after its last letter
//!   (along `dir`) are empty or off the board;
//! - each letter either lands on an empty cell whose two perpendicular
//!   neighbours are empty, or lands on the same letter already placed by a
//!   word running the *other* way (a true crossing);
//! - it makes at least one crossing (the seed word is exempt).
//!
//! The same check serves both orientations, so a board built this way never
//! contains a run of letters that is not exactly one placed word.

use crate::candidates::Candidate;
use crate::grid::{Direction, Grid, Position};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Offsets applied to the centred seed word, cycled by attempt index.
const SEED_OFFSETS: [(isize, isize); 3] = [(0, 0), (-3, 3), (3, -3)];

/// A word placed during the search. It has no clue number yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub answer: String,
    pub clue: String,
    pub position: Position,
    pub direction: Direction,
}

/// A candidate spot for a word and how many letters it shares with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub direction: Direction,
    pub intersections: usize,
}

/// Scratch grid plus, per cell, which orientations already run through it.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    claims: Vec<[bool; 2]>,
}

impl Board {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { grid: Grid::new(size, size), claims: vec![[false; 2]; size * size] }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn into_grid(self) -> Grid {
        self.grid
    }

    fn claimed(&self, pos: Position, direction: Direction) -> bool {
        self.claims[pos.row * self.grid.width() + pos.col][direction.index()]
    }

    fn fits(&self, word_len: usize, start: Position, direction: Direction) -> bool {
        word_len > 0 && self.grid.contains(start.step(direction, word_len - 1))
    }

    /// Intersection count if `word` may go at `start` along `direction`,
    /// ignoring the crossing requirement. `None` if the placement breaks a rule.
    #[must_use]
    pub fn check(&self, word: &[char], start: Position, direction: Direction) -> Option<usize> {
        if !self.fits(word.len(), start, direction) {
            return None;
        }

        // no run-on: the cells capping both ends must be open
        let before_open = start.back(direction).map_or(true, |p| self.grid.is_open(p));
        if !before_open || !self.grid.is_open(start.step(direction, word.len())) {
            return None;
        }

        let side_axis = direction.perpendicular();
        let mut intersections = 0;
        for (i, &letter) in word.iter().enumerate() {
            let pos = start.step(direction, i);
            match self.grid.get(pos) {
                Some(existing) => {
                    if existing != letter || self.claimed(pos, direction) {
                        return None;
                    }
                    intersections += 1;
                }
                None => {
                    let side_a = pos.back(side_axis).map_or(true, |p| self.grid.is_open(p));
                    let side_b = self.grid.is_open(pos.step(side_axis, 1));
                    if !(side_a && side_b) {
                        return None;
                    }
                }
            }
        }
        Some(intersections)
    }

    /// Best crossing placement for `word`: most intersections, first in
    /// row-major scan order (Across before Down) on ties.
    #[must_use]
    pub fn best_placement(&self, word: &[char]) -> Option<Placement> {
        let mut best: Option<Placement> = None;
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                let position = Position::new(row, col);
                for direction in Direction::ALL {
                    let Some(intersections) = self.check(word, position, direction) else {
                        continue;
                    };
                    if intersections == 0 {
                        continue;
                    }
                    if best.map_or(true, |b| intersections > b.intersections) {
                        best = Some(Placement { position, direction, intersections });
                    }
                }
            }
        }
        best
    }

    /// Write `word` onto the board and claim its cells for `direction`.
    pub fn place(&mut self, word: &[char], start: Position, direction: Direction) {
        debug_assert!(self.fits(word.len(), start, direction), "word must fit on the board");
        let width = self.grid.width();
        for (i, &letter) in word.iter().enumerate() {
            let pos = start.step(direction, i);
            debug_assert!(
                self.grid.get(pos).map_or(true, |l| l == letter),
                "placement would overwrite a different letter at {pos}"
            );
            self.grid.set(pos, letter);
            self.claims[pos.row * width + pos.col][direction.index()] = true;
        }
    }
}

/// Start cell and orientation of the seed word for attempt `index`.
///
/// The word is centred, nudged by a per-attempt offset, then clamped so it fits.
#[must_use]
pub fn seed_placement(index: usize, word_len: usize, board_size: usize) -> (Position, Direction) {
    let direction = if index % 2 == 0 { Direction::Across } else { Direction::Down };
    let (dr, dc) = SEED_OFFSETS[index % SEED_OFFSETS.len()];

    let size = board_size as isize;
    let len = word_len as isize;
    let center = size / 2;
    let (row, col) = match direction {
        Direction::Across => (center + dr, center - len / 2 + dc),
        Direction::Down => (center - len / 2 + dr, center + dc),
    };
    let (max_row, max_col) = match direction {
        Direction::Across => (size - 1, size - len),
        Direction::Down => (size - len, size - 1),
    };

    let row = row.clamp(0, max_row.max(0)) as usize;
    let col = col.clamp(0, max_col.max(0)) as usize;
    (Position::new(row, col), direction)
}

/// One full grid construction.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub index: usize,
    pub board: Board,
    pub placed: Vec<PlacedWord>,
    /// Words this attempt could not place.
    pub skipped: Vec<String>,
}

impl Attempt {
    /// Build an attempt from `candidates` (sorted longest-first, non-empty).
    ///
    /// Attempt 0 keeps the sorted order; later attempts shuffle everything after
    /// the seed word with an RNG seeded from `seed + index`.
    #[must_use]
    pub fn run(index: usize, candidates: &[Candidate], board_size: usize, seed: u64) -> Attempt {
        let mut board = Board::new(board_size);
        let mut placed = Vec::with_capacity(candidates.len());
        let mut skipped = Vec::new();

        let Some((first, rest)) = candidates.split_first() else {
            return Attempt { index, board, placed, skipped };
        };

        let (start, direction) = seed_placement(index, first.word.len(), board_size);
        board.place(&first.letters(), start, direction);
        placed.push(PlacedWord {
            answer: first.word.clone(),
            clue: first.clue.clone(),
            position: start,
            direction,
        });

        let mut order: Vec<&Candidate> = rest.iter().collect();
        if index > 0 {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            order.shuffle(&mut rng);
        }

        for candidate in order {
            let letters = candidate.letters();
            match board.best_placement(&letters) {
                Some(p) => {
                    board.place(&letters, p.position, p.direction);
                    placed.push(PlacedWord {
                        answer: candidate.word.clone(),
                        clue: candidate.clue.clone(),
                        position: p.position,
                        direction: p.direction,
                    });
                }
                None => skipped.push(candidate.word.clone()),
            }
        }

        debug!(
            "attempt {index}: seed {} {direction} at {start}, placed {}/{} (skipped: {:?})",
            first.word,
            placed.len(),
            candidates.len(),
            skipped
        );

        Attempt { index, board, placed, skipped }
    }

    #[must_use]
    pub fn placed_all(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn candidates(words: &[&str]) -> Vec<Candidate> {
        words
            .iter()
            .map(|w| Candidate { word: (*w).to_string(), clue: format!("clue for {w}") })
            .collect()
    }

    /// Board with CAT across at (5, 5).
    fn cat_board() -> Board {
        let mut b = Board::new(15);
        b.place(&chars("CAT"), Position::new(5, 5), Direction::Across);
        b
    }

    #[test]
    fn test_check_out_of_bounds() {
        let b = Board::new(5);
        assert_eq!(b.check(&chars("HELLO"), Position::new(0, 0), Direction::Across), Some(0));
        assert_eq!(b.check(&chars("HELLO"), Position::new(0, 1), Direction::Across), None);
        assert_eq!(b.check(&chars("HELLO"), Position::new(1, 0), Direction::Down), None);
    }

    #[test]
    fn test_check_crossing() {
        let b = cat_board();
        // COT down through the C of CAT
        assert_eq!(b.check(&chars("COT"), Position::new(5, 5), Direction::Down), Some(1));
        // BAD down with its A on CAT's A
        assert_eq!(b.check(&chars("BAD"), Position::new(4, 6), Direction::Down), Some(1));
    }

    #[test]
    fn test_check_rejects_letter_mismatch() {
        let b = cat_board();
        assert_eq!(b.check(&chars("DOG"), Position::new(5, 5), Direction::Down), None);
    }

    #[test]
    fn test_check_rejects_run_on() {
        let b = cat_board();
        // ending right before CAT's C
        assert_eq!(b.check(&chars("DOG"), Position::new(5, 2), Direction::Across), None);
        // starting right after CAT's T
        assert_eq!(b.check(&chars("DOG"), Position::new(5, 8), Direction::Across), None);
        // vertically: ending right above the C
        assert_eq!(b.check(&chars("DOG"), Position::new(2, 5), Direction::Down), None);
    }

    #[test]
    fn test_check_rejects_side_by_side() {
        let b = cat_board();
        // parallel word directly under CAT
        assert_eq!(b.check(&chars("DOG"), Position::new(6, 5), Direction::Across), None);
        // down word alongside the end of CAT
        assert_eq!(b.check(&chars("DOG"), Position::new(5, 8), Direction::Down), None);
    }

    #[test]
    fn test_check_rejects_same_axis_overlap() {
        let b = cat_board();
        // SCATS would swallow CAT along the same row
        assert_eq!(b.check(&chars("SCATS"), Position::new(5, 4), Direction::Across), None);
    }

    #[test]
    fn test_check_allows_diagonal_contact() {
        let b = cat_board();
        // DOG across on row 6 starting diagonally below-right of the T
        assert_eq!(b.check(&chars("DOG"), Position::new(6, 8), Direction::Across), Some(0));
    }

    #[test]
    fn test_best_placement_prefers_more_intersections() {
        let mut b = Board::new(15);
        b.place(&chars("CAT"), Position::new(5, 5), Direction::Across);
        b.place(&chars("CUP"), Position::new(5, 5), Direction::Down);
        b.place(&chars("TOP"), Position::new(5, 7), Direction::Down);
        // PEP across row 7 crosses the P of both CUP and TOP
        let p = b.best_placement(&chars("PEP")).unwrap();
        assert_eq!(p, Placement { position: Position::new(7, 5), direction: Direction::Across, intersections: 2 });
    }

    #[test]
    fn test_best_placement_tie_breaks_row_major() {
        let b = cat_board();
        // "ACE" can cross CAT's A (down from (5,6)) or CAT's C (down from (4,5))
        let p = b.best_placement(&chars("ACE")).unwrap();
        assert_eq!(p.position, Position::new(4, 5));
        assert_eq!(p.direction, Direction::Down);
    }

    #[test]
    fn test_best_placement_none_without_shared_letters() {
        let b = cat_board();
        assert_eq!(b.best_placement(&chars("DOG")), None);
    }

    #[test]
    fn test_seed_placement_alternates_and_fits() {
        let (p0, d0) = seed_placement(0, 4, 30);
        assert_eq!((p0, d0), (Position::new(15, 13), Direction::Across));
        let (p1, d1) = seed_placement(1, 4, 30);
        assert_eq!((p1, d1), (Position::new(10, 18), Direction::Down));
        let (p2, d2) = seed_placement(2, 4, 30);
        assert_eq!((p2, d2), (Position::new(18, 10), Direction::Across));

        for index in 0..6 {
            for len in 3..=12 {
                let (pos, dir) = seed_placement(index, len, 14);
                let end = pos.step(dir, len - 1);
                assert!(end.row < 14 && end.col < 14, "seed {index}/{len} overflows: {pos} {dir}");
            }
        }
    }

    #[test]
    fn test_attempt_zero_is_deterministic_greedy() {
        let cands = candidates(&["JAZZ", "ROCK", "BEAT", "BAND", "KEYS", "JAM"]);
        let a = Attempt::run(0, &cands, 30, 7);
        let got: Vec<(&str, Position, Direction)> =
            a.placed.iter().map(|p| (p.answer.as_str(), p.position, p.direction)).collect();
        assert_eq!(
            got,
            vec![
                ("JAZZ", Position::new(15, 13), Direction::Across),
                ("BEAT", Position::new(13, 14), Direction::Down),
                ("BAND", Position::new(13, 14), Direction::Across),
            ]
        );
        assert_eq!(a.skipped, vec!["ROCK", "KEYS", "JAM"]);
        assert!(!a.placed_all());
    }

    #[test]
    fn test_attempt_seed_independent_of_rng_for_index_zero() {
        let cands = candidates(&["PLANET", "PLANT", "TAN"]);
        let a = Attempt::run(0, &cands, 30, 1);
        let b = Attempt::run(0, &cands, 30, 99);
        assert_eq!(a.placed, b.placed);
    }

    #[test]
    fn test_attempt_same_seed_reproducible() {
        let cands = candidates(&["ORCHESTRA", "TRUMPET", "CELLO", "OBOE", "HARP", "TUBA", "PIANO"]);
        for index in 0..4 {
            let a = Attempt::run(index, &cands, 30, 42);
            let b = Attempt::run(index, &cands, 30, 42);
            assert_eq!(a.placed, b.placed);
            assert_eq!(a.board.grid(), b.board.grid());
        }
    }

    #[test]
    fn test_attempt_boards_have_no_stray_runs() {
        let cands = candidates(&["ORCHESTRA", "TRUMPET", "CELLO", "OBOE", "HARP", "TUBA", "PIANO", "VIOLIN"]);
        for index in 0..6 {
            let a = Attempt::run(index, &cands, 30, 2024);
            let mut runs: Vec<(Position, Direction, String)> = a
                .board
                .grid()
                .runs()
                .into_iter()
                .map(|r| (r.start, r.direction, r.text))
                .collect();
            let mut words: Vec<(Position, Direction, String)> =
                a.placed.iter().map(|p| (p.position, p.direction, p.answer.clone())).collect();
            runs.sort();
            words.sort();
            assert_eq!(runs, words, "attempt {index} produced a stray run");
        }
    }
}
