//! Grid geometry: cells, positions, directions and bounding boxes.
//!
//! A [`Grid`] is a dense row-major array of optional letters. The same type
//! backs the oversized scratch grid used while searching and the trimmed grid
//! handed back to callers; serializing it produces `string[][]` with the empty
//! string standing in for unused cells.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Serialized form of an empty cell.
pub const EMPTY_CELL: &str = "";

/// Coordinate of a cell, `(row, col)`, 0-indexed. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `steps` cells further along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize) -> Position {
        match direction {
            Direction::Across => Position::new(self.row, self.col + steps),
            Direction::Down => Position::new(self.row + steps, self.col),
        }
    }

    /// The cell one step back along `direction`, if there is one.
    #[must_use]
    pub fn back(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Across => self.col.checked_sub(1).map(|col| Position::new(self.row, col)),
            Direction::Down => self.row.checked_sub(1).map(|row| Position::new(row, self.col)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Scan order at each cell: Across is tried before Down.
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    #[must_use]
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Across => 0,
            Direction::Down => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Across => "across",
            Direction::Down => "down",
        })
    }
}

/// Minimal rectangle (inclusive bounds) enclosing some cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl BoundingBox {
    #[must_use]
    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    /// `max(h, w) / min(h, w)`; always `>= 1.0`.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        let (h, w) = (self.height() as f64, self.width() as f64);
        h.max(w) / h.min(w)
    }

    /// Grow by `padding` on every side without leaving a `height` x `width` grid.
    #[must_use]
    pub fn padded(&self, padding: usize, height: usize, width: usize) -> BoundingBox {
        BoundingBox {
            min_row: self.min_row.saturating_sub(padding),
            max_row: (self.max_row + padding).min(height - 1),
            min_col: self.min_col.saturating_sub(padding),
            max_col: (self.max_col + padding).min(width - 1),
        }
    }

    #[must_use]
    pub fn origin(&self) -> Position {
        Position::new(self.min_row, self.min_col)
    }
}

/// A maximal horizontal or vertical run of filled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub start: Position,
    pub direction: Direction,
    pub text: String,
}

/// Dense, row-major grid of optional letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// An all-empty grid.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width, cells: vec![None; height * width] }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn offset(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "{pos} outside {}x{} grid", self.height, self.width);
        pos.row * self.width + pos.col
    }

    /// Letter at `pos`; `None` for empty or out-of-bounds cells.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        if self.contains(pos) {
            self.cells[self.offset(pos)]
        } else {
            None
        }
    }

    /// True for empty cells and for positions outside the grid.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        let idx = self.offset(pos);
        self.cells[idx] = Some(letter);
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Read `len` letters starting at `start` along `direction`.
    ///
    /// Returns `None` if the run leaves the grid or crosses an empty cell.
    #[must_use]
    pub fn read(&self, start: Position, direction: Direction, len: usize) -> Option<String> {
        (0..len).map(|i| self.get(start.step(direction, i))).collect()
    }

    /// Bounding box of the filled cells, or `None` for an empty grid.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[row * self.width + col].is_none() {
                    continue;
                }
                bbox = Some(match bbox {
                    None => BoundingBox { min_row: row, max_row: row, min_col: col, max_col: col },
                    Some(b) => BoundingBox {
                        min_row: b.min_row.min(row),
                        max_row: b.max_row.max(row),
                        min_col: b.min_col.min(col),
                        max_col: b.max_col.max(col),
                    },
                });
            }
        }
        bbox
    }

    /// Copy the cells inside `bbox` into a new grid of exactly that size.
    #[must_use]
    pub fn cropped(&self, bbox: &BoundingBox) -> Grid {
        let mut out = Grid::new(bbox.height(), bbox.width());
        for row in 0..bbox.height() {
            let src = (bbox.min_row + row) * self.width + bbox.min_col;
            let dst = row * out.width;
            out.cells[dst..dst + bbox.width()].copy_from_slice(&self.cells[src..src + bbox.width()]);
        }
        out
    }

    /// Every maximal run of two or more filled cells, across runs first.
    #[must_use]
    pub fn runs(&self) -> Vec<Run> {
        let mut runs = Vec::new();
        for direction in Direction::ALL {
            let (outer, inner) = match direction {
                Direction::Across => (self.height, self.width),
                Direction::Down => (self.width, self.height),
            };
            for o in 0..outer {
                let mut current: Option<(Position, String)> = None;
                for i in 0..=inner {
                    let pos = match direction {
                        Direction::Across => Position::new(o, i),
                        Direction::Down => Position::new(i, o),
                    };
                    match (self.get(pos), current.as_mut()) {
                        (Some(letter), Some((_, text))) => text.push(letter),
                        (Some(letter), None) => current = Some((pos, letter.to_string())),
                        (None, _) => {
                            if let Some((start, text)) = current.take() {
                                if text.len() >= 2 {
                                    runs.push(Run { start, direction, text });
                                }
                            }
                        }
                    }
                }
            }
        }
        runs
    }

    /// Rows of single-letter strings, [`EMPTY_CELL`] for unused cells.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| {
                row.iter()
                    .map(|c| c.map_or_else(|| EMPTY_CELL.to_string(), |l| l.to_string()))
                    .collect()
            })
            .collect()
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: String = (0..self.width)
                .map(|col| self.get(Position::new(row, col)).unwrap_or('.'))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
