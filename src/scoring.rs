//! Composite quality score for a finished attempt.
//!
//! All terms are computed over the bounding box of filled cells:
//!
//! | term        | formula                                   |
//! |-------------|-------------------------------------------|
//! | `placement` | `placed / total_candidates * 100`         |
//! | `density`   | `filled_cells / bbox_area * 20`           |
//! | `shape`     | `10 / aspect_ratio` (`max(h,w)/min(h,w)`) |
//!
//! Placement dominates: one extra word always outweighs any change in density
//! or shape for realistic word lists.

use crate::grid::Grid;

const PLACEMENT_WEIGHT: f64 = 100.0;
const DENSITY_WEIGHT: f64 = 20.0;
const SHAPE_WEIGHT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttemptScore {
    pub placement: f64,
    pub density: f64,
    pub shape: f64,
    pub total: f64,
}

impl AttemptScore {
    /// Score `grid` holding `placed` of `total_candidates` words.
    ///
    /// An empty grid or an empty candidate list scores zero.
    #[must_use]
    pub fn compute(grid: &Grid, placed: usize, total_candidates: usize) -> AttemptScore {
        let Some(bbox) = grid.bounding_box() else {
            return AttemptScore::default();
        };
        if total_candidates == 0 {
            return AttemptScore::default();
        }

        let placement = placed as f64 / total_candidates as f64 * PLACEMENT_WEIGHT;
        let density = grid.filled_count() as f64 / bbox.area() as f64 * DENSITY_WEIGHT;
        let shape = SHAPE_WEIGHT / bbox.aspect_ratio();

        AttemptScore { placement, density, shape, total: placement + density + shape }
    }

    /// True if `self` should replace `incumbent`; ties keep the incumbent.
    #[must_use]
    pub fn beats(&self, incumbent: &AttemptScore) -> bool {
        self.total > incumbent.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, Position};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_grid_scores_zero() {
        assert_eq!(AttemptScore::compute(&Grid::new(5, 5), 0, 3), AttemptScore::default());
    }

    #[test]
    fn test_plus_shape() {
        // CAT across with COT down through the C:
        //   C A T
        //   O . .
        //   T . .
        let mut g = Grid::new(10, 10);
        for (i, l) in "CAT".chars().enumerate() {
            g.set(Position::new(2, 2).step(Direction::Across, i), l);
        }
        for (i, l) in "COT".chars().enumerate() {
            g.set(Position::new(2, 2).step(Direction::Down, i), l);
        }

        let s = AttemptScore::compute(&g, 2, 4);
        assert!(approx(s.placement, 50.0));
        assert!(approx(s.density, 5.0 / 9.0 * 20.0));
        assert!(approx(s.shape, 10.0));
        assert!(approx(s.total, s.placement + s.density + s.shape));
    }

    #[test]
    fn test_thin_layout_penalized() {
        let mut g = Grid::new(10, 10);
        for (i, l) in "ABCDEF".chars().enumerate() {
            g.set(Position::new(0, i), l);
        }
        let s = AttemptScore::compute(&g, 1, 1);
        assert!(approx(s.density, 20.0));
        assert!(approx(s.shape, 10.0 / 6.0));
    }

    #[test]
    fn test_ties_keep_incumbent() {
        let a = AttemptScore { placement: 1.0, density: 1.0, shape: 1.0, total: 3.0 };
        let b = a;
        assert!(!b.beats(&a));
        let c = AttemptScore { total: 3.5, ..a };
        assert!(c.beats(&a));
        assert!(!a.beats(&c));
    }
}
