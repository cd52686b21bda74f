use mazepath_core::Point;

use crate::traits::Heuristic;

/// No estimate at all: the search degenerates to uniform-cost (Dijkstra).
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Heuristic for Uniform {
    #[inline]
    fn estimate(&self, _from: Point, _goal: Point) -> f64 {
        0.0
    }
}

/// Straight-line distance between grid coordinates, scaled by the cheapest
/// step cost. Admissible and consistent on a 4-connected grid whose edges
/// all cost at least `min_step`.
#[derive(Debug, Clone, Copy)]
pub struct Euclidean {
    pub min_step: f64,
}

impl Default for Euclidean {
    fn default() -> Self {
        Self {
            min_step: crate::graph::STEP_COST,
        }
    }
}

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> f64 {
        from.euclidean(goal) * self.min_step
    }
}

/// Taxicab distance. Tighter than [`Euclidean`] on a 4-connected grid and
/// still admissible there.
#[derive(Debug, Clone, Copy)]
pub struct Manhattan {
    pub min_step: f64,
}

impl Default for Manhattan {
    fn default() -> Self {
        Self {
            min_step: crate::graph::STEP_COST,
        }
    }
}

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> f64 {
        f64::from(from.manhattan(goal)) * self.min_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_zero() {
        assert_eq!(Uniform.estimate(Point::at(0, 0), Point::at(9, 9)), 0.0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let goal = Point::at(4, 4);
        for row in 0..5 {
            for col in 0..5 {
                let p = Point::at(row, col);
                let e = Euclidean::default().estimate(p, goal);
                let m = Manhattan::default().estimate(p, goal);
                assert!(e <= m + 1e-12, "{p}: {e} > {m}");
            }
        }
    }

    #[test]
    fn zero_at_goal() {
        let g = Point::at(2, 3);
        assert_eq!(Euclidean::default().estimate(g, g), 0.0);
        assert_eq!(Manhattan::default().estimate(g, g), 0.0);
    }
}
