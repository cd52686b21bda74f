use mazepath_core::Point;

/// Remaining-cost estimate used to order the search frontier.
///
/// Implementations must never overestimate the true remaining cost
/// (admissible), otherwise the returned path may not be optimal.
pub trait Heuristic {
    /// Estimate of the cost from `from` to `goal`. Must be >= 0.
    fn estimate(&self, from: Point, goal: Point) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> f64,
{
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> f64 {
        self(from, goal)
    }
}
