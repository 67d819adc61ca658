use waypath_core::Point;

use crate::traits::Location;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Estimate of the remaining cost from a location to the goal.
///
/// Must never overestimate the true cost (admissible) and should satisfy the
/// triangle inequality along edges (consistent) for the first pop of the goal
/// to be optimal.
pub trait Heuristic<L> {
    fn estimate(&self, from: L, goal: L) -> f64;
}

/// Manhattan distance heuristic for four-directional grids whose cheapest
/// step costs 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic<Point> for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> f64 {
        f64::from(manhattan(from, goal))
    }
}

/// Always-zero heuristic. The search degenerates to Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl<L: Location> Heuristic<L> for Zero {
    #[inline]
    fn estimate(&self, _from: L, _goal: L) -> f64 {
        0.0
    }
}

impl<L, F: Fn(L, L) -> f64> Heuristic<L> for F {
    #[inline]
    fn estimate(&self, from: L, goal: L) -> f64 {
        self(from, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -1);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_heuristic_is_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(9, 9);
        assert_eq!(Manhattan.estimate(a, b), 18.0);
        assert_eq!(Manhattan.estimate(b, a), 18.0);
    }

    #[test]
    fn zero_and_closure_heuristics() {
        assert_eq!(Zero.estimate(3u32, 7u32), 0.0);
        let h = |a: i64, b: i64| (a - b).abs() as f64;
        assert_eq!(h.estimate(2, 7), 5.0);
    }
}
