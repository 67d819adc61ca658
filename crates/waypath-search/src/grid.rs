//! Reference square grid graph.

use std::collections::HashSet;

use waypath_core::{Point, Range};

use crate::error::GridError;
use crate::traits::WeightedGraph;

/// Cost of stepping onto an ordinary cell.
pub const FLOOR_COST: f64 = 1.0;
/// Cost of stepping onto a forest cell.
pub const FOREST_COST: f64 = 5.0;

/// Neighbor enumeration order: +x, -y, -x, +y.
const DIRS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(0, 1),
];

/// A `width` x `height` four-connected grid with walls and forests.
///
/// Walls are never returned as neighbors. Entering a forest costs
/// [`FOREST_COST`], entering anything else [`FLOOR_COST`]; the cost depends on
/// the destination only.
#[derive(Debug, Clone, Default)]
pub struct SquareGrid {
    bounds: Range,
    walls: HashSet<Point>,
    forests: HashSet<Point>,
}

impl SquareGrid {
    /// Create an open grid with no walls or forests.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Range::sized(width, height),
            walls: HashSet::new(),
            forests: HashSet::new(),
        }
    }

    /// Parse a grid from text: `.` floor, `#` wall, `F` forest.
    ///
    /// Blank lines and surrounding whitespace are ignored. Row `y` is the
    /// `y`-th non-blank line.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let mut walls = HashSet::new();
        let mut forests = HashSet::new();
        let mut width = None;
        let mut height = 0;
        for (line, row) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let found = row.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::InconsistentSize {
                    line,
                    expected,
                    found,
                });
            }
            let cols = dimension(found, line)?;
            height = dimension(line + 1, line)?;
            let y = height - 1;
            for (x, ch) in (0..cols).zip(row.chars()) {
                let pos = Point::new(x, y);
                match ch {
                    '.' => {}
                    '#' => {
                        walls.insert(pos);
                    }
                    'F' => {
                        forests.insert(pos);
                    }
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                }
            }
        }
        let width = match width {
            Some(w) => dimension(w, 0)?,
            None => 0,
        };
        Ok(Self {
            bounds: Range::sized(width, height),
            walls,
            forests,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        !self.walls.contains(&p)
    }

    #[inline]
    pub fn is_forest(&self, p: Point) -> bool {
        self.forests.contains(&p)
    }

    /// Block `p`. Out-of-bounds points are ignored.
    pub fn add_wall(&mut self, p: Point) {
        if self.in_bounds(p) {
            self.walls.insert(p);
        }
    }

    /// Block every in-bounds cell of `rect`.
    pub fn add_walls_rect(&mut self, rect: Range) {
        for p in rect.intersect(self.bounds) {
            self.walls.insert(p);
        }
    }

    /// Mark `p` as forest. Out-of-bounds points are ignored.
    pub fn add_forest(&mut self, p: Point) {
        if self.in_bounds(p) {
            self.forests.insert(p);
        }
    }

    /// Mark every in-bounds cell of `rect` as forest.
    pub fn add_forests_rect(&mut self, rect: Range) {
        for p in rect.intersect(self.bounds) {
            self.forests.insert(p);
        }
    }

    /// Iterator over the blocked cells, in no particular order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.walls.iter().copied()
    }

    /// Iterator over the forest cells, in no particular order.
    pub fn forests(&self) -> impl Iterator<Item = Point> + '_ {
        self.forests.iter().copied()
    }
}

/// Grid coordinates are `i32`; reject text that would not fit.
fn dimension(n: usize, line: usize) -> Result<i32, GridError> {
    i32::try_from(n).map_err(|_| GridError::TooLarge { line, len: n })
}

impl WeightedGraph<Point> for SquareGrid {
    fn neighbors(&self, at: Point, buf: &mut Vec<Point>) {
        for d in DIRS {
            let next = at + d;
            if self.in_bounds(next) && self.passable(next) {
                buf.push(next);
            }
        }
    }

    #[inline]
    fn cost(&self, _from: Point, to: Point) -> f64 {
        if self.is_forest(to) { FOREST_COST } else { FLOOR_COST }
    }

    #[inline]
    fn size(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    fn contains(&self, at: Point) -> bool {
        self.in_bounds(at) && self.passable(at)
    }

    #[inline]
    fn straight_ahead(&self, from: Point, through: Point) -> Option<Point> {
        Some(through * 2 - from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(g: &SquareGrid, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        g.neighbors(p, &mut buf);
        buf
    }

    #[test]
    fn neighbor_order_is_fixed() {
        let g = SquareGrid::new(3, 3);
        assert_eq!(
            neighbors_of(&g, Point::new(1, 1)),
            vec![
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn neighbors_respect_bounds_and_walls() {
        let mut g = SquareGrid::new(3, 3);
        g.add_wall(Point::new(1, 0));
        assert_eq!(
            neighbors_of(&g, Point::new(0, 0)),
            vec![Point::new(0, 1)]
        );
        assert!(!g.contains(Point::new(1, 0)));
        assert!(!g.contains(Point::new(3, 0)));
        assert!(g.contains(Point::new(2, 2)));
    }

    #[test]
    fn cost_depends_on_destination() {
        let mut g = SquareGrid::new(4, 1);
        g.add_forest(Point::new(2, 0));
        assert_eq!(g.cost(Point::new(1, 0), Point::new(2, 0)), FOREST_COST);
        assert_eq!(g.cost(Point::new(2, 0), Point::new(1, 0)), FLOOR_COST);
        assert_eq!(g.cost(Point::new(2, 0), Point::new(3, 0)), FLOOR_COST);
    }

    #[test]
    fn rects_are_clipped() {
        let mut g = SquareGrid::new(4, 4);
        g.add_walls_rect(Range::new(2, 2, 10, 10));
        assert_eq!(g.walls().count(), 4);
        g.add_forests_rect(Range::new(-5, -5, 1, 1));
        assert_eq!(g.forests().collect::<Vec<_>>(), vec![Point::new(0, 0)]);
        g.add_wall(Point::new(-1, 0));
        assert_eq!(g.walls().count(), 4);
    }

    #[test]
    fn size_is_area() {
        assert_eq!(SquareGrid::new(64, 32).size(), 2048);
        assert_eq!(SquareGrid::new(0, 5).size(), 0);
    }

    #[test]
    fn straight_ahead_extends_the_step() {
        let g = SquareGrid::new(5, 5);
        assert_eq!(
            g.straight_ahead(Point::new(1, 2), Point::new(2, 2)),
            Some(Point::new(3, 2))
        );
        assert_eq!(
            g.straight_ahead(Point::new(2, 2), Point::new(2, 2)),
            Some(Point::new(2, 2))
        );
    }

    #[test]
    fn parse_ascii() {
        let g = SquareGrid::from_ascii(
            "
            ..#.
            .F#.
            ....
            ",
        )
        .unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert!(!g.passable(Point::new(2, 0)));
        assert!(!g.passable(Point::new(2, 1)));
        assert!(g.is_forest(Point::new(1, 1)));
        assert_eq!(g.walls().count(), 2);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            SquareGrid::from_ascii("...\n..\n").unwrap_err(),
            GridError::InconsistentSize {
                line: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            SquareGrid::from_ascii("..\n.x\n").unwrap_err(),
            GridError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn oversized_dimension_is_an_error() {
        assert_eq!(dimension(7, 0), Ok(7));
        let too_big = usize::try_from(i32::MAX).unwrap() + 1;
        assert_eq!(
            dimension(too_big, 4),
            Err(GridError::TooLarge {
                line: 4,
                len: too_big
            })
        );
    }

    #[test]
    fn parse_empty_is_empty_grid() {
        let g = SquareGrid::from_ascii("\n   \n").unwrap();
        assert_eq!(g.size(), 0);
    }
}
