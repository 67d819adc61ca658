use log::debug;

use crate::AStar;
use crate::distance::Heuristic;
use crate::error::PathError;
use crate::frontier::Frontier;
use crate::traits::Location;

impl<L, H, F> AStar<L, H, F>
where
    L: Location,
    H: Heuristic<L>,
    F: Frontier<L>,
{
    /// Write the path found by the last search into `buf`, ordered from
    /// `start` to `goal` with both endpoints included.
    ///
    /// `buf` is cleared first. If `goal` was not reached, or the recorded
    /// predecessors do not lead back to `start`, `buf` is left empty.
    pub fn fill_path(&self, buf: &mut Vec<L>, start: L, goal: L) -> Result<(), PathError<L>> {
        buf.clear();
        if !self.came_from.contains_key(&goal) {
            return Ok(());
        }

        // A valid chain visits each recorded location at most once.
        let limit = self.came_from.len();
        let mut steps = 0;
        let mut current = goal;
        buf.push(goal);
        while current != start {
            let prev = match self.came_from.get(&current) {
                Some(&prev) if prev != current => prev,
                // Dead end or a different search root.
                _ => {
                    buf.clear();
                    return Ok(());
                }
            };
            steps += 1;
            if steps >= limit {
                buf.clear();
                debug!("astar: predecessor cycle walking back from {goal:?}");
                return Err(PathError::PredecessorCycle { goal, steps });
            }
            buf.push(prev);
            current = prev;
        }
        buf.reverse();
        Ok(())
    }

    /// Path found by the last search, from `start` to `goal` inclusive.
    ///
    /// Empty if `goal` is unreachable. See [`fill_path`](Self::fill_path).
    pub fn path(&self, start: L, goal: L) -> Result<Vec<L>, PathError<L>> {
        let mut buf = Vec::new();
        self.fill_path(&mut buf, start, goal)?;
        Ok(buf)
    }
}
