use std::collections::HashMap;

use log::{debug, trace};
use waypath_core::Point;

use crate::distance::{Heuristic, Manhattan};
use crate::error::PathError;
use crate::frontier::{Frontier, HeapFrontier};
use crate::options::{SearchOptions, Status};
use crate::traits::{Location, WeightedGraph};

/// Reusable A* search engine.
///
/// The engine owns the per-query search state (frontier, best-known costs,
/// predecessors) and clears it at the start of every [`search`](Self::search),
/// so repeated queries reuse the same allocations. Results stay readable until
/// the next query.
///
/// One engine serves one query at a time. Run independent engines for
/// concurrent queries; they can share a graph.
#[derive(Debug, Clone)]
pub struct AStar<L, H = Manhattan, F = HeapFrontier<L>> {
    pub(crate) came_from: HashMap<L, L>,
    pub(crate) cost_so_far: HashMap<L, f64>,
    frontier: F,
    heuristic: H,
    // scratch buffer for neighbor queries
    nbuf: Vec<L>,
    status: Status,
    expanded: usize,
}

impl AStar<Point> {
    /// Engine for grid graphs using the [`Manhattan`] heuristic.
    pub fn new<G: WeightedGraph<Point>>(graph: &G) -> Self {
        Self::with_heuristic(graph, Manhattan)
    }
}

impl<L: Location, H: Heuristic<L>> AStar<L, H> {
    /// Engine with a custom heuristic and the default heap frontier.
    pub fn with_heuristic<G: WeightedGraph<L>>(graph: &G, heuristic: H) -> Self {
        Self::with_frontier(graph, heuristic, HeapFrontier::with_capacity(graph.size()))
    }
}

impl<L, H, F> AStar<L, H, F>
where
    L: Location,
    H: Heuristic<L>,
    F: Frontier<L>,
{
    /// Engine with a custom heuristic and frontier. Internal maps are sized
    /// from `graph.size()`.
    pub fn with_frontier<G: WeightedGraph<L>>(graph: &G, heuristic: H, mut frontier: F) -> Self {
        let size = graph.size();
        frontier.clear();
        Self {
            came_from: HashMap::with_capacity(size),
            cost_so_far: HashMap::with_capacity(size),
            frontier,
            heuristic,
            nbuf: Vec::with_capacity(8),
            status: Status::Idle,
            expanded: 0,
        }
    }

    /// Prepare the engine for graphs of up to `size` locations.
    ///
    /// Clears all search state. Storage is only grown, never shrunk.
    pub fn resize(&mut self, size: usize) {
        self.reset();
        self.came_from.reserve(size);
        self.cost_so_far.reserve(size);
    }

    fn reset(&mut self) {
        self.came_from.clear();
        self.cost_so_far.clear();
        self.frontier.clear();
        self.status = Status::Idle;
        self.expanded = 0;
    }

    /// Search for a minimum-cost path from `start` to `goal`.
    ///
    /// Returns [`Status::Reached`] or [`Status::Exhausted`]; read the result
    /// through [`path`](Self::path) and the cost/predecessor accessors.
    /// Fails fast if `start` or `goal` is not a valid location of `graph`,
    /// and rejects negative or NaN edge costs.
    pub fn search<G: WeightedGraph<L>>(
        &mut self,
        graph: &G,
        start: L,
        goal: L,
        opts: SearchOptions,
    ) -> Result<Status, PathError<L>> {
        self.reset();

        if !graph.contains(start) {
            debug!("astar: rejected start {start:?}");
            return Err(PathError::InvalidStart(start));
        }
        if !graph.contains(goal) {
            debug!("astar: rejected goal {goal:?}");
            return Err(PathError::InvalidGoal(goal));
        }

        self.came_from.insert(start, start);
        self.cost_so_far.insert(start, 0.0);
        self.frontier.insert(start, 0.0);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let result = self.run(graph, goal, opts, &mut nbuf);
        self.nbuf = nbuf;

        match result {
            Ok(status) => {
                self.status = status;
                debug!(
                    "astar: {start:?} -> {goal:?}: {status:?}, expanded {}, discovered {}",
                    self.expanded,
                    self.cost_so_far.len()
                );
                Ok(status)
            }
            Err(e) => {
                debug!("astar: {start:?} -> {goal:?}: {e}");
                self.reset();
                Err(e)
            }
        }
    }

    fn run<G: WeightedGraph<L>>(
        &mut self,
        graph: &G,
        goal: L,
        opts: SearchOptions,
        nbuf: &mut Vec<L>,
    ) -> Result<Status, PathError<L>> {
        while let Some(current) = self.frontier.extract_min() {
            if current == goal {
                return Ok(Status::Reached);
            }
            let Some(&current_cost) = self.cost_so_far.get(&current) else {
                continue;
            };
            self.expanded += 1;
            trace!("astar: expand {current:?} g={current_cost}");

            nbuf.clear();
            graph.neighbors(current, nbuf);

            if opts.prefer_forward {
                if let Some(ahead) = self
                    .came_from
                    .get(&current)
                    .filter(|&&prev| prev != current)
                    .and_then(|&prev| graph.straight_ahead(prev, current))
                {
                    move_to_front(nbuf, ahead);
                }
            }

            for &next in nbuf.iter() {
                let step = graph.cost(current, next);
                if step.is_nan() || step < 0.0 {
                    return Err(PathError::InvalidCost {
                        from: current,
                        to: next,
                        cost: step,
                    });
                }
                let new_cost = current_cost + step;
                let improved = match self.cost_so_far.get(&next) {
                    Some(&known) => new_cost < known,
                    None => true,
                };
                if improved {
                    self.cost_so_far.insert(next, new_cost);
                    self.came_from.insert(next, current);
                    let priority = new_cost + self.heuristic.estimate(next, goal);
                    self.frontier.insert(next, priority);
                }
            }
        }
        Ok(Status::Exhausted)
    }

    // -----------------------------------------------------------------------
    // Read-only views of the last query
    // -----------------------------------------------------------------------

    /// Outcome of the last query.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether `goal` was discovered by the last query.
    #[inline]
    pub fn reached(&self, goal: L) -> bool {
        self.came_from.contains_key(&goal)
    }

    /// Cheapest known cost from the last start to `at`.
    #[inline]
    pub fn cost_so_far(&self, at: L) -> Option<f64> {
        self.cost_so_far.get(&at).copied()
    }

    /// Predecessor of `at` on its cheapest known path. The start is its own
    /// predecessor.
    #[inline]
    pub fn came_from(&self, at: L) -> Option<L> {
        self.came_from.get(&at).copied()
    }

    /// All discovered locations with their best known cost.
    #[inline]
    pub fn costs(&self) -> &HashMap<L, f64> {
        &self.cost_so_far
    }

    /// All discovered locations with their predecessor.
    #[inline]
    pub fn predecessors(&self) -> &HashMap<L, L> {
        &self.came_from
    }

    /// Number of frontier entries expanded by the last query.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of locations the internal maps can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cost_so_far.capacity().min(self.came_from.capacity())
    }
}

/// Move `target` to the front of `buf`, keeping the relative order of the
/// other elements. No-op if `target` is absent.
fn move_to_front<L: PartialEq>(buf: &mut [L], target: L) {
    if let Some(i) = buf.iter().position(|n| *n == target) {
        buf[..=i].rotate_right(1);
    }
}
