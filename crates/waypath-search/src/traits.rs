use std::fmt::Debug;
use std::hash::Hash;

/// Requirements on a graph location: a small, copyable, hashable identifier.
///
/// Blanket-implemented for every type that qualifies.
pub trait Location: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Location for T {}

/// A weighted graph queried by the search engine.
///
/// The graph knows nothing about searching. It is only read during a query, so
/// independent engines may share one graph.
pub trait WeightedGraph<L: Location> {
    /// Append the traversable neighbors of `at` into `buf`, in a deterministic
    /// order. The caller clears `buf` before calling.
    fn neighbors(&self, at: L, buf: &mut Vec<L>);

    /// Cost of moving from `from` to adjacent `to`. Must be >= 0 and is only
    /// asked for pairs returned by [`neighbors`](Self::neighbors).
    fn cost(&self, from: L, to: L) -> f64;

    /// Upper bound on the number of distinct locations. Capacity hint only.
    fn size(&self) -> usize;

    /// Whether `at` is a valid place to start or end a search.
    fn contains(&self, _at: L) -> bool {
        true
    }

    /// The location that continues the straight line from `from` through
    /// `through`, if the topology has one.
    fn straight_ahead(&self, _from: L, _through: L) -> Option<L> {
        None
    }
}
