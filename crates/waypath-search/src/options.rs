/// Per-query search options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// When expanding a node, process the neighbor that continues straight
    /// ahead first. Only changes which of several equal-cost paths is
    /// recorded, never the path cost.
    pub prefer_forward: bool,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set [`prefer_forward`](Self::prefer_forward).
    pub fn prefer_forward(mut self, on: bool) -> Self {
        self.prefer_forward = on;
        self
    }
}

/// Outcome of the last query run by an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// No query has completed (none run yet, or the last one was rejected).
    #[default]
    Idle,
    /// The goal was popped from the frontier.
    Reached,
    /// The frontier ran dry before the goal was reached.
    Exhausted,
}

impl Status {
    #[inline]
    pub fn is_reached(self) -> bool {
        self == Status::Reached
    }
}
