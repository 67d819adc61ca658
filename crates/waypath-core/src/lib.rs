//! **waypath-core** — geometry primitives shared by the waypath crates.
//!
//! [`Point`] is the integer location type of the reference square grid, and
//! [`Range`] describes the half-open rectangle a grid covers.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
