use crate::grid::*;

use std::cmp::{Ordering};

///
/// A directed straight edge between two grid points
///
/// The direction is the traversal direction of the contour the edge belongs to: a closed
/// contour is represented by edges whose `to` points each match the `from` point of the next.
///
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct GridEdge {
    pub from: GridPoint,
    pub to:   GridPoint,
}

impl GridEdge {
    ///
    /// Creates a new edge between two points
    ///
    #[inline]
    pub fn new(from: GridPoint, to: GridPoint) -> GridEdge {
        GridEdge { from, to }
    }

    ///
    /// True if this edge has no extent
    ///
    #[inline]
    pub fn is_zero_length(&self) -> bool {
        self.from == self.to
    }

    ///
    /// True if this edge is traversed in scan order (downwards, or rightwards along a
    /// horizontal)
    ///
    #[inline]
    pub fn is_descending(&self) -> bool {
        self.from.scan_cmp(&self.to) == Ordering::Less
    }

    ///
    /// This edge with its direction reversed
    ///
    #[inline]
    pub fn reversed(&self) -> GridEdge {
        GridEdge { from: self.to, to: self.from }
    }

    ///
    /// The contribution of this edge to twice the signed area of its polygon
    ///
    /// The sign convention is clockwise-positive with the y axis pointing down, so the contours
    /// produced by the boolean operations sum to a non-negative total.
    ///
    #[inline]
    pub (crate) fn double_area(&self) -> i64 {
        (self.to.x as i64) * (self.from.y as i64) - (self.from.x as i64) * (self.to.y as i64)
    }
}
