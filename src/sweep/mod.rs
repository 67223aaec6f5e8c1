//!
//! The sweep module turns one or two polygons into the edge set of a boolean combination of
//! them. It works in three stages, each of which operates entirely in integer arithmetic on
//! grid coordinates:
//!
//! * `subdivide` finds every point where two edges cross, splits the edges there, and merges
//!   edges that coincide, producing a planar set of segments annotated with the winding
//!   contribution of each operand.
//!
//! * `winding` computes the winding numbers of the regions on either side of every segment and
//!   keeps the segments where the requested boolean predicate changes value, orienting them so
//!   that the filled region is always on the same side.
//!
//! * `contour` walks the kept edges back into closed contours, in a deterministic order.
//!

mod grid_edge;
mod intersect;
mod subdivide;
mod winding;
mod contour;

pub use self::grid_edge::*;

pub (crate) use self::subdivide::*;
pub (crate) use self::winding::*;
pub (crate) use self::contour::*;
