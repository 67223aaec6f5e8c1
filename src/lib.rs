//!
//! # flo_poly
//!
//! `flo_poly` computes boolean operations - union, intersection and difference - on 2D polygons,
//! along with the derived queries that usually accompany them: signed area, bounding box,
//! translation and decomposition back into path commands.
//!
//! Polygon clipping is notoriously sensitive to floating-point error: edge intersections that are
//! computed independently of each other need not agree, and the resulting contours can end up
//! self-intersecting or failing to close at all. `flo_poly` avoids this by quantizing every
//! coordinate onto an integer lattice when a polygon is built. The lattice spacing is the
//! polygon's `gridsize`, chosen by the caller (for example, the smallest distance the output
//! device can represent). Once on the lattice, every comparison and every intersection the sweep
//! algorithm performs is carried out in exact integer arithmetic, so two polygons that are equal
//! are exactly equal and the same inputs always produce the same outputs.
//!
//! Polygons are built by drawing on a `Canvas`:
//!
//! ```
//! use flo_poly::*;
//!
//! let mut canvas = Canvas::new(0.1).unwrap();
//! canvas.move_to(100.0, 150.0);
//! canvas.line_to(200.0, 150.0).unwrap();
//! canvas.line_to(200.0, 250.0).unwrap();
//! canvas.line_to(100.0, 250.0).unwrap();
//! canvas.close().unwrap();
//!
//! let square      = canvas.result();
//! let offset      = square.translate(50.0, 51.0);
//! let overlap     = square.intersect(&offset).unwrap();
//!
//! assert!(overlap.bbox() == [150.0, 201.0, 200.0, 250.0]);
//! ```
//!
//! Polygons are immutable: every operation returns a new `Polygon` and the operands are left
//! untouched, so they can be shared freely between threads. The results of the boolean operations
//! are always simple: contours cross each other (and themselves) only at shared vertices, outer
//! boundaries and holes have opposite orientations, and `decompose()` lists them in a
//! deterministic order.
//!

#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod grid;
mod error;
mod sweep;
mod canvas;
mod polygon;
mod path_op;

pub use self::grid::*;
pub use self::error::*;
pub use self::canvas::*;
pub use self::polygon::*;
pub use self::path_op::*;

pub use self::sweep::{GridEdge};
