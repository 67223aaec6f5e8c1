use crate::error::*;
use crate::grid::*;
use crate::polygon::*;
use crate::sweep::*;

use itertools::*;

///
/// A canvas builds polygons by drawing their contours
///
/// Drawing follows the usual path conventions: `move_to` begins a contour, `line_to` extends it
/// one vertex at a time, and `close` joins it back to its starting vertex and adds it to the
/// polygon. Coordinates are snapped onto the canvas's grid as they arrive, so a `line_to` that
/// lands on the same grid point as the previous vertex is rejected as a zero-length edge.
///
/// A contour that is still open when `move_to` is called again, or when the polygon is
/// retrieved with `result()`, is discarded without being emitted (the fill of an unclosed
/// contour is undefined). `result()` does not consume the canvas and can be called repeatedly.
///
/// The canvas is the only mutable object in this library and is intended for a single writer;
/// the polygons it produces are immutable and can be shared freely.
///
#[derive(Clone, Debug)]
pub struct Canvas {
    /// Spacing of the grid that drawn coordinates snap to
    gridsize: f64,

    /// Edges of the contours that have been closed so far
    edges: Vec<GridEdge>,

    /// Vertices of the contour currently being drawn
    contour: Vec<GridPoint>,
}

impl Canvas {
    ///
    /// Creates a canvas that snaps its coordinates to a grid with the specified spacing
    ///
    pub fn new(gridsize: f64) -> Result<Canvas, PolygonError> {
        if !gridsize.is_finite() || gridsize <= 0.0 {
            return Err(PolygonError::InvalidGridSize);
        }

        Ok(Canvas {
            gridsize:   gridsize,
            edges:      vec![],
            contour:    vec![],
        })
    }

    ///
    /// The grid spacing this canvas was created with
    ///
    #[inline]
    pub fn gridsize(&self) -> f64 {
        self.gridsize
    }

    ///
    /// Begins a new contour at a point, discarding any contour left open
    ///
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.contour.clear();
        self.contour.push(GridPoint::snap(x, y, self.gridsize));
    }

    ///
    /// Extends the current contour with a straight edge to a point
    ///
    /// If no contour is open this behaves as `move_to`. Fails with `DegenerateInput`, leaving
    /// the canvas unchanged, if the point snaps onto the previous vertex.
    ///
    pub fn line_to(&mut self, x: f64, y: f64) -> Result<(), PolygonError> {
        let point = GridPoint::snap(x, y, self.gridsize);

        if self.contour.last() == Some(&point) {
            return Err(PolygonError::DegenerateInput);
        }

        self.contour.push(point);

        Ok(())
    }

    ///
    /// Closes the current contour by joining its last vertex back to its first, and adds it to
    /// the polygon being built
    ///
    /// Does nothing if no contour is open. Fails with `DegenerateInput`, leaving the contour
    /// open and the canvas unchanged, if the contour has fewer than 3 distinct vertices (it
    /// can be closed later once more vertices have been added).
    ///
    pub fn close(&mut self) -> Result<(), PolygonError> {
        if self.contour.is_empty() {
            return Ok(());
        }

        if self.contour.iter().unique().count() < 3 {
            return Err(PolygonError::DegenerateInput);
        }

        for (from, to) in self.contour.iter().tuple_windows() {
            self.edges.push(GridEdge::new(*from, *to));
        }

        let first   = self.contour[0];
        let last    = self.contour[self.contour.len() - 1];

        if last != first {
            self.edges.push(GridEdge::new(last, first));
        }

        self.contour.clear();

        Ok(())
    }

    ///
    /// The polygon described by the contours closed so far
    ///
    /// Any contour still open is not part of the result. The canvas is left as it is, so more
    /// contours can be drawn afterwards and `result()` called again.
    ///
    pub fn result(&self) -> Polygon {
        Polygon::from_edges(self.gridsize, self.edges.clone())
    }
}
