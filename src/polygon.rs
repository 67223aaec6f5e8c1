use crate::canvas::*;
use crate::error::*;
use crate::grid::*;
use crate::path_op::*;
use crate::sweep::*;

use itertools::*;

///
/// An immutable polygon: zero or more closed contours on a coordinate grid
///
/// Every vertex coordinate is an exact multiple of the polygon's `gridsize`, which is what
/// makes the boolean operations robust: all of the geometry they perform is integer arithmetic
/// on the grid, with no epsilon comparisons anywhere.
///
/// A polygon is built with a `Canvas`, or produced by one of the operations here. Operations
/// never mutate their operands: they return new polygons, so a `Polygon` can be shared between
/// threads and used as the operand of several operations at once.
///
/// Binary operations require both operands to use the same `gridsize` and fail with
/// `IncompatibleGrid` otherwise.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Polygon {
    /// Spacing of the coordinate grid
    gridsize: f64,

    /// The directed edges of the polygon's contours
    edges: Vec<GridEdge>,

    /// True if the edge set came out of the sweep pipeline: planar, consistently oriented and
    /// ready to decompose directly
    resolved: bool,
}

impl Polygon {
    ///
    /// Creates an empty polygon with the specified grid spacing
    ///
    pub fn new(gridsize: f64) -> Result<Polygon, PolygonError> {
        if !gridsize.is_finite() || gridsize <= 0.0 {
            return Err(PolygonError::InvalidGridSize);
        }

        Ok(Polygon {
            gridsize:   gridsize,
            edges:      vec![],
            resolved:   true,
        })
    }

    ///
    /// Creates an axis-aligned rectangle
    ///
    /// Fails with `DegenerateInput` if the rectangle collapses to a line or point once snapped
    /// to the grid.
    ///
    pub fn rectangle(x1: f64, y1: f64, x2: f64, y2: f64, gridsize: f64) -> Result<Polygon, PolygonError> {
        let mut canvas = Canvas::new(gridsize)?;

        canvas.move_to(x1, y1);
        canvas.line_to(x2, y1)?;
        canvas.line_to(x2, y2)?;
        canvas.line_to(x1, y2)?;
        canvas.close()?;

        Ok(canvas.result())
    }

    ///
    /// Creates a polygon directly from a set of contour edges (used by the canvas builder)
    ///
    pub (crate) fn from_edges(gridsize: f64, edges: Vec<GridEdge>) -> Polygon {
        let resolved = edges.is_empty();

        Polygon { gridsize, edges, resolved }
    }

    ///
    /// The grid spacing this polygon was created with
    ///
    #[inline]
    pub fn gridsize(&self) -> f64 {
        self.gridsize
    }

    ///
    /// True if this polygon has no edges (and so covers no area)
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    ///
    /// The region covered by either this polygon or another
    ///
    pub fn union(&self, other: &Polygon) -> Result<Polygon, PolygonError> {
        self.combine(Some(other), BooleanOp::Union)
    }

    ///
    /// The region covered by both this polygon and another
    ///
    pub fn intersect(&self, other: &Polygon) -> Result<Polygon, PolygonError> {
        self.combine(Some(other), BooleanOp::Intersect)
    }

    ///
    /// The region covered by this polygon but not by another
    ///
    /// Subtraction is not commutative: `a.subtract(&b)` removes `b` from `a`.
    ///
    pub fn subtract(&self, other: &Polygon) -> Result<Polygon, PolygonError> {
        self.combine(Some(other), BooleanOp::Subtract)
    }

    ///
    /// Resolves this polygon's self-intersections and winding multiplicity into plain contours
    ///
    /// The result covers the same region under the nonzero winding rule, but its contours are
    /// simple, cross nowhere, and wind consistently (holes opposite to outer boundaries).
    ///
    pub fn simplify(&self) -> Result<Polygon, PolygonError> {
        self.combine(None, BooleanOp::Union)
    }

    ///
    /// The area covered by both this polygon and another
    ///
    pub fn intersection_area(&self, other: &Polygon) -> Result<f64, PolygonError> {
        Ok(self.intersect(other)?.area())
    }

    ///
    /// The area covered by this polygon
    ///
    /// This is the area of the region filled under the nonzero winding rule, so it does not
    /// depend on the direction the contours were drawn in. The empty polygon has area 0.
    ///
    pub fn area(&self) -> f64 {
        let double_area = if self.resolved {
            self.double_area()
        } else {
            self.simplify()
                .expect("Edge windings should resolve for any closed input")
                .double_area()
        };

        (double_area as f64) * 0.5 * self.gridsize * self.gridsize
    }

    ///
    /// Twice the signed grid-unit area of a resolved edge set (clockwise positive, y down)
    ///
    fn double_area(&self) -> i64 {
        self.edges.iter()
            .map(|edge| edge.double_area())
            .sum()
    }

    ///
    /// The bounding box of this polygon as `[min_x, min_y, max_x, max_y]`
    ///
    /// The empty polygon has the degenerate bounding box `[0, 0, 0, 0]`.
    ///
    pub fn bbox(&self) -> [f64; 4] {
        if self.edges.is_empty() {
            return [0.0, 0.0, 0.0, 0.0];
        }

        let mut min = self.edges[0].from;
        let mut max = min;

        for point in self.edges.iter().flat_map(|edge| [edge.from, edge.to]) {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        let (min_x, min_y) = min.unsnap(self.gridsize);
        let (max_x, max_y) = max.unsnap(self.gridsize);

        [min_x, min_y, max_x, max_y]
    }

    ///
    /// This polygon translated by an offset
    ///
    /// The offset need not be a multiple of the grid spacing: vertices are re-snapped to the
    /// grid after translation, and any edge that collapses in the process is dropped.
    ///
    pub fn translate(&self, dx: f64, dy: f64) -> Polygon {
        let gridsize    = self.gridsize;
        let moved_point = |point: &GridPoint| {
            let (x, y) = point.unsnap(gridsize);
            GridPoint::snap(x + dx, y + dy, gridsize)
        };

        let edges = self.edges.iter()
            .map(|edge| GridEdge::new(moved_point(&edge.from), moved_point(&edge.to)))
            .filter(|edge| !edge.is_zero_length())
            .collect::<Vec<_>>();

        Polygon::from_edges(gridsize, edges)
    }

    ///
    /// Decomposes this polygon into path commands, one `Move` and a closing run of `Line`s per
    /// contour
    ///
    /// The commands are deterministic: each contour starts at its lexicographically smallest
    /// vertex pair and contours are listed in that same order, so equal polygons always
    /// decompose identically. Feeding the commands back into a `Canvas` with the same grid
    /// spacing reproduces the polygon.
    ///
    pub fn decompose(&self) -> Vec<PathOp> {
        let resolved;
        let source = if self.resolved {
            self
        } else {
            resolved = self.simplify().expect("Edge windings should resolve for any closed input");
            &resolved
        };

        let contours = trace_contours(&source.edges).expect("Resolved edge sets should always form closed contours");
        let mut ops  = vec![];

        for contour in contours {
            let (start_x, start_y) = contour[0].unsnap(self.gridsize);
            ops.push(PathOp::Move(start_x, start_y));

            for point in contour[1..].iter() {
                let (x, y) = point.unsnap(self.gridsize);
                ops.push(PathOp::Line(x, y));
            }

            ops.push(PathOp::Line(start_x, start_y));
        }

        ops
    }

    ///
    /// Runs the sweep pipeline over this polygon and an optional second operand
    ///
    fn combine(&self, other: Option<&Polygon>, op: BooleanOp) -> Result<Polygon, PolygonError> {
        if let Some(other) = other {
            if other.gridsize != self.gridsize {
                return Err(PolygonError::IncompatibleGrid);
            }
        }

        let segments = self.edges.iter()
            .map(|edge| SweepSegment { edge: *edge, operand: Operand::First })
            .chain(other.into_iter().flat_map(|other| {
                other.edges.iter().map(|edge| SweepSegment { edge: *edge, operand: Operand::Second })
            }));

        let merged      = subdivide(segments);
        let selected    = select_edges(&merged, op);
        let contours    = trace_contours(&selected)?;

        // Store the edges in contour order so that equal results compare equal
        let mut edges = Vec::with_capacity(selected.len());

        for contour in contours {
            for (from, to) in contour.iter().circular_tuple_windows() {
                edges.push(GridEdge::new(*from, *to));
            }
        }

        Ok(Polygon {
            gridsize:   self.gridsize,
            edges:      edges,
            resolved:   true,
        })
    }
}
