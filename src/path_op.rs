///
/// Path commands that describe the contours of a polygon
///
/// `decompose()` produces a list of these: each contour becomes a `Move` to its starting vertex
/// followed by a `Line` for every edge, the last of which returns to the starting vertex.
/// Coordinates are in real (unsnapped) units.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum PathOp {
    /// Begins a new contour at a point
    Move(f64, f64),

    /// Continues the current contour with a straight line to a point
    Line(f64, f64),
}
