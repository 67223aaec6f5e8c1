///
/// Possible errors from building or combining polygons
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PolygonError {
    /// The grid size passed to a constructor was not a finite positive number
    InvalidGridSize,

    /// A binary operation was requested between polygons with different grid sizes
    IncompatibleGrid,

    /// The builder was given a zero-length edge, or asked to close a contour with fewer
    /// than 3 distinct vertices
    DegenerateInput,

    /// An edge of the combined polygon was left with an unbalanced winding (this indicates
    /// a defect in the intersector rather than a problem with the input)
    InconsistentWinding,
}
