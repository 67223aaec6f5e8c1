use crate::grid::*;

use smallvec::*;

/// Points at which a segment must be split, in no particular order
pub (crate) type SplitPoints = SmallVec<[GridPoint; 2]>;

#[inline]
fn cross(ax: i64, ay: i64, bx: i64, by: i64) -> i64 {
    ax * by - ay * bx
}

///
/// Divides `numer` by `denom` (which must be positive), rounding to the nearest integer with
/// ties away from zero
///
/// This is the same rounding rule used when snapping real coordinates, so intersection points
/// land on the lattice the same way input points do.
///
#[inline]
fn div_round(numer: i128, denom: i128) -> i32 {
    debug_assert!(denom > 0);

    let result = if numer >= 0 {
        (2 * numer + denom) / (2 * denom)
    } else {
        (2 * numer - denom) / (2 * denom)
    };

    result as i32
}

///
/// Computes the points where two segments need to be split so that they no longer cross
///
/// Returns one list of split points per segment. A segment is split wherever the pair
/// intersects at a point that differs from both of its endpoints: a proper crossing is snapped
/// to the grid and (usually) splits both segments, a T-junction splits only the segment whose
/// interior is touched, and collinear overlapping segments are split at each other's interior
/// endpoints. Segments that meet only at shared endpoints produce no splits.
///
pub (crate) fn split_points(a_from: GridPoint, a_to: GridPoint, b_from: GridPoint, b_to: GridPoint) -> (SplitPoints, SplitPoints) {
    let mut splits_a = SplitPoints::new();
    let mut splits_b = SplitPoints::new();

    let d1x = (a_to.x - a_from.x) as i64;
    let d1y = (a_to.y - a_from.y) as i64;
    let d2x = (b_to.x - b_from.x) as i64;
    let d2y = (b_to.y - b_from.y) as i64;

    let offset_x = (b_from.x - a_from.x) as i64;
    let offset_y = (b_from.y - a_from.y) as i64;

    let denom = cross(d1x, d1y, d2x, d2y);

    if denom == 0 {
        // Parallel: only collinear segments can interact
        if cross(d1x, d1y, offset_x, offset_y) != 0 {
            return (splits_a, splits_b);
        }

        // Split each segment at the other's endpoints where they fall strictly inside it
        let inside = |from: GridPoint, to: GridPoint, point: GridPoint| -> bool {
            let dx          = (to.x - from.x) as i64;
            let dy          = (to.y - from.y) as i64;
            let along       = dx * ((point.x - from.x) as i64) + dy * ((point.y - from.y) as i64);
            let len_squared = dx * dx + dy * dy;

            along > 0 && along < len_squared
        };

        if inside(a_from, a_to, b_from) { splits_a.push(b_from); }
        if inside(a_from, a_to, b_to)   { splits_a.push(b_to); }
        if inside(b_from, b_to, a_from) { splits_b.push(a_from); }
        if inside(b_from, b_to, a_to)   { splits_b.push(a_to); }

        return (splits_a, splits_b);
    }

    // Parametric intersection: the lines meet at a + t*d1 = b + u*d2 with t = tn/denom, u = un/denom
    let mut tn      = cross(offset_x, offset_y, d2x, d2y);
    let mut un      = cross(offset_x, offset_y, d1x, d1y);
    let mut denom   = denom;

    if denom < 0 {
        denom   = -denom;
        tn      = -tn;
        un      = -un;
    }

    // The segments only intersect if the meeting point is within both (endpoints included, so
    // touches are found as well as crossings)
    if tn < 0 || tn > denom || un < 0 || un > denom {
        return (splits_a, splits_b);
    }

    // Snap the meeting point to the grid
    let x_numer = (a_from.x as i128) * (denom as i128) + (tn as i128) * (d1x as i128);
    let y_numer = (a_from.y as i128) * (denom as i128) + (tn as i128) * (d1y as i128);

    let point   = GridPoint {
        x: div_round(x_numer, denom as i128),
        y: div_round(y_numer, denom as i128),
    };

    if point != a_from && point != a_to { splits_a.push(point); }
    if point != b_from && point != b_to { splits_b.push(point); }

    (splits_a, splits_b)
}

#[cfg(test)]
mod test {
    use super::*;

    fn point(x: i32, y: i32) -> GridPoint {
        GridPoint { x, y }
    }

    #[test]
    fn proper_crossing_splits_both() {
        let (a, b) = split_points(point(0, 0), point(10, 10), point(0, 10), point(10, 0));

        assert!(a.as_slice() == &[point(5, 5)], "Split of first segment was {:?}", a);
        assert!(b.as_slice() == &[point(5, 5)], "Split of second segment was {:?}", b);
    }

    #[test]
    fn non_lattice_crossing_snaps() {
        // The true crossing is at (4.5, 4.5), which rounds away from zero
        let (a, b) = split_points(point(0, 0), point(9, 9), point(0, 9), point(9, 0));

        assert!(a.as_slice() == &[point(5, 5)], "Split of first segment was {:?}", a);
        assert!(b.as_slice() == &[point(5, 5)], "Split of second segment was {:?}", b);
    }

    #[test]
    fn t_junction_splits_the_stem_only() {
        let (a, b) = split_points(point(0, 0), point(10, 0), point(4, 0), point(4, -6));

        assert!(a.as_slice() == &[point(4, 0)], "Split of first segment was {:?}", a);
        assert!(b.is_empty(), "Second segment should not split, got {:?}", b);
    }

    #[test]
    fn shared_endpoint_is_not_a_split() {
        let (a, b) = split_points(point(0, 0), point(10, 0), point(10, 0), point(10, 10));

        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn collinear_overlap_splits_at_interior_endpoints() {
        let (a, b) = split_points(point(0, 0), point(10, 0), point(4, 0), point(14, 0));

        assert!(a.as_slice() == &[point(4, 0)], "Split of first segment was {:?}", a);
        assert!(b.as_slice() == &[point(10, 0)], "Split of second segment was {:?}", b);
    }

    #[test]
    fn collinear_containment_splits_twice() {
        let (a, b) = split_points(point(0, 0), point(10, 0), point(2, 0), point(7, 0));

        assert!(a.as_slice() == &[point(2, 0), point(7, 0)], "Split of first segment was {:?}", a);
        assert!(b.is_empty(), "Second segment should not split, got {:?}", b);
    }

    #[test]
    fn parallel_segments_do_not_interact() {
        let (a, b) = split_points(point(0, 0), point(10, 0), point(0, 1), point(10, 1));

        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn disjoint_segments_do_not_interact() {
        let (a, b) = split_points(point(0, 0), point(2, 2), point(10, 0), point(12, 2));

        assert!(a.is_empty() && b.is_empty());
    }
}
