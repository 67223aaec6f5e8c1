use super::grid_edge::*;
use super::subdivide::*;

///
/// The boolean predicates that decide which regions of the plane are filled
///
/// Each predicate is evaluated with the nonzero winding rule on the per-operand winding
/// numbers: a point is inside an operand when its winding number for that operand is nonzero.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub (crate) enum BooleanOp {
    /// Filled where either operand is filled
    Union,

    /// Filled where both operands are filled
    Intersect,

    /// Filled where the first operand is filled and the second is not
    Subtract,
}

impl BooleanOp {
    #[inline]
    fn is_filled(&self, wind_a: i32, wind_b: i32) -> bool {
        match self {
            BooleanOp::Union        => wind_a != 0 || wind_b != 0,
            BooleanOp::Intersect    => wind_a != 0 && wind_b != 0,
            BooleanOp::Subtract     => wind_a != 0 && wind_b == 0,
        }
    }
}

///
/// Picks the edges of the subdivision that form the boundary of the requested combination
///
/// An edge is part of the boundary when the predicate changes value from one of its sides to
/// the other. Kept edges are returned oriented so that the filled region always lies on the
/// same side of the direction of travel: to the right of a descending edge, above a rightwards
/// horizontal one. Reconstructed outer boundaries and holes therefore wind in opposite
/// directions, and the clockwise (y-down) shoelace sum of the result is the filled area.
///
pub (crate) fn select_edges(merged: &[MergedEdge], op: BooleanOp) -> Vec<GridEdge> {
    let mut selected = vec![];

    for (idx, edge) in merged.iter().enumerate() {
        // Winding numbers of the regions on either side of this edge
        let (near, far) = if edge.is_horizontal() {
            let above = winding_above(merged, idx);
            let below = (above.0 - edge.wind_a, above.1 - edge.wind_b);

            (above, below)
        } else {
            let left  = winding_left(merged, idx);
            let right = (left.0 + edge.wind_a, left.1 + edge.wind_b);

            (left, right)
        };

        let near_filled = op.is_filled(near.0, near.1);
        let far_filled  = op.is_filled(far.0, far.1);

        if near_filled == far_filled {
            // Both sides agree, so this edge is interior (or exterior) rather than boundary
            continue;
        }

        let forward = GridEdge::new(edge.from, edge.to);

        if edge.is_horizontal() {
            // Rightwards keeps the filled region above
            selected.push(if near_filled { forward } else { forward.reversed() });
        } else {
            // Descending keeps the filled region to the right
            selected.push(if far_filled { forward } else { forward.reversed() });
        }
    }

    selected
}

///
/// Winding numbers of the region immediately to the left of a non-horizontal edge
///
/// The probe line is the horizontal at half a lattice step below the edge's upper endpoint:
/// it cannot pass through any lattice point, and because the subdivision is planar no other
/// edge crosses it at the same x position as this edge, so every comparison is strict. The
/// winding numbers are the summed contributions of the edges crossing the probe line to the
/// left, exactly as a ray cast from infinity.
///
fn winding_left(merged: &[MergedEdge], idx: usize) -> (i32, i32) {
    let edge    = &merged[idx];
    let probe_y = edge.from.y;

    // x position on the probe line as an exact fraction (numerator, positive denominator)
    let x_at_probe = |e: &MergedEdge| -> (i128, i128) {
        let dx      = (e.to.x - e.from.x) as i128;
        let dy      = (e.to.y - e.from.y) as i128;
        let numer   = 2 * (e.from.x as i128) * dy + dx * (2 * ((probe_y - e.from.y) as i128) + 1);

        (numer, 2 * dy)
    };

    let (edge_numer, edge_denom) = x_at_probe(edge);

    let mut wind_a = 0;
    let mut wind_b = 0;

    for (other_idx, other) in merged.iter().enumerate() {
        if other_idx == idx {
            continue;
        }

        // Horizontal edges never span the probe line, and neither do edges above or below it
        if other.from.y > probe_y || other.to.y <= probe_y {
            continue;
        }

        let (other_numer, other_denom) = x_at_probe(other);

        if other_numer * edge_denom < edge_numer * other_denom {
            wind_a += other.wind_a;
            wind_b += other.wind_b;
        } else {
            debug_assert!(other_numer * edge_denom != edge_numer * other_denom, "Edge crosses the interior of another edge: {:?} and {:?}", edge, other);
        }
    }

    (wind_a, wind_b)
}

///
/// Winding numbers of the region immediately above a horizontal edge
///
/// The probe line is the vertical at half a lattice step right of the edge's left endpoint.
/// Crossing an edge while moving downwards changes the winding count by its contribution,
/// with the sign depending on which way the edge runs past the probe line.
///
fn winding_above(merged: &[MergedEdge], idx: usize) -> (i32, i32) {
    let edge    = &merged[idx];
    let probe_x = edge.from.x;
    let edge_y  = edge.from.y as i128;

    let mut wind_a = 0;
    let mut wind_b = 0;

    for (other_idx, other) in merged.iter().enumerate() {
        if other_idx == idx {
            continue;
        }

        let (left, right) = if other.from.x <= other.to.x { (other.from, other.to) } else { (other.to, other.from) };

        // Vertical edges never span the probe line
        if left.x > probe_x || right.x <= probe_x {
            continue;
        }

        // y position where the other edge crosses the probe line, as a fraction over 2*dx
        let dx      = (right.x - left.x) as i128;
        let dy      = (right.y - left.y) as i128;
        let numer   = 2 * (left.y as i128) * dx + dy * (2 * ((probe_x - left.x) as i128) + 1);

        if numer < 2 * edge_y * dx {
            // The crossing is above this edge. Moving down across an edge that runs
            // rightwards in scan order decreases the count; leftwards increases it
            let sign = if other.to.x < other.from.x { 1 } else { -1 };

            wind_a += sign * other.wind_a;
            wind_b += sign * other.wind_b;
        } else {
            debug_assert!(numer != 2 * edge_y * dx, "Edge crosses the interior of another edge: {:?} and {:?}", edge, other);
        }
    }

    (wind_a, wind_b)
}
