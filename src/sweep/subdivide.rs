use super::grid_edge::*;
use super::intersect::*;
use crate::grid::*;

use smallvec::*;

use std::collections::{BTreeMap};

///
/// Identifies which operand of a binary operation a segment came from
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub (crate) enum Operand {
    First,
    Second,
}

///
/// A directed input segment, tagged with the operand it belongs to
///
#[derive(Clone, Copy, Debug)]
pub (crate) struct SweepSegment {
    pub edge:       GridEdge,
    pub operand:    Operand,
}

///
/// An edge of the planar subdivision produced by the sweep
///
/// Endpoints are stored in scan order (`from` scan-precedes `to`). The winding values are the
/// summed contributions of the input segments that coincide with this edge: +1 for each segment
/// traversed in scan order, -1 for each traversed against it. A merged edge therefore stands in
/// for any number of coincident input edges.
///
#[derive(Clone, Copy, Debug)]
pub (crate) struct MergedEdge {
    pub from:       GridPoint,
    pub to:         GridPoint,
    pub wind_a:     i32,
    pub wind_b:     i32,
}

impl MergedEdge {
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }
}

///
/// Subdivides a set of segments into a planar set of merged edges
///
/// In the result, no two edges meet except at shared endpoints: every crossing found by the
/// sweep is materialized as a vertex, splitting the edges that pass through it, and coincident
/// edges are merged with their winding contributions summed. The output is ordered by endpoint
/// and is independent of the input segment order.
///
pub (crate) fn subdivide(segments: impl IntoIterator<Item=SweepSegment>) -> Vec<MergedEdge> {
    let mut segments = segments.into_iter()
        .filter(|segment| !segment.edge.is_zero_length())
        .collect::<Vec<_>>();

    // Splitting at a snapped crossing can bend a segment slightly off its original line, which
    // can create crossings that did not exist before, so sweep again until no more are found
    loop {
        let splits = find_splits(&segments);

        if splits.iter().all(|split| split.is_empty()) {
            break;
        }

        segments = apply_splits(segments, splits);
    }

    merge(segments)
}

///
/// Sweeps over the segments in order of minimum x position and collects the points where each
/// segment needs to be split
///
/// Every pair of segments whose x and y extents overlap while both are active is tested: this
/// covers every pair that could intersect, so the split set does not depend on the order the
/// segments were supplied in.
///
fn find_splits(segments: &[SweepSegment]) -> Vec<SplitPoints> {
    let mut splits = vec![SplitPoints::new(); segments.len()];

    // x and y extents per segment
    let bounds = segments.iter()
        .map(|segment| {
            let GridEdge { from, to } = segment.edge;
            (from.x.min(to.x), from.x.max(to.x), from.y.min(to.y), from.y.max(to.y))
        })
        .collect::<Vec<_>>();

    // Process the segments in sweep order
    let mut order = (0..segments.len()).collect::<Vec<_>>();
    order.sort_by_key(|&idx| (bounds[idx].0, bounds[idx].2, idx));

    let mut active: SmallVec<[usize; 16]> = smallvec![];

    for &idx in order.iter() {
        let (min_x, _, min_y, max_y) = bounds[idx];

        // Segments that end before the sweep position cannot intersect anything after it
        active.retain(|&mut other| bounds[other].1 >= min_x);

        for &other in active.iter() {
            // Touching extents count as overlapping: a T-junction can sit on the boundary
            if bounds[other].2 > max_y || bounds[other].3 < min_y {
                continue;
            }

            let (here, there) = split_points(segments[idx].edge.from, segments[idx].edge.to, segments[other].edge.from, segments[other].edge.to);

            splits[idx].extend(here);
            splits[other].extend(there);
        }

        active.push(idx);
    }

    splits
}

///
/// Replaces each segment that has split points with the chain of sub-segments between them
///
/// The split points are ordered by their projection along the segment, so the chain preserves
/// the original traversal direction.
///
fn apply_splits(segments: Vec<SweepSegment>, splits: Vec<SplitPoints>) -> Vec<SweepSegment> {
    let mut result = Vec::with_capacity(segments.len() + splits.len());

    for (segment, mut points) in segments.into_iter().zip(splits) {
        if points.is_empty() {
            result.push(segment);
            continue;
        }

        let GridEdge { from, to } = segment.edge;
        let dx = (to.x - from.x) as i64;
        let dy = (to.y - from.y) as i64;

        points.sort_by_key(|point| {
            let along = dx * ((point.x - from.x) as i64) + dy * ((point.y - from.y) as i64);
            (along, point.x, point.y)
        });

        let mut last = from;
        for point in points {
            if point == last || point == to {
                continue;
            }

            result.push(SweepSegment { edge: GridEdge::new(last, point), operand: segment.operand });
            last = point;
        }

        result.push(SweepSegment { edge: GridEdge::new(last, to), operand: segment.operand });
    }

    result
}

///
/// Merges coincident segments, summing their winding contributions per operand
///
/// Segments whose contributions cancel entirely are discarded: they separate nothing from
/// nothing. The ordered map fixes the output order regardless of how the segments arrived.
///
fn merge(segments: Vec<SweepSegment>) -> Vec<MergedEdge> {
    let mut merged = BTreeMap::new();

    for segment in segments {
        let descending  = segment.edge.is_descending();
        let edge        = if descending { segment.edge } else { segment.edge.reversed() };
        let wind        = if descending { 1 } else { -1 };

        let entry: &mut (i32, i32) = merged.entry((edge.from, edge.to)).or_insert((0, 0));

        match segment.operand {
            Operand::First  => { entry.0 += wind; }
            Operand::Second => { entry.1 += wind; }
        }
    }

    merged.into_iter()
        .filter(|(_, (wind_a, wind_b))| *wind_a != 0 || *wind_b != 0)
        .map(|((from, to), (wind_a, wind_b))| MergedEdge { from, to, wind_a, wind_b })
        .collect()
}
