use super::grid_edge::*;
use crate::error::*;
use crate::grid::*;

use smallvec::*;

use std::cmp::{Ordering};
use std::collections::{BTreeMap};

///
/// Walks a set of directed edges into closed contours
///
/// The edges must form balanced cycles (every vertex with as many incoming as outgoing edges),
/// which is what `select_edges` produces. Each new contour starts from the lexicographically
/// smallest unvisited edge and follows the edge directions until it arrives back at its
/// starting point, so the output depends only on the edge set and not on its order. Contours
/// with fewer than 3 vertices enclose nothing and are dropped.
///
pub (crate) fn trace_contours(edges: &[GridEdge]) -> Result<Vec<Vec<GridPoint>>, PolygonError> {
    // Outgoing edges for each vertex
    let mut outgoing = BTreeMap::<GridPoint, SmallVec<[usize; 2]>>::new();

    for (idx, edge) in edges.iter().enumerate() {
        outgoing.entry(edge.from).or_insert_with(SmallVec::new).push(idx);
    }

    // Contours start from the smallest unvisited edge
    let mut start_order = (0..edges.len()).collect::<Vec<_>>();
    start_order.sort_by_key(|&idx| edges[idx]);

    let mut visited     = vec![false; edges.len()];
    let mut contours    = vec![];

    for &start in start_order.iter() {
        if visited[start] {
            continue;
        }

        let start_point = edges[start].from;
        let mut contour = vec![start_point];
        let mut current = start;

        visited[start] = true;

        loop {
            let at = edges[current].to;

            if at == start_point {
                break;
            }

            contour.push(at);

            if contour.len() > edges.len() {
                return Err(PolygonError::InconsistentWinding);
            }

            // Take the sharpest counterclockwise turn among the unvisited edges leaving this
            // vertex: contours that touch at a vertex are pinched apart into separate loops
            let incoming    = direction(&edges[current]);
            let next        = outgoing.get(&at)
                .and_then(|candidates| {
                    candidates.iter()
                        .copied()
                        .filter(|&candidate| !visited[candidate])
                        .min_by(|&a, &b| compare_turns(incoming, direction(&edges[a]), direction(&edges[b])))
                });

            match next {
                Some(next) => {
                    visited[next]   = true;
                    current         = next;
                }

                None => {
                    // Nowhere to go before the contour closed: the edge set was unbalanced
                    return Err(PolygonError::InconsistentWinding);
                }
            }
        }

        if contour.len() >= 3 {
            contours.push(contour);
        } else {
            debug_assert!(false, "Degenerate contour: {:?}", contour);
        }
    }

    Ok(contours)
}

#[inline]
fn direction(edge: &GridEdge) -> (i64, i64) {
    ((edge.to.x - edge.from.x) as i64, (edge.to.y - edge.from.y) as i64)
}

/// Ranks a turn: counterclockwise-on-screen turns first, then a U-turn, then clockwise turns,
/// then straight on
#[inline]
fn turn_class(incoming: (i64, i64), outgoing: (i64, i64)) -> u8 {
    let cross   = incoming.0 * outgoing.1 - incoming.1 * outgoing.0;
    let dot     = incoming.0 * outgoing.0 + incoming.1 * outgoing.1;

    if cross < 0 {
        0
    } else if cross == 0 && dot < 0 {
        1
    } else if cross > 0 {
        2
    } else {
        3
    }
}

///
/// Orders two candidate outgoing directions by how sharply they turn counterclockwise on
/// screen (y pointing down) from the incoming direction
///
fn compare_turns(incoming: (i64, i64), a: (i64, i64), b: (i64, i64)) -> Ordering {
    let class_a = turn_class(incoming, a);
    let class_b = turn_class(incoming, b);

    if class_a != class_b {
        return class_a.cmp(&class_b);
    }

    // Within a class, the direction reached first when rotating from the incoming direction
    let cross = a.0 * b.1 - a.1 * b.0;

    if cross < 0 {
        Ordering::Less
    } else if cross > 0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
