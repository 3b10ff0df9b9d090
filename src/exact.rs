//! Exhaustive search over every destination ordering.
//!
//! Work grows as (n-1)!, so callers only route small requests here.

use crate::matrix::TimeMatrix;
use crate::tour::{Solution, Tour, TourCost, tour_cost};

/// Calls `visit` with every permutation of `items`.
///
/// Order: each permutation of the tail is visited in turn, and the head is
/// inserted into every slot of it from the last slot to the first. The order
/// is fixed so that ties between equal-cost tours resolve the same way on
/// every run.
pub fn for_each_permutation(items: &[usize], visit: &mut dyn FnMut(&[usize])) {
    let Some((&first, rest)) = items.split_first() else {
        visit(&[]);
        return;
    };
    if rest.is_empty() {
        visit(&[first]);
        return;
    }

    let mut scratch = Vec::with_capacity(items.len());
    for_each_permutation(rest, &mut |perm: &[usize]| {
        for slot in (0..=perm.len()).rev() {
            scratch.clear();
            scratch.extend_from_slice(&perm[..slot]);
            scratch.push(first);
            scratch.extend_from_slice(&perm[slot..]);
            visit(scratch.as_slice());
        }
    });
}

/// Finds the minimum-cost closed tour by trying every ordering.
///
/// Returns `None` if every tour crosses an unreachable leg.
pub fn solve_exact(matrix: &TimeMatrix) -> Option<Solution> {
    if matrix.has_isolated_node() {
        return None;
    }

    let destinations: Vec<usize> = (1..matrix.size()).collect();
    let mut best: Option<Solution> = None;
    let mut path = Vec::with_capacity(matrix.size() + 1);

    for_each_permutation(&destinations, &mut |perm: &[usize]| {
        path.clear();
        path.push(0);
        path.extend_from_slice(perm);
        path.push(0);

        if let TourCost::Finite(cost) = tour_cost(&path, matrix) {
            if best.as_ref().is_none_or(|b| cost < b.cost_seconds) {
                best = Some(Solution {
                    tour: Tour::closed(perm),
                    cost_seconds: cost,
                });
            }
        }
    });

    best
}
