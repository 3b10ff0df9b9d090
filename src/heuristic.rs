//! Multi-seed nearest-neighbor construction refined by 2-opt.
//!
//! Every destination is tried as the first stop. Each seed grows greedily,
//! then 2-opt reverses segments until no reversal lowers the closed-tour
//! cost. The cheapest surviving tour wins.
//!
//! Reversals are scored by re-evaluating the whole tour rather than by an
//! edge delta, because the matrix may be asymmetric and reversing a segment
//! flips the direction of every leg inside it.

use rayon::prelude::*;
use tracing::debug;

use crate::matrix::TimeMatrix;
use crate::tour::{Solution, Tour, TourCost, tour_cost};

/// Builds a tour starting at `seed` by always stepping to the nearest
/// reachable unvisited destination. Ties go to the lowest index.
///
/// Returns `None` when the walk gets stuck with destinations left over.
pub fn nearest_neighbor_tour(matrix: &TimeMatrix, seed: usize) -> Option<Tour> {
    let n = matrix.size();
    let mut visited = vec![false; n];
    visited[0] = true;
    visited[seed] = true;

    let mut order = Vec::with_capacity(n.saturating_sub(1));
    order.push(seed);
    let mut current = seed;

    while order.len() < n - 1 {
        let mut nearest: Option<(usize, u32)> = None;
        for candidate in 1..n {
            if visited[candidate] {
                continue;
            }
            let Some(time) = matrix.get(current, candidate).seconds() else {
                continue;
            };
            if nearest.is_none_or(|(_, best)| time < best) {
                nearest = Some((candidate, time));
            }
        }

        let (next, _) = nearest?;
        visited[next] = true;
        order.push(next);
        current = next;
    }

    Some(Tour::closed(&order))
}

/// Applies first-improvement 2-opt until a full scan finds nothing better.
///
/// Returns the refined tour and its cost. The cost never exceeds the cost
/// of the input tour.
pub fn two_opt(mut tour: Tour, matrix: &TimeMatrix) -> (Tour, TourCost) {
    let mut cost = tour_cost(tour.nodes(), matrix);
    let last = tour.nodes().len().saturating_sub(2);

    'scan: loop {
        for i in 1..last {
            for j in i + 1..=last {
                tour.nodes_mut()[i..=j].reverse();
                let candidate = tour_cost(tour.nodes(), matrix);
                if candidate < cost {
                    cost = candidate;
                    continue 'scan;
                }
                tour.nodes_mut()[i..=j].reverse();
            }
        }
        break;
    }

    (tour, cost)
}

/// Best-effort tour for requests too large for exhaustive search.
///
/// Returns `None` if no seed produces a tour with a finite cost.
pub fn solve_heuristic(matrix: &TimeMatrix, parallel: bool) -> Option<Solution> {
    if matrix.has_isolated_node() {
        debug!("a location has no reachable legs, skipping search");
        return None;
    }
    let seeds: Vec<usize> = (1..matrix.size()).collect();

    let refine = |&seed: &usize| -> Option<Solution> {
        let Some(tour) = nearest_neighbor_tour(matrix, seed) else {
            debug!(seed, "seed discarded, no reachable destination left");
            return None;
        };
        match two_opt(tour, matrix) {
            (tour, TourCost::Finite(cost_seconds)) => Some(Solution { tour, cost_seconds }),
            (_, TourCost::Infinite) => {
                debug!(seed, "seed discarded, tour crosses an unreachable leg");
                None
            }
        }
    };

    let candidates: Vec<Option<Solution>> = if parallel {
        seeds.par_iter().map(refine).collect()
    } else {
        seeds.iter().map(refine).collect()
    };

    // Reduced in seed order so parallel and sequential runs agree.
    candidates.into_iter().flatten().fold(None, |best: Option<Solution>, candidate| match best {
        Some(b) if b.cost_seconds <= candidate.cost_seconds => Some(b),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::TravelTime;

    /// Points on a line at 0, 1, 2, ... with travel time equal to distance.
    fn line(n: usize) -> TimeMatrix {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| (i as i64 - j as i64).unsigned_abs() as u32).collect())
            .collect();
        TimeMatrix::from_seconds(rows).unwrap()
    }

    #[test]
    fn test_nearest_neighbor_walks_line() {
        let tour = nearest_neighbor_tour(&line(5), 1).unwrap();
        assert_eq!(tour.nodes(), &[0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_nearest_neighbor_ties_lowest_index() {
        let matrix = TimeMatrix::from_seconds(vec![vec![1; 4]; 4]).unwrap();
        let tour = nearest_neighbor_tour(&matrix, 2).unwrap();
        assert_eq!(tour.nodes(), &[0, 2, 1, 3, 0]);
    }

    #[test]
    fn test_nearest_neighbor_stuck_seed() {
        let mut matrix = line(4);
        matrix.set(3, 1, TravelTime::Unreachable);
        matrix.set(3, 2, TravelTime::Unreachable);
        assert!(nearest_neighbor_tour(&matrix, 3).is_none());
        assert!(nearest_neighbor_tour(&matrix, 1).is_some());
    }

    #[test]
    fn test_two_opt_untangles_crossing() {
        let matrix = line(5);
        let (tour, cost) = two_opt(Tour::closed(&[1, 3, 2, 4]), &matrix);
        assert_eq!(cost, TourCost::Finite(8));
        assert!(tour.is_hamiltonian(5));
    }

    #[test]
    fn test_two_opt_never_worse() {
        let matrix = line(6);
        let start = Tour::closed(&[5, 1, 4, 2, 3]);
        let before = tour_cost(start.nodes(), &matrix);
        let (_, after) = two_opt(start, &matrix);
        assert!(after <= before);
    }

    #[test]
    fn test_two_opt_rejects_unreachable_reversal() {
        let mut matrix = line(5);
        // Block the leg the optimal reversal would need.
        matrix.set(1, 2, TravelTime::Unreachable);
        let (tour, cost) = two_opt(Tour::closed(&[1, 3, 2, 4]), &matrix);
        assert!(cost.is_finite());
        assert!(tour.nodes().windows(2).all(|w| w != [1, 2]));
    }

    #[test]
    fn test_two_opt_short_tours() {
        let matrix = line(2);
        let (tour, cost) = two_opt(Tour::closed(&[1]), &matrix);
        assert_eq!(tour.nodes(), &[0, 1, 0]);
        assert_eq!(cost, TourCost::Finite(2));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut matrix = line(14);
        matrix.set(0, 13, TravelTime::Seconds(1));
        let sequential = solve_heuristic(&matrix, false).unwrap();
        let parallel = solve_heuristic(&matrix, true).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_isolated_node_fails() {
        let matrix = line(13).isolate(5);
        assert!(solve_heuristic(&matrix, true).is_none());
    }
}
