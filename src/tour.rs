//! Closed tours and their cost.

use crate::matrix::{TimeMatrix, TravelTime};

/// The start/end node of every tour.
pub const START: usize = 0;

/// Total cost of a tour in seconds.
///
/// `Finite` always orders below `Infinite`, so a tour that uses an
/// unreachable leg loses every ordinary comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TourCost {
    Finite(u64),
    Infinite,
}

impl TourCost {
    pub fn is_finite(&self) -> bool {
        matches!(self, TourCost::Finite(_))
    }

    pub fn seconds(&self) -> Option<u64> {
        match self {
            TourCost::Finite(s) => Some(*s),
            TourCost::Infinite => None,
        }
    }
}

/// Ordered node indices of a closed tour: `[0, d1, .., dk, 0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Closes a destination ordering into `[0, order.., 0]`.
    pub fn closed(order: &[usize]) -> Self {
        let mut nodes = Vec::with_capacity(order.len() + 2);
        nodes.push(START);
        nodes.extend_from_slice(order);
        nodes.push(START);
        Self { nodes }
    }

    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Destinations in visiting order, start excluded.
    pub fn destinations(&self) -> &[usize] {
        &self.nodes[1..self.nodes.len() - 1]
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [usize] {
        &mut self.nodes
    }

    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }

    /// Whether this tour visits every destination of `size` exactly once.
    pub fn is_hamiltonian(&self, size: usize) -> bool {
        if self.nodes.len() != size + 1 || self.nodes.first() != Some(&START) || self.nodes.last() != Some(&START) {
            return false;
        }
        let mut seen = vec![false; size];
        seen[START] = true;
        for &node in self.destinations() {
            if node >= size || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        seen.into_iter().all(|v| v)
    }
}

/// A tour paired with its finite cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub tour: Tour,
    pub cost_seconds: u64,
}

/// Sums consecutive leg times along `path`, returning to the start if the
/// path does not already end there.
pub fn tour_cost(path: &[usize], matrix: &TimeMatrix) -> TourCost {
    let Some(&last) = path.last() else {
        return TourCost::Finite(0);
    };

    let closing = (last != START).then_some((last, START));
    let mut total: u64 = 0;
    for (from, to) in path.windows(2).map(|w| (w[0], w[1])).chain(closing) {
        match matrix.get(from, to) {
            TravelTime::Seconds(s) => total += u64::from(s),
            TravelTime::Unreachable => return TourCost::Infinite,
        }
    }
    TourCost::Finite(total)
}
