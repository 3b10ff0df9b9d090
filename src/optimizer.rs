//! Route optimization: pick a solver, run it, and turn the tour into a route.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SolveOptions;
use crate::error::OptimizeError;
use crate::exact::solve_exact;
use crate::heuristic::solve_heuristic;
use crate::location::{Coordinates, Location};
use crate::matrix::TimeMatrix;
use crate::tour::Solution;
use crate::traits::{DistanceMatrixProvider, Geocoder};

/// An optimized round trip, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Address labels in visiting order, starting and ending at the start address.
    pub ordered_addresses: Vec<String>,
    /// Total travel time in whole minutes, rounded half up.
    pub total_minutes: u64,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Exact,
    Heuristic,
}

/// Conditions that leave a route usable but less than ideal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteWarning {
    /// The destination count exceeded the exact-search threshold.
    Approximate { threshold: usize },
    /// Destinations that could not be geocoded and were left out.
    Dropped(Vec<String>),
}

impl fmt::Display for RouteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteWarning::Approximate { threshold } => write!(
                f,
                "With more than {} destinations an approximate route was computed; it may not be the shortest.",
                threshold
            ),
            RouteWarning::Dropped(labels) => write!(
                f,
                "{} address(es) could not be located and were left out: {}.",
                labels.len(),
                labels.join("; ")
            ),
        }
    }
}

/// Chooses exhaustive search for small requests and the heuristic otherwise.
pub fn select_solver(destination_count: usize, options: &SolveOptions) -> SolverKind {
    if destination_count <= options.exact_threshold {
        SolverKind::Exact
    } else {
        SolverKind::Heuristic
    }
}

/// Converts seconds to whole minutes, rounding half up.
pub fn seconds_to_minutes(seconds: u64) -> u64 {
    (seconds + 30) / 60
}

/// Optimizes a round trip over already geocoded locations.
///
/// `matrix` must cover `[start, destinations..]` in that order. `dropped`
/// lists destinations that failed geocoding earlier; they only feed the
/// warning.
pub fn optimize(
    start: &Location,
    destinations: &[Location],
    dropped: &[Location],
    matrix: &TimeMatrix,
    options: &SolveOptions,
) -> Result<Route, OptimizeError> {
    if !start.is_resolved() {
        return Err(OptimizeError::UnresolvedStart);
    }
    if destinations.is_empty() {
        return Err(OptimizeError::InsufficientDestinations);
    }
    let expected = destinations.len() + 1;
    if matrix.size() != expected {
        return Err(OptimizeError::MatrixSizeMismatch {
            expected,
            actual: matrix.size(),
        });
    }

    let kind = select_solver(destinations.len(), options);
    debug!(destinations = destinations.len(), solver = ?kind, "solver selected");

    let started = Instant::now();
    let solution = match kind {
        SolverKind::Exact => solve_exact(matrix),
        SolverKind::Heuristic => solve_heuristic(matrix, options.parallel_seeds),
    };
    let Some(Solution { tour, cost_seconds }) = solution else {
        warn!(solver = ?kind, "no tour avoids unreachable legs");
        return Err(OptimizeError::NoValidRoute);
    };
    info!(
        solver = ?kind,
        cost_seconds,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "route optimized"
    );

    let ordered_addresses = tour
        .nodes()
        .iter()
        .map(|&node| match node {
            0 => start.label.clone(),
            n => destinations[n - 1].label.clone(),
        })
        .collect();

    let mut warnings = Vec::new();
    if kind == SolverKind::Heuristic {
        warnings.push(RouteWarning::Approximate {
            threshold: options.exact_threshold,
        });
    }
    if !dropped.is_empty() {
        warnings.push(RouteWarning::Dropped(
            dropped.iter().map(|l| l.label.clone()).collect(),
        ));
    }

    Ok(Route {
        ordered_addresses,
        total_minutes: seconds_to_minutes(cost_seconds),
        warning: join_warnings(&warnings),
    })
}

fn join_warnings(warnings: &[RouteWarning]) -> Option<String> {
    if warnings.is_empty() {
        return None;
    }
    Some(
        warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Geocodes the addresses, fetches travel times, and optimizes the route.
///
/// The start is geocoded first and then used as the focus point for the
/// destinations.
pub fn plan<G, M>(
    geocoder: &G,
    matrix_provider: &M,
    start: &Location,
    destinations: &[Location],
    options: &SolveOptions,
) -> Result<Route, OptimizeError>
where
    G: Geocoder,
    M: DistanceMatrixProvider,
{
    let start = match start.coordinates {
        Some(_) => start.clone(),
        None => geocoder
            .geocode(std::slice::from_ref(start), None)
            .resolved
            .into_iter()
            .next()
            .ok_or(OptimizeError::UnresolvedStart)?,
    };
    let focus = start.coordinates;

    let geocoded = geocoder.geocode(destinations, focus);
    if !geocoded.failed.is_empty() {
        warn!(failed = geocoded.failed.len(), "dropping destinations that could not be geocoded");
    }
    if geocoded.resolved.is_empty() {
        return Err(OptimizeError::InsufficientDestinations);
    }

    let points: Vec<Coordinates> = std::iter::once(&start)
        .chain(&geocoded.resolved)
        .filter_map(|l| l.coordinates)
        .collect();
    let matrix = matrix_provider.matrix_for(&points)?;

    optimize(&start, &geocoded.resolved, &geocoded.failed, &matrix, options)
}
