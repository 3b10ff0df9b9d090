//! Shared fixtures for route-optimizer tests.
//!
//! Provides:
//! - Real Las Vegas / Henderson places
//! - Hand-built travel-time matrices
//! - In-memory geocoder and matrix collaborators

#![allow(dead_code)]

pub mod las_vegas_locations;

use std::cell::Cell;
use std::collections::HashMap;

use route_optimizer::traits::{DistanceMatrixProvider, Geocoder};
use route_optimizer::{Coordinates, GeocodeResult, Location, MatrixError, TimeMatrix, TravelTime};

pub use las_vegas_locations::*;

/// The classic 4-city instance, legs given in minutes and stored in seconds.
pub fn classic_four_city() -> TimeMatrix {
    minutes(vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ])
}

pub fn minutes(rows: Vec<Vec<u32>>) -> TimeMatrix {
    TimeMatrix::from_seconds(
        rows.into_iter()
            .map(|row| row.into_iter().map(|m| m * 60).collect())
            .collect(),
    )
    .unwrap()
}

/// Points on a grid with Manhattan travel times; asymmetric by `skew`
/// seconds on every leg heading to a higher index.
pub fn grid(n: usize, skew: u32) -> TimeMatrix {
    let point = |i: usize| ((i % 4) as i64, (i / 4) as i64);
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let (a, b) = (point(i), point(j));
                    let base = ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as u32 * 60;
                    if j > i { base + skew } else { base }
                })
                .collect()
        })
        .collect();
    TimeMatrix::from_seconds(rows).unwrap()
}

/// Geocoder backed by a fixed table; unknown labels fail.
pub struct TableGeocoder {
    known: HashMap<String, Coordinates>,
    pub calls: Cell<usize>,
}

impl TableGeocoder {
    pub fn new(places: &[Place]) -> Self {
        Self {
            known: places
                .iter()
                .map(|p| (p.name.to_string(), Coordinates::new(p.lat, p.lng)))
                .collect(),
            calls: Cell::new(0),
        }
    }
}

impl Geocoder for TableGeocoder {
    fn geocode(&self, locations: &[Location], _focus: Option<Coordinates>) -> GeocodeResult {
        self.calls.set(self.calls.get() + 1);
        GeocodeResult::partition(locations.iter().map(|l| match self.known.get(&l.label) {
            Some(c) => l.clone().with_coordinates(*c),
            None => l.clone(),
        }))
    }
}

/// Matrix provider that returns a prepared matrix, checking the size.
pub struct FixedMatrix(pub TimeMatrix);

impl DistanceMatrixProvider for FixedMatrix {
    fn matrix_for(&self, locations: &[Coordinates]) -> Result<TimeMatrix, MatrixError> {
        assert_eq!(locations.len(), self.0.size(), "matrix requested for unexpected location count");
        Ok(self.0.clone())
    }
}

/// Matrix provider that always fails.
pub struct FailingMatrix;

impl DistanceMatrixProvider for FailingMatrix {
    fn matrix_for(&self, _locations: &[Coordinates]) -> Result<TimeMatrix, MatrixError> {
        Err(MatrixError::MissingDurations)
    }
}

/// Every leg of `tour` in order.
pub fn legs(tour: &[usize]) -> Vec<(usize, usize)> {
    tour.windows(2).map(|w| (w[0], w[1])).collect()
}

pub fn uses_unreachable(tour: &[usize], matrix: &TimeMatrix) -> bool {
    legs(tour)
        .into_iter()
        .any(|(a, b)| matrix.get(a, b) == TravelTime::Unreachable)
}
