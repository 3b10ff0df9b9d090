//! Request-scoped memoization of pairwise travel times.
//!
//! A [`TravelTimeCache`] lives for one optimization request and is handed to
//! [`PairwiseMatrix`] explicitly. Nothing is shared between requests.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::error::MatrixError;
use crate::location::Coordinates;
use crate::matrix::{TimeMatrix, TravelTime};
use crate::traits::{DistanceMatrixProvider, TravelTimeSource};

#[derive(Debug, Default)]
pub struct TravelTimeCache {
    legs: Mutex<HashMap<(String, String), TravelTime>>,
}

impl TravelTimeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, from: Coordinates, to: Coordinates) -> Option<TravelTime> {
        self.lock().get(&(from.key(), to.key())).copied()
    }

    pub fn insert(&self, from: Coordinates, to: Coordinates, time: TravelTime) {
        self.lock().insert((from.key(), to.key()), time);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(String, String), TravelTime>> {
        // A poisoned map still holds valid entries.
        self.legs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Builds a matrix one leg at a time from a [`TravelTimeSource`].
pub struct PairwiseMatrix<'a, S> {
    source: &'a S,
    cache: &'a TravelTimeCache,
}

impl<'a, S: TravelTimeSource> PairwiseMatrix<'a, S> {
    pub fn new(source: &'a S, cache: &'a TravelTimeCache) -> Self {
        Self { source, cache }
    }

    fn leg(&self, from: Coordinates, to: Coordinates) -> Result<TravelTime, MatrixError> {
        if let Some(time) = self.cache.get(from, to) {
            return Ok(time);
        }
        let time = self.source.travel_time(from, to)?;
        self.cache.insert(from, to, time);
        Ok(time)
    }
}

impl<S: TravelTimeSource> DistanceMatrixProvider for PairwiseMatrix<'_, S> {
    fn matrix_for(&self, locations: &[Coordinates]) -> Result<TimeMatrix, MatrixError> {
        let cached_before = self.cache.len();
        let mut rows = Vec::with_capacity(locations.len());
        for (i, from) in locations.iter().enumerate() {
            let mut row = Vec::with_capacity(locations.len());
            for (j, to) in locations.iter().enumerate() {
                row.push(if i == j {
                    TravelTime::Seconds(0)
                } else {
                    self.leg(*from, *to)?
                });
            }
            rows.push(row);
        }
        debug!(
            locations = locations.len(),
            fetched = self.cache.len() - cached_before,
            "built pairwise matrix"
        );
        TimeMatrix::new(rows)
    }
}
