//! Collaborator interfaces around the route solver.
//!
//! The solver itself only sees a [`TimeMatrix`]; these traits describe where
//! coordinates and travel times come from.

use crate::error::MatrixError;
use crate::location::{Coordinates, GeocodeResult, Location};
use crate::matrix::{TimeMatrix, TravelTime};

/// Resolves address text to coordinates.
pub trait Geocoder {
    /// Geocodes `locations`, biasing results toward `focus` when given.
    ///
    /// Lookups that fail for any reason land in `failed`; they never abort
    /// the batch.
    fn geocode(&self, locations: &[Location], focus: Option<Coordinates>) -> GeocodeResult;
}

/// Provides a travel-time matrix for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinates]) -> Result<TimeMatrix, MatrixError>;
}

/// Provides the travel time of a single directed leg.
pub trait TravelTimeSource {
    fn travel_time(&self, from: Coordinates, to: Coordinates) -> Result<TravelTime, MatrixError>;
}
