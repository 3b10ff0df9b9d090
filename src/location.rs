//! Locations as they flow through a single optimization request.

use serde::{Deserialize, Serialize};

/// Stable identifier for a location within one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub u64);

/// A resolved position (latitude, longitude) in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Key used to memoize legs between two positions.
    pub(crate) fn key(&self) -> String {
        format!("{:.6},{:.6}", self.lat, self.lng)
    }
}

/// An address the user entered, plus its coordinates once geocoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub label: String,
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Creates an unresolved location.
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id: LocationId(id),
            label: label.into(),
            coordinates: None,
        }
    }

    /// Creates a location that already carries coordinates.
    pub fn resolved(id: u64, label: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            coordinates: Some(Coordinates::new(lat, lng)),
            ..Self::new(id, label)
        }
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// Outcome of geocoding a batch of locations.
///
/// Both lists preserve the relative order of the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodeResult {
    pub resolved: Vec<Location>,
    pub failed: Vec<Location>,
}

impl GeocodeResult {
    /// Splits already-attempted locations by whether they carry coordinates.
    pub fn partition(locations: impl IntoIterator<Item = Location>) -> Self {
        let (resolved, failed) = locations.into_iter().partition(Location::is_resolved);
        Self { resolved, failed }
    }
}
