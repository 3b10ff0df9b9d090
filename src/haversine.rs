//! Haversine travel-time estimate (fallback when no routing backend is reachable).
//!
//! Uses great-circle distance and an assumed average speed.
//! Less accurate than a road network but always available, and every leg
//! is reachable.

use crate::error::MatrixError;
use crate::location::Coordinates;
use crate::matrix::{TimeMatrix, TravelTime};
use crate::traits::{DistanceMatrixProvider, TravelTimeSource};

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineMatrix {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Great-circle distance between two points in kilometers.
    fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lng = (to.lng - from.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    fn km_to_seconds(&self, km: f64) -> u32 {
        let hours = km / self.speed_kmh;
        (hours * 3600.0).round() as u32
    }
}

impl TravelTimeSource for HaversineMatrix {
    fn travel_time(&self, from: Coordinates, to: Coordinates) -> Result<TravelTime, MatrixError> {
        Ok(TravelTime::Seconds(self.km_to_seconds(Self::haversine_km(from, to))))
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Coordinates]) -> Result<TimeMatrix, MatrixError> {
        let rows = locations
            .iter()
            .map(|from| {
                locations
                    .iter()
                    .map(|to| self.travel_time(*from, *to))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        TimeMatrix::new(rows)
    }
}
