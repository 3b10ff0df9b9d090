//! OpenRouteService adapters: geocoding search and duration matrix.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::MatrixError;
use crate::location::{Coordinates, GeocodeResult, Location};
use crate::matrix::TimeMatrix;
use crate::traits::{DistanceMatrixProvider, Geocoder};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrsConfig {
    pub base_url: String,
    pub api_key: String,
    /// Routing profile used for the matrix, e.g. "driving-car".
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openrouteservice.org".to_string(),
            api_key: String::new(),
            profile: "driving-car".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OrsConfig {
    /// Defaults overridden by `ORS_API_KEY` and `ORS_BASE_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("ORS_API_KEY") {
            config.api_key = key;
        }
        if let Ok(url) = std::env::var("ORS_BASE_URL") {
            config.base_url = url;
        }
        config
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn search(&self, text: &str, focus: Option<Coordinates>) -> Result<Option<Coordinates>, reqwest::Error> {
        let mut query = vec![
            ("api_key", self.config.api_key.clone()),
            ("text", text.to_string()),
        ];
        if let Some(focus) = focus {
            query.push(("focus.point.lon", focus.lng.to_string()));
            query.push(("focus.point.lat", focus.lat.to_string()));
        }

        let body = self
            .client
            .get(self.url("/geocode/search"))
            .query(&query)
            .send()?
            .error_for_status()?
            .json::<GeocodeResponse>()?;

        Ok(body.first_coordinates())
    }
}

impl Geocoder for OrsClient {
    fn geocode(&self, locations: &[Location], focus: Option<Coordinates>) -> GeocodeResult {
        let attempted: Vec<Location> = locations
            .par_iter()
            .map(|location| match self.search(&location.label, focus) {
                Ok(Some(coordinates)) => location.clone().with_coordinates(coordinates),
                Ok(None) => {
                    debug!(address = %location.label, "no geocoding match");
                    Location { coordinates: None, ..location.clone() }
                }
                Err(err) => {
                    warn!(address = %location.label, error = %err, "geocoding request failed");
                    Location { coordinates: None, ..location.clone() }
                }
            })
            .collect();

        GeocodeResult::partition(attempted)
    }
}

impl DistanceMatrixProvider for OrsClient {
    fn matrix_for(&self, locations: &[Coordinates]) -> Result<TimeMatrix, MatrixError> {
        if locations.is_empty() {
            return TimeMatrix::new(Vec::new());
        }

        let request = MatrixRequest {
            locations: locations.iter().map(|c| [c.lng, c.lat]).collect(),
            metrics: vec!["duration"],
        };

        let response = self
            .client
            .post(self.url(&format!("/v2/matrix/{}", self.config.profile)))
            .header(reqwest::header::AUTHORIZATION, self.config.api_key.as_str())
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "ORS matrix request failed");
            return Err(MatrixError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<MatrixResponse>()?.into_matrix()
    }
}

#[derive(Debug, Serialize)]
struct MatrixRequest {
    locations: Vec<[f64; 2]>,
    metrics: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixResponse {
    durations: Option<Vec<Vec<Option<f64>>>>,
}

impl MatrixResponse {
    pub(crate) fn into_matrix(self) -> Result<TimeMatrix, MatrixError> {
        TimeMatrix::from_raw(self.durations.ok_or(MatrixError::MissingDurations)?)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// GeoJSON order: longitude, latitude.
    coordinates: [f64; 2],
}

impl GeocodeResponse {
    pub(crate) fn first_coordinates(&self) -> Option<Coordinates> {
        self.features
            .first()
            .map(|f| Coordinates::new(f.geometry.coordinates[1], f.geometry.coordinates[0]))
    }
}
