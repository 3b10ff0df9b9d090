//! OSRM HTTP adapter for travel-time matrices.

use serde::Deserialize;
use tracing::warn;

use crate::error::MatrixError;
use crate::location::Coordinates;
use crate::matrix::TimeMatrix;
use crate::traits::DistanceMatrixProvider;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn table_url(&self, locations: &[Coordinates]) -> String {
        let coords = locations
            .iter()
            .map(|c| format!("{:.6},{:.6}", c.lng, c.lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/table/v1/{}/{}?annotations=duration",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }
}

impl DistanceMatrixProvider for OsrmClient {
    fn matrix_for(&self, locations: &[Coordinates]) -> Result<TimeMatrix, MatrixError> {
        if locations.is_empty() {
            return TimeMatrix::new(Vec::new());
        }

        let body = self
            .client
            .get(self.table_url(locations))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmTableResponse>())
            .inspect_err(|err| warn!(error = %err, "OSRM table request failed"))?;

        body.into_matrix()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmTableResponse {
    code: String,
    message: Option<String>,
    durations: Option<Vec<Vec<Option<f64>>>>,
}

impl OsrmTableResponse {
    pub(crate) fn into_matrix(self) -> Result<TimeMatrix, MatrixError> {
        if self.code != "Ok" {
            return Err(MatrixError::Rejected(self.message.unwrap_or(self.code)));
        }
        let durations = self.durations.ok_or(MatrixError::MissingDurations)?;
        TimeMatrix::from_raw(durations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::TravelTime;

    #[test]
    fn test_table_url_is_lng_lat() {
        let client = OsrmClient::new(OsrmConfig {
            base_url: "http://osrm:5000/".to_string(),
            ..OsrmConfig::default()
        })
        .unwrap();
        let url = client.table_url(&[Coordinates::new(36.1, -115.2), Coordinates::new(36.3, -115.4)]);
        assert_eq!(
            url,
            "http://osrm:5000/table/v1/car/-115.200000,36.100000;-115.400000,36.300000?annotations=duration"
        );
    }

    #[test]
    fn test_null_durations_become_unreachable() {
        let body: OsrmTableResponse = serde_json::from_str(
            r#"{"code":"Ok","durations":[[0.0,612.7],[null,0.0]]}"#,
        )
        .unwrap();
        let matrix = body.into_matrix().unwrap();
        assert_eq!(matrix.get(0, 1), TravelTime::Seconds(613));
        assert_eq!(matrix.get(1, 0), TravelTime::Unreachable);
    }

    #[test]
    fn test_error_code_is_rejected() {
        let body: OsrmTableResponse = serde_json::from_str(
            r#"{"code":"InvalidQuery","message":"Query string malformed"}"#,
        )
        .unwrap();
        let err = body.into_matrix().unwrap_err();
        assert!(matches!(err, MatrixError::Rejected(ref m) if m == "Query string malformed"));
    }

    #[test]
    fn test_missing_durations() {
        let body: OsrmTableResponse = serde_json::from_str(r#"{"code":"Ok"}"#).unwrap();
        assert!(matches!(body.into_matrix(), Err(MatrixError::MissingDurations)));
    }
}
