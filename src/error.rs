use thiserror::Error;

/// Failures while obtaining a travel-time matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("matrix service answered with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("matrix service rejected the request: {0}")]
    Rejected(String),

    #[error("matrix response contained no durations")]
    MissingDurations,

    #[error("matrix row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid travel duration {0}")]
    InvalidDuration(f64),
}

/// Fatal outcomes of a route optimization request.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("the start address could not be located")]
    UnresolvedStart,

    #[error("at least one destination with a known location is required")]
    InsufficientDestinations,

    #[error("no valid route connects all destinations")]
    NoValidRoute,

    #[error("travel-time matrix has {actual} locations, expected {expected}")]
    MatrixSizeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
