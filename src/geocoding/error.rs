use thiserror::Error;

/// Ways a single geocode call can fail.
///
/// `Clone` so one outcome can be handed to every caller waiting on the
/// same cache key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    #[error("map SDK is not loaded")]
    ServiceUnavailable,

    #[error("geocoder rejected the request (400)")]
    BadRequest,

    #[error("geocoder server error (500)")]
    ServerError,

    #[error("geocoder returned unexpected status {0}")]
    UnknownStatus(u16),

    #[error("no address matched the query")]
    NoResults,

    #[error("coordinates are not numeric: x={x}, y={y}")]
    InvalidCoordinates { x: String, y: String },

    #[error("map SDK released the callback without answering")]
    CallbackDropped,
}

impl GeocodeError {
    /// Only a missing SDK is worth asking again; it may still be loading.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GeocodeError::ServiceUnavailable)
    }

    /// Classify a non-200 status from the SDK.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => GeocodeError::BadRequest,
            500 => GeocodeError::ServerError,
            other => GeocodeError::UnknownStatus(other),
        }
    }
}

pub type GeocodeOutcome<T> = Result<T, GeocodeError>;
