use brgeocode_entities::geo::Coordinates;
use thiserror::Error;

/// Outcome indicator reported by the geocoding provider
/// inside the response body (not the HTTP status).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    OverQueryLimit,
    ZeroResults,
    Other(String),
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "ZERO_RESULTS" => Self::ZeroResults,
            _ => Self::Other(s.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeResponse {
    pub status: Status,
    /// Location of the first result, if any.
    pub location: Option<Coordinates>,
}

/// Transport level failure, e.g. a connection error,
/// a non-successful HTTP status or an unreadable body.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct GatewayError(pub String);

pub trait GeoCodingGateway {
    /// Looks up a free-form address query.
    fn forward(&self, address: &str, api_key: &str) -> Result<GeocodeResponse, GatewayError>;
}
