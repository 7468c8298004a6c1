use crate::gateways::geocode::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The API key is not defined")]
    MissingApiKey,
    #[error("City or state is required")]
    MissingLocation,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("The daily query limit has been reached")]
    QuotaExceeded,
    #[error("No location found")]
    NotFound,
}

impl Error {
    /// Stable numeric code for interoperability.
    pub const fn code(&self) -> u8 {
        match self {
            Self::MissingApiKey => 1,
            Self::MissingLocation => 2,
            Self::RequestFailed(_) => 3,
            Self::QuotaExceeded => 4,
            Self::NotFound => 5,
        }
    }
}

impl From<GatewayError> for Error {
    fn from(err: GatewayError) -> Self {
        Self::RequestFailed(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_error_codes() {
        assert_eq!(Error::MissingApiKey.code(), 1);
        assert_eq!(Error::MissingLocation.code(), 2);
        assert_eq!(Error::RequestFailed("timeout".into()).code(), 3);
        assert_eq!(Error::QuotaExceeded.code(), 4);
        assert_eq!(Error::NotFound.code(), 5);
    }

    #[test]
    fn keep_transport_error_text() {
        let err = Error::from(GatewayError("connection refused".into()));
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }
}
