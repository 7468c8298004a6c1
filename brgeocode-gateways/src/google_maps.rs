use brgeocode_core::{
    entities::Coordinates,
    gateways::geocode::{GatewayError, GeoCodingGateway, GeocodeResponse, Status},
};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::{error::Error as _, fmt::Write as _, time::Duration};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A geocoding gateway based on the Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    api_url: Url,
    client: Client,
}

impl GoogleMaps {
    pub fn new(
        api_url: Url,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(transport_error)?;
        Ok(Self { api_url, client })
    }

    pub fn request_url(&self, address: &str, api_key: &str) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", api_key);
        url
    }
}

impl GeoCodingGateway for GoogleMaps {
    fn forward(&self, address: &str, api_key: &str) -> Result<GeocodeResponse, GatewayError> {
        let url = self.request_url(address, api_key);
        let body = self
            .client
            .get(url)
            .send()
            .and_then(Response::error_for_status)
            .and_then(Response::text)
            .map_err(transport_error)?;
        decode_response(&body)
    }
}

// The request URL contains the API key.
fn transport_error(err: reqwest::Error) -> GatewayError {
    let err = err.without_url();
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        if !msg.contains(&cause_msg) {
            let _ = write!(msg, ": {cause_msg}");
        }
        source = cause.source();
    }
    GatewayError(msg)
}

#[derive(Debug, Deserialize)]
struct JsonResponse {
    status: String,
    #[serde(default)]
    results: Vec<JsonResult>,
}

#[derive(Debug, Deserialize)]
struct JsonResult {
    #[serde(default)]
    geometry: Option<JsonGeometry>,
}

#[derive(Debug, Deserialize)]
struct JsonGeometry {
    #[serde(default)]
    location: Option<JsonLocation>,
}

#[derive(Debug, Deserialize)]
struct JsonLocation {
    lat: serde_json::Value,
    lng: serde_json::Value,
}

fn decode_response(body: &str) -> Result<GeocodeResponse, GatewayError> {
    if body.trim().is_empty() {
        return Err(GatewayError("Empty response body".to_string()));
    }
    let JsonResponse { status, results } = serde_json::from_str(body)
        .map_err(|err| GatewayError(format!("Invalid response body: {err}")))?;
    let status = Status::from(status.as_str());
    let location = results
        .into_iter()
        .next()
        .and_then(|r| r.geometry)
        .and_then(|g| g.location)
        .map(|JsonLocation { lat, lng }| {
            Coordinates::new(opaque_value(lat), opaque_value(lng))
        });
    log::debug!("Geocoding response status: {status:?}");
    Ok(GeocodeResponse { status, location })
}

fn opaque_value(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        v => v.to_string(),
    }
}
