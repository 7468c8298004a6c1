use crate::config::{Geocoding, GeocodingGateway};
use anyhow::Result;
use brgeocode_core::{
    gateways::geocode::{GatewayError, GeoCodingGateway, GeocodeResponse},
    GeocodingClient,
};
use brgeocode_gateways::google_maps::GoogleMaps;

pub fn geocoding_client(cfg: &Geocoding) -> Result<GeocodingClient<GeoGw>> {
    let Some(gw) = &cfg.gateway else {
        log::warn!("No geocoding gateway was configured");
        return Ok(GeocodingClient::new(GeoGw::new(DummyGeoGw)));
    };
    let mut client = GeocodingClient::new(GeoGw::new(google_maps_gw(gw)?));
    match gw {
        GeocodingGateway::GoogleMaps { api_key, .. } => {
            log::info!("Use Google Maps geocoding gateway");
            if let Some(key) = api_key {
                client.set_api_key(key.clone());
            } else {
                log::warn!("No Google Maps API key found");
            }
        }
    }
    Ok(client)
}

pub fn google_maps_gw(gw: &GeocodingGateway) -> Result<GoogleMaps> {
    let GeocodingGateway::GoogleMaps {
        api_url,
        request_timeout,
        connect_timeout,
        ..
    } = gw;
    Ok(GoogleMaps::new(
        api_url.clone(),
        *request_timeout,
        *connect_timeout,
    )?)
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn forward(&self, _address: &str, _api_key: &str) -> Result<GeocodeResponse, GatewayError> {
        log::debug!("Cannot resolve addresses because no geocoding gateway was configured");
        Err(GatewayError("No geocoding gateway configured".to_string()))
    }
}

pub struct GeoGw(Box<dyn GeoCodingGateway + Send + Sync + 'static>);

impl GeoGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeoGw {
    fn forward(&self, address: &str, api_key: &str) -> Result<GeocodeResponse, GatewayError> {
        self.0.forward(address, api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brgeocode_core::{entities::Address, Error};

    #[test]
    fn lookup_without_gateway() {
        let cfg = Geocoding { gateway: None };
        let mut client = geocoding_client(&cfg).unwrap();
        client.set_api_key("secret");
        let addr = Address {
            city: Some("Bauru".into()),
            ..Default::default()
        };
        let err = client.find_location(&addr).unwrap_err();
        assert!(matches!(err, Error::RequestFailed(_)));
    }

    #[test]
    fn lookup_without_api_key() {
        let cfg = Geocoding {
            gateway: Some(GeocodingGateway::GoogleMaps {
                api_url: "http://localhost:1/geocode/json".parse().unwrap(),
                api_key: None,
                request_timeout: std::time::Duration::from_secs(1),
                connect_timeout: std::time::Duration::from_secs(1),
            }),
        };
        let client = geocoding_client(&cfg).unwrap();
        let addr = Address {
            city: Some("Bauru".into()),
            ..Default::default()
        };
        assert!(matches!(
            client.find_location(&addr),
            Err(Error::MissingApiKey)
        ));
    }
}
