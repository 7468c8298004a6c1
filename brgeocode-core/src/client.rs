use crate::{
    entities::{Address, Coordinates},
    gateways::geocode::GeoCodingGateway,
    usecases::{self, Error},
};

/// Geocoding client bound to a gateway and an API key.
///
/// The client keeps no per-lookup state, so a single instance
/// can be shared between threads if the gateway allows it.
#[derive(Debug, Clone)]
pub struct GeocodingClient<G> {
    gateway: G,
    api_key: Option<String>,
}

impl<G> GeocodingClient<G>
where
    G: GeoCodingGateway,
{
    pub const fn new(gateway: G) -> Self {
        Self {
            gateway,
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.set_api_key(api_key);
        self
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    pub fn find_location(&self, addr: &Address) -> Result<Coordinates, Error> {
        usecases::find_location(&self.gateway, self.api_key.as_deref(), addr)
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
