use duration_str::deserialize_option_duration;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("brgeocode.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    GoogleMaps,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google_maps: Option<GoogleMaps>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleMaps {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub request_timeout: Option<Duration>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub connect_timeout: Option<Duration>,
}
