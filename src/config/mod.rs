use anyhow::{anyhow, Result};
use brgeocode_gateways::google_maps;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "brgeocode.toml";

const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

pub struct Config {
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_GOOGLE_MAPS_API_KEY) {
            cfg.geocoding.set_api_key(api_key);
        }
        Ok(cfg)
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

impl Geocoding {
    pub fn set_api_key(&mut self, key: String) {
        match &mut self.gateway {
            Some(GeocodingGateway::GoogleMaps { api_key, .. }) => {
                *api_key = Some(key);
            }
            None => {
                log::warn!("No geocoding gateway configured: ignore API key");
            }
        }
    }
}

#[derive(Clone)]
pub enum GeocodingGateway {
    GoogleMaps {
        api_url: Url,
        api_key: Option<String>,
        request_timeout: Duration,
        connect_timeout: Duration,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { geocoding, gateway } = from;

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let toml_name = toml::Value::try_from(&gw_name)?;
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::GoogleMaps => {
                        let raw::GoogleMaps {
                            api_url,
                            api_key,
                            request_timeout,
                            connect_timeout,
                        } = gateway.google_maps.ok_or_else(|| {
                            anyhow!("Missing {toml_name} gateway configuration")
                        })?;
                        let api_url = api_url
                            .as_deref()
                            .unwrap_or(google_maps::DEFAULT_API_URL)
                            .parse::<Url>()?;
                        GeocodingGateway::GoogleMaps {
                            api_url,
                            api_key,
                            request_timeout: request_timeout
                                .unwrap_or(google_maps::DEFAULT_REQUEST_TIMEOUT),
                            connect_timeout: connect_timeout
                                .unwrap_or(google_maps::DEFAULT_CONNECT_TIMEOUT),
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        Ok(Self { geocoding })
    }
}
