use crate::{config::Config, gateways};
use anyhow::{anyhow, Result};
use brgeocode_core::{entities::Address, query::address_to_forward_query_string};
use brgeocode_gateways::google_maps::GoogleMaps;
use clap::{Args, Parser, Subcommand};
use std::{path::PathBuf, process};
use url::Url;

const MASKED_API_KEY: &str = "XXX";

#[derive(Debug, Parser)]
#[command(version, about = "Resolve Brazilian postal addresses into coordinates")]
struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Google Maps API key (overrides the configuration)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve the coordinates of an address
    Lookup(AddressArgs),
    /// Print the request URL for an address without sending it
    Query(AddressArgs),
}

#[derive(Debug, Args)]
struct AddressArgs {
    /// Street name (logradouro)
    #[arg(long)]
    street: Option<String>,
    /// House number (numero), S/N if there is none
    #[arg(long)]
    number: Option<String>,
    /// Neighborhood (bairro)
    #[arg(long)]
    neighborhood: Option<String>,
    #[arg(long)]
    city: Option<String>,
    /// Federal unit (UF)
    #[arg(long)]
    state: Option<String>,
    /// Postal code (CEP)
    #[arg(long)]
    zip: Option<String>,
    #[arg(long)]
    country: Option<String>,
}

impl From<AddressArgs> for Address {
    fn from(from: AddressArgs) -> Self {
        let AddressArgs {
            street,
            number,
            neighborhood,
            city,
            state,
            zip,
            country,
        } = from;
        Self {
            street,
            number,
            neighborhood,
            city,
            state,
            zip,
            country,
        }
    }
}

pub fn run() -> Result<()> {
    let Cli {
        config,
        api_key,
        command,
    } = Cli::parse();
    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(api_key) = api_key {
        cfg.geocoding.set_api_key(api_key);
    }
    match command {
        Command::Lookup(addr) => {
            let client = gateways::geocoding_client(&cfg.geocoding)?;
            match client.find_location(&addr.into()) {
                Ok(location) => {
                    println!("{location}");
                }
                Err(err) => {
                    log::error!("Unable to resolve address: {err}");
                    process::exit(err.code().into());
                }
            }
        }
        Command::Query(addr) => {
            let gw = cfg
                .geocoding
                .gateway
                .as_ref()
                .ok_or_else(|| anyhow!("No geocoding gateway configured"))?;
            let gw = gateways::google_maps_gw(gw)?;
            println!("{}", masked_request_url(&gw, &addr.into()));
        }
    }
    Ok(())
}

fn masked_request_url(gw: &GoogleMaps, addr: &Address) -> Url {
    let query = address_to_forward_query_string(addr);
    gw.request_url(&query, MASKED_API_KEY)
}
