//! # brgeocode-core
//!
//! Resolves partial Brazilian postal addresses into coordinates
//! with the help of an exchangeable geocoding gateway.

pub mod client;
pub mod gateways;
pub mod query;
pub mod usecases;

pub mod entities {
    pub use brgeocode_entities::{address::*, geo::*};
}

pub use self::{client::GeocodingClient, usecases::Error};
