use std::fmt;

/// A geographic position as reported by a geocoding provider.
///
/// Latitude and longitude are kept in the textual representation
/// of the provider and are passed through without any conversion.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub lat : String,
    pub lng : String,
}

impl Coordinates {
    pub fn new(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
