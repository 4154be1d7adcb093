use std::fmt;

use serde::{Deserialize, Serialize};

use crate::location::Coordinate;

/// A geocoder's structured result for a coordinate. Every field is optional;
/// address formatting skips absent ones.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

/// Transport/service failure reported by the geocoding backend. An empty
/// placemark list is a successful response with no result, not an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocodeError(pub String);

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GeocodeError {}

/// The reverse-geocoding boundary. Fire-and-forget: the host performs the
/// lookup and delivers the completion back to the controller with the same
/// `request_id`. There is no cancellation; stale completions are discarded by
/// the controller via the id.
pub trait Geocoder {
    fn reverse_geocode(&mut self, request_id: u64, coordinate: Coordinate);
}
