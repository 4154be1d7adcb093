use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A plain geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One location update sample as delivered by the platform location service.
/// Only latitude/longitude drive the display; the rest is carried through for
/// logging and for shells that want it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp_ms: Option<i64>,
    pub accuracy: Option<f32>,
    pub altitude: Option<f32>,
    pub speed: Option<f32>,
}

impl LocationFix {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.timestamp_ms.and_then(DateTime::from_timestamp_millis)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationScope {
    WhenInUse,
    Always,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accuracy {
    Best,
    NearestTenMeters,
    HundredMeters,
    Kilometer,
    ThreeKilometers,
}

/// The location-service boundary. Commands only: updates themselves are pushed
/// into the controller by the host when the platform delivers them.
pub trait LocationSource {
    fn request_authorization(&mut self, scope: AuthorizationScope);
    fn start_updates(&mut self, accuracy: Accuracy);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_time() {
        let fix = LocationFix {
            latitude: 37.33233141,
            longitude: -122.0312186,
            timestamp_ms: Some(1697349116449),
            accuracy: Some(3.9),
            altitude: None,
            speed: None,
        };
        assert_eq!(
            fix.time().unwrap().to_rfc3339(),
            "2023-10-15T05:51:56.449+00:00"
        );

        let fix = LocationFix {
            timestamp_ms: None,
            ..fix
        };
        assert_eq!(fix.time(), None);
    }
}
