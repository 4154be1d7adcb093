use serde::{Deserialize, Serialize};

use crate::address;
use crate::geocoder::{GeocodeError, Geocoder, Placemark};
use crate::location::{Accuracy, AuthorizationScope, Coordinate, LocationFix, LocationSource};
use crate::map::{CoordinateSpan, MapRegion, MapSurface, MapType, TrailSegment};

/// Region shown before any location update arrives: Cupertino, with a marker
/// at its center.
pub const STARTUP_REGION: MapRegion = MapRegion {
    center: Coordinate {
        latitude: 37.33233141,
        longitude: -122.0312186,
    },
    span: CoordinateSpan {
        latitude_delta: 0.06,
        longitude_delta: 0.06,
    },
};

/// The four text labels on screen. Latitude/longitude use default float
/// formatting; the address lines come from `address::address_lines`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub latitude: String,
    pub longitude: String,
    pub address_line1: String,
    pub address_line2: String,
}

struct PendingGeocode {
    request_id: u64,
    coordinate: Coordinate,
}

/// Single point of coordination between location updates, map state, and the
/// display labels. The three platform boundaries are injected so the whole
/// reaction logic runs against fakes in tests.
pub struct LocationDisplayController<L, M, G> {
    location_source: L,
    map: M,
    geocoder: G,
    // append-only, in arrival order
    recorded_locations: Vec<LocationFix>,
    display: DisplayState,
    next_request_id: u64,
    // only the most recent request may complete; older ones are stale
    pending_geocode: Option<PendingGeocode>,
}

impl<L, M, G> LocationDisplayController<L, M, G>
where
    L: LocationSource,
    M: MapSurface,
    G: Geocoder,
{
    /// Requests foreground authorization, starts continuous updates at best
    /// accuracy, and shows the startup region with its marker.
    pub fn new(mut location_source: L, mut map: M, geocoder: G) -> Self {
        location_source.request_authorization(AuthorizationScope::WhenInUse);
        location_source.start_updates(Accuracy::Best);

        map.set_region(STARTUP_REGION);
        map.add_annotation(STARTUP_REGION.center);

        LocationDisplayController {
            location_source,
            map,
            geocoder,
            recorded_locations: Vec::new(),
            display: DisplayState::default(),
            next_request_id: 0,
            pending_geocode: None,
        }
    }

    /// Handles a batch of location updates from the platform. Only the first
    /// fix in the batch is used.
    pub fn on_location_update(&mut self, fixes: &[LocationFix]) {
        let fix = match fixes.first() {
            None => {
                warn!("received an empty location update batch");
                return;
            }
            Some(fix) => fix.clone(),
        };
        debug!(
            "location update ({}, {}) at {:?}",
            fix.latitude,
            fix.longitude,
            fix.time()
        );

        self.display.latitude = fix.latitude.to_string();
        self.display.longitude = fix.longitude.to_string();

        let coordinate = fix.coordinate();
        self.recorded_locations.push(fix);

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending_geocode = Some(PendingGeocode {
            request_id,
            coordinate,
        });
        self.geocoder.reverse_geocode(request_id, coordinate);
    }

    /// Handles a reverse-geocoding completion. Completions whose id does not
    /// match the latest pending request are discarded, so a slow response for
    /// an old fix can never overwrite labels written for a newer one. Failures
    /// and empty results are logged and change nothing on screen.
    pub fn on_geocode_completed(
        &mut self,
        request_id: u64,
        outcome: Result<Vec<Placemark>, GeocodeError>,
    ) {
        let coordinate = match &self.pending_geocode {
            Some(pending) if pending.request_id == request_id => pending.coordinate,
            _ => {
                debug!("discarding stale geocode completion (request {request_id})");
                return;
            }
        };
        self.pending_geocode = None;

        let placemarks = match outcome {
            Err(err) => {
                warn!("reverse geocoding failed: {err}");
                return;
            }
            Ok(placemarks) => placemarks,
        };
        let placemark = match placemarks.first() {
            None => {
                warn!(
                    "geocoder returned no placemark for ({}, {})",
                    coordinate.latitude, coordinate.longitude
                );
                return;
            }
            Some(placemark) => placemark,
        };

        let lines = address::address_lines(placemark);
        self.display.address_line1 = lines.line1;
        self.display.address_line2 = lines.line2;

        let count = self.recorded_locations.len();
        if count >= 2 {
            let newest = self.recorded_locations[count - 1].coordinate();
            let previous = self.recorded_locations[count - 2].coordinate();
            self.map.add_trail_overlay(TrailSegment::new(newest, previous));
        }

        // re-center on the new fix, keeping the current zoom span
        let span = self.map.region().span;
        self.map.set_region(MapRegion {
            center: coordinate,
            span,
        });
        self.map.move_annotation(coordinate);
    }

    /// Switches the base map per the tri-state selector. Indices other than
    /// 0/1/2 are no-ops.
    pub fn set_map_type(&mut self, index: i32) {
        if let Some(map_type) = MapType::from_repr(index) {
            self.map.set_map_type(map_type);
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn recorded_locations(&self) -> &[LocationFix] {
        &self.recorded_locations
    }

    pub fn location_source(&self) -> &L {
        &self.location_source
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }
}
