use whereami_core::controller::LocationDisplayController;
use whereami_core::geocoder::{Geocoder, Placemark};
use whereami_core::location::{
    Accuracy, AuthorizationScope, Coordinate, LocationFix, LocationSource,
};
use whereami_core::map::{MapRegion, MapSurface, MapType, TrailSegment};

#[derive(Default)]
pub struct FakeLocationSource {
    pub authorization_requests: Vec<AuthorizationScope>,
    pub update_requests: Vec<Accuracy>,
}

impl LocationSource for FakeLocationSource {
    fn request_authorization(&mut self, scope: AuthorizationScope) {
        self.authorization_requests.push(scope);
    }

    fn start_updates(&mut self, accuracy: Accuracy) {
        self.update_requests.push(accuracy);
    }
}

#[derive(Default)]
pub struct FakeMap {
    pub regions: Vec<MapRegion>,
    pub annotations: Vec<Coordinate>,
    pub annotation_moves: Vec<Coordinate>,
    pub overlays: Vec<TrailSegment>,
    pub map_types: Vec<MapType>,
}

impl MapSurface for FakeMap {
    fn region(&self) -> MapRegion {
        *self.regions.last().expect("no region was ever set")
    }

    fn set_region(&mut self, region: MapRegion) {
        self.regions.push(region);
    }

    fn add_annotation(&mut self, coordinate: Coordinate) {
        self.annotations.push(coordinate);
    }

    fn move_annotation(&mut self, coordinate: Coordinate) {
        self.annotation_moves.push(coordinate);
    }

    fn add_trail_overlay(&mut self, segment: TrailSegment) {
        self.overlays.push(segment);
    }

    fn set_map_type(&mut self, map_type: MapType) {
        self.map_types.push(map_type);
    }
}

#[derive(Default)]
pub struct FakeGeocoder {
    pub requests: Vec<(u64, Coordinate)>,
}

impl Geocoder for FakeGeocoder {
    fn reverse_geocode(&mut self, request_id: u64, coordinate: Coordinate) {
        self.requests.push((request_id, coordinate));
    }
}

pub type TestController = LocationDisplayController<FakeLocationSource, FakeMap, FakeGeocoder>;

pub fn new_controller() -> TestController {
    LocationDisplayController::new(
        FakeLocationSource::default(),
        FakeMap::default(),
        FakeGeocoder::default(),
    )
}

pub fn fix(latitude: f64, longitude: f64) -> LocationFix {
    LocationFix {
        latitude,
        longitude,
        timestamp_ms: None,
        accuracy: None,
        altitude: None,
        speed: None,
    }
}

pub fn cupertino_placemark() -> Placemark {
    Placemark {
        street_number: Some("1".to_string()),
        street_name: Some("Infinite Loop".to_string()),
        city: Some("Cupertino".to_string()),
        state: Some("CA".to_string()),
        postal_code: Some("95014".to_string()),
    }
}

/// Id of the most recent reverse-geocode request issued by the controller.
pub fn last_request_id(controller: &TestController) -> u64 {
    controller
        .geocoder()
        .requests
        .last()
        .expect("no geocode request was issued")
        .0
}
