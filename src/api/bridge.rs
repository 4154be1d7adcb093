use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::geocoder::Geocoder;
use crate::location::{Accuracy, AuthorizationScope, Coordinate, LocationSource};
use crate::map::{MapRegion, MapSurface, MapType, TrailSegment};

/// A queue shared between a boundary implementation (producer) and the shell
/// (consumer). The shell drains it once per frame.
pub struct SharedQueue<T>(Arc<Mutex<Vec<T>>>);

impl<T> SharedQueue<T> {
    pub fn new() -> Self {
        SharedQueue(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn push(&self, value: T) {
        self.0.lock().unwrap().push(value);
    }

    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl<T> Clone for SharedQueue<T> {
    fn clone(&self) -> Self {
        SharedQueue(Arc::clone(&self.0))
    }
}

/// Commands for the platform location manager.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LocationCommand {
    RequestAuthorization(AuthorizationScope),
    StartUpdates(Accuracy),
}

/// Commands for the platform map view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MapCommand {
    SetRegion(MapRegion),
    AddAnnotation(Coordinate),
    MoveAnnotation(Coordinate),
    AddTrailOverlay(TrailSegment),
    SetMapType(MapType),
}

/// A reverse-geocoding lookup for the shell to perform. The completion must be
/// reported back with the same `request_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocodeRequest {
    pub request_id: u64,
    pub coordinate: Coordinate,
}

pub struct CommandLocationSource {
    queue: SharedQueue<LocationCommand>,
}

impl CommandLocationSource {
    pub fn new(queue: SharedQueue<LocationCommand>) -> Self {
        CommandLocationSource { queue }
    }
}

impl LocationSource for CommandLocationSource {
    fn request_authorization(&mut self, scope: AuthorizationScope) {
        self.queue.push(LocationCommand::RequestAuthorization(scope));
    }

    fn start_updates(&mut self, accuracy: Accuracy) {
        self.queue.push(LocationCommand::StartUpdates(accuracy));
    }
}

/// Map boundary that forwards every mutation to the shell as a command while
/// keeping enough state (region, map type) to answer reads locally.
pub struct CommandMap {
    queue: SharedQueue<MapCommand>,
    region: MapRegion,
    map_type: MapType,
}

impl CommandMap {
    pub fn new(queue: SharedQueue<MapCommand>, initial_region: MapRegion) -> Self {
        CommandMap {
            queue,
            region: initial_region,
            map_type: MapType::Standard,
        }
    }

    pub fn map_type(&self) -> MapType {
        self.map_type
    }
}

impl MapSurface for CommandMap {
    fn region(&self) -> MapRegion {
        self.region
    }

    fn set_region(&mut self, region: MapRegion) {
        self.region = region;
        self.queue.push(MapCommand::SetRegion(region));
    }

    fn add_annotation(&mut self, coordinate: Coordinate) {
        self.queue.push(MapCommand::AddAnnotation(coordinate));
    }

    fn move_annotation(&mut self, coordinate: Coordinate) {
        self.queue.push(MapCommand::MoveAnnotation(coordinate));
    }

    fn add_trail_overlay(&mut self, segment: TrailSegment) {
        self.queue.push(MapCommand::AddTrailOverlay(segment));
    }

    fn set_map_type(&mut self, map_type: MapType) {
        self.map_type = map_type;
        self.queue.push(MapCommand::SetMapType(map_type));
    }
}

pub struct CommandGeocoder {
    queue: SharedQueue<GeocodeRequest>,
}

impl CommandGeocoder {
    pub fn new(queue: SharedQueue<GeocodeRequest>) -> Self {
        CommandGeocoder { queue }
    }
}

impl Geocoder for CommandGeocoder {
    fn reverse_geocode(&mut self, request_id: u64, coordinate: Coordinate) {
        self.queue.push(GeocodeRequest {
            request_id,
            coordinate,
        });
    }
}
