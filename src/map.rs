use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, FromRepr};

use crate::location::Coordinate;

/// Zoom level expressed as the visible extent in degrees, per axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// The displayed map region: a center coordinate plus a zoom span.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: Coordinate,
    pub span: CoordinateSpan,
}

/// Base map rendering mode. Discriminants match the segmented-control indices
/// of the selector on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, FromRepr, Serialize, Deserialize)]
#[repr(i32)]
pub enum MapType {
    Standard = 0,
    Satellite = 1,
    Hybrid = 2,
}

/// Stroke style for a trail overlay line.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrailStyle {
    pub rgba: (u8, u8, u8, u8),
    pub width: f32,
}

impl Default for TrailStyle {
    fn default() -> Self {
        // blue, 4pt
        TrailStyle {
            rgba: (0, 0, 255, 255),
            width: 4.0,
        }
    }
}

/// A two-point line overlay connecting the newest recorded coordinate to the
/// one before it, in that order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrailSegment {
    pub points: [Coordinate; 2],
    pub style: TrailStyle,
}

impl TrailSegment {
    pub fn new(newest: Coordinate, previous: Coordinate) -> Self {
        TrailSegment {
            points: [newest, previous],
            style: TrailStyle::default(),
        }
    }
}

/// The map-view boundary. Overlays accumulate; there is no removal.
pub trait MapSurface {
    fn region(&self) -> MapRegion;
    fn set_region(&mut self, region: MapRegion);
    fn add_annotation(&mut self, coordinate: Coordinate);
    fn move_annotation(&mut self, coordinate: Coordinate);
    fn add_trail_overlay(&mut self, segment: TrailSegment);
    fn set_map_type(&mut self, map_type: MapType);
}
