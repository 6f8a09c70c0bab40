//! Point and draft point model definitions.

use serde::{Deserialize, Serialize};

use super::{Coordinate, MapId, PointId};

/// A named geographic marker persisted by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// Server-assigned identifier
    pub id: PointId,

    /// Display name of the point
    pub name: String,

    /// Latitude in degrees
    #[serde(alias = "lat")]
    pub latitude: f64,

    /// Longitude in degrees
    #[serde(alias = "lon")]
    pub longitude: f64,

    /// Parent map. The list endpoint omits it; the store fills it in after
    /// every reload.
    #[serde(default)]
    pub map_id: MapId,
}

impl Point {
    /// The point's position.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A point that has not been persisted yet.
///
/// Only the name is editable; the coordinate is fixed by the gesture that
/// opened the edit session.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPoint {
    /// Name typed so far, possibly empty
    pub name: String,
    /// Position picked on the map or resolved by the geocoder
    pub coordinate: Coordinate,
}

impl DraftPoint {
    /// A draft with an empty name at the given coordinate.
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            name: String::new(),
            coordinate,
        }
    }

    /// A draft with a pre-filled name.
    pub fn named(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

impl From<&Point> for DraftPoint {
    fn from(point: &Point) -> Self {
        Self::named(point.name.clone(), point.coordinate())
    }
}
