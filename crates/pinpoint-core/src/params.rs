//! Parameter structures for pinpoint operations
//!
//! Interface-neutral request types. Front ends (the CLI today) define their
//! own argument structs with framework derives and convert into these via
//! `From`, keeping the core free of clap attributes.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Coordinator /  │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  MapDirectory   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{MapId, PointId};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMap {
    /// Display name of the map (required)
    pub name: String,
}

/// Parameters for permanently deleting a map with its points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteMap {
    /// The ID of the map to delete
    pub id: MapId,
    /// Explicit confirmation required for deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for placing a point at a known coordinate (a map click).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacePoint {
    pub map_id: MapId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Parameters for renaming a point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenamePoint {
    pub map_id: MapId,
    pub point_id: PointId,
    pub name: String,
}

/// Parameters for deleting one point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePoint {
    pub map_id: MapId,
    pub point_id: PointId,
}

/// Parameters for an address search, optionally saving the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchAddress {
    /// Free-text address
    pub query: String,
    /// Map to add the result to
    pub map_id: Option<MapId>,
    /// Name overriding the one derived from the address
    pub name: Option<String>,
}
