//! Map record projection.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::MapId;

/// A named collection of points as listed by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapRecord {
    /// Server-assigned identifier
    pub id: MapId,

    /// Display name of the map
    pub name: String,

    /// Timestamp when the map was created (UTC)
    pub created_at: Timestamp,

    /// Number of points currently on the map. Creation responses omit it.
    #[serde(default)]
    pub point_count: u32,
}

/// Response body of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    /// Short machine readable status, `"ok"` when healthy
    pub status: String,
    /// Human readable message
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    /// Whether the API reported itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
