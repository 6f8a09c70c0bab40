//! Data models for maps, points, and search results.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures apart from
//! presentation.
//!
//! Identifiers are opaque server-assigned integers. A [`Point`] only exists
//! once the remote store has accepted it; before that the same shape is held
//! as a [`DraftPoint`] by the edit session.
//!
//! # Examples
//!
//! ```rust
//! use pinpoint_core::models::{Coordinate, DraftPoint, Point};
//!
//! let point = Point {
//!     id: 1,
//!     name: "Lighthouse".to_string(),
//!     latitude: -22.97,
//!     longitude: -43.18,
//!     map_id: 3,
//! };
//! let draft = DraftPoint::from(&point);
//! assert_eq!(draft.coordinate, Coordinate::new(-22.97, -43.18));
//! ```

pub mod coordinate;
pub mod map;
pub mod point;
pub mod search;


pub use coordinate::Coordinate;
pub use map::{HealthStatus, MapRecord};
pub use point::{DraftPoint, Point};
pub use search::SearchResult;

/// Identifier of a map, assigned by the remote store.
pub type MapId = u64;

/// Identifier of a point, assigned by the remote store.
pub type PointId = u64;
