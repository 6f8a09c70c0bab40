//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers format collections and whole screens. Everything renders
//! as markdown so the CLI can hand it straight to its terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Points, Maps)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`view`]: Full map screen rendering from a coordinator snapshot
//!
//! ## Usage Examples
//!
//! ```rust
//! use pinpoint_core::{display::Points, models::Point};
//!
//! let points = Points(vec![Point {
//!     id: 1,
//!     name: "A".to_string(),
//!     latitude: 10.0,
//!     longitude: 20.0,
//!     map_id: 1,
//! }]);
//! let output = points.to_string();
//! assert!(output.contains("Lat: 10.0000, Lng: 20.0000"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;
pub mod view;

pub use collections::{Maps, Points};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
pub use view::MapScreen;
