//! Core library for the Pinpoint map point manager.
//!
//! Users keep named maps and place, rename, and delete geographic points on
//! them, by picking a coordinate or by searching an address. Maps and points
//! live behind a remote HTTP API; this crate holds the point-interaction
//! controller that reconciles user gestures with that remote list.
//!
//! # Architecture
//!
//! - [`store::PointStore`]: remote-synchronized point list, reloaded
//!   wholesale after every mutation
//! - [`session::EditSession`]: the single add/edit modal as a state machine
//! - [`viewport::ViewportController`]: map center/zoom and the search marker
//! - [`geocode::GeocodeClient`]: address search
//! - [`coordinator::InteractionCoordinator`]: wires gestures to the above
//! - [`maps::MapDirectory`]: map list management
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pinpoint_core::{coordinator::Decision, models::Coordinate, PinpointBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pinpoint = PinpointBuilder::new()
//!     .with_api_url(Some("http://localhost:5000/api".to_string()))
//!     .build()?;
//!
//! let coordinator = pinpoint.coordinator(1);
//! coordinator.load().await?;
//!
//! // Search an address and keep it as a point
//! coordinator.search("Copacabana").await?;
//! coordinator.add_search_result_as_point()?;
//! coordinator.commit().await?;
//!
//! // Deleting everything asks first
//! if let Some(request) = coordinator.request_delete_all() {
//!     println!("{}", request.prompt());
//!     coordinator.resolve(request, Decision::Declined).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod busy;
pub mod client;
pub mod config;
pub mod coordinator;
pub mod display;
pub mod error;
pub mod geocode;
pub mod maps;
pub mod models;
pub mod params;
pub mod remote;
pub mod session;
pub mod store;
pub mod viewport;

// Re-export commonly used types
pub use client::{Pinpoint, PinpointBuilder};
pub use config::ClientConfig;
pub use coordinator::{
    CommitOutcome, ConfirmationRequest, Decision, DeletionOutcome, InteractionCoordinator,
    PendingDeletion, ViewSnapshot,
};
pub use error::{PinpointError, Result};
pub use geocode::{GeocodeClient, Geocoder};
pub use maps::MapDirectory;
pub use models::{Coordinate, DraftPoint, MapId, MapRecord, Point, PointId, SearchResult};
pub use remote::{HttpApi, MapApi, PointApi};
pub use session::{EditSession, SessionState};
pub use store::PointStore;
pub use viewport::{Viewport, ViewportController};
