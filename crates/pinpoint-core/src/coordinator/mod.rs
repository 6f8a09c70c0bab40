//! Orchestration of user gestures against the point store.
//!
//! The [`InteractionCoordinator`] receives gestures (map click, address
//! search, edit, delete, bulk delete) and drives three independently owned
//! state containers:
//!
//! ```text
//!                     ┌──────────────────────┐
//!   gestures ───────▶ │ InteractionCoordinator│
//!                     └──┬────────┬────────┬─┘
//!                        │        │        │
//!                        ▼        ▼        ▼
//!                  EditSession PointStore ViewportController
//!                                 │        ▲
//!                                 ▼        │
//!                             remote API  Geocoder
//! ```
//!
//! Each container sits behind an `Arc`, so front ends keep their own handles
//! for rendering while the coordinator mutates them.
//!
//! # Example
//!
//! ```rust,no_run
//! use pinpoint_core::{models::Coordinate, PinpointBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pinpoint = PinpointBuilder::new().build()?;
//! let coordinator = pinpoint.coordinator(1);
//! coordinator.load().await?;
//!
//! coordinator.map_clicked(Coordinate::new(5.0, 6.0));
//! coordinator.set_draft_name("Harbour")?;
//! coordinator.commit().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{debug, info};

use crate::{
    busy::BusyFlag,
    error::{require_name, PinpointError, Result},
    geocode::Geocoder,
    models::{Coordinate, DraftPoint, MapId, Point, PointId, SearchResult},
    remote::PointApi,
    session::{CommitRequest, EditSession, SessionState},
    store::PointStore,
    viewport::{Viewport, ViewportController},
};

pub mod confirmation;

pub use confirmation::{ConfirmationRequest, Decision, DeletionOutcome, PendingDeletion};

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The remote store's record of the new point
    Created(Point),
    /// The remote store's record of the renamed point
    Renamed(Point),
}

/// Everything a front end needs to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub map_id: MapId,
    pub points: Vec<Point>,
    /// Set when the last reload failed; the points are then the last good list
    pub load_error: Option<String>,
    pub session: SessionState,
    pub validation_message: Option<String>,
    pub viewport: Viewport,
    pub search_result: Option<SearchResult>,
    /// Whether a bulk delete may be offered
    pub can_delete_all: bool,
}

/// Top-level controller for one map.
pub struct InteractionCoordinator<A, G> {
    map_id: MapId,
    store: Arc<PointStore<A>>,
    session: Arc<EditSession>,
    viewport: Arc<ViewportController>,
    geocoder: G,
    searching: BusyFlag,
}

impl<A: PointApi, G: Geocoder> InteractionCoordinator<A, G> {
    /// Wire a coordinator over existing state containers.
    pub fn new(
        map_id: MapId,
        store: Arc<PointStore<A>>,
        session: Arc<EditSession>,
        viewport: Arc<ViewportController>,
        geocoder: G,
    ) -> Self {
        Self {
            map_id,
            store,
            session,
            viewport,
            geocoder,
            searching: BusyFlag::default(),
        }
    }

    /// Coordinator with fresh, empty state containers.
    pub fn with_api(map_id: MapId, api: A, geocoder: G) -> Self {
        Self::new(
            map_id,
            Arc::new(PointStore::new(api)),
            Arc::new(EditSession::new()),
            Arc::new(ViewportController::new()),
            geocoder,
        )
    }

    pub fn map_id(&self) -> MapId {
        self.map_id
    }

    pub fn store(&self) -> &Arc<PointStore<A>> {
        &self.store
    }

    pub fn session(&self) -> &Arc<EditSession> {
        &self.session
    }

    pub fn viewport(&self) -> &Arc<ViewportController> {
        &self.viewport
    }

    /// Whether a geocoding search is in flight.
    pub fn is_searching(&self) -> bool {
        self.searching.is_busy()
    }

    /// Initial load of the map's points.
    pub async fn load(&self) -> Result<()> {
        self.store.reload(self.map_id).await
    }

    /// A click on the map opens a create session at the clicked coordinate,
    /// abandoning any draft that was open.
    pub fn map_clicked(&self, coordinate: Coordinate) -> DraftPoint {
        let draft = DraftPoint::at(coordinate);
        self.session.open_for_create(draft.clone());
        draft
    }

    /// Open an edit session for a point of the current list.
    ///
    /// # Errors
    ///
    /// Returns `PinpointError::NotFound` when the point is not in the list.
    pub fn edit_point(&self, point_id: PointId) -> Result<DraftPoint> {
        let point = self.store.find(point_id).ok_or(PinpointError::NotFound {
            resource: "Point",
            id: point_id,
        })?;
        self.session.open_for_edit(&point);
        Ok(DraftPoint::from(&point))
    }

    /// Type into the open draft's name field.
    pub fn set_draft_name(&self, name: impl Into<String>) -> Result<()> {
        self.session.set_name(name)
    }

    /// Close the modal without saving.
    pub fn cancel_edit(&self) -> Option<DraftPoint> {
        self.session.cancel()
    }

    /// Save the open draft.
    ///
    /// A blank name fails with `InvalidInput` before any remote call. The
    /// store reloads after a successful create or rename; only then is the
    /// session closed. On failure the session stays open for a retry or a
    /// cancel.
    ///
    /// # Errors
    ///
    /// * `PinpointError::NoOpenSession` - nothing to save
    /// * `PinpointError::InvalidInput` - blank name
    /// * `PinpointError::Busy` - a save is already in flight
    /// * `PinpointError::NotFound` / `PinpointError::RemoteUnavailable`
    pub async fn commit(&self) -> Result<CommitOutcome> {
        let commit = self.session.prepare_commit()?;
        let _submitting = self.session.begin_submit()?;

        let outcome = match &commit.request {
            CommitRequest::Create { name, coordinate } => self
                .store
                .create(self.map_id, name, *coordinate)
                .await
                .map(CommitOutcome::Created)?,
            CommitRequest::Rename { point_id, name } => self
                .store
                .rename(self.map_id, *point_id, name)
                .await
                .map(CommitOutcome::Renamed)?,
        };

        self.session.complete(&commit);
        Ok(outcome)
    }

    /// Geocode `query` and frame the top match.
    ///
    /// On any failure the viewport, the previous search result, and the point
    /// list are left as they were.
    ///
    /// # Errors
    ///
    /// * `PinpointError::InvalidInput` - blank query
    /// * `PinpointError::Busy` - a search is already in flight
    /// * `PinpointError::NoMatch` / `PinpointError::RemoteUnavailable`
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let query = require_name("query", query)?;
        let _searching = self.searching.acquire("Searching")?;

        let result = self.geocoder.search(query).await?;
        info!(
            "Found '{}' at ({:.4}, {:.4})",
            result.label, result.coordinate.latitude, result.coordinate.longitude
        );
        self.viewport.show_search_result(result.clone());
        Ok(result)
    }

    /// Open a create session from the active search result, named after the
    /// first segment of its address.
    ///
    /// # Errors
    ///
    /// Returns `PinpointError::NoSearchResult` when no result is shown.
    pub fn add_search_result_as_point(&self) -> Result<DraftPoint> {
        let result = self
            .viewport
            .search_result()
            .ok_or(PinpointError::NoSearchResult)?;
        let draft = DraftPoint::named(result.suggested_name(), result.coordinate);
        self.session.open_for_create(draft.clone());
        Ok(draft)
    }

    /// Remove the search marker.
    pub fn clear_search(&self) -> Option<SearchResult> {
        self.viewport.clear_search()
    }

    /// Back to the default view, dropping the search marker.
    pub fn reset_viewport(&self) {
        self.viewport.reset();
    }

    /// Ask before deleting one point.
    pub fn request_delete_point(&self, point_id: PointId) -> ConfirmationRequest {
        let name = self.store.find(point_id).map(|point| point.name);
        ConfirmationRequest::new(PendingDeletion::Point { point_id, name })
    }

    /// Ask before deleting every point. `None` when the list is empty, in
    /// which case bulk delete is not offered.
    pub fn request_delete_all(&self) -> Option<ConfirmationRequest> {
        let count = self.store.len();
        (count > 0).then(|| {
            ConfirmationRequest::new(PendingDeletion::AllPoints {
                map_id: self.map_id,
                count,
            })
        })
    }

    /// Act on the user's answer. A declined request never reaches the store.
    ///
    /// # Errors
    ///
    /// Store errors of the confirmed deletion. The list is reloaded either
    /// way.
    pub async fn resolve(
        &self,
        request: ConfirmationRequest,
        decision: Decision,
    ) -> Result<DeletionOutcome> {
        if decision == Decision::Declined {
            debug!("Deletion declined: {:?}", request.action());
            return Ok(DeletionOutcome::Declined);
        }

        let outcome = match request.into_action() {
            PendingDeletion::Point { point_id, .. } => {
                self.store.delete(self.map_id, point_id).await
            }
            PendingDeletion::AllPoints { map_id, .. } => self.store.delete_all(map_id).await,
        };
        self.drop_stale_edit();
        outcome.map(|()| DeletionOutcome::Deleted)
    }

    /// Everything needed to render the current state.
    pub fn snapshot(&self) -> ViewSnapshot {
        let points = self.store.points();
        let can_delete_all = !points.is_empty();
        ViewSnapshot {
            map_id: self.map_id,
            points,
            load_error: self.store.load_error(),
            session: self.session.state(),
            validation_message: self.session.validation_message(),
            viewport: self.viewport.current(),
            search_result: self.viewport.search_result(),
            can_delete_all,
        }
    }

    /// An edit session must not outlive the point it edits.
    fn drop_stale_edit(&self) {
        if let Some(point_id) = self.session.state().editing() {
            if self.store.find(point_id).is_none() {
                debug!("Closing edit session of deleted point {point_id}");
                self.session.cancel();
            }
        }
    }
}
