//! In-memory mirror of one map's points.
//!
//! The store never patches its list locally. Every successful mutation is
//! followed by a wholesale reload, so the list shown is always the remote
//! store's list after the last completed reload. A reload that lands late
//! simply overwrites whatever an earlier one wrote.

use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::{
    busy::BusyFlag,
    error::{require_name, Result},
    models::{Coordinate, MapId, Point, PointId},
    remote::PointApi,
};

#[derive(Debug, Default)]
struct ListState {
    map_id: Option<MapId>,
    points: Vec<Point>,
    load_error: Option<String>,
    loaded: bool,
}

/// Remote-synchronized point list.
pub struct PointStore<A> {
    api: A,
    state: Mutex<ListState>,
    busy: BusyFlag,
}

impl<A: PointApi> PointStore<A> {
    /// Creates an empty, not yet loaded store.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(ListState::default()),
            busy: BusyFlag::default(),
        }
    }

    /// The remote API this store talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the current list.
    pub fn points(&self) -> Vec<Point> {
        self.state.lock().points.clone()
    }

    /// Look up a point of the current list by ID.
    pub fn find(&self, point_id: PointId) -> Option<Point> {
        self.state
            .lock()
            .points
            .iter()
            .find(|point| point.id == point_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().points.is_empty()
    }

    /// Map whose points were last loaded, if any.
    pub fn current_map(&self) -> Option<MapId> {
        self.state.lock().map_id
    }

    /// Whether at least one reload has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.state.lock().loaded
    }

    /// Message of the last failed reload. Cleared by the next successful
    /// reload. An empty list with no load error is a genuinely empty map.
    pub fn load_error(&self) -> Option<String> {
        self.state.lock().load_error.clone()
    }

    /// Whether a mutation is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Replace the list with the remote store's current list for `map_id`.
    ///
    /// # Errors
    ///
    /// On failure the list is left untouched and the load error is raised.
    pub async fn reload(&self, map_id: MapId) -> Result<()> {
        match self.api.list_points(map_id).await {
            Ok(mut points) => {
                for point in &mut points {
                    point.map_id = map_id;
                }
                debug!("Reloaded {} points of map {map_id}", points.len());
                let mut state = self.state.lock();
                state.map_id = Some(map_id);
                state.points = points;
                state.load_error = None;
                state.loaded = true;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to reload points of map {map_id}: {e}");
                self.state.lock().load_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Persist a new point, then reload `map_id`.
    ///
    /// The new point is not inserted locally; it appears once the follow-up
    /// reload lands. The returned point is the remote store's response.
    ///
    /// # Errors
    ///
    /// * `PinpointError::InvalidInput` - blank name, raised before any remote call
    /// * `PinpointError::Busy` - another mutation is in flight
    /// * `PinpointError::RemoteUnavailable` - the create call failed
    pub async fn create(&self, map_id: MapId, name: &str, coordinate: Coordinate) -> Result<Point> {
        let name = require_name("name", name)?;
        let _busy = self.busy.acquire("Saving a point")?;

        let created = self.api.create_point(map_id, name, coordinate).await?;
        info!("Created point {} '{}' on map {map_id}", created.id, created.name);

        self.resync(map_id).await;
        Ok(created)
    }

    /// Change a point's name, then reload `map_id`.
    ///
    /// # Errors
    ///
    /// * `PinpointError::InvalidInput` - blank name, raised before any remote call
    /// * `PinpointError::Busy` - another mutation is in flight
    /// * `PinpointError::NotFound` / `PinpointError::RemoteUnavailable`
    pub async fn rename(&self, map_id: MapId, point_id: PointId, name: &str) -> Result<Point> {
        let name = require_name("name", name)?;
        let _busy = self.busy.acquire("Saving a point")?;

        let renamed = self.api.rename_point(point_id, name).await?;
        info!("Renamed point {point_id} to '{}'", renamed.name);

        self.resync(map_id).await;
        Ok(renamed)
    }

    /// Delete one point of `map_id`. The map is reloaded whatever the outcome,
    /// so a stale entry disappears even when the remote store no longer knows
    /// it.
    ///
    /// # Errors
    ///
    /// * `PinpointError::Busy` - another mutation is in flight
    /// * `PinpointError::NotFound` / `PinpointError::RemoteUnavailable`
    pub async fn delete(&self, map_id: MapId, point_id: PointId) -> Result<()> {
        let _busy = self.busy.acquire("Deleting")?;

        let outcome = self.api.delete_point(point_id).await;
        match &outcome {
            Ok(()) => info!("Deleted point {point_id}"),
            Err(e) => warn!("Failed to delete point {point_id}: {e}"),
        }

        self.resync(map_id).await;
        outcome
    }

    /// Delete every point of `map_id` (the map record survives), then reload.
    ///
    /// # Errors
    ///
    /// * `PinpointError::Busy` - another mutation is in flight
    /// * `PinpointError::RemoteUnavailable`
    pub async fn delete_all(&self, map_id: MapId) -> Result<()> {
        let _busy = self.busy.acquire("Deleting")?;

        let outcome = self.api.delete_all_points(map_id).await;
        match &outcome {
            Ok(()) => info!("Deleted all points of map {map_id}"),
            Err(e) => warn!("Failed to delete points of map {map_id}: {e}"),
        }

        self.resync(map_id).await;
        outcome
    }

    /// Follow-up reload after a mutation. Its failure does not undo the
    /// mutation; it is reported through the load error instead.
    async fn resync(&self, map_id: MapId) {
        // Already logged and recorded by reload()
        let _ = self.reload(map_id).await;
    }
}
