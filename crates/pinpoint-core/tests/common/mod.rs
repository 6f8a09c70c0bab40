#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use jiff::Timestamp;
use parking_lot::Mutex;
use pinpoint_core::{
    models::{Coordinate, HealthStatus, MapId, MapRecord, Point, PointId, SearchResult},
    remote::{MapApi, PointApi},
    Geocoder, InteractionCoordinator, PinpointError, Result,
};

/// A request received by the fake remote store.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListPoints(MapId),
    CreatePoint {
        map_id: MapId,
        name: String,
        latitude: f64,
        longitude: f64,
    },
    RenamePoint {
        point_id: PointId,
        name: String,
    },
    DeletePoint(PointId),
    DeleteAllPoints(MapId),
    ListMaps,
    CreateMap(String),
    DeleteMap(MapId),
    Health,
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Call::ListPoints(_) | Call::ListMaps | Call::Health)
    }
}

#[derive(Debug, Default)]
struct RemoteState {
    maps: Vec<MapRecord>,
    points: Vec<Point>,
    next_point_id: PointId,
    next_map_id: MapId,
    calls: Vec<Call>,
    offline: bool,
    fail_lists: bool,
}

/// In-memory stand-in for the remote point/map API.
///
/// Every operation yields to the runtime once before touching state, so
/// concurrent calls interleave the way real requests do.
#[derive(Clone, Default)]
pub struct FakeRemote {
    state: Arc<Mutex<RemoteState>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        let remote = Self::default();
        {
            let mut state = remote.state.lock();
            state.next_point_id = 1;
            state.next_map_id = 1;
        }
        remote
    }

    /// Remote store with one map and the given points on it.
    pub fn with_points(map_id: MapId, points: &[(&str, f64, f64)]) -> Self {
        let remote = Self::new();
        remote.add_map(map_id, "Test Map");
        for (name, latitude, longitude) in points {
            remote.seed_point(map_id, name, *latitude, *longitude);
        }
        remote
    }

    pub fn add_map(&self, map_id: MapId, name: &str) {
        let mut state = self.state.lock();
        state.maps.push(MapRecord {
            id: map_id,
            name: name.to_string(),
            created_at: Timestamp::from_second(1_700_000_000).expect("valid timestamp"),
            point_count: 0,
        });
        state.next_map_id = state.next_map_id.max(map_id + 1);
    }

    /// Insert a point directly, as another client would.
    pub fn seed_point(&self, map_id: MapId, name: &str, latitude: f64, longitude: f64) -> PointId {
        let mut state = self.state.lock();
        let id = state.next_point_id;
        state.next_point_id += 1;
        state.points.push(Point {
            id,
            name: name.to_string(),
            latitude,
            longitude,
            map_id,
        });
        id
    }

    /// Remove a point directly, as another client would.
    pub fn remove_point(&self, point_id: PointId) {
        self.state.lock().points.retain(|point| point.id != point_id);
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.lock().offline = offline;
    }

    /// Make list requests fail while mutations keep working.
    pub fn set_fail_lists(&self, fail: bool) {
        self.state.lock().fail_lists = fail;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn mutation_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// The remote store's truth for a map, in canonical order.
    pub fn points_of(&self, map_id: MapId) -> Vec<Point> {
        let mut points: Vec<Point> = self
            .state
            .lock()
            .points
            .iter()
            .filter(|point| point.map_id == map_id)
            .cloned()
            .collect();
        points.sort_by_key(|point| point.id);
        points
    }

    pub fn has_map(&self, map_id: MapId) -> bool {
        self.state.lock().maps.iter().any(|map| map.id == map_id)
    }

    fn record(&self, call: Call, is_list: bool) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(call);
        if state.offline || (is_list && state.fail_lists) {
            return Err(PinpointError::remote("connection refused").without_source());
        }
        Ok(())
    }
}

impl PointApi for FakeRemote {
    async fn list_points(&self, map_id: MapId) -> Result<Vec<Point>> {
        tokio::task::yield_now().await;
        self.record(Call::ListPoints(map_id), true)?;
        Ok(self.points_of(map_id))
    }

    async fn create_point(
        &self,
        map_id: MapId,
        name: &str,
        coordinate: Coordinate,
    ) -> Result<Point> {
        tokio::task::yield_now().await;
        self.record(
            Call::CreatePoint {
                map_id,
                name: name.to_string(),
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
            },
            false,
        )?;
        let id = self.seed_point(map_id, name, coordinate.latitude, coordinate.longitude);
        Ok(Point {
            id,
            name: name.to_string(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            map_id,
        })
    }

    async fn rename_point(&self, point_id: PointId, name: &str) -> Result<Point> {
        tokio::task::yield_now().await;
        self.record(
            Call::RenamePoint {
                point_id,
                name: name.to_string(),
            },
            false,
        )?;
        let mut state = self.state.lock();
        let point = state
            .points
            .iter_mut()
            .find(|point| point.id == point_id)
            .ok_or(PinpointError::NotFound {
                resource: "Point",
                id: point_id,
            })?;
        point.name = name.to_string();
        Ok(point.clone())
    }

    async fn delete_point(&self, point_id: PointId) -> Result<()> {
        tokio::task::yield_now().await;
        self.record(Call::DeletePoint(point_id), false)?;
        let mut state = self.state.lock();
        let before = state.points.len();
        state.points.retain(|point| point.id != point_id);
        if state.points.len() == before {
            return Err(PinpointError::NotFound {
                resource: "Point",
                id: point_id,
            });
        }
        Ok(())
    }

    async fn delete_all_points(&self, map_id: MapId) -> Result<()> {
        tokio::task::yield_now().await;
        self.record(Call::DeleteAllPoints(map_id), false)?;
        self.state.lock().points.retain(|point| point.map_id != map_id);
        Ok(())
    }
}

impl MapApi for FakeRemote {
    async fn list_maps(&self) -> Result<Vec<MapRecord>> {
        tokio::task::yield_now().await;
        self.record(Call::ListMaps, true)?;
        let state = self.state.lock();
        Ok(state
            .maps
            .iter()
            .map(|map| MapRecord {
                point_count: state
                    .points
                    .iter()
                    .filter(|point| point.map_id == map.id)
                    .count() as u32,
                ..map.clone()
            })
            .collect())
    }

    async fn create_map(&self, name: &str) -> Result<MapRecord> {
        tokio::task::yield_now().await;
        self.record(Call::CreateMap(name.to_string()), false)?;
        let id = self.state.lock().next_map_id;
        self.add_map(id, name);
        Ok(MapRecord {
            id,
            name: name.to_string(),
            created_at: Timestamp::from_second(1_700_000_000).expect("valid timestamp"),
            point_count: 0,
        })
    }

    async fn delete_map(&self, map_id: MapId) -> Result<()> {
        tokio::task::yield_now().await;
        self.record(Call::DeleteMap(map_id), false)?;
        let mut state = self.state.lock();
        if !state.maps.iter().any(|map| map.id == map_id) {
            return Err(PinpointError::NotFound {
                resource: "Map",
                id: map_id,
            });
        }
        state.maps.retain(|map| map.id != map_id);
        state.points.retain(|point| point.map_id != map_id);
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus> {
        tokio::task::yield_now().await;
        self.record(Call::Health, false)?;
        Ok(HealthStatus {
            status: "ok".to_string(),
            message: "API is running".to_string(),
        })
    }
}

/// Geocoder answering from a fixed table of addresses.
#[derive(Clone, Default)]
pub struct FakeGeocoder {
    places: Arc<Mutex<HashMap<String, SearchResult>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(self, query: &str, label: &str, latitude: f64, longitude: f64) -> Self {
        self.places.lock().insert(
            query.to_lowercase(),
            SearchResult::new(label, Coordinate::new(latitude, longitude)),
        );
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

impl Geocoder for FakeGeocoder {
    async fn search(&self, query: &str) -> Result<SearchResult> {
        tokio::task::yield_now().await;
        self.queries.lock().push(query.to_string());
        self.places
            .lock()
            .get(&query.to_lowercase())
            .cloned()
            .ok_or_else(|| PinpointError::NoMatch {
                query: query.to_string(),
            })
    }
}

/// Coordinator over a fake remote and geocoder, already loaded.
pub async fn loaded_coordinator(
    map_id: MapId,
    remote: &FakeRemote,
    geocoder: &FakeGeocoder,
) -> InteractionCoordinator<FakeRemote, FakeGeocoder> {
    let coordinator = InteractionCoordinator::with_api(map_id, remote.clone(), geocoder.clone());
    coordinator.load().await.expect("Failed to load points");
    remote.clear_calls();
    coordinator
}
