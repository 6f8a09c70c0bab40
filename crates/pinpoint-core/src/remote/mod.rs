//! Remote point/map API.
//!
//! The remote store is the single source of truth for maps and points. This
//! module defines the seams the rest of the crate talks to ([`PointApi`] and
//! [`MapApi`]) and the HTTP implementation ([`HttpApi`]).
//!
//! ```text
//! GET    /maps/{id}/points         list a map's points
//! POST   /maps/{id}/points         {name, lat, lon}
//! PUT    /points/{id}              {name}
//! DELETE /points/{id}
//! DELETE /maps/{id}/points         bulk delete, the map itself survives
//! GET    /maps | POST /maps | DELETE /maps/{id} | GET /health
//! ```
//!
//! HTTP 404 surfaces as [`PinpointError::NotFound`]; every other failure
//! (transport, non-success status, undecodable body) surfaces as
//! [`PinpointError::RemoteUnavailable`].
//!
//! [`PinpointError::NotFound`]: crate::PinpointError::NotFound
//! [`PinpointError::RemoteUnavailable`]: crate::PinpointError::RemoteUnavailable

use std::future::Future;

use serde::Serialize;

use crate::{
    error::Result,
    models::{Coordinate, HealthStatus, MapId, MapRecord, Point, PointId},
};

pub mod http;

pub use http::HttpApi;

/// Point operations of the remote store.
pub trait PointApi: Send + Sync {
    /// Fetch every point of a map in canonical order.
    fn list_points(&self, map_id: MapId) -> impl Future<Output = Result<Vec<Point>>> + Send;

    /// Persist a new point and return the stored record.
    fn create_point(
        &self,
        map_id: MapId,
        name: &str,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Point>> + Send;

    /// Change a point's name. Coordinates are never sent.
    fn rename_point(
        &self,
        point_id: PointId,
        name: &str,
    ) -> impl Future<Output = Result<Point>> + Send;

    /// Remove one point.
    fn delete_point(&self, point_id: PointId) -> impl Future<Output = Result<()>> + Send;

    /// Remove every point of a map, keeping the map record.
    fn delete_all_points(&self, map_id: MapId) -> impl Future<Output = Result<()>> + Send;
}

/// Map record operations of the remote store.
pub trait MapApi: Send + Sync {
    /// List all maps with their point counts.
    fn list_maps(&self) -> impl Future<Output = Result<Vec<MapRecord>>> + Send;

    /// Create an empty map.
    fn create_map(&self, name: &str) -> impl Future<Output = Result<MapRecord>> + Send;

    /// Delete a map together with its points.
    fn delete_map(&self, map_id: MapId) -> impl Future<Output = Result<()>> + Send;

    /// Query the API health endpoint.
    fn health(&self) -> impl Future<Output = Result<HealthStatus>> + Send;
}

/// Body of `POST /maps/{id}/points`.
#[derive(Debug, Serialize)]
pub(crate) struct CreatePointBody<'a> {
    pub name: &'a str,
    pub lat: f64,
    pub lon: f64,
}

impl<'a> CreatePointBody<'a> {
    pub(crate) fn new(name: &'a str, coordinate: Coordinate) -> Self {
        Self {
            name,
            lat: coordinate.latitude,
            lon: coordinate.longitude,
        }
    }
}

/// Body of `PUT /points/{id}` and `POST /maps`.
#[derive(Debug, Serialize)]
pub(crate) struct NameBody<'a> {
    pub name: &'a str,
}
