//! `reqwest` implementation of the remote API.

use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{CreatePointBody, MapApi, NameBody, PointApi};
use crate::{
    error::{PinpointError, RemoteResultExt, Result},
    models::{Coordinate, HealthStatus, MapId, MapRecord, Point, PointId},
};

/// HTTP client for the remote point/map API.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

/// Resource a request addresses, used to turn a 404 into `NotFound`.
#[derive(Debug, Clone, Copy)]
struct Target {
    resource: &'static str,
    id: u64,
}

impl HttpApi {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        target: Option<Target>,
    ) -> Result<Response> {
        debug!("-> {endpoint}");
        let response = request
            .send()
            .await
            .remote_context_lazy(|| format!("{endpoint} failed"))?;
        check_status(response.status(), endpoint, target)?;
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        target: Option<Target>,
    ) -> Result<T> {
        self.send(request, endpoint, target)
            .await?
            .json::<T>()
            .await
            .remote_context_lazy(|| format!("{endpoint} returned an unreadable body"))
    }
}

/// Map an HTTP status onto the error taxonomy.
fn check_status(status: StatusCode, endpoint: &str, target: Option<Target>) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    match target {
        Some(Target { resource, id }) if status == StatusCode::NOT_FOUND => {
            Err(PinpointError::NotFound { resource, id })
        }
        _ => Err(PinpointError::remote(format!("{endpoint} returned {status}")).without_source()),
    }
}

impl PointApi for HttpApi {
    async fn list_points(&self, map_id: MapId) -> Result<Vec<Point>> {
        let path = format!("/maps/{map_id}/points");
        self.send_json(self.client.get(self.url(&path)), &format!("GET {path}"), None)
            .await
    }

    async fn create_point(
        &self,
        map_id: MapId,
        name: &str,
        coordinate: Coordinate,
    ) -> Result<Point> {
        let path = format!("/maps/{map_id}/points");
        let request = self
            .client
            .post(self.url(&path))
            .json(&CreatePointBody::new(name, coordinate));
        let mut point: Point = self
            .send_json(request, &format!("POST {path}"), None)
            .await?;
        point.map_id = map_id;
        Ok(point)
    }

    async fn rename_point(&self, point_id: PointId, name: &str) -> Result<Point> {
        let path = format!("/points/{point_id}");
        let request = self.client.put(self.url(&path)).json(&NameBody { name });
        let target = Target {
            resource: "Point",
            id: point_id,
        };
        self.send_json(request, &format!("PUT {path}"), Some(target))
            .await
    }

    async fn delete_point(&self, point_id: PointId) -> Result<()> {
        let path = format!("/points/{point_id}");
        let target = Target {
            resource: "Point",
            id: point_id,
        };
        self.send(
            self.client.delete(self.url(&path)),
            &format!("DELETE {path}"),
            Some(target),
        )
        .await?;
        Ok(())
    }

    async fn delete_all_points(&self, map_id: MapId) -> Result<()> {
        let path = format!("/maps/{map_id}/points");
        self.send(
            self.client.delete(self.url(&path)),
            &format!("DELETE {path}"),
            None,
        )
        .await?;
        Ok(())
    }
}

impl MapApi for HttpApi {
    async fn list_maps(&self) -> Result<Vec<MapRecord>> {
        self.send_json(self.client.get(self.url("/maps")), "GET /maps", None)
            .await
    }

    async fn create_map(&self, name: &str) -> Result<MapRecord> {
        let request = self.client.post(self.url("/maps")).json(&NameBody { name });
        self.send_json(request, "POST /maps", None).await
    }

    async fn delete_map(&self, map_id: MapId) -> Result<()> {
        let path = format!("/maps/{map_id}");
        let target = Target {
            resource: "Map",
            id: map_id,
        };
        self.send(
            self.client.delete(self.url(&path)),
            &format!("DELETE {path}"),
            Some(target),
        )
        .await?;
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.send_json(self.client.get(self.url("/health")), "GET /health", None)
            .await
    }
}
