//! Entry point wiring configuration, HTTP clients, and controllers together.

pub mod builder;

pub use builder::PinpointBuilder;

use crate::{
    config::ClientConfig,
    coordinator::InteractionCoordinator,
    geocode::GeocodeClient,
    maps::MapDirectory,
    models::MapId,
    remote::HttpApi,
};

/// Configured access to the remote API and the geocoder.
#[derive(Debug, Clone)]
pub struct Pinpoint {
    pub(crate) config: ClientConfig,
    pub(crate) api: HttpApi,
    pub(crate) geocoder: GeocodeClient,
}

impl Pinpoint {
    /// The resolved configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &HttpApi {
        &self.api
    }

    /// Address search on its own, without a map to place results on.
    pub fn geocoder(&self) -> &GeocodeClient {
        &self.geocoder
    }

    /// Map list management.
    pub fn maps(&self) -> MapDirectory<HttpApi> {
        MapDirectory::new(self.api.clone())
    }

    /// A fresh controller for one map. Call
    /// [`InteractionCoordinator::load`] before rendering it.
    pub fn coordinator(&self, map_id: MapId) -> InteractionCoordinator<HttpApi, GeocodeClient> {
        InteractionCoordinator::with_api(map_id, self.api.clone(), self.geocoder.clone())
    }
}
