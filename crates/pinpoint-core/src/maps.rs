//! Map list management.

use log::info;

use crate::{
    error::{require_name, PinpointError, Result},
    models::{HealthStatus, MapId, MapRecord},
    params::{CreateMap, DeleteMap},
    remote::MapApi,
};

/// Thin record management over the remote map list.
pub struct MapDirectory<A> {
    api: A,
}

impl<A: MapApi> MapDirectory<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// All maps with their current point counts.
    pub async fn list(&self) -> Result<Vec<MapRecord>> {
        self.api.list_maps().await
    }

    /// Look up one map by ID.
    pub async fn find(&self, map_id: MapId) -> Result<Option<MapRecord>> {
        Ok(self
            .api
            .list_maps()
            .await?
            .into_iter()
            .find(|map| map.id == map_id))
    }

    /// Create an empty map.
    ///
    /// # Errors
    ///
    /// Returns `PinpointError::InvalidInput` for a blank name, before any
    /// remote call.
    pub async fn create(&self, params: &CreateMap) -> Result<MapRecord> {
        let name = require_name("name", &params.name)?;
        let map = self.api.create_map(name).await?;
        info!("Created map {} '{}'", map.id, map.name);
        Ok(map)
    }

    /// Permanently delete a map and all of its points.
    ///
    /// Requires explicit confirmation via the `confirmed` field.
    ///
    /// # Errors
    ///
    /// Returns `PinpointError::InvalidInput` if `confirmed` is false.
    pub async fn delete(&self, params: &DeleteMap) -> Result<()> {
        if !params.confirmed {
            return Err(PinpointError::invalid_input("confirmed").with_reason(
                "Map deletion requires explicit confirmation. Set 'confirmed' to true to proceed.",
            ));
        }
        self.api.delete_map(params.id).await?;
        info!("Deleted map {}", params.id);
        Ok(())
    }

    /// Query the API health endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.api.health().await
    }
}
