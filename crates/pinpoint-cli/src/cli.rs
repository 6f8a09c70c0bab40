//! Command definitions and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core's
//! interface-neutral parameter types:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Coordinator / MapDirectory
//! ```
//!
//! Point commands drive the same [`InteractionCoordinator`] a graphical front
//! end would: `points add` is a map click followed by a save, `points rename`
//! opens an edit session, and deletions go through a confirmation request that
//! `--yes` answers up front.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use pinpoint_core::{
    coordinator::{ConfirmationRequest, Decision, DeletionOutcome},
    display::{MapScreen, Maps, OperationStatus},
    models::Coordinate,
    params::{CreateMap, DeleteMap, DeletePoint, Id, PlacePoint, RenamePoint, SearchAddress},
    remote::PointApi,
    GeocodeClient, Geocoder, HttpApi, InteractionCoordinator, Pinpoint,
};

use crate::{prompt, renderer::TerminalRenderer};

// ============================================================================
// Map commands
// ============================================================================

/// Create a new, empty map
#[derive(Args)]
pub struct CreateMapArgs {
    /// Name of the map
    pub name: String,
}

impl From<CreateMapArgs> for CreateMap {
    fn from(val: CreateMapArgs) -> Self {
        CreateMap { name: val.name }
    }
}

/// Delete a map together with all of its points
#[derive(Args)]
pub struct DeleteMapArgs {
    #[arg(help = "Unique identifier of the map to permanently delete")]
    pub id: u64,
    /// Skip the confirmation question
    #[arg(short, long)]
    pub yes: bool,
}

impl From<DeleteMapArgs> for DeleteMap {
    fn from(val: DeleteMapArgs) -> Self {
        DeleteMap {
            id: val.id,
            confirmed: val.yes,
        }
    }
}

#[derive(Subcommand)]
pub enum MapCommands {
    /// List all maps with their point counts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Create a new map
    #[command(alias = "c")]
    Create(CreateMapArgs),
    /// Delete a map permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteMapArgs),
}

// ============================================================================
// Point commands
// ============================================================================

/// Show the points of a map
#[derive(Args)]
pub struct ListPointsArgs {
    #[arg(help = "Unique identifier of the map")]
    pub map_id: u64,
}

impl From<ListPointsArgs> for Id {
    fn from(val: ListPointsArgs) -> Self {
        Id { id: val.map_id }
    }
}

/// Place a named point at a coordinate
///
/// Equivalent to clicking the map at `--lat`/`--lon` and saving the draft
/// under `--name`.
#[derive(Args)]
pub struct AddPointArgs {
    #[arg(help = "Unique identifier of the map to add the point to")]
    pub map_id: u64,
    /// Latitude in degrees, -90 to 90
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees, -180 to 180
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
    /// Display name of the point
    #[arg(short, long)]
    pub name: String,
}

impl From<AddPointArgs> for PlacePoint {
    fn from(val: AddPointArgs) -> Self {
        PlacePoint {
            map_id: val.map_id,
            name: val.name,
            latitude: val.lat,
            longitude: val.lon,
        }
    }
}

/// Give a point a new name
#[derive(Args)]
pub struct RenamePointArgs {
    #[arg(help = "Unique identifier of the map the point belongs to")]
    pub map_id: u64,
    #[arg(help = "Unique identifier of the point to rename")]
    pub point_id: u64,
    /// New display name
    pub name: String,
}

impl From<RenamePointArgs> for RenamePoint {
    fn from(val: RenamePointArgs) -> Self {
        RenamePoint {
            map_id: val.map_id,
            point_id: val.point_id,
            name: val.name,
        }
    }
}

/// Delete one point
#[derive(Args)]
pub struct DeletePointArgs {
    #[arg(help = "Unique identifier of the map the point belongs to")]
    pub map_id: u64,
    #[arg(help = "Unique identifier of the point to delete")]
    pub point_id: u64,
    /// Skip the confirmation question
    #[arg(short, long)]
    pub yes: bool,
}

impl From<&DeletePointArgs> for DeletePoint {
    fn from(val: &DeletePointArgs) -> Self {
        DeletePoint {
            map_id: val.map_id,
            point_id: val.point_id,
        }
    }
}

/// Delete every point of a map, keeping the map itself
#[derive(Args)]
pub struct ClearPointsArgs {
    #[arg(help = "Unique identifier of the map to clear")]
    pub map_id: u64,
    /// Skip the confirmation question
    #[arg(short, long)]
    pub yes: bool,
}

impl From<&ClearPointsArgs> for Id {
    fn from(val: &ClearPointsArgs) -> Self {
        Id { id: val.map_id }
    }
}

#[derive(Subcommand)]
pub enum PointCommands {
    /// Show the points of a map
    #[command(aliases = ["l", "ls"])]
    List(ListPointsArgs),
    /// Place a new point at a coordinate
    #[command(alias = "a")]
    Add(AddPointArgs),
    /// Rename a point
    #[command(alias = "r")]
    Rename(RenamePointArgs),
    /// Delete one point
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePointArgs),
    /// Delete all points of a map
    Clear(ClearPointsArgs),
}

// ============================================================================
// Search
// ============================================================================

/// Find an address and optionally keep it as a point
///
/// With `--map` and `--add`, the top match is saved on that map, named after
/// the first part of its address unless `--name` says otherwise.
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text address
    pub query: String,
    /// Map to place the result on
    #[arg(short, long)]
    pub map: Option<u64>,
    /// Save the result as a point
    #[arg(long, requires = "map")]
    pub add: bool,
    /// Name for the saved point
    #[arg(short, long, requires = "add")]
    pub name: Option<String>,
}

impl From<SearchArgs> for SearchAddress {
    fn from(val: SearchArgs) -> Self {
        SearchAddress {
            query: val.query,
            map_id: val.map.filter(|_| val.add),
            name: val.name,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a configured [`Pinpoint`] and renders the outcome.
pub struct Cli {
    pinpoint: Pinpoint,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(pinpoint: Pinpoint, renderer: TerminalRenderer) -> Self {
        Self { pinpoint, renderer }
    }

    pub async fn handle_map_command(&self, command: MapCommands) -> Result<()> {
        match command {
            MapCommands::List => self.list_maps().await,
            MapCommands::Create(args) => self.create_map(&args.into()).await,
            MapCommands::Delete(args) => self.delete_map(args.into()).await,
        }
    }

    pub async fn handle_point_command(&self, command: PointCommands) -> Result<()> {
        match command {
            PointCommands::List(args) => self.list_points(&args.into()).await,
            PointCommands::Add(args) => self.add_point(&args.into()).await,
            PointCommands::Rename(args) => self.rename_point(&args.into()).await,
            PointCommands::Delete(args) => self.delete_point(&(&args).into(), args.yes).await,
            PointCommands::Clear(args) => self.clear_points(&(&args).into(), args.yes).await,
        }
    }

    pub async fn list_maps(&self) -> Result<()> {
        let maps = self
            .pinpoint
            .maps()
            .list()
            .await
            .context("Failed to list maps")?;
        self.renderer.show(&Maps(maps))
    }

    async fn create_map(&self, params: &CreateMap) -> Result<()> {
        let map = self
            .pinpoint
            .maps()
            .create(params)
            .await
            .context("Failed to create map")?;
        self.renderer.show(&map)
    }

    async fn delete_map(&self, mut params: DeleteMap) -> Result<()> {
        if !params.confirmed {
            let question = format!(
                "Are you sure you want to delete map {} and all of its points?",
                params.id
            );
            params.confirmed = prompt::confirm(&question)?;
            if !params.confirmed {
                return self.renderer.show(&OperationStatus::failure("Deletion cancelled"));
            }
        }

        self.pinpoint
            .maps()
            .delete(&params)
            .await
            .with_context(|| format!("Failed to delete map {}", params.id))?;
        self.renderer.show(&OperationStatus::success(format!(
            "Deleted map {}",
            params.id
        )))
    }

    pub async fn health(&self) -> Result<()> {
        let health = self
            .pinpoint
            .maps()
            .health()
            .await
            .context("Failed to reach the maps API")?;
        let status = if health.is_ok() {
            OperationStatus::success(format!(
                "{} at {}",
                health.message,
                self.pinpoint.api().base_url()
            ))
        } else {
            OperationStatus::failure(format!("API reported '{}'", health.status))
        };
        self.renderer.show(&status)
    }

    async fn list_points(&self, params: &Id) -> Result<()> {
        let coordinator = self.loaded(params.id).await?;
        self.renderer.show(&MapScreen(&coordinator.snapshot()))
    }

    async fn add_point(&self, params: &PlacePoint) -> Result<()> {
        let coordinate = Coordinate::try_new(params.latitude, params.longitude)?;
        let coordinator = self.pinpoint.coordinator(params.map_id);

        coordinator.map_clicked(coordinate);
        coordinator.set_draft_name(params.name.as_str())?;
        coordinator.commit().await.context("Failed to save point")?;

        self.renderer.show(&MapScreen(&coordinator.snapshot()))
    }

    async fn rename_point(&self, params: &RenamePoint) -> Result<()> {
        let coordinator = self.loaded(params.map_id).await?;

        coordinator.edit_point(params.point_id)?;
        coordinator.set_draft_name(params.name.as_str())?;
        coordinator
            .commit()
            .await
            .with_context(|| format!("Failed to rename point {}", params.point_id))?;

        self.renderer.show(&MapScreen(&coordinator.snapshot()))
    }

    async fn delete_point(&self, params: &DeletePoint, yes: bool) -> Result<()> {
        let coordinator = self.loaded(params.map_id).await?;
        let request = coordinator.request_delete_point(params.point_id);
        self.confirm_and_resolve(&coordinator, request, yes).await
    }

    async fn clear_points(&self, params: &Id, yes: bool) -> Result<()> {
        let coordinator = self.loaded(params.id).await?;
        let Some(request) = coordinator.request_delete_all() else {
            return self
                .renderer
                .show(&OperationStatus::failure("This map has no points to delete"));
        };
        self.confirm_and_resolve(&coordinator, request, yes).await
    }

    pub async fn search(&self, params: SearchAddress) -> Result<()> {
        let Some(map_id) = params.map_id else {
            let result = self
                .pinpoint
                .geocoder()
                .search(&params.query)
                .await
                .context("Search failed")?;
            return self.renderer.show(&result);
        };

        let coordinator = self.loaded(map_id).await?;
        coordinator
            .search(&params.query)
            .await
            .context("Search failed")?;
        coordinator.add_search_result_as_point()?;
        if let Some(name) = params.name {
            coordinator.set_draft_name(name)?;
        }
        coordinator.commit().await.context("Failed to save point")?;

        self.renderer.show(&MapScreen(&coordinator.snapshot()))
    }

    async fn loaded(&self, map_id: u64) -> Result<InteractionCoordinator<HttpApi, GeocodeClient>> {
        let coordinator = self.pinpoint.coordinator(map_id);
        coordinator
            .load()
            .await
            .with_context(|| format!("Failed to load points of map {map_id}"))?;
        Ok(coordinator)
    }

    async fn confirm_and_resolve<A: PointApi, G: Geocoder>(
        &self,
        coordinator: &InteractionCoordinator<A, G>,
        request: ConfirmationRequest,
        yes: bool,
    ) -> Result<()> {
        let decision = if yes {
            Decision::Confirmed
        } else {
            Decision::from(prompt::confirm(&request.prompt())?)
        };
        debug!("Deletion answered with {decision:?}");

        let outcome = coordinator.resolve(request, decision).await?;
        if outcome == DeletionOutcome::Declined {
            return self.renderer.show(&OperationStatus::failure("Deletion cancelled"));
        }
        self.renderer.show(&MapScreen(&coordinator.snapshot()))
    }
}
