//! Caller-side bookkeeping between consecutive geometry computations.

use crate::change::{content_size_changed, geometry_changed, important_input_changed};
use crate::engine::compute_geometry_with;
use crate::error::GeometryError;
use crate::geometry::Geometry;
use crate::request::GeometryRequest;
use popover_core::config::{ConfigLoader, PlacementConfig};
use tracing::{debug, warn};

/// What a call to [`PlacementTracker::update`] did to the active geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryUpdate {
    /// First geometry since creation or the last reset.
    Initial(Geometry),
    /// The popover should animate from `from` to `to`.
    Moved { from: Geometry, to: Geometry },
    /// Nothing visible changed.
    Unchanged(Geometry),
}

impl GeometryUpdate {
    /// The geometry that is active after the update.
    pub fn geometry(&self) -> &Geometry {
        match self {
            GeometryUpdate::Initial(geometry) | GeometryUpdate::Unchanged(geometry) => geometry,
            GeometryUpdate::Moved { to, .. } => to,
        }
    }
}

/// Tracks the active geometry of one popover.
///
/// Feeds the active placement back into each request for hysteresis, skips
/// recomputation when nothing important changed, and classifies every result.
#[derive(Debug, Clone, Default)]
pub struct PlacementTracker {
    config: PlacementConfig,
    last_request: Option<GeometryRequest>,
    active: Option<Geometry>,
}

impl PlacementTracker {
    pub fn new(config: PlacementConfig) -> Self {
        PlacementTracker {
            config,
            last_request: None,
            active: None,
        }
    }

    /// Creates a tracker using the placement section of the configuration
    /// found by [`ConfigLoader::load`].
    pub fn from_loaded_config() -> Result<Self, GeometryError> {
        let config = ConfigLoader::load()?;
        Ok(Self::new(config.placement))
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn active(&self) -> Option<&Geometry> {
        self.active.as_ref()
    }

    /// Computes the geometry for `request` and compares it to the active one.
    ///
    /// Invalid measurements are logged as warnings; a geometry is computed
    /// for them anyway.
    pub fn update(&mut self, mut request: GeometryRequest) -> GeometryUpdate {
        if let Err(e) = request.validate() {
            warn!("Computing popover geometry from unusable measurements: {}", e);
        }

        if let (Some(previous), Some(active)) = (&self.last_request, &self.active) {
            if !important_input_changed(previous, &request) && !content_size_changed(previous, &request) {
                debug!("Popover inputs unchanged, skipping recomputation");
                return GeometryUpdate::Unchanged(*active);
            }
        }

        if request.previous_placement.is_none() {
            request.previous_placement = self.active.map(|active| active.placement);
        }
        let next = compute_geometry_with(&request, &self.config);
        self.last_request = Some(request);

        let update = match self.active {
            None => GeometryUpdate::Initial(next),
            Some(active) if !geometry_changed(Some(&active), &next) => GeometryUpdate::Unchanged(active),
            Some(active) => GeometryUpdate::Moved { from: active, to: next },
        };
        self.active = Some(*update.geometry());
        update
    }

    /// Forgets the active geometry, e.g. after the popover closed.
    pub fn reset(&mut self) {
        self.last_request = None;
        self.active = None;
    }
}
