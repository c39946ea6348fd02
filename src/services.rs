//! Catalog service layer
//!
//! Binds one filter to one store. Writes pass through untouched; every read
//! result goes through the bound filter before it reaches the caller.

use std::sync::Arc;
use tracing::trace;

use crate::core::error::{BlueprintError, Result};
use crate::filters::BlueprintFilter;
use crate::model::Blueprint;
use crate::persistence::BlueprintsPersistence;

/// Facade over a shared blueprint store with a bound result filter.
///
/// Several services may share one store while differing in their filter, so
/// the same catalog can be served through different views. Filter choice is a
/// property of the service instance, never of the stored data.
pub struct BlueprintsServices {
    persistence: Arc<dyn BlueprintsPersistence>,
    filter: Box<dyn BlueprintFilter>,
}

impl BlueprintsServices {
    pub fn new(
        persistence: Arc<dyn BlueprintsPersistence>,
        filter: Box<dyn BlueprintFilter>,
    ) -> Self {
        Self {
            persistence,
            filter,
        }
    }

    /// Validate and store a new blueprint.
    ///
    /// A duplicate (author, name) key is a caller error and propagates
    /// unchanged from the store.
    pub fn add_new_blueprint(&self, blueprint: Blueprint) -> Result<()> {
        if blueprint.author().is_empty() {
            return Err(BlueprintError::InvalidBlueprint(
                "author must not be empty".to_string(),
            ));
        }
        if blueprint.name().is_empty() {
            return Err(BlueprintError::InvalidBlueprint(
                "name must not be empty".to_string(),
            ));
        }
        self.persistence.save_blueprint(blueprint)
    }

    /// Fetch one blueprint through the bound filter
    pub fn get_blueprint(&self, author: &str, name: &str) -> Result<Blueprint> {
        let blueprint = self.persistence.get_blueprint(author, name)?;
        Ok(self.filtered(blueprint))
    }

    /// Fetch an author's blueprints, each filtered independently
    pub fn get_blueprints_by_author(&self, author: &str) -> Result<Vec<Blueprint>> {
        Ok(self
            .persistence
            .get_blueprints_by_author(author)?
            .into_iter()
            .map(|bp| self.filtered(bp))
            .collect())
    }

    /// Fetch the whole catalog, each blueprint filtered independently
    pub fn get_all_blueprints(&self) -> Result<Vec<Blueprint>> {
        Ok(self
            .persistence
            .get_all_blueprints()?
            .into_iter()
            .map(|bp| self.filtered(bp))
            .collect())
    }

    fn filtered(&self, blueprint: Blueprint) -> Blueprint {
        let points = self.filter.apply(blueprint.points());
        trace!(
            "filtered {} from {} to {} points",
            blueprint,
            blueprint.point_count(),
            points.len()
        );
        blueprint.with_points(points)
    }
}
