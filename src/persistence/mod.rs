//! Blueprint storage
//!
//! The store owns every blueprint handed to it; callers get clones back.
//! Keys are (author, name) pairs and inserts are final - there is no upsert
//! and no delete.

pub mod memory;

pub use memory::InMemoryBlueprintPersistence;

use crate::core::error::Result;
use crate::model::Blueprint;

/// Contract for blueprint stores keyed by (author, name)
pub trait BlueprintsPersistence: Send + Sync {
    /// Insert a blueprint under its (author, name) key.
    ///
    /// Fails with `DuplicateBlueprint` when the key is already occupied.
    fn save_blueprint(&self, blueprint: Blueprint) -> Result<()>;

    /// Fetch a single blueprint by key.
    ///
    /// Fails with `BlueprintNotFound` when no entry exists.
    fn get_blueprint(&self, author: &str, name: &str) -> Result<Blueprint>;

    /// All blueprints for an author, oldest first.
    ///
    /// An author with no blueprints yields an empty vector; unknown authors
    /// are not distinguished from authors whose blueprints were never stored.
    fn get_blueprints_by_author(&self, author: &str) -> Result<Vec<Blueprint>>;

    /// Every stored blueprint, oldest first.
    fn get_all_blueprints(&self) -> Result<Vec<Blueprint>>;
}
