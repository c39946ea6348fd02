//! Hash-map backed blueprint store

use ahash::AHashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use super::BlueprintsPersistence;
use crate::core::error::{BlueprintError, Result};
use crate::model::Blueprint;

/// In-memory store indexed by author, then name.
///
/// Next to the primary map the store keeps keys in insertion order, so
/// listings stay stable for the life of the process. The whole state sits
/// behind one `RwLock`: the duplicate check and the insert form a single
/// critical section, and the store can be shared between services through
/// an `Arc`.
pub struct InMemoryBlueprintPersistence {
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    /// Blueprints indexed by author, then name
    blueprints: AHashMap<String, AHashMap<String, Blueprint>>,
    /// (author, name) keys in insertion order, for stable listings
    order: Vec<(String, String)>,
}

impl InMemoryBlueprintPersistence {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Number of stored blueprints
    pub fn len(&self) -> usize {
        self.read_inner().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_inner().order.is_empty()
    }

    fn read_inner(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_inner(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryBlueprintPersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl BlueprintsPersistence for InMemoryBlueprintPersistence {
    fn save_blueprint(&self, blueprint: Blueprint) -> Result<()> {
        let author = blueprint.author().to_string();
        let name = blueprint.name().to_string();

        let mut guard = self.write_inner();
        let inner = &mut *guard;

        let by_name = inner.blueprints.entry(author.clone()).or_default();
        if by_name.contains_key(&name) {
            return Err(BlueprintError::DuplicateBlueprint { author, name });
        }

        by_name.insert(name.clone(), blueprint);
        inner.order.push((author.clone(), name.clone()));
        debug!("stored blueprint {}:{}", author, name);
        Ok(())
    }

    fn get_blueprint(&self, author: &str, name: &str) -> Result<Blueprint> {
        self.read_inner()
            .blueprints
            .get(author)
            .and_then(|by_name| by_name.get(name))
            .cloned()
            .ok_or_else(|| BlueprintError::BlueprintNotFound {
                author: author.to_string(),
                name: name.to_string(),
            })
    }

    fn get_blueprints_by_author(&self, author: &str) -> Result<Vec<Blueprint>> {
        let inner = self.read_inner();
        Ok(inner
            .order
            .iter()
            .filter(|(a, _)| a == author)
            .filter_map(|(a, n)| inner.blueprints.get(a).and_then(|by_name| by_name.get(n)))
            .cloned()
            .collect())
    }

    fn get_all_blueprints(&self) -> Result<Vec<Blueprint>> {
        let inner = self.read_inner();
        Ok(inner
            .order
            .iter()
            .filter_map(|(a, n)| inner.blueprints.get(a).and_then(|by_name| by_name.get(n)))
            .cloned()
            .collect())
    }
}
