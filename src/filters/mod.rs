//! Point-sequence filters applied to query results
//!
//! A filter is a pure transformation over a blueprint's point sequence. Each
//! service instance is bound to exactly one filter at construction time, so
//! the same stored catalog can be viewed through different filters without
//! re-querying storage.

pub mod redundancy;
pub mod subsampling;

pub use redundancy::RedundancyFilter;
pub use subsampling::SubsamplingFilter;

use crate::model::Point;

/// Trait for transformations applied to a point sequence before it leaves
/// the service layer
pub trait BlueprintFilter: Send + Sync {
    /// Transform a point sequence into a new one.
    ///
    /// Implementations must not mutate the input and must not reorder the
    /// points that survive.
    fn apply(&self, points: &[Point]) -> Vec<Point>;
}

/// The built-in filter strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Collapse consecutive duplicate points
    Redundancy,
    /// Keep only even-indexed points
    Subsampling,
}

/// Get the filter strategy for a kind
pub fn filter_for(kind: FilterKind) -> Box<dyn BlueprintFilter> {
    match kind {
        FilterKind::Redundancy => Box::new(RedundancyFilter),
        FilterKind::Subsampling => Box::new(SubsamplingFilter),
    }
}
