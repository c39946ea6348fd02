//! Consecutive-duplicate collapse

use super::BlueprintFilter;
use crate::model::Point;

/// Drops every point that is coordinate-equal to its immediate predecessor.
///
/// Only adjacent duplicates collapse; a point re-visited later in the
/// sequence is preserved. The first point always survives.
#[derive(Debug, Default, Clone, Copy)]
pub struct RedundancyFilter;

impl BlueprintFilter for RedundancyFilter {
    fn apply(&self, points: &[Point]) -> Vec<Point> {
        let mut out = points.to_vec();
        out.dedup();
        out
    }
}
