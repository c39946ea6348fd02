//! Position-based decimation

use super::BlueprintFilter;
use crate::model::Point;

/// Keeps every second point by position: indices 0, 2, 4, ...
///
/// Decimation is purely index-based and ignores coordinate values or
/// distances. A single point always survives since index 0 is even.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubsamplingFilter;

impl BlueprintFilter for SubsamplingFilter {
    fn apply(&self, points: &[Point]) -> Vec<Point> {
        points.iter().copied().step_by(2).collect()
    }
}
