//! Named, authored point sequences

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::Point;

/// An ordered sequence of points owned by an author.
///
/// The pair (author, name) identifies a blueprint within a store. The point
/// sequence keeps insertion order and may contain consecutive duplicates;
/// filters decide what survives at query time, the model stores everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    author: String,
    name: String,
    points: Vec<Point>,
}

impl Blueprint {
    pub fn new(author: impl Into<String>, name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            author: author.into(),
            name: name.into(),
            points,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Append a point to the sequence. The only mutation a blueprint supports.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Copy of this blueprint carrying a different point sequence.
    ///
    /// Used by the service layer to hand out filtered views without touching
    /// stored state.
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            author: self.author.clone(),
            name: self.name.clone(),
            points,
        }
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.author, self.name)
    }
}
