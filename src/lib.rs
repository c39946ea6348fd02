//! Blueprints - In-Memory Catalog of Authored Point Sequences

pub mod core;
pub mod filters;
pub mod model;
pub mod persistence;
pub mod services;
