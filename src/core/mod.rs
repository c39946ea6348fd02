pub mod error;

pub use error::{BlueprintError, Result};
