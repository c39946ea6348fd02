use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("Blueprint not found: {author}:{name}")]
    BlueprintNotFound { author: String, name: String },

    #[error("Blueprint already exists: {author}:{name}")]
    DuplicateBlueprint { author: String, name: String },

    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlueprintError>;
