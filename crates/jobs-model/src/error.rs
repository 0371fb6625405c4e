use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown dimension: {name}")]
    UnknownDimension { name: String },
    #[error("unknown boolean field: {name}")]
    UnknownBooleanField { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
