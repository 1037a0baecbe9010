use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("failed to deserialize: {0}")]
    Deserialize(String),
}

pub type Result<T> = std::result::Result<T, MapperError>;
