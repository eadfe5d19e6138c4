use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Directions API error: {0}")]
    DirectionsApi(String),

    #[error("Place directory error: {0}")]
    PlaceDirectory(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
