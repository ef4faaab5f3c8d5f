use plasma_core::PlasmaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid raster name {0:?}")]
    InvalidName(String),
    #[error("malformed raster header: {0}")]
    Header(String),
    #[error("malformed raster value {token:?} at position {index}")]
    Value { index: usize, token: String },
    #[error("expected {expected} raster values, found {found}")]
    ValueCount { expected: usize, found: usize },
    #[error(transparent)]
    Grid(#[from] PlasmaError),
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),
}
