use thiserror::Error;

// Everything that can go wrong before the numeric pipeline starts.
// Generation itself has no error paths once a grid exists.
#[derive(Debug, Error)]
pub enum PlasmaError {
    #[error("grid size {size} is not of the form 2^k + 1 (k >= 1)")]
    InvalidSize { size: usize },
    #[error("{name} range [{min}, {max}] is inverted or too wide")]
    InvalidRange {
        name: &'static str,
        min: i32,
        max: i32,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
