use thiserror::Error;

use crate::particles::ParticleKey;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Grid loading, grid lookup or disk model failure.
    #[error("photoevaporation model: {0}")]
    Grid(#[from] protodisk::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A particle expected in a set is not there.
    #[error("unknown particle {0:?}")]
    UnknownParticle(ParticleKey),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<protodisk::DiskError> for Error {
    fn from(e: protodisk::DiskError) -> Self {
        Error::Grid(e.into())
    }
}
