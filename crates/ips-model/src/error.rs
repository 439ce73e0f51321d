//! Error types for model catalogs and result tables.

use thiserror::Error;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors surfaced by the model layer.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Lookup of a model key the registry does not contain.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// JSON parse error in a catalog or result table.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a data file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid simulation parameters while building an integrator.
    #[error(transparent)]
    Sim(#[from] ips_sim::SimError),
}
