//! Error type for host-side operations.

use thiserror::Error;

#[derive(Debug, Error)]
/// Host-side failures (loading documents or configuration).
///
/// Validation problems are never errors; see [`Diagnostic`](crate::Diagnostic).
pub enum ScardError {
    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    /// A YAML configuration file could not be parsed.
    Config(#[from] serde_yaml::Error),
}
