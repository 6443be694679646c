//! Error types for stackdeploy.

use thiserror::Error;

/// One variant per failure class. Remote-call failures are normalized
/// into this taxonomy instead of leaking client-library error types.
#[derive(Debug, Error)]
pub enum Error {
    #[error("template unreadable: {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("creation rejected: {0}")]
    Rejected(String),

    #[error("deployment failed: {0}")]
    DeploymentFailed(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
