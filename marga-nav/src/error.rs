//! Error type for the marga-nav binary.

use thiserror::Error;

/// Top-level CLI error.
#[derive(Debug, Error)]
pub enum NavError {
    /// Library failure (field construction, search, IO, protocol).
    #[error(transparent)]
    Route(#[from] bhumi_route::Error),

    /// Socket-level failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else worth aborting for.
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NavError>;
