//! Error types for BhumiRoute.

use thiserror::Error;

use crate::core::Cell;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// BhumiRoute error type.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure reading inputs or talking to a follower.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Texture decode failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON encode/decode failure.
    #[error("serialization error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Configuration problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Corrupt or inconsistent input data.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// Height grid and obstacle mask disagree on dimensions.
    #[error(
        "terrain dimensions mismatch: heights are {height_rows}x{height_cols}, \
         mask is {mask_rows}x{mask_cols}"
    )]
    DimensionMismatch {
        /// Height grid rows.
        height_rows: usize,
        /// Height grid columns.
        height_cols: usize,
        /// Mask rows.
        mask_rows: usize,
        /// Mask columns.
        mask_cols: usize,
    },

    /// A search endpoint is outside the grid or blocked.
    #[error("cell {0} is outside the grid or blocked")]
    InvalidEndpoint(Cell),

    /// Wire protocol violation or inconsistent follower behavior.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A follower missed its exchange deadline.
    #[error("follower exchange timed out")]
    Timeout,

    /// The frontier drained without reaching the source: the endpoints are
    /// disconnected. A reportable outcome, not a crash.
    #[error("no route from {from} to {to}")]
    NoRoute {
        /// Requested source cell.
        from: Cell,
        /// Requested destination cell.
        to: Cell,
    },
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
