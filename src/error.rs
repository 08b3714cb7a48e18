//! Error types for the wnja library.
//!
//! All failures are represented by the [`WnjaError`] enum. A lemma that is
//! absent from the lexicon is *not* an error: it is reported as
//! [`SynonymLookup::NotFound`](crate::thesaurus::SynonymLookup::NotFound).
//!
//! # Examples
//!
//! ```
//! use wnja::error::{WnjaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WnjaError::invalid_argument("empty lemma"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wnja operations.
#[derive(Error, Debug)]
pub enum WnjaError {
    /// The lexical store could not be opened or queried.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Caller supplied an unusable argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (config files, database path checks, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WnjaError.
pub type Result<T> = std::result::Result<T, WnjaError>;

impl WnjaError {
    /// Create a new store-unavailable error.
    pub fn store_unavailable<S: Into<String>>(msg: S) -> Self {
        WnjaError::StoreUnavailable(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WnjaError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WnjaError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WnjaError::Other(msg.into())
    }

    /// Whether the error means the store itself is unusable.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, WnjaError::StoreUnavailable(_))
    }
}

impl From<sqlx::Error> for WnjaError {
    fn from(err: sqlx::Error) -> Self {
        WnjaError::StoreUnavailable(err.to_string())
    }
}
