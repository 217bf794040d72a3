//! Error types, one enum per failure domain, unified under [`ScoutError`].
//!
//! External-world failures (oracle transport, persistence) are meant to be
//! recovered locally by their callers; only contract violations should
//! propagate to the surface.

mod oracle_error;
mod state_store_error;

pub use oracle_error::OracleError;
pub use state_store_error::StateStoreError;

/// Unified result type for the Scout workspace.
pub type ScoutResult<T> = Result<T, ScoutError>;

/// Top-level error for the Scout workspace.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    StateStore(#[from] StateStoreError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}
