//! Seams to the excluded collaborators: oracle transport and persistence.

mod oracle;
mod state_store;

pub use oracle::IOracleTransport;
pub use state_store::IStateStore;
