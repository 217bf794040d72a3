//! # scout-learning
//!
//! Adaptive learning over verification outcomes. Four durable stores feed
//! back into the search and verification loop:
//!
//! - **verification history**: append-only per-person outcome records,
//!   updated by manual feedback,
//! - **query effectiveness**: per-query usage aggregates broken down by
//!   platform and sport,
//! - **confidence thresholds**: per-(sport, platform) acceptance bars moved
//!   by feedback,
//! - **pattern cache**: generalized query templates proven to find matches.
//!
//! All state is held in memory behind mutexes and written through an
//! [`IStateStore`](scout_core::traits::IStateStore); persistence failures
//! degrade to in-memory operation rather than failing the caller.

mod defaults;
mod effectiveness;
mod templates;
mod thresholds;

pub mod store;

pub use store::LearningStore;
