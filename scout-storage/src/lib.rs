//! # scout-storage
//!
//! `IStateStore` implementations: a JSON-file-backed store with atomic
//! writes for production use, and an in-memory store for tests.
//!
//! Each store key maps to one `<key>.json` document under the store
//! directory. Writes go through a temp file + rename so a crash mid-write
//! never leaves a half-written document behind.

mod json_store;
mod memory_store;

pub use json_store::JsonStateStore;
pub use memory_store::MemoryStateStore;
