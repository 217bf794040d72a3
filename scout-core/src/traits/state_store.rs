use crate::errors::StateStoreError;

/// Durable key-value persistence for the learning stores.
///
/// Values are serialized documents (JSON text); round-trip must be lossless
/// for nested string/float/bool/list/map structures. A missing key loads as
/// `Ok(None)`, never as an error.
pub trait IStateStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StateStoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StateStoreError>;
}
