/// Persistence-layer errors for the learning state stores.
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("I/O error on store key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization failed for store key '{key}': {message}")]
    Serialization { key: String, message: String },
}

impl StateStoreError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    pub fn serialization(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            key: key.into(),
            message: message.into(),
        }
    }
}
