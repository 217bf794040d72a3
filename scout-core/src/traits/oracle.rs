use crate::errors::OracleError;

/// Transport to the external reasoning service.
///
/// One blocking call; prompt construction and response interpretation live
/// in the oracle adapter, not here. Implementations are expected to bound
/// their own wait so a dead endpoint surfaces as `OracleError::Transport`
/// instead of hanging the caller.
pub trait IOracleTransport: Send + Sync {
    /// Send a prompt and return the raw text response.
    ///
    /// `schema_hint` describes the JSON shape the caller expects back;
    /// transports may pass it through as a response-format hint or ignore it.
    fn ask(&self, prompt: &str, schema_hint: &str) -> Result<String, OracleError>;
}
