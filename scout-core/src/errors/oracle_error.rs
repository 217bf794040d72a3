/// Failures from the judgment oracle.
///
/// Transport and parse failures are kept distinct so call sites can tell
/// "oracle was unreachable" from "oracle said something unusable" for
/// metrics, even though both degrade to a low-confidence verdict.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OracleError {
    #[error("oracle transport failed: {message}")]
    Transport { message: String },

    #[error("oracle response unparsable: {snippet}")]
    Parse { snippet: String },
}

impl OracleError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn parse(snippet: impl Into<String>) -> Self {
        Self::Parse {
            snippet: snippet.into(),
        }
    }
}
