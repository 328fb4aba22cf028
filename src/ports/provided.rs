use thiserror::Error;

/// Errors raised by `Env` and the typed accessors.
///
/// `Missing` carries the key. Every other variant carries the offending raw value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    #[error("Missing the environment variable \"{0}\".")]
    Missing(String),
    #[error("{0} is not a valid boolean.")]
    InvalidBool(String),
    #[error("{0} is not a valid integer.")]
    InvalidInt(String),
    #[error("{0} is not a valid radix between 2 and 36.")]
    InvalidRadix(u32),
    #[error("{0} is not a valid float.")]
    InvalidFloat(String),
    #[error("{0} is not a valid port number between 0 and 65535.")]
    InvalidPort(String),
    #[error("{0} is not a valid URL.")]
    InvalidUrl(String),
    #[error("{0} is not valid JSON: {1}")]
    InvalidJson(String, String),
    #[error("evaluating {0} failed: {1}")]
    EvalFailed(String, String),
}

impl EnvError {
    /// True only for the missing-value case.
    pub fn is_missing(&self) -> bool {
        matches!(self, EnvError::Missing(_))
    }
}
