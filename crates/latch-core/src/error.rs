use thiserror::Error;

/// Programming mistakes surfaced to the caller. These are not runtime
/// conditions and should not be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Unsupported type: {kind}")]
    UnsupportedAction { kind: String },

    #[error("{hook} must be used within a {provider}")]
    MissingProvider {
        hook: &'static str,
        provider: &'static str,
    },
}
