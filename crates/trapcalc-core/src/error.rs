//! Error type shared across the workspace.

/// Error type for integration requests and runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrationError {
    /// Wrong number of positional arguments.
    #[error(
        "wrong number of arguments: expected {count} (`a b n tn`), {0}",
        count = crate::constants::EXPECTED_ARGS
    )]
    ArgumentCount(String),

    /// A positional argument is not a valid integer.
    #[error("invalid value '{value}' for argument {arg}")]
    ArgumentParse {
        /// Argument name.
        arg: String,
        /// Offending token.
        value: String,
    },

    /// Parsed arguments violate the request contract.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A worker panicked or could not be started.
    #[error("worker failure: {0}")]
    Worker(String),

    /// Configuration error (e.g. unknown backend).
    #[error("configuration error: {0}")]
    Config(String),

    /// No usable result was produced.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Two backends disagreed beyond the tolerance.
    #[error("result mismatch: {backend} = {value} but {reference_backend} = {reference}")]
    Mismatch {
        /// Backend whose value diverged.
        backend: String,
        /// Its value.
        value: f64,
        /// Backend used as reference.
        reference_backend: String,
        /// Reference value.
        reference: f64,
    },
}

impl IntegrationError {
    /// Whether this error stems from the command line rather than the run.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::ArgumentCount(_)
                | Self::ArgumentParse { .. }
                | Self::InvalidRequest(_)
                | Self::Config(_)
        )
    }
}
