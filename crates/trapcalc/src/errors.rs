//! Error handling and exit codes.

use trapcalc_core::exit_codes;
use trapcalc_core::IntegrationError;

/// Map an integration error to its process exit code.
pub fn handle_error(err: &IntegrationError) -> i32 {
    match err {
        IntegrationError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        e if e.is_invalid_argument() => exit_codes::ERROR_INVALID_ARGUMENT,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Map any application error to its process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<IntegrationError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
