//! Constants shared by the integrator and the CLI.

/// Number of positional CLI arguments: `a b n tn`.
pub const EXPECTED_ARGS: usize = 4;

/// Smallest accepted integration bound.
pub const MIN_BOUND: i64 = 0;

/// Largest accepted integration bound.
pub const MAX_BOUND: i64 = 50;

/// Default relative tolerance when cross-checking executors.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Number of digits printed after the decimal point.
pub const OUTPUT_PRECISION: usize = 4;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed, missing, or out-of-contract arguments.
    pub const ERROR_INVALID_ARGUMENT: i32 = 2;
    /// Executors disagreed beyond tolerance during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
}
