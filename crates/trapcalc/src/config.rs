//! Application configuration from CLI arguments and environment.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use trapcalc_core::{IntegrationError, IntegrationRequest, DEFAULT_TOLERANCE};

/// trapcalc — integrate sqrt(1 + e^x) over [A, B] with the trapezoidal rule
/// split across TN worker threads.
#[derive(Parser, Debug)]
#[command(name = "trapcalc", version, about)]
pub struct AppConfig {
    /// Lower integration bound.
    #[arg(value_name = "A", allow_negative_numbers = true)]
    pub a: i64,

    /// Upper integration bound.
    #[arg(value_name = "B", allow_negative_numbers = true)]
    pub b: i64,

    /// Number of subintervals.
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub n: u64,

    /// Number of worker threads.
    #[arg(value_name = "TN", allow_negative_numbers = true)]
    pub tn: usize,

    /// Execution backend: threads (alias thread), rayon, sequential (alias seq), or all.
    #[arg(long, default_value = "threads", env = "TRAPCALC_BACKEND")]
    pub backend: String,

    /// Relative tolerance when cross-checking backends.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show per-worker details on stderr.
    #[arg(short, long)]
    pub details: bool,
}

impl AppConfig {
    /// Parse arguments, including the program name.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    /// Build the integration request from the positional arguments.
    pub fn request(&self) -> Result<IntegrationRequest, IntegrationError> {
        IntegrationRequest::new(self.a, self.b, self.n, self.tn)
    }
}

fn context(err: &clap::Error, kind: ContextKind) -> String {
    match err.get(kind) {
        Some(ContextValue::String(s)) => s.clone(),
        Some(ContextValue::Strings(v)) => v.join(" "),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Classify a clap error as an argument error.
///
/// Returns the clap error unchanged when clap should render it itself
/// (help, version, and similar).
pub fn into_integration_error(err: clap::Error) -> Result<IntegrationError, clap::Error> {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => Ok(IntegrationError::ArgumentCount(format!(
            "missing {}",
            context(&err, ContextKind::InvalidArg)
        ))),
        ErrorKind::UnknownArgument => {
            let arg = context(&err, ContextKind::InvalidArg);
            // Negative numbers are values, so an extra one is a surplus positional.
            if arg.starts_with('-') && arg.parse::<f64>().is_err() {
                Ok(IntegrationError::Config(format!("unknown option '{arg}'")))
            } else {
                Ok(IntegrationError::ArgumentCount(format!("unexpected '{arg}'")))
            }
        }
        ErrorKind::TooManyValues | ErrorKind::TooFewValues | ErrorKind::WrongNumberOfValues => Ok(
            IntegrationError::ArgumentCount(context(&err, ContextKind::InvalidArg)),
        ),
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
            Ok(IntegrationError::ArgumentParse {
                arg: context(&err, ContextKind::InvalidArg),
                value: context(&err, ContextKind::InvalidValue),
            })
        }
        _ => Err(err),
    }
}
