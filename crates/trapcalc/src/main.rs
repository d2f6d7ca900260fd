//! trapcalc — parallel trapezoidal integration.

use trapcalc_lib::{app, config, errors};

fn main() {
    let config = match config::AppConfig::try_parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => match config::into_integration_error(err) {
            Ok(invalid) => {
                eprintln!("Error: {invalid}");
                eprintln!("Usage: trapcalc <A> <B> <N> <TN>");
                std::process::exit(errors::handle_error(&invalid));
            }
            // Help, version, and anything else clap renders itself.
            Err(err) => err.exit(),
        },
    };

    // Logs go to stderr; stdout carries only the result line.
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
