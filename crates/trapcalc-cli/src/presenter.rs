//! CLI result presenter.
//!
//! The integral goes to stdout as a single line; everything else goes to
//! stderr so the stdout contract holds for scripts.

use std::io::Write;

use trapcalc_core::{exact_integral, IntegrationRequest};
use trapcalc_orchestration::interfaces::{IntegrationReport, IntegrationResult, ResultPresenter};

use crate::output::{format_duration, format_integral, format_number, format_range, write_integral};

/// CLI result presenter.
pub struct CLIResultPresenter {
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(details: bool) -> Self {
        Self { details }
    }

    fn present_details(&self, request: &IntegrationRequest, report: &IntegrationReport) {
        let exact = exact_integral(request.lower(), request.upper());
        eprintln!("Backend: {}", report.backend);
        eprintln!("Interval: [{}, {}]", request.a, request.b);
        eprintln!("Subintervals: {}", format_number(request.n));
        eprintln!("Workers: {}", report.partials.len());
        eprintln!("Duration: {}", format_duration(report.duration));
        eprintln!("Absolute error: {:.3e}", (report.value - exact).abs());
        for partial in &report.partials {
            eprintln!(
                "  worker {:>3} {:<28} {}",
                partial.worker,
                format_range(partial.start, partial.end),
                format_integral(partial.value)
            );
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, request: &IntegrationRequest, report: &IntegrationReport) {
        if self.details {
            self.present_details(request, report);
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = write_integral(&mut out, report.value).and_then(|()| out.flush()) {
            tracing::error!(error = %e, "failed to write result");
        }
    }

    fn present_comparison(&self, request: &IntegrationRequest, results: &[IntegrationResult]) {
        if !self.details {
            return;
        }

        eprintln!("\nComparison Results (n = {}, tn = {}):", format_number(request.n), request.tn);
        eprintln!("{:-<60}", "");
        for result in results {
            let (value, status) = match &result.outcome {
                Ok(report) => (format_integral(report.value), "OK"),
                Err(_) => (String::from("-"), "ERROR"),
            };
            eprintln!(
                "  {:<12} {:>20} {:>10} [{}]",
                result.backend,
                value,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
