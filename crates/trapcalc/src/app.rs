//! Application entry point and dispatch.

use anyhow::Result;

use trapcalc_cli::presenter::CLIResultPresenter;
use trapcalc_orchestration::interfaces::ResultPresenter;
use trapcalc_orchestration::orchestrator::{analyze_comparison_results, execute_integrations};
use trapcalc_orchestration::registry::DefaultFactory;
use trapcalc_orchestration::selection::get_executors_to_run;

use crate::config::AppConfig;

/// Run the application.
///
/// Every argument is validated before a worker is spawned, and nothing is
/// written to stdout unless the run succeeds.
pub fn run(config: &AppConfig) -> Result<()> {
    let request = config.request()?;
    let factory = DefaultFactory::new();
    let executors = get_executors_to_run(&config.backend, &factory)?;

    tracing::debug!(
        a = request.a,
        b = request.b,
        n = request.n,
        tn = request.tn,
        backends = executors.len(),
        "starting integration"
    );

    let results = execute_integrations(&request, &executors);
    let presenter = CLIResultPresenter::new(config.details);

    for result in &results {
        if let Err(e) = &result.outcome {
            tracing::warn!(backend = %result.backend, error = %e, "backend failed");
        }
    }

    if results.len() > 1 {
        presenter.present_comparison(&request, &results);
        analyze_comparison_results(&results, config.tolerance)?;
    }

    if let Some(report) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
        presenter.present_result(&request, report);
        return Ok(());
    }

    let error = results.into_iter().find_map(|r| r.outcome.err());
    Err(error.map_or_else(
        || anyhow::anyhow!("no backend produced a result"),
        anyhow::Error::new,
    ))
}
