//! Backend selection logic.

use std::sync::Arc;

use trapcalc_core::IntegrationError;

use crate::executor::Executor;
use crate::registry::ExecutorFactory;

/// Get executors to run based on backend selection.
pub fn get_executors_to_run(
    backend: &str,
    factory: &dyn ExecutorFactory,
) -> Result<Vec<Arc<dyn Executor>>, IntegrationError> {
    match backend {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
