//! Executor factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use trapcalc_core::IntegrationError;

use crate::executor::{Executor, RayonExecutor, SequentialExecutor, ThreadExecutor};

/// Factory trait for creating executors.
pub trait ExecutorFactory: Send + Sync {
    /// Get or create an executor by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Executor>, IntegrationError>;

    /// List all available executor names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Executor>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_executor(name: &str) -> Result<Arc<dyn Executor>, IntegrationError> {
        match name {
            "threads" | "thread" => Ok(Arc::new(ThreadExecutor::new())),
            "rayon" => Ok(Arc::new(RayonExecutor::new())),
            "sequential" | "seq" => Ok(Arc::new(SequentialExecutor::new())),
            _ => Err(IntegrationError::Config(format!("unknown backend: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Executor>, IntegrationError> {
        if let Some(executor) = self.cache.read().get(name) {
            return Ok(Arc::clone(executor));
        }

        let executor = Self::create_executor(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&executor));
        Ok(executor)
    }

    fn available(&self) -> Vec<&str> {
        vec!["threads", "rayon", "sequential"]
    }
}
