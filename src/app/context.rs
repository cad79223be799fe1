use crate::domain::AppConfig;
use crate::ports::ScheduleBackend;

/// Application context holding dependencies for command execution.
pub struct AppContext<B: ScheduleBackend> {
    backend: B,
    config: AppConfig,
}

impl<B: ScheduleBackend> AppContext<B> {
    /// Create a new application context.
    pub fn new(backend: B, config: AppConfig) -> Self {
        Self { backend, config }
    }

    /// Get a reference to the schedule backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
