use std::sync::Arc;

use crate::output_logger::LogLevel;
use crate::variable_store::VariableStore;

#[derive(Clone, Default)]
pub struct HostFnOptions {
    pub output_log_level: Option<LogLevel>,
    pub variable_store: Option<Arc<dyn VariableStore>>,
}

impl HostFnOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> HostFnOptionsBuilder {
        HostFnOptionsBuilder::default()
    }
}

#[derive(Default)]
pub struct HostFnOptionsBuilder {
    inner: HostFnOptions,
}

impl HostFnOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output_log_level(mut self, output_log_level: Option<LogLevel>) -> Self {
        self.inner.output_log_level = output_log_level;
        self
    }

    #[must_use]
    pub fn variable_store(mut self, variable_store: Option<Arc<dyn VariableStore>>) -> Self {
        self.inner.variable_store = variable_store;
        self
    }

    #[must_use]
    pub fn build(self) -> HostFnOptions {
        self.inner
    }
}
