use std::sync::Arc;

use crate::function_registry::FunctionRegistry;
use crate::functions::{ExecutionContext, Fnv1HashFunction};
use crate::hostfn_err::HostFnErr;
use crate::hostfn_options::HostFnOptions;
use crate::output_logger::initialize_output_logger;
use crate::variable_store::{InMemoryVariableStore, VariableStore};
use crate::{log_d, unwrap_or_return};

const TAG: &str = "FunctionHost";

/// Minimal stand-in for the load-testing host: owns the variable context and
/// dispatches function calls by reference key. A real host supplies its own
/// `VariableStore` through [`HostFnOptions`].
pub struct FunctionHost {
    variables: Arc<dyn VariableStore>,
}

impl FunctionHost {
    pub fn new(options: &HostFnOptions) -> Self {
        initialize_output_logger(&options.output_log_level, None);

        FunctionRegistry::register(Arc::new(Fnv1HashFunction::new()));

        let variables = options
            .variable_store
            .clone()
            .unwrap_or_else(|| Arc::new(InMemoryVariableStore::new()));

        Self { variables }
    }

    pub fn execute(&self, key: &str, parameters: Vec<String>) -> Result<String, HostFnErr> {
        let function = unwrap_or_return!(
            FunctionRegistry::get(key),
            Err(HostFnErr::UnknownFunction(key.to_string()))
        );

        function.set_parameters(parameters)?;

        let context = ExecutionContext::new(self.variables.clone());
        let result = function.execute(&context)?;
        log_d!(TAG, "{} -> {}", key, result);

        Ok(result)
    }

    #[must_use]
    pub fn variables(&self) -> Arc<dyn VariableStore> {
        self.variables.clone()
    }
}
