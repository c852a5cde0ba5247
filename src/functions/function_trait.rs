use std::sync::Arc;

use crate::hostfn_err::HostFnErr;
use crate::variable_store::VariableStore;

/// Per-execution state handed to a function by the host. Only variable
/// storage is modeled; the rest of the host context stays on the host side.
pub struct ExecutionContext {
    pub variables: Arc<dyn VariableStore>,
}

impl ExecutionContext {
    #[must_use]
    pub fn new(variables: Arc<dyn VariableStore>) -> Self {
        Self { variables }
    }
}

/// A custom function the host can dispatch by reference key.
///
/// The host compiles a test plan once, calling `set_parameters`, and then
/// executes the function from many sampler threads. Implementations hold
/// their parameters behind interior mutability for that reason.
pub trait HostFunction: Send + Sync {
    /// The name the host dispatches on, e.g. `__FNV1_32`.
    fn reference_key(&self) -> &'static str;

    fn argument_desc(&self) -> &'static [&'static str];

    fn set_parameters(&self, parameters: Vec<String>) -> Result<(), HostFnErr>;

    fn execute(&self, context: &ExecutionContext) -> Result<String, HostFnErr>;
}

pub fn check_parameter_count(
    key: &str,
    parameters: &[String],
    min: usize,
    max: usize,
) -> Result<(), HostFnErr> {
    let actual = parameters.len();
    if actual < min || actual > max {
        return Err(HostFnErr::WrongParameterCount(
            key.to_string(),
            min,
            max,
            actual,
        ));
    }
    Ok(())
}
