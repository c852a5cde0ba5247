use parking_lot::RwLock;
use std::time::Duration;

use super::function_trait::{check_parameter_count, ExecutionContext, HostFunction};
use crate::hashing::fnv1_32;
use crate::hostfn_err::HostFnErr;
use crate::log_d;

pub const FNV1_32_KEY: &str = "__FNV1_32";

const TAG: &str = "Fnv1HashFunction";

const ARGUMENT_DESC: &[&str] = &["String to encode", "Variable to store value"];
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// `__FNV1_32(input[, variable])` — hashes the trimmed input with FNV-1
/// 32-bit and returns the decimal string form of the hash.
///
/// When a variable name is given, the trimmed input is stored under that
/// name before returning. The original plugin trimmed before storing, so the
/// raw value is never written.
#[derive(Default)]
pub struct Fnv1HashFunction {
    parameters: RwLock<Vec<String>>,
}

impl Fnv1HashFunction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostFunction for Fnv1HashFunction {
    fn reference_key(&self) -> &'static str {
        FNV1_32_KEY
    }

    fn argument_desc(&self) -> &'static [&'static str] {
        ARGUMENT_DESC
    }

    fn set_parameters(&self, parameters: Vec<String>) -> Result<(), HostFnErr> {
        check_parameter_count(FNV1_32_KEY, &parameters, 1, 2)?;

        let mut stored = self
            .parameters
            .try_write_for(LOCK_TIMEOUT)
            .ok_or_else(|| HostFnErr::LockFailure("Fnv1HashFunction.parameters".to_string()))?;
        *stored = parameters;
        Ok(())
    }

    fn execute(&self, context: &ExecutionContext) -> Result<String, HostFnErr> {
        let parameters = self
            .parameters
            .try_read_for(LOCK_TIMEOUT)
            .ok_or_else(|| HostFnErr::LockFailure("Fnv1HashFunction.parameters".to_string()))?;

        let input = match parameters.first() {
            Some(raw) => raw.trim(),
            None => {
                return Err(HostFnErr::InvalidArgument(
                    "executed before parameters were set".to_string(),
                ))
            }
        };

        if let Some(raw_name) = parameters.get(1) {
            let name = raw_name.trim();
            if name.is_empty() {
                return Err(HostFnErr::InvalidArgument(
                    "variable name must not be empty".to_string(),
                ));
            }

            context.variables.put(name, input.to_string());
            log_d!(TAG, "Stored input under variable {}", name);
        }

        Ok(fnv1_32(input.as_bytes()).to_string())
    }
}
