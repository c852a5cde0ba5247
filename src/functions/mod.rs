pub use fnv1_hash_function::{Fnv1HashFunction, FNV1_32_KEY};
pub use function_trait::{check_parameter_count, ExecutionContext, HostFunction};

mod fnv1_hash_function;
mod function_trait;
