pub use function_registry::FunctionRegistry;
pub use functions::{ExecutionContext, Fnv1HashFunction, HostFunction};
pub use hashing::TextEncoding;
pub use host::FunctionHost;
pub use hostfn_err::HostFnErr;
pub use hostfn_options::HostFnOptions;
pub use variable_store::{InMemoryVariableStore, VariableStore};

pub mod function_registry;
pub mod functions;
pub mod hashing;
pub mod host;
pub mod hostfn_options;
pub mod output_logger;
pub mod variable_store;

mod hostfn_err;
mod macros;
