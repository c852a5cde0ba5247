use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize)]
pub enum HostFnErr {
    // Call site
    InvalidArgument(String),
    WrongParameterCount(String, usize, usize, usize),

    // Dispatch
    UnknownFunction(String),

    // System / Concurrency
    LockFailure(String),
}

impl Display for HostFnErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HostFnErr::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            HostFnErr::WrongParameterCount(key, min, max, actual) => {
                write!(
                    f,
                    "{key} expects between {min} and {max} parameters, got {actual}"
                )
            }

            HostFnErr::UnknownFunction(key) => {
                write!(f, "No function registered for key: {key}")
            }

            HostFnErr::LockFailure(msg) => write!(f, "Failed to acquire lock: {msg}"),
        }
    }
}

impl HostFnErr {
    pub fn name(&self) -> &'static str {
        match self {
            HostFnErr::InvalidArgument(_) => "InvalidArgument",
            HostFnErr::WrongParameterCount(_, _, _, _) => "WrongParameterCount",

            HostFnErr::UnknownFunction(_) => "UnknownFunction",

            HostFnErr::LockFailure(_) => "LockFailure",
        }
    }
}
