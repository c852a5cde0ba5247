pub use encoding::*;
pub use fnv::*;

pub mod encoding;
mod fnv;
