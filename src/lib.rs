mod container;
mod error;
mod persist;
mod vectors;

pub use container::*;
pub use error::*;
pub use persist::*;
pub use vectors::*;

/// Where the demo binary writes and reads its scratch data.
pub const DEFAULT_PATH: &str = "file";
