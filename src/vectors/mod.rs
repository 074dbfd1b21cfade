mod stream;
mod vector;
pub use stream::*;
pub use vector::*;
