pub mod block;
pub mod endpoint;
pub mod section;

pub use block::*;
pub use endpoint::*;
pub use section::*;
