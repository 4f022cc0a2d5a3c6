pub mod escrow;
pub mod pool;
pub mod project;

pub use escrow::*;
pub use pool::*;
pub use project::*;
