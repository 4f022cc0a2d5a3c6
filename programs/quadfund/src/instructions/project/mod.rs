pub mod initialize_project;
pub mod set_is_in_pool;
pub mod vote_for_project;

pub use initialize_project::*;
pub use set_is_in_pool::*;
pub use vote_for_project::*;
