pub mod add_project_to_pool;
pub mod distribute_escrow_amount;
pub mod initialize_pool;
pub mod remove_project_from_pool;

pub use add_project_to_pool::*;
pub use distribute_escrow_amount::*;
pub use initialize_pool::*;
pub use remove_project_from_pool::*;
