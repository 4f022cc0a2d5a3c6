pub mod initialize_escrow;

pub use initialize_escrow::*;
