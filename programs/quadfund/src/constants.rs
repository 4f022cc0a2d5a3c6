pub const SEED_ESCROW: &[u8] = b"escrow";
pub const SEED_POOL: &[u8] = b"pool";
pub const SEED_PROJECT: &[u8] = b"project";

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_POOL_PROJECTS: usize = 32;
pub const DISCRIMINATOR_SIZE: usize = 8;
