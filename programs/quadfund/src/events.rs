use anchor_lang::prelude::*;

#[event]
pub struct EscrowInitialized {
    pub escrow: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub escrow: Pubkey,
    pub authority: Pubkey,
    pub matching_budget: u64,
}

#[event]
pub struct ProjectRegistered {
    pub project: Pubkey,
    pub owner: Pubkey,
    pub name: String,
}

#[event]
pub struct ProjectAdmitted {
    pub pool: Pubkey,
    pub project: Pubkey,
    pub member_count: u64,
}

#[event]
pub struct ProjectRemoved {
    pub pool: Pubkey,
    pub project: Pubkey,
}

#[event]
pub struct MembershipFlagCleared {
    pub project: Pubkey,
}

#[event]
pub struct VoteCast {
    pub pool: Pubkey,
    pub project: Pubkey,
    pub voter: Pubkey,
    pub amount: u64,
    pub cumulative_contribution: u64,
}

#[event]
pub struct MatchingDistributed {
    pub pool: Pubkey,
    pub project: Pubkey,
    pub amount: u64,
    pub total_distributed: u64,
}
