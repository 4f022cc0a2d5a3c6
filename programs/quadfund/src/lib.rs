use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod quadfund {
    use super::*;

    // --- ESCROW & POOL LIFECYCLE ---
    pub fn initialize_escrow(ctx: Context<InitializeEscrow>, amount: u64) -> Result<()> {
        escrow::initialize_escrow(ctx, amount)
    }

    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        pool::initialize_pool(ctx)
    }

    // --- PROJECT REGISTRY & ADMISSION ---
    pub fn initialize_project(ctx: Context<InitializeProject>, name: String) -> Result<()> {
        project::initialize_project(ctx, name)
    }

    pub fn add_project_to_pool(ctx: Context<AddProjectToPool>) -> Result<()> {
        pool::add_project_to_pool(ctx)
    }

    pub fn remove_project_from_pool(ctx: Context<RemoveProjectFromPool>) -> Result<()> {
        pool::remove_project_from_pool(ctx)
    }

    pub fn set_is_in_pool(ctx: Context<SetIsInPool>, value: bool) -> Result<()> {
        project::set_is_in_pool(ctx, value)
    }

    // --- VOTING & DISTRIBUTION ---
    pub fn vote_for_project(ctx: Context<VoteForProject>, amount: u64) -> Result<()> {
        project::vote_for_project(ctx, amount)
    }

    pub fn distribute_escrow_amount(ctx: Context<DistributeEscrowAmount>) -> Result<()> {
        pool::distribute_escrow_amount(ctx)
    }
}
