use anchor_lang::prelude::*;

use crate::constants::{SEED_ESCROW, SEED_POOL};
use crate::errors::CustomError;
use crate::events::PoolInitialized;
use crate::state::{Escrow, Pool};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = authority,
        space = Pool::LEN,
        seeds = [SEED_POOL, authority.key().as_ref()],
        bump
    )]
    pub pool_account: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [SEED_ESCROW, authority.key().as_ref()],
        bump = escrow_account.bump,
        constraint = escrow_account.authority == authority.key() @ CustomError::Unauthorized
    )]
    pub escrow_account: Account<'info, Escrow>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
    let pool_key = ctx.accounts.pool_account.key();
    let escrow = &mut ctx.accounts.escrow_account;

    escrow.bind_pool(pool_key)?;

    let pool = &mut ctx.accounts.pool_account;
    pool.authority = ctx.accounts.authority.key();
    pool.escrow = escrow.key();
    pool.projects = Vec::new();
    // The matching funds this pool may ever pay out: the escrow balance at
    // binding time. Voter deposits arriving later do not raise it.
    pool.matching_budget = escrow.balance;
    pool.total_score = 0;
    pool.total_distributed = 0;
    pool.bump = ctx.bumps.pool_account;

    emit!(PoolInitialized {
        pool: pool_key,
        escrow: pool.escrow,
        authority: pool.authority,
        matching_budget: pool.matching_budget,
    });

    Ok(())
}
