use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};

use crate::constants::{SEED_ESCROW, SEED_POOL};
use crate::errors::CustomError;
use crate::events::VoteCast;
use crate::state::{Escrow, Pool, Project};

#[derive(Accounts)]
pub struct VoteForProject<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_ESCROW, escrow_account.authority.as_ref()],
        bump = escrow_account.bump,
        constraint = pool_account.escrow == escrow_account.key() @ CustomError::PoolMismatch
    )]
    pub escrow_account: Account<'info, Escrow>,

    #[account(
        mut,
        seeds = [SEED_POOL, pool_account.authority.as_ref()],
        bump = pool_account.bump
    )]
    pub pool_account: Account<'info, Pool>,

    #[account(
        mut,
        constraint = project_account.is_in_pool @ CustomError::NotInPool,
        constraint = project_account.pool == Some(pool_account.key()) @ CustomError::PoolMismatch
    )]
    pub project_account: Account<'info, Project>,

    pub system_program: Program<'info, System>,
}

pub fn vote_for_project(ctx: Context<VoteForProject>, amount: u64) -> Result<()> {
    let project = &mut ctx.accounts.project_account;
    let (old_score, new_score) = project.record_contribution(amount)?;

    let pool = &mut ctx.accounts.pool_account;
    pool.fold_score_delta(old_score, new_score)?;

    // Contributed funds live in the pool's escrow until distribution.
    invoke(
        &system_instruction::transfer(
            &ctx.accounts.voter.key(),
            &ctx.accounts.escrow_account.key(),
            amount,
        ),
        &[
            ctx.accounts.voter.to_account_info(),
            ctx.accounts.escrow_account.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;
    ctx.accounts.escrow_account.credit(amount)?;

    emit!(VoteCast {
        pool: pool.key(),
        project: project.key(),
        voter: ctx.accounts.voter.key(),
        amount,
        cumulative_contribution: project.cumulative_contribution,
    });

    Ok(())
}
