use anchor_lang::prelude::*;

use crate::constants::{SEED_ESCROW, SEED_POOL};
use crate::errors::CustomError;
use crate::events::MatchingDistributed;
use crate::state::{Escrow, Pool, Project};

#[derive(Accounts)]
pub struct DistributeEscrowAmount<'info> {
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
        bump = pool_account.bump,
        constraint = pool_account.authority == authority.key() @ CustomError::Unauthorized
    )]
    pub pool_account: Account<'info, Pool>,

    #[account(
        mut,
        constraint = project_account.is_in_pool @ CustomError::NotInPool,
        constraint = project_account.pool == Some(pool_account.key()) @ CustomError::PoolMismatch
    )]
    pub project_account: Account<'info, Project>,

    pub authority: Signer<'info>,
}

pub fn distribute_escrow_amount(ctx: Context<DistributeEscrowAmount>) -> Result<()> {
    let score = ctx.accounts.project_account.matching_score()?;
    let payout = ctx
        .accounts
        .pool_account
        .marginal_payout(score, ctx.accounts.project_account.distributed_amt)?;

    // No new matching weight since the last round is a valid no-op, not an
    // error; the caller can re-invoke after further votes.
    if payout > 0 {
        ctx.accounts.escrow_account.debit(payout)?;
        ctx.accounts.project_account.record_payout(payout)?;
        ctx.accounts.pool_account.record_distribution(payout)?;

        // The escrow is program-owned, so the lamports move by direct borrow
        // rather than a system-program transfer.
        let escrow_info = ctx.accounts.escrow_account.to_account_info();
        let project_info = ctx.accounts.project_account.to_account_info();

        let mut escrow_lamports = escrow_info.try_borrow_mut_lamports()?;
        **escrow_lamports = escrow_lamports
            .checked_sub(payout)
            .ok_or(CustomError::InsufficientEscrowBalance)?;

        let mut project_lamports = project_info.try_borrow_mut_lamports()?;
        **project_lamports = project_lamports
            .checked_add(payout)
            .ok_or(CustomError::ArithmeticOverflow)?;
    }

    msg!("Matching distributed. Amount: {}", payout);

    emit!(MatchingDistributed {
        pool: ctx.accounts.pool_account.key(),
        project: ctx.accounts.project_account.key(),
        amount: payout,
        total_distributed: ctx.accounts.pool_account.total_distributed,
    });

    Ok(())
}
