use anchor_lang::prelude::*;

use crate::constants::{SEED_ESCROW, SEED_POOL};
use crate::errors::CustomError;
use crate::events::ProjectAdmitted;
use crate::state::{Escrow, Pool, Project};

#[derive(Accounts)]
pub struct AddProjectToPool<'info> {
    #[account(
        seeds = [SEED_ESCROW, authority.key().as_ref()],
        bump = escrow_account.bump,
        constraint = pool_account.escrow == escrow_account.key() @ CustomError::PoolMismatch
    )]
    pub escrow_account: Account<'info, Escrow>,

    #[account(
        mut,
        seeds = [SEED_POOL, authority.key().as_ref()],
        bump = pool_account.bump,
        constraint = pool_account.authority == authority.key() @ CustomError::Unauthorized
    )]
    pub pool_account: Account<'info, Pool>,

    #[account(mut)]
    pub project_account: Account<'info, Project>,

    pub authority: Signer<'info>,
}

pub fn add_project_to_pool(ctx: Context<AddProjectToPool>) -> Result<()> {
    let pool_key = ctx.accounts.pool_account.key();
    let project_key = ctx.accounts.project_account.key();

    let pool = &mut ctx.accounts.pool_account;
    let project = &mut ctx.accounts.project_account;

    pool.admit(pool_key, project_key, project)?;

    emit!(ProjectAdmitted {
        pool: pool_key,
        project: project_key,
        member_count: pool.projects.len() as u64,
    });

    Ok(())
}
