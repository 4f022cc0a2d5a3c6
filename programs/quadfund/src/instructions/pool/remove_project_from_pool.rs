use anchor_lang::prelude::*;

use crate::constants::SEED_POOL;
use crate::errors::CustomError;
use crate::events::ProjectRemoved;
use crate::state::{Pool, Project};

#[derive(Accounts)]
pub struct RemoveProjectFromPool<'info> {
    #[account(
        mut,
        seeds = [SEED_POOL, authority.key().as_ref()],
        bump = pool_account.bump,
        constraint = pool_account.authority == authority.key() @ CustomError::Unauthorized
    )]
    pub pool_account: Account<'info, Pool>,

    #[account(
        mut,
        constraint = project_account.pool == Some(pool_account.key()) @ CustomError::PoolMismatch
    )]
    pub project_account: Account<'info, Project>,

    pub authority: Signer<'info>,
}

pub fn remove_project_from_pool(ctx: Context<RemoveProjectFromPool>) -> Result<()> {
    let pool_key = ctx.accounts.pool_account.key();
    let project_key = ctx.accounts.project_account.key();

    let pool = &mut ctx.accounts.pool_account;
    let project = &mut ctx.accounts.project_account;

    pool.release(project_key, project)?;

    emit!(ProjectRemoved {
        pool: pool_key,
        project: project_key,
    });

    Ok(())
}
