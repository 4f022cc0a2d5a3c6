use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LENGTH, SEED_PROJECT};
use crate::errors::CustomError;
use crate::events::ProjectRegistered;
use crate::state::{Pool, Project};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct InitializeProject<'info> {
    #[account(
        init,
        payer = owner,
        space = Project::space(&name),
        seeds = [SEED_PROJECT, pool_account.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub project_account: Account<'info, Project>,

    /// The pool this project intends to join; part of the project's address
    /// derivation, not yet a membership.
    pub pool_account: Account<'info, Pool>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_project(ctx: Context<InitializeProject>, name: String) -> Result<()> {
    require!(name.len() <= MAX_NAME_LENGTH, CustomError::NameTooLong);

    let project = &mut ctx.accounts.project_account;
    project.owner = ctx.accounts.owner.key();
    project.name = name.clone();
    project.pool = None;
    project.is_in_pool = false;
    project.cumulative_contribution = 0;
    project.cumulative_sqrt_contribution = 0;
    project.distributed_amt = 0;
    project.bump = ctx.bumps.project_account;

    emit!(ProjectRegistered {
        project: project.key(),
        owner: project.owner,
        name,
    });

    Ok(())
}
