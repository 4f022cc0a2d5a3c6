use anchor_lang::prelude::*;

use crate::errors::CustomError;
use crate::events::MembershipFlagCleared;
use crate::state::Project;

#[derive(Accounts)]
pub struct SetIsInPool<'info> {
    #[account(
        mut,
        constraint = project_account.owner == owner.key() @ CustomError::Unauthorized
    )]
    pub project_account: Account<'info, Project>,

    pub owner: Signer<'info>,
}

/// Corrective override only. Membership is asserted solely by
/// `add_project_to_pool` and cleared by `remove_project_from_pool`; this
/// instruction can only drop a stale flag on a project that holds no pool
/// reference, so the flag and the reference can never disagree.
pub fn set_is_in_pool(ctx: Context<SetIsInPool>, value: bool) -> Result<()> {
    let project = &mut ctx.accounts.project_account;

    require!(!value, CustomError::MembershipDesync);
    require!(project.pool.is_none(), CustomError::MembershipDesync);

    project.is_in_pool = false;

    emit!(MembershipFlagCleared {
        project: project.key(),
    });

    Ok(())
}
