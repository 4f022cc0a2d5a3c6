use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};

use crate::constants::SEED_ESCROW;
use crate::events::EscrowInitialized;
use crate::state::Escrow;

#[derive(Accounts)]
pub struct InitializeEscrow<'info> {
    #[account(
        init,
        payer = authority,
        space = Escrow::LEN,
        seeds = [SEED_ESCROW, authority.key().as_ref()],
        bump
    )]
    pub escrow_account: Account<'info, Escrow>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_escrow(ctx: Context<InitializeEscrow>, amount: u64) -> Result<()> {
    // Deposit first: if the authority cannot fund the escrow, the whole
    // instruction aborts and the account is never created.
    if amount > 0 {
        invoke(
            &system_instruction::transfer(
                &ctx.accounts.authority.key(),
                &ctx.accounts.escrow_account.key(),
                amount,
            ),
            &[
                ctx.accounts.authority.to_account_info(),
                ctx.accounts.escrow_account.to_account_info(),
                ctx.accounts.system_program.to_account_info(),
            ],
        )?;
    }

    let escrow = &mut ctx.accounts.escrow_account;
    escrow.authority = ctx.accounts.authority.key();
    escrow.balance = amount;
    escrow.bound_pool = None;
    escrow.bump = ctx.bumps.escrow_account;

    emit!(EscrowInitialized {
        escrow: escrow.key(),
        authority: escrow.authority,
        amount,
    });

    Ok(())
}
