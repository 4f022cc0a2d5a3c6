use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_SIZE;
use crate::errors::CustomError;
use crate::utils::{quadratic_score, scaled_sqrt};

/// A funding recipient. `pool` is the single source of truth for membership;
/// `is_in_pool` must agree with it after every instruction.
#[account]
pub struct Project {
    pub owner: Pubkey,
    pub name: String,
    pub pool: Option<Pubkey>,
    pub is_in_pool: bool,
    pub cumulative_contribution: u64,
    /// Sum of sqrt(contribution) over all votes, scaled by MATH_PRECISION.
    pub cumulative_sqrt_contribution: u128,
    pub distributed_amt: u64,
    pub bump: u8,
}

impl Project {
    pub const BASE_LEN: usize = DISCRIMINATOR_SIZE +
        32 +       // owner
        4 +        // name prefix
        (1 + 32) + // pool
        1 +        // is_in_pool
        8 +        // cumulative_contribution
        16 +       // cumulative_sqrt_contribution
        8 +        // distributed_amt
        1;         // bump

    pub fn space(name: &str) -> usize {
        Self::BASE_LEN + name.len()
    }

    /// Current quadratic matching score in raw units.
    pub fn matching_score(&self) -> Result<u128> {
        quadratic_score(self.cumulative_sqrt_contribution, self.cumulative_contribution)
    }

    /// Folds one vote into the cumulative statistics. Returns the (old, new)
    /// score pair so the caller can keep the pool aggregate in step.
    pub fn record_contribution(&mut self, amount: u64) -> Result<(u128, u128)> {
        require!(amount > 0, CustomError::ZeroContribution);

        let old_score = self.matching_score()?;

        self.cumulative_contribution = self
            .cumulative_contribution
            .checked_add(amount)
            .ok_or(CustomError::ArithmeticOverflow)?;
        self.cumulative_sqrt_contribution = self
            .cumulative_sqrt_contribution
            .checked_add(scaled_sqrt(amount)?)
            .ok_or(CustomError::ArithmeticOverflow)?;

        let new_score = self.matching_score()?;
        Ok((old_score, new_score))
    }

    pub fn record_payout(&mut self, amount: u64) -> Result<()> {
        self.distributed_amt = self
            .distributed_amt
            .checked_add(amount)
            .ok_or(CustomError::ArithmeticOverflow)?;
        Ok(())
    }
}
