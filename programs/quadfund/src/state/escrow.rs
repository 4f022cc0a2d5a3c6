use anchor_lang::prelude::*;

use crate::errors::CustomError;

/// Custody account for one authority's matching funds. Every contributed and
/// deposited unit passes through here; `balance` mirrors the lamports the
/// escrow holds on top of rent.
#[account]
pub struct Escrow {
    pub authority: Pubkey,
    pub balance: u64,
    pub bound_pool: Option<Pubkey>,
    pub bump: u8,
}

impl Escrow {
    pub const LEN: usize = 8 + // discriminator
        32 +       // authority
        8 +        // balance
        (1 + 32) + // bound_pool
        1;         // bump

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(CustomError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.balance, CustomError::InsufficientEscrowBalance);
        self.balance -= amount;
        Ok(())
    }

    /// One pool per escrow. The binding is permanent.
    pub fn bind_pool(&mut self, pool: Pubkey) -> Result<()> {
        require!(self.bound_pool.is_none(), CustomError::EscrowAlreadyBound);
        self.bound_pool = Some(pool);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escrow(balance: u64) -> Escrow {
        Escrow {
            authority: Pubkey::new_unique(),
            balance,
            bound_pool: None,
            bump: 255,
        }
    }

    #[test]
    fn credit_and_debit_track_balance() {
        let mut e = escrow(0);
        e.credit(10_000).unwrap();
        assert_eq!(e.balance, 10_000);
        e.debit(4_000).unwrap();
        assert_eq!(e.balance, 6_000);
    }

    #[test]
    fn debit_never_goes_negative() {
        let mut e = escrow(100);
        let err = e.debit(101).unwrap_err();
        assert_eq!(err, CustomError::InsufficientEscrowBalance.into());
        assert_eq!(e.balance, 100);
    }

    #[test]
    fn credit_checks_overflow() {
        let mut e = escrow(u64::MAX);
        let err = e.credit(1).unwrap_err();
        assert_eq!(err, CustomError::ArithmeticOverflow.into());
    }

    #[test]
    fn binds_exactly_one_pool() {
        let mut e = escrow(0);
        let pool = Pubkey::new_unique();
        e.bind_pool(pool).unwrap();
        assert_eq!(e.bound_pool, Some(pool));

        let err = e.bind_pool(Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, CustomError::EscrowAlreadyBound.into());
        assert_eq!(e.bound_pool, Some(pool));
    }
}
