use anchor_lang::prelude::*;

use crate::constants::MAX_POOL_PROJECTS;
use crate::errors::CustomError;
use crate::state::Project;
use crate::utils::matching_share;

/// Registry of admitted projects plus distribution bookkeeping, bound to one
/// escrow. `total_score` is kept equal to the sum of the members' matching
/// scores by folding every score change through `fold_score_delta`, `admit`,
/// or `release`, so payout needs no walk over the membership.
#[account]
pub struct Pool {
    pub authority: Pubkey,
    pub escrow: Pubkey,
    /// Admission order.
    pub projects: Vec<Pubkey>,
    /// Escrow balance at binding time; the matching funds this pool may pay.
    pub matching_budget: u64,
    pub total_score: u128,
    pub total_distributed: u64,
    pub bump: u8,
}

impl Pool {
    pub const LEN: usize = 8 + // discriminator
        32 +                          // authority
        32 +                          // escrow
        (4 + 32 * MAX_POOL_PROJECTS) + // projects
        8 +                           // matching_budget
        16 +                          // total_score
        8 +                           // total_distributed
        1;                            // bump

    pub fn contains(&self, project: &Pubkey) -> bool {
        self.projects.iter().any(|p| p == project)
    }

    /// Admission: the membership list, the project's pool reference, and its
    /// flag all change in this one call. Duplicates are rejected by the
    /// reference, by the flag, and independently by address membership.
    pub fn admit(
        &mut self,
        pool_key: Pubkey,
        project_key: Pubkey,
        project: &mut Project,
    ) -> Result<()> {
        require!(project.pool.is_none(), CustomError::AlreadyInPool);
        require!(!project.is_in_pool, CustomError::AlreadyInPool);
        require!(!self.contains(&project_key), CustomError::AlreadyInPool);
        require!(self.projects.len() < MAX_POOL_PROJECTS, CustomError::PoolFull);

        self.projects.push(project_key);
        project.pool = Some(pool_key);
        project.is_in_pool = true;

        // A project removed elsewhere may carry prior statistics.
        let score = project.matching_score()?;
        self.total_score = self
            .total_score
            .checked_add(score)
            .ok_or(CustomError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Inverse of `admit`: drops the membership slot and clears the project's
    /// reference and flag together. The project's counters are untouched.
    pub fn release(&mut self, project_key: Pubkey, project: &mut Project) -> Result<()> {
        let position = self
            .projects
            .iter()
            .position(|p| *p == project_key)
            .ok_or(CustomError::NotInPool)?;
        self.projects.remove(position);

        let score = project.matching_score()?;
        self.total_score = self
            .total_score
            .checked_sub(score)
            .ok_or(CustomError::ArithmeticOverflow)?;

        project.pool = None;
        project.is_in_pool = false;
        Ok(())
    }

    /// Replaces one member's score contribution inside the aggregate.
    pub fn fold_score_delta(&mut self, old_score: u128, new_score: u128) -> Result<()> {
        self.total_score = self
            .total_score
            .checked_sub(old_score)
            .ok_or(CustomError::ArithmeticOverflow)?
            .checked_add(new_score)
            .ok_or(CustomError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Marginal payout for a member: its current entitlement minus what it
    /// already received, clamped by the pool's remaining matching budget.
    /// Re-invocation with no new votes therefore pays exactly zero.
    pub fn marginal_payout(&self, score: u128, already_distributed: u64) -> Result<u64> {
        let entitlement = matching_share(score, self.total_score, self.matching_budget)?;
        let marginal = entitlement.saturating_sub(already_distributed);
        let remaining = self.matching_budget.saturating_sub(self.total_distributed);
        Ok(marginal.min(remaining))
    }

    pub fn record_distribution(&mut self, amount: u64) -> Result<()> {
        self.total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(CustomError::ArithmeticOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(matching_budget: u64) -> (Pubkey, Pool) {
        let key = Pubkey::new_unique();
        let pool = Pool {
            authority: Pubkey::new_unique(),
            escrow: Pubkey::new_unique(),
            projects: Vec::new(),
            matching_budget,
            total_score: 0,
            total_distributed: 0,
            bump: 254,
        };
        (key, pool)
    }

    fn project() -> (Pubkey, Project) {
        let key = Pubkey::new_unique();
        let project = Project {
            owner: Pubkey::new_unique(),
            name: "My Project".to_string(),
            pool: None,
            is_in_pool: false,
            cumulative_contribution: 0,
            cumulative_sqrt_contribution: 0,
            distributed_amt: 0,
            bump: 255,
        };
        (key, project)
    }

    #[test]
    fn admission_keeps_flag_reference_and_membership_in_step() {
        let (pool_key, mut pool) = pool(10_000);
        let (project_key, mut p) = project();

        pool.admit(pool_key, project_key, &mut p).unwrap();

        assert!(p.is_in_pool);
        assert_eq!(p.pool, Some(pool_key));
        assert!(pool.contains(&project_key));
        assert_eq!(pool.projects, vec![project_key]);
    }

    #[test]
    fn double_admission_fails_and_leaves_state_unchanged() {
        let (pool_key, mut pool) = pool(10_000);
        let (project_key, mut p) = project();
        pool.admit(pool_key, project_key, &mut p).unwrap();

        let err = pool.admit(pool_key, project_key, &mut p).unwrap_err();
        assert_eq!(err, CustomError::AlreadyInPool.into());
        assert_eq!(pool.projects.len(), 1);
        assert_eq!(p.pool, Some(pool_key));
    }

    #[test]
    fn admission_into_second_pool_fails_by_reference() {
        let (first_key, mut first) = pool(10_000);
        let (second_key, mut second) = pool(10_000);
        let (project_key, mut p) = project();
        first.admit(first_key, project_key, &mut p).unwrap();

        let err = second.admit(second_key, project_key, &mut p).unwrap_err();
        assert_eq!(err, CustomError::AlreadyInPool.into());
        assert!(!second.contains(&project_key));
        assert_eq!(p.pool, Some(first_key));
    }

    #[test]
    fn stale_reference_without_flag_still_blocks_admission() {
        let (pool_key, mut pool) = pool(10_000);
        let (project_key, mut p) = project();
        p.pool = Some(Pubkey::new_unique());
        p.is_in_pool = false;

        let err = pool.admit(pool_key, project_key, &mut p).unwrap_err();
        assert_eq!(err, CustomError::AlreadyInPool.into());
    }

    #[test]
    fn duplicate_detection_works_by_address_membership_alone() {
        // Even with both the flag and the reference cleared, an address that
        // already occupies a membership slot must not be admitted twice.
        let (pool_key, mut pool) = pool(10_000);
        let (project_key, mut p) = project();
        pool.projects.push(project_key);

        let err = pool.admit(pool_key, project_key, &mut p).unwrap_err();
        assert_eq!(err, CustomError::AlreadyInPool.into());
        assert_eq!(pool.projects.len(), 1);
    }

    #[test]
    fn admission_is_bounded() {
        let (pool_key, mut pool) = pool(10_000);
        for _ in 0..MAX_POOL_PROJECTS {
            let (project_key, mut p) = project();
            pool.admit(pool_key, project_key, &mut p).unwrap();
        }

        let (project_key, mut p) = project();
        let err = pool.admit(pool_key, project_key, &mut p).unwrap_err();
        assert_eq!(err, CustomError::PoolFull.into());
    }

    #[test]
    fn release_clears_membership_and_score() {
        let (pool_key, mut pool) = pool(10_000);
        let (project_key, mut p) = project();
        p.record_contribution(2500).unwrap();
        p.record_contribution(2500).unwrap();
        pool.admit(pool_key, project_key, &mut p).unwrap();
        assert_eq!(pool.total_score, 5000);

        pool.release(project_key, &mut p).unwrap();
        assert!(pool.projects.is_empty());
        assert_eq!(pool.total_score, 0);
        assert_eq!(p.pool, None);
        assert!(!p.is_in_pool);
        // Lifetime counters survive removal.
        assert_eq!(p.cumulative_contribution, 5000);
    }

    #[test]
    fn release_of_non_member_fails() {
        let (_, mut pool) = pool(10_000);
        let (project_key, mut p) = project();
        let err = pool.release(project_key, &mut p).unwrap_err();
        assert_eq!(err, CustomError::NotInPool.into());
    }

    #[test]
    fn aggregate_score_tracks_votes() {
        let (pool_key, mut pool) = pool(10_000);
        let (project_key, mut p) = project();
        pool.admit(pool_key, project_key, &mut p).unwrap();

        let (old_score, new_score) = p.record_contribution(2500).unwrap();
        pool.fold_score_delta(old_score, new_score).unwrap();
        let (old_score, new_score) = p.record_contribution(2500).unwrap();
        pool.fold_score_delta(old_score, new_score).unwrap();

        assert_eq!(pool.total_score, 5000);
        assert_eq!(pool.total_score, p.matching_score().unwrap());
    }

    #[test]
    fn single_contributor_earns_no_match() {
        let (pool_key, mut pool) = pool(10_000);
        let (project_key, mut p) = project();
        pool.admit(pool_key, project_key, &mut p).unwrap();

        let (old_score, new_score) = p.record_contribution(10).unwrap();
        pool.fold_score_delta(old_score, new_score).unwrap();

        let score = p.matching_score().unwrap();
        assert_eq!(pool.marginal_payout(score, p.distributed_amt).unwrap(), 0);
    }

    #[test]
    fn repeat_distribution_pays_only_the_marginal_increase() {
        let (pool_key, mut pool) = pool(10_000);
        let (project_key, mut p) = project();
        pool.admit(pool_key, project_key, &mut p).unwrap();

        for _ in 0..2 {
            let (old_score, new_score) = p.record_contribution(2500).unwrap();
            pool.fold_score_delta(old_score, new_score).unwrap();
        }

        // Sole member with a positive score takes the whole budget.
        let score = p.matching_score().unwrap();
        let first = pool.marginal_payout(score, p.distributed_amt).unwrap();
        assert_eq!(first, 10_000);
        pool.record_distribution(first).unwrap();
        p.record_payout(first).unwrap();

        // Immediately again, with no new votes: zero.
        let score = p.matching_score().unwrap();
        assert_eq!(pool.marginal_payout(score, p.distributed_amt).unwrap(), 0);
    }

    #[test]
    fn distribution_rounds_split_the_budget_without_exceeding_it() {
        let (pool_key, mut pool) = pool(10_000);
        let (first_key, mut first) = project();
        let (second_key, mut second) = project();
        pool.admit(pool_key, first_key, &mut first).unwrap();
        pool.admit(pool_key, second_key, &mut second).unwrap();

        for _ in 0..2 {
            let (old_score, new_score) = first.record_contribution(2500).unwrap();
            pool.fold_score_delta(old_score, new_score).unwrap();
        }
        for _ in 0..4 {
            let (old_score, new_score) = second.record_contribution(25).unwrap();
            pool.fold_score_delta(old_score, new_score).unwrap();
        }

        // Scores: 5000 and 300; entitlements floor to 9433 and 566.
        assert_eq!(pool.total_score, 5300);
        let first_pay = pool
            .marginal_payout(first.matching_score().unwrap(), first.distributed_amt)
            .unwrap();
        assert_eq!(first_pay, 9433);
        pool.record_distribution(first_pay).unwrap();
        first.record_payout(first_pay).unwrap();

        let second_pay = pool
            .marginal_payout(second.matching_score().unwrap(), second.distributed_amt)
            .unwrap();
        assert_eq!(second_pay, 566);
        pool.record_distribution(second_pay).unwrap();
        second.record_payout(second_pay).unwrap();

        assert!(pool.total_distributed <= pool.matching_budget);
        assert_eq!(pool.total_distributed, 9999);
    }

    #[test]
    fn payouts_are_clamped_by_the_remaining_budget() {
        let (pool_key, mut pool) = pool(10_000);
        let (project_key, mut p) = project();
        pool.admit(pool_key, project_key, &mut p).unwrap();
        for _ in 0..2 {
            let (old_score, new_score) = p.record_contribution(2500).unwrap();
            pool.fold_score_delta(old_score, new_score).unwrap();
        }
        pool.total_distributed = 9_990;

        let score = p.matching_score().unwrap();
        assert_eq!(pool.marginal_payout(score, 0).unwrap(), 10);
    }
}
