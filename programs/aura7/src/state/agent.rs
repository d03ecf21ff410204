use anchor_lang::prelude::*;

use crate::constants::REFERRAL_CODE_LEN;
use crate::errors::Aura7ErrorCode;
use crate::utils::period::day_index;

/// Per-agent aggregate PDA.
///
/// Holds the two earning pools (flat invitation rewards and percentage
/// commissions), each partitioned into unclaimed/claimed, plus the daily
/// rollups the agent dashboard reports. Claiming moves amounts from
/// unclaimed to claimed; the transition is one-way.
#[account]
pub struct AgentAccount {
    /// The agent wallet.
    pub owner: Pubkey, // 32

    /// PDA bump.
    pub bump: u8, // 1

    /// Deterministic invite code shown in the referral link.
    pub referral_code: [u8; REFERRAL_CODE_LEN], // 8

    // ─────────────────────────────
    // Referral counters
    // ─────────────────────────────
    pub total_referrals: u32, // 4

    /// Referrals whose cumulative recharge crossed the valid-user threshold.
    pub valid_referrals: u32, // 4

    /// Valid referrals that earned the flat invitation reward
    /// (capped at `Config.max_rewarded_referrals`).
    pub rewarded_referrals: u32, // 4

    // ─────────────────────────────
    // Earning pools
    // ─────────────────────────────
    pub invitation_unclaimed: u64, // 8
    pub invitation_claimed: u64,   // 8
    pub commission_unclaimed: u64, // 8
    pub commission_claimed: u64,   // 8

    // ─────────────────────────────
    // Daily rollups (dashboard stats)
    // ─────────────────────────────
    /// UTC day the rollups are currently tracking.
    pub day_index: u32, // 4

    pub new_subordinates_today: u32, // 4
    pub team_recharge_today: u64,    // 8
    pub commission_today: u64,       // 8
    pub commission_yesterday: u64,   // 8

    pub created_at: i64, // 8

    /// Reserved for future upgrades.
    pub _reserved: [u8; 16],
}

impl AgentAccount {
    pub const SEED_PREFIX: &'static [u8] = b"agent";

    /// Serialized size excluding the 8-byte discriminator.
    pub const SIZE: usize =
        32 // owner
            + 1  // bump
            + REFERRAL_CODE_LEN // referral_code
            + 4  // total_referrals
            + 4  // valid_referrals
            + 4  // rewarded_referrals
            + 8  // invitation_unclaimed
            + 8  // invitation_claimed
            + 8  // commission_unclaimed
            + 8  // commission_claimed
            + 4  // day_index
            + 4  // new_subordinates_today
            + 8  // team_recharge_today
            + 8  // commission_today
            + 8  // commission_yesterday
            + 8  // created_at
            + 16; // reserved

    /// Advances the daily rollups to `now`. Moving into the next day shifts
    /// today's commission into yesterday's slot; a larger gap zeroes both.
    pub fn roll_day(&mut self, now: i64) {
        let day = day_index(now);
        if day != self.day_index {
            self.commission_yesterday = if day == self.day_index.wrapping_add(1) {
                self.commission_today
            } else {
                0
            };
            self.commission_today = 0;
            self.new_subordinates_today = 0;
            self.team_recharge_today = 0;
            self.day_index = day;
        }
    }

    /// Credits a commission delta into the unclaimed pool and today's rollup.
    pub fn accrue_commission(&mut self, delta: u64) -> Result<()> {
        self.commission_unclaimed = self
            .commission_unclaimed
            .checked_add(delta)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        self.commission_today = self
            .commission_today
            .checked_add(delta)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Credits the flat invitation reward for one newly valid referral.
    pub fn accrue_invitation_reward(&mut self, reward: u64) -> Result<()> {
        self.rewarded_referrals = self
            .rewarded_referrals
            .checked_add(1)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        self.invitation_unclaimed = self
            .invitation_unclaimed
            .checked_add(reward)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Moves both unclaimed pools to claimed, returning the payout total.
    pub fn claim_all(&mut self) -> Result<u64> {
        let total = self
            .invitation_unclaimed
            .checked_add(self.commission_unclaimed)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        require!(total > 0, Aura7ErrorCode::NothingToClaim);

        self.invitation_claimed = self
            .invitation_claimed
            .checked_add(self.invitation_unclaimed)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        self.commission_claimed = self
            .commission_claimed
            .checked_add(self.commission_unclaimed)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        self.invitation_unclaimed = 0;
        self.commission_unclaimed = 0;

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    fn fresh_agent() -> AgentAccount {
        AgentAccount {
            owner: Pubkey::default(),
            bump: 255,
            referral_code: [0; REFERRAL_CODE_LEN],
            total_referrals: 0,
            valid_referrals: 0,
            rewarded_referrals: 0,
            invitation_unclaimed: 0,
            invitation_claimed: 0,
            commission_unclaimed: 0,
            commission_claimed: 0,
            day_index: day_index(1_704_067_200),
            new_subordinates_today: 0,
            team_recharge_today: 0,
            commission_today: 0,
            commission_yesterday: 0,
            created_at: 1_704_067_200,
            _reserved: [0; 16],
        }
    }

    #[test]
    fn agent_size_matches_serialization() {
        let bytes = fresh_agent().try_to_vec().unwrap();
        assert_eq!(bytes.len(), AgentAccount::SIZE);
    }

    #[test]
    fn day_rollover_shifts_commission() {
        let mut a = fresh_agent();
        a.accrue_commission(500).unwrap();
        a.team_recharge_today = 10_000;

        a.roll_day(1_704_067_200 + 86_400);
        assert_eq!(a.commission_yesterday, 500);
        assert_eq!(a.commission_today, 0);
        assert_eq!(a.team_recharge_today, 0);

        // Two quiet days later, yesterday is empty too.
        a.roll_day(1_704_067_200 + 3 * 86_400);
        assert_eq!(a.commission_yesterday, 0);
    }

    #[test]
    fn claim_moves_both_pools() {
        let mut a = fresh_agent();
        a.accrue_commission(700).unwrap();
        a.accrue_invitation_reward(50).unwrap();

        assert_eq!(a.claim_all().unwrap(), 750);
        assert_eq!(a.commission_unclaimed, 0);
        assert_eq!(a.invitation_unclaimed, 0);
        assert_eq!(a.commission_claimed, 700);
        assert_eq!(a.invitation_claimed, 50);
        assert_eq!(a.rewarded_referrals, 1);

        assert!(a.claim_all().is_err());
    }
}
