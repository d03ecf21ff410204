use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::utils::period::{month_index, week_index};

/// Per-player ledger PDA.
///
/// Tracks the cumulative deposit that drives VIP tier resolution, the
/// calendar-period recharge accumulators behind weekly/monthly bonus
/// eligibility, and the claim markers that make every bonus idempotent per
/// period. Lamports are never held here; payouts come from the Treasury.
#[account]
pub struct PlayerAccount {
    /// The player wallet.
    pub owner: Pubkey, // 32

    /// PDA bump.
    pub bump: u8, // 1

    /// Referring agent wallet; `Pubkey::default()` when unreferred.
    /// Set once at bind time, never rewritten.
    pub referred_by: Pubkey, // 32

    /// Cumulative deposit, monotone.
    pub total_deposit: u64, // 8

    /// Current VIP level, re-derived from `total_deposit` on every recharge.
    pub vip_level: u8, // 1

    pub created_at: i64,      // 8
    pub last_recharge_at: i64, // 8

    // ─────────────────────────────
    // Calendar-period recharge accumulators
    // ─────────────────────────────
    /// Monday-aligned week the accumulators are currently tracking.
    pub week_index: u32, // 4

    /// Recharge total inside `week_index`.
    pub week_recharge: u64, // 8

    /// Recharge total of the week before `week_index` (bonus eligibility
    /// reads last week, per the published rules).
    pub prev_week_recharge: u64, // 8

    pub month_index: u32,        // 4
    pub month_recharge: u64,     // 8
    pub prev_month_recharge: u64, // 8

    // ─────────────────────────────
    // Claim markers
    // ─────────────────────────────
    /// Week in which the weekly bonus was last claimed (0 = never).
    pub last_weekly_claim_week: u32, // 4

    /// Month in which the monthly bonus was last claimed (0 = never).
    pub last_monthly_claim_month: u32, // 4

    /// Highest level whose upgrade bonus has been paid out.
    pub upgrade_claimed_level: u8, // 1

    /// Lifetime bonus lamports claimed (audit stat).
    pub total_bonus_claimed: u64, // 8

    /// Reserved for future upgrades.
    pub _reserved: [u8; 16],
}

impl PlayerAccount {
    pub const SEED_PREFIX: &'static [u8] = b"player";

    /// Serialized size excluding the 8-byte discriminator.
    pub const SIZE: usize =
        32 // owner
            + 1  // bump
            + 32 // referred_by
            + 8  // total_deposit
            + 1  // vip_level
            + 8  // created_at
            + 8  // last_recharge_at
            + 4  // week_index
            + 8  // week_recharge
            + 8  // prev_week_recharge
            + 4  // month_index
            + 8  // month_recharge
            + 8  // prev_month_recharge
            + 4  // last_weekly_claim_week
            + 4  // last_monthly_claim_month
            + 1  // upgrade_claimed_level
            + 8  // total_bonus_claimed
            + 16; // reserved

    pub fn has_referrer(&self) -> bool {
        self.referred_by != Pubkey::default()
    }

    /// Advances the period accumulators to `now`.
    ///
    /// Moving into the next week/month shifts `current -> prev`; skipping a
    /// whole period or more zeroes both (the skipped period had no recharge).
    pub fn roll_periods(&mut self, now: i64) {
        let week = week_index(now);
        if week != self.week_index {
            self.prev_week_recharge = if week == self.week_index.wrapping_add(1) {
                self.week_recharge
            } else {
                0
            };
            self.week_recharge = 0;
            self.week_index = week;
        }

        let month = month_index(now);
        if month != self.month_index {
            self.prev_month_recharge = if month == self.month_index.wrapping_add(1) {
                self.month_recharge
            } else {
                0
            };
            self.month_recharge = 0;
            self.month_index = month;
        }
    }

    /// Credits a recharge into the cumulative and period accumulators.
    /// The caller re-derives `vip_level` against the config table.
    pub fn apply_recharge(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, Aura7ErrorCode::InvalidAmount);

        self.roll_periods(now);

        self.total_deposit = self
            .total_deposit
            .checked_add(amount)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        self.week_recharge = self
            .week_recharge
            .checked_add(amount)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        self.month_recharge = self
            .month_recharge
            .checked_add(amount)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
        self.last_recharge_at = now;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    use crate::utils::period::SECONDS_PER_WEEK;

    // 2024-01-01T00:00:00Z, a Monday.
    const MONDAY: i64 = 1_704_067_200;

    fn fresh_player(now: i64) -> PlayerAccount {
        PlayerAccount {
            owner: Pubkey::default(),
            bump: 255,
            referred_by: Pubkey::default(),
            total_deposit: 0,
            vip_level: 0,
            created_at: now,
            last_recharge_at: 0,
            week_index: week_index(now),
            week_recharge: 0,
            prev_week_recharge: 0,
            month_index: month_index(now),
            month_recharge: 0,
            prev_month_recharge: 0,
            last_weekly_claim_week: 0,
            last_monthly_claim_month: 0,
            upgrade_claimed_level: 0,
            total_bonus_claimed: 0,
            _reserved: [0; 16],
        }
    }

    #[test]
    fn player_size_matches_serialization() {
        let bytes = fresh_player(MONDAY).try_to_vec().unwrap();
        assert_eq!(bytes.len(), PlayerAccount::SIZE);
    }

    #[test]
    fn recharge_accumulates_within_a_week() {
        let mut p = fresh_player(MONDAY);
        p.apply_recharge(100, MONDAY).unwrap();
        p.apply_recharge(50, MONDAY + 3 * 86_400).unwrap();
        assert_eq!(p.total_deposit, 150);
        assert_eq!(p.week_recharge, 150);
        assert_eq!(p.prev_week_recharge, 0);
    }

    #[test]
    fn week_rollover_shifts_current_to_prev() {
        let mut p = fresh_player(MONDAY);
        p.apply_recharge(100, MONDAY).unwrap();
        p.apply_recharge(40, MONDAY + SECONDS_PER_WEEK).unwrap();
        assert_eq!(p.prev_week_recharge, 100);
        assert_eq!(p.week_recharge, 40);
    }

    #[test]
    fn skipped_week_zeroes_prev() {
        let mut p = fresh_player(MONDAY);
        p.apply_recharge(100, MONDAY).unwrap();
        p.apply_recharge(40, MONDAY + 2 * SECONDS_PER_WEEK).unwrap();
        assert_eq!(p.prev_week_recharge, 0);
        assert_eq!(p.week_recharge, 40);
    }

    #[test]
    fn month_rollover_shifts_current_to_prev() {
        let mut p = fresh_player(MONDAY);
        p.apply_recharge(700, MONDAY).unwrap();
        // 2024-02-05
        p.apply_recharge(30, MONDAY + 35 * 86_400).unwrap();
        assert_eq!(p.prev_month_recharge, 700);
        assert_eq!(p.month_recharge, 30);

        // 2024-04-01: March had no recharge, so prev is zeroed.
        p.roll_periods(MONDAY + 91 * 86_400);
        assert_eq!(p.prev_month_recharge, 0);
        assert_eq!(p.month_recharge, 0);
    }

    #[test]
    fn zero_recharge_is_rejected() {
        let mut p = fresh_player(MONDAY);
        assert!(p.apply_recharge(0, MONDAY).is_err());
    }
}
