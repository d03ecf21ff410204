use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::state::tiers::VipTier;

/// Result of mapping a cumulative deposit onto the VIP ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierResolution {
    pub level: u8,

    /// Progress toward the next threshold, 0..=100. Fixed at 100 on the top
    /// tier.
    pub progress_percent: u8,

    /// Deposit still missing to reach the next level; 0 on the top tier.
    pub amount_to_next: u64,
}

/// Maps a cumulative deposit to a VIP level.
///
/// Selects the highest-indexed tier whose threshold is at or below the
/// deposit (last match in the ascending scan, not nearest). Deposits past
/// the top threshold clamp to the top tier at 100%.
///
/// Pure and deterministic; the table is assumed to have passed
/// `Config::validate`, but an empty slice still fails closed.
pub fn resolve_tier(cumulative_deposit: u64, table: &[VipTier]) -> Result<TierResolution> {
    require!(!table.is_empty(), Aura7ErrorCode::EmptyTierTable);

    let mut index = 0usize;
    for (i, tier) in table.iter().enumerate() {
        if tier.deposit_threshold <= cumulative_deposit {
            index = i;
        } else {
            break;
        }
    }

    let current = &table[index];
    let resolution = match table.get(index + 1) {
        Some(next) => {
            let span = next.deposit_threshold - current.deposit_threshold;
            let into = cumulative_deposit.saturating_sub(current.deposit_threshold);
            let percent = ((into as u128 * 100) / span as u128).min(100) as u8;
            TierResolution {
                level: current.level,
                progress_percent: percent,
                amount_to_next: next.deposit_threshold - cumulative_deposit,
            }
        }
        None => TierResolution {
            level: current.level,
            progress_percent: 100,
            amount_to_next: 0,
        },
    };

    Ok(resolution)
}

/// Bonus entitlements for a level (table lookup by the `level` field).
pub fn bonuses_for(level: u8, table: &[VipTier]) -> Result<&VipTier> {
    table
        .iter()
        .find(|t| t.level == level)
        .ok_or_else(|| error!(Aura7ErrorCode::UnknownTier))
}

/// Weekly bonus rule: last week's recharge must reach 10x the bonus amount.
#[inline]
pub fn is_weekly_bonus_eligible(period_recharge: u64, tier: &VipTier) -> bool {
    tier.weekly_bonus > 0 && period_recharge >= tier.weekly_recharge_requirement()
}

/// Monthly rule mirrors the weekly one with the monthly bonus amount.
#[inline]
pub fn is_monthly_bonus_eligible(period_recharge: u64, tier: &VipTier) -> bool {
    tier.monthly_bonus > 0 && period_recharge >= tier.monthly_recharge_requirement()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{UNIT, VIP_TABLE};

    #[test]
    fn empty_table_fails_closed() {
        assert!(resolve_tier(0, &[]).is_err());
    }

    #[test]
    fn boundary_deposits_resolve_inclusively() {
        for (i, tier) in VIP_TABLE.iter().enumerate() {
            let r = resolve_tier(tier.deposit_threshold, &VIP_TABLE).unwrap();
            assert_eq!(r.level as usize, i);
            if tier.deposit_threshold > 0 {
                let below = resolve_tier(tier.deposit_threshold - 1, &VIP_TABLE).unwrap();
                assert_eq!(below.level as usize, i - 1);
            }
        }
    }

    #[test]
    fn level_is_monotone_in_deposit() {
        let mut last = 0u8;
        for d in (0..100_000u64).map(|k| k * UNIT) {
            let r = resolve_tier(d, &VIP_TABLE).unwrap();
            assert!(r.level >= last);
            last = r.level;
        }
    }

    #[test]
    fn progress_interpolates_between_thresholds() {
        // Halfway between VIP2 (2 000) and VIP3 (10 000).
        let r = resolve_tier(6_000 * UNIT, &VIP_TABLE).unwrap();
        assert_eq!(r.level, 2);
        assert_eq!(r.progress_percent, 50);
        assert_eq!(r.amount_to_next, 4_000 * UNIT);

        let start = resolve_tier(2_000 * UNIT, &VIP_TABLE).unwrap();
        assert_eq!(start.progress_percent, 0);
        assert_eq!(start.amount_to_next, 8_000 * UNIT);
    }

    #[test]
    fn top_tier_clamps_at_full_progress() {
        for d in [80_000 * UNIT, 80_001 * UNIT, u64::MAX] {
            let r = resolve_tier(d, &VIP_TABLE).unwrap();
            assert_eq!(r.level, 5);
            assert_eq!(r.progress_percent, 100);
            assert_eq!(r.amount_to_next, 0);
        }
    }

    #[test]
    fn bonuses_lookup_by_level() {
        assert_eq!(bonuses_for(4, &VIP_TABLE).unwrap().weekly_bonus, 50 * UNIT);
        assert!(bonuses_for(9, &VIP_TABLE).is_err());
    }

    #[test]
    fn weekly_eligibility_needs_ten_times_the_bonus() {
        let silver = bonuses_for(2, &VIP_TABLE).unwrap();
        assert!(!is_weekly_bonus_eligible(299 * UNIT, silver));
        assert!(is_weekly_bonus_eligible(300 * UNIT, silver));

        // Levels with no weekly bonus are never eligible.
        let newbie = bonuses_for(0, &VIP_TABLE).unwrap();
        assert!(!is_weekly_bonus_eligible(u64::MAX, newbie));
    }

    #[test]
    fn monthly_eligibility_mirrors_weekly() {
        let gold = bonuses_for(3, &VIP_TABLE).unwrap();
        assert!(!is_monthly_bonus_eligible(1_499 * UNIT, gold));
        assert!(is_monthly_bonus_eligible(1_500 * UNIT, gold));
    }
}
