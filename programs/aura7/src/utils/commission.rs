use anchor_lang::prelude::*;

use crate::constants::RATE_BPS_DENOM;
use crate::errors::Aura7ErrorCode;
use crate::state::brackets::CommissionBracket;

/// A rated commission: which bracket matched and what it pays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommissionQuote {
    pub bracket_index: usize,
    pub rate_bps: u16,
    pub amount: u64,
}

/// Rates a cumulative recharge against the bracket schedule.
///
/// The single matching bracket's rate applies to the whole amount (flat,
/// not marginal). Crossing a bracket edge therefore re-rates the full amount;
/// the output jump at the boundary is intended behavior, not an error.
///
/// A validated schedule always matches; an unmatched amount still fails
/// closed rather than rating at zero.
pub fn compute_commission(
    recharge_amount: u64,
    brackets: &[CommissionBracket],
) -> Result<CommissionQuote> {
    let (bracket_index, bracket) = brackets
        .iter()
        .enumerate()
        .find(|(_, b)| b.contains(recharge_amount))
        .ok_or_else(|| error!(Aura7ErrorCode::BracketNotFound))?;

    let amount = (recharge_amount as u128 * bracket.rate_bps as u128 / RATE_BPS_DENOM as u128)
        .try_into()
        .map_err(|_| error!(Aura7ErrorCode::MathOverflow))?;

    Ok(CommissionQuote {
        bracket_index,
        rate_bps: bracket.rate_bps,
        amount,
    })
}

/// Flat invitation reward for an agent's valid referrals, capped at the
/// program maximum.
pub fn compute_invitation_reward(
    valid_referrals: u32,
    flat_reward: u64,
    max_rewarded: u32,
) -> u64 {
    (valid_referrals.min(max_rewarded) as u64).saturating_mul(flat_reward)
}

/// Raises a referral's accrued commission to the quote for its new
/// cumulative recharge, returning the delta to credit to the agent.
///
/// With non-decreasing bracket rates (enforced by `Config::validate`) the
/// quote is monotone in the recharge, so the delta is never negative; the
/// saturation only guards a mid-flight schedule swap, which must not claw
/// back already-credited commission.
pub fn commission_delta(
    new_total_recharge: u64,
    accrued_so_far: u64,
    brackets: &[CommissionBracket],
) -> Result<u64> {
    let quote = compute_commission(new_total_recharge, brackets)?;
    Ok(quote.amount.saturating_sub(accrued_so_far))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BRACKETS_V1, BRACKETS_V2, UNIT};

    // Worked examples from the published v1 agent rules.
    #[test]
    fn v1_published_examples() {
        // Recharge 2 000 sits in the 5% bracket: commission exactly 100.
        let q = compute_commission(2_000 * UNIT, &BRACKETS_V1).unwrap();
        assert_eq!(q.rate_bps, 500);
        assert_eq!(q.amount, 100 * UNIT);

        // Recharge 15 000 sits in the 7% bracket: commission exactly 1 050.
        let q = compute_commission(15_000 * UNIT, &BRACKETS_V1).unwrap();
        assert_eq!(q.rate_bps, 700);
        assert_eq!(q.amount, 1_050 * UNIT);

        // Recharge 15 001 enters the open 9% bracket. The formula yields
        // 1 350.09; the published rules table says 1 350 because it was
        // computed off 15 000. The engine follows the formula and the rules
        // page keeps its known typo.
        let q = compute_commission(15_001 * UNIT, &BRACKETS_V1).unwrap();
        assert_eq!(q.rate_bps, 900);
        assert_eq!(q.amount, 1_350 * UNIT + UNIT * 9 / 100);
    }

    #[test]
    fn sub_threshold_recharge_rates_at_zero() {
        let q = compute_commission(299 * UNIT, &BRACKETS_V1).unwrap();
        assert_eq!(q.bracket_index, 0);
        assert_eq!(q.amount, 0);
    }

    // Flat rating on the full amount makes the payout discontinuous at
    // bracket edges. Asserted, not smoothed.
    #[test]
    fn boundary_jump_is_preserved() {
        let below = compute_commission(2_000 * UNIT, &BRACKETS_V1).unwrap();
        let above = compute_commission(2_001 * UNIT, &BRACKETS_V1).unwrap();
        assert_eq!(below.amount, 100 * UNIT);
        assert_eq!(above.amount, 2_001 * UNIT * 700 / 10_000);
        assert!(above.amount > below.amount + UNIT * 40);
    }

    #[test]
    fn v2_schedule_rates() {
        assert_eq!(
            compute_commission(499 * UNIT, &BRACKETS_V2).unwrap().amount,
            0
        );
        assert_eq!(
            compute_commission(10_000 * UNIT, &BRACKETS_V2).unwrap().rate_bps,
            1_000
        );
        assert_eq!(
            compute_commission(20_000 * UNIT, &BRACKETS_V2).unwrap().amount,
            3_000 * UNIT
        );
    }

    #[test]
    fn gapped_schedule_fails_closed() {
        let gapped = [
            CommissionBracket {
                min_recharge: 0,
                max_recharge: 100,
                rate_bps: 0,
                _reserved: [0; 6],
            },
            CommissionBracket {
                min_recharge: 200,
                max_recharge: u64::MAX,
                rate_bps: 500,
                _reserved: [0; 6],
            },
        ];
        assert!(compute_commission(150, &gapped).is_err());
    }

    #[test]
    fn invitation_reward_caps_at_program_max() {
        assert_eq!(compute_invitation_reward(25, 50 * UNIT, 20), 1_000 * UNIT);
        assert_eq!(compute_invitation_reward(3, 50 * UNIT, 20), 150 * UNIT);
        assert_eq!(compute_invitation_reward(0, 50 * UNIT, 20), 0);
    }

    #[test]
    fn accrual_delta_is_monotone() {
        let mut accrued = 0u64;
        let mut last_quote = 0u64;
        for total in [100u64, 299, 300, 1_999, 2_001, 15_000, 15_001, 200_000] {
            let total = total * UNIT;
            let delta = commission_delta(total, accrued, &BRACKETS_V1).unwrap();
            accrued += delta;
            let quote = compute_commission(total, &BRACKETS_V1).unwrap().amount;
            assert_eq!(accrued, quote);
            assert!(quote >= last_quote);
            last_quote = quote;
        }
    }
}
