use anchor_lang::prelude::*;

use crate::constants::{MAX_COMMISSION_BRACKETS, MAX_VIP_TIERS, RATE_BPS_DENOM};
use crate::errors::Aura7ErrorCode;
use crate::state::brackets::CommissionBracket;
use crate::state::tiers::VipTier;

/// Global configuration PDA.
///
/// Single source of truth for the VIP ladder and the commission schedule.
/// The two reward-program versions that shipped over the product's lifetime
/// are presets selected at `initialize`; they never exist side by side.
/// This account holds no lamports.
#[account]
pub struct Config {
    /// Program admin; also the cashier oracle that posts recharges.
    pub authority: Pubkey,

    /// 1 = recharge recording paused, 0 = enabled.
    pub pause_recharge: u8,

    /// 1 = bonus/commission claims paused, 0 = enabled.
    pub pause_claims: u8,

    /// Which reward schedule preset was installed (1 or 2).
    pub program_version: u8,

    /// Cumulative recharge at which a referred user becomes "valid".
    pub valid_user_threshold: u64,

    /// Flat one-time reward per valid referral.
    pub invitation_reward: u64,

    /// Invitation rewards stop after this many valid referrals per agent.
    pub max_rewarded_referrals: u16,

    /// Bonus wagering requirement carried on claim events.
    /// Policy data for the cashier ledger; not enforced by this program.
    pub wagering_multiplier: u8,

    /// Populated prefix length of `tiers`.
    pub tier_count: u8,

    /// VIP ladder (fixed-size array, populated prefix only).
    pub tiers: [VipTier; MAX_VIP_TIERS],

    /// Populated prefix length of `brackets`.
    pub bracket_count: u8,

    /// Commission schedule (fixed-size array, populated prefix only).
    pub brackets: [CommissionBracket; MAX_COMMISSION_BRACKETS],

    /// Unix timestamp when the program was initialized.
    pub started_at: i64,

    /// PDA bump for Config.
    pub bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32 + // authority
            1 +  // pause_recharge
            1 +  // pause_claims
            1 +  // program_version
            8 +  // valid_user_threshold
            8 +  // invitation_reward
            2 +  // max_rewarded_referrals
            1 +  // wagering_multiplier
            1 +  // tier_count
            (VipTier::SIZE * MAX_VIP_TIERS) + // tiers
            1 +  // bracket_count
            (CommissionBracket::SIZE * MAX_COMMISSION_BRACKETS) + // brackets
            8 +  // started_at
            1 +  // bump
            16;  // reserved

    /// Populated VIP ladder.
    pub fn tier_table(&self) -> &[VipTier] {
        &self.tiers[..self.tier_count as usize]
    }

    /// Populated commission schedule.
    pub fn bracket_table(&self) -> &[CommissionBracket] {
        &self.brackets[..self.bracket_count as usize]
    }

    pub fn is_recharge_paused(&self) -> bool {
        self.pause_recharge != 0
    }

    pub fn is_claims_paused(&self) -> bool {
        self.pause_claims != 0
    }

    /// Installs a tier table, padding the unused tail.
    pub fn set_tier_table(&mut self, table: &[VipTier]) -> Result<()> {
        require!(table.len() <= MAX_VIP_TIERS, Aura7ErrorCode::TooManyTiers);
        self.tiers = [VipTier::EMPTY; MAX_VIP_TIERS];
        for (slot, tier) in self.tiers.iter_mut().zip(table.iter()) {
            *slot = *tier;
        }
        self.tier_count = table.len() as u8;
        Ok(())
    }

    /// Installs a bracket table, padding the unused tail.
    pub fn set_bracket_table(&mut self, table: &[CommissionBracket]) -> Result<()> {
        require!(
            table.len() <= MAX_COMMISSION_BRACKETS,
            Aura7ErrorCode::TooManyBrackets
        );
        self.brackets = [CommissionBracket::EMPTY; MAX_COMMISSION_BRACKETS];
        for (slot, bracket) in self.brackets.iter_mut().zip(table.iter()) {
            *slot = *bracket;
        }
        self.bracket_count = table.len() as u8;
        Ok(())
    }

    /// Validates both tables. Fatal at initialize/update time; call-time code
    /// may assume every invariant below holds.
    ///
    /// Tier table: non-empty, levels sequential from 0, thresholds strictly
    /// increasing from 0.
    /// Bracket table: non-empty, contiguous half-open ranges covering
    /// `[0, u64::MAX)` with an open-ended top bracket, rates within the bps
    /// denominator and non-decreasing (re-rating a growing cumulative
    /// recharge must never lower the quote).
    pub fn validate(&self) -> Result<()> {
        let tiers = self.tier_table();
        require!(!tiers.is_empty(), Aura7ErrorCode::EmptyTierTable);
        require!(
            tiers[0].deposit_threshold == 0,
            Aura7ErrorCode::FirstTierThresholdNotZero
        );
        for (i, tier) in tiers.iter().enumerate() {
            require!(
                tier.level as usize == i,
                Aura7ErrorCode::TierLevelsNotSequential
            );
            if i > 0 {
                require!(
                    tier.deposit_threshold > tiers[i - 1].deposit_threshold,
                    Aura7ErrorCode::TierThresholdsNotAscending
                );
            }
        }

        let brackets = self.bracket_table();
        require!(!brackets.is_empty(), Aura7ErrorCode::EmptyBracketTable);
        require!(
            brackets[0].min_recharge == 0,
            Aura7ErrorCode::FirstBracketMinNotZero
        );
        for (i, bracket) in brackets.iter().enumerate() {
            require!(
                (bracket.rate_bps as u64) <= RATE_BPS_DENOM,
                Aura7ErrorCode::BracketRateTooHigh
            );
            if i > 0 {
                require!(
                    bracket.min_recharge == brackets[i - 1].max_recharge,
                    Aura7ErrorCode::BracketsNotContiguous
                );
                require!(
                    bracket.rate_bps >= brackets[i - 1].rate_bps,
                    Aura7ErrorCode::BracketRatesDecreasing
                );
            }
            require!(
                bracket.is_open_ended() || bracket.max_recharge > bracket.min_recharge,
                Aura7ErrorCode::BracketsNotContiguous
            );
        }
        require!(
            brackets[brackets.len() - 1].is_open_ended(),
            Aura7ErrorCode::LastBracketNotOpenEnded
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::{BorshDeserialize, BorshSerialize};

    use crate::constants::{
        BRACKETS_V1, INVITATION_REWARD_V1, MAX_REWARDED_REFERRALS, UNIT,
        VALID_USER_THRESHOLD_V1, VIP_TABLE,
    };
    use crate::utils::commission::compute_commission;
    use crate::utils::tier::resolve_tier;

    fn v1_config() -> Config {
        let mut cfg = Config {
            authority: Pubkey::default(),
            pause_recharge: 0,
            pause_claims: 0,
            program_version: 1,
            valid_user_threshold: VALID_USER_THRESHOLD_V1,
            invitation_reward: INVITATION_REWARD_V1,
            max_rewarded_referrals: MAX_REWARDED_REFERRALS,
            wagering_multiplier: 10,
            tier_count: 0,
            tiers: [VipTier::EMPTY; MAX_VIP_TIERS],
            bracket_count: 0,
            brackets: [CommissionBracket::EMPTY; MAX_COMMISSION_BRACKETS],
            started_at: 0,
            bump: 255,
            _reserved: [0; 16],
        };
        cfg.set_tier_table(&VIP_TABLE).unwrap();
        cfg.set_bracket_table(&BRACKETS_V1).unwrap();
        cfg
    }

    #[test]
    fn config_size_matches_serialization() {
        let bytes = v1_config().try_to_vec().unwrap();
        assert_eq!(bytes.len(), Config::SIZE);
    }

    #[test]
    fn v1_preset_validates() {
        v1_config().validate().unwrap();
    }

    #[test]
    fn gap_in_brackets_is_rejected() {
        let mut cfg = v1_config();
        cfg.brackets[1].min_recharge = 301 * UNIT;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn overlapping_brackets_are_rejected() {
        let mut cfg = v1_config();
        cfg.brackets[1].min_recharge = 299 * UNIT;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn capped_top_bracket_is_rejected() {
        let mut cfg = v1_config();
        cfg.brackets[3].max_recharge = 1_000_000 * UNIT;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unsorted_tier_thresholds_are_rejected() {
        let mut cfg = v1_config();
        cfg.tiers[2].deposit_threshold = cfg.tiers[1].deposit_threshold;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_tables_are_rejected() {
        let mut cfg = v1_config();
        cfg.tier_count = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = v1_config();
        cfg.bracket_count = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn decreasing_rates_are_rejected() {
        let mut cfg = v1_config();
        cfg.brackets[2].rate_bps = 400;
        assert!(cfg.validate().is_err());
    }

    // Reloading a serialized config must reproduce identical resolver and
    // calculator outputs (regression fixture for table round-trips).
    #[test]
    fn round_trip_preserves_engine_outputs() {
        let cfg = v1_config();
        let bytes = cfg.try_to_vec().unwrap();
        let reloaded = Config::try_from_slice(&bytes).unwrap();

        let deposits = [
            0,
            299 * UNIT,
            300 * UNIT,
            2_500 * UNIT,
            15_000 * UNIT,
            15_001 * UNIT,
            250_000 * UNIT,
        ];
        for &d in deposits.iter() {
            let a = resolve_tier(d, cfg.tier_table()).unwrap();
            let b = resolve_tier(d, reloaded.tier_table()).unwrap();
            assert_eq!(a, b);

            let qa = compute_commission(d, cfg.bracket_table()).unwrap();
            let qb = compute_commission(d, reloaded.bracket_table()).unwrap();
            assert_eq!(qa, qb);
        }
    }
}
