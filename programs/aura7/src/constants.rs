use crate::state::brackets::CommissionBracket;
use crate::state::tiers::VipTier;

/// Lamports per platform currency unit (₹1 on the cashier side).
///
/// Chosen so that basis-point commission math is exact for every figure in
/// the published reward tables.
pub const UNIT: u64 = 1_000_000;

pub const RATE_BPS_DENOM: u64 = 10_000;

/// A periodic bonus unlocks only when the previous period's recharge is at
/// least this multiple of the bonus amount.
pub const BONUS_RECHARGE_MULTIPLIER: u64 = 10;

/// Bonus amounts must be wagered this many times before withdrawal.
/// Carried on claim events for the cashier ledger; never enforced here.
pub const DEFAULT_WAGERING_MULTIPLIER: u8 = 10;

/// Capacity of the tier table in Config. The populated prefix is
/// `Config.tier_count` entries long.
pub const MAX_VIP_TIERS: usize = 8;

/// Capacity of the commission bracket table in Config.
pub const MAX_COMMISSION_BRACKETS: usize = 6;

/// Invitation rewards stop after this many valid referrals per agent.
pub const MAX_REWARDED_REFERRALS: u16 = 20;

/// Length of an agent's invite code.
pub const REFERRAL_CODE_LEN: usize = 8;

// ============================================================================
// REWARD SCHEDULE PRESETS
//
// Two incompatible versions of the reward program shipped over the product's
// lifetime. Both are kept as data; `initialize` installs exactly one.
// ============================================================================

pub const PROGRAM_VERSION_1: u8 = 1;
pub const PROGRAM_VERSION_2: u8 = 2;

/// v1: user becomes "valid" for the referring agent at ₹300 total recharge.
pub const VALID_USER_THRESHOLD_V1: u64 = 300 * UNIT;
/// v2 raised the bar to ₹500.
pub const VALID_USER_THRESHOLD_V2: u64 = 500 * UNIT;

/// v1: flat ₹50 per valid referral.
pub const INVITATION_REWARD_V1: u64 = 50 * UNIT;
/// v2: flat ₹80 per valid referral.
pub const INVITATION_REWARD_V2: u64 = 80 * UNIT;

/// VIP ladder shared by both program versions (levels 0..=5).
pub const VIP_TABLE: [VipTier; 6] = [
    VipTier {
        level: 0,
        name: *b"Newbie\0\0\0\0\0\0",
        deposit_threshold: 0,
        weekly_bonus: 0,
        monthly_bonus: 0,
        upgrade_bonus: 0,
        max_withdrawals_per_day: 1,
        _reserved: [0; 2],
    },
    VipTier {
        level: 1,
        name: *b"Bronze\0\0\0\0\0\0",
        deposit_threshold: 300 * UNIT,
        weekly_bonus: 0,
        monthly_bonus: 0,
        upgrade_bonus: 20 * UNIT,
        max_withdrawals_per_day: 2,
        _reserved: [0; 2],
    },
    VipTier {
        level: 2,
        name: *b"Silver\0\0\0\0\0\0",
        deposit_threshold: 2_000 * UNIT,
        weekly_bonus: 30 * UNIT,
        monthly_bonus: 50 * UNIT,
        upgrade_bonus: 115 * UNIT,
        max_withdrawals_per_day: 3,
        _reserved: [0; 2],
    },
    VipTier {
        level: 3,
        name: *b"Gold\0\0\0\0\0\0\0\0",
        deposit_threshold: 10_000 * UNIT,
        weekly_bonus: 30 * UNIT,
        monthly_bonus: 150 * UNIT,
        upgrade_bonus: 101 * UNIT,
        max_withdrawals_per_day: 3,
        _reserved: [0; 2],
    },
    VipTier {
        level: 4,
        name: *b"Platinum\0\0\0\0",
        deposit_threshold: 30_000 * UNIT,
        weekly_bonus: 50 * UNIT,
        monthly_bonus: 250 * UNIT,
        upgrade_bonus: 201 * UNIT,
        max_withdrawals_per_day: 5,
        _reserved: [0; 2],
    },
    VipTier {
        level: 5,
        name: *b"Diamond\0\0\0\0\0",
        deposit_threshold: 80_000 * UNIT,
        weekly_bonus: 80 * UNIT,
        monthly_bonus: 400 * UNIT,
        upgrade_bonus: 501 * UNIT,
        max_withdrawals_per_day: 99,
        _reserved: [0; 2],
    },
];

/// v1 commission schedule: 5% / 7% / 9%, zero-rated below the valid-user bar.
pub const BRACKETS_V1: [CommissionBracket; 4] = [
    CommissionBracket {
        min_recharge: 0,
        max_recharge: 300 * UNIT,
        rate_bps: 0,
        _reserved: [0; 6],
    },
    CommissionBracket {
        min_recharge: 300 * UNIT,
        max_recharge: 2_001 * UNIT,
        rate_bps: 500,
        _reserved: [0; 6],
    },
    CommissionBracket {
        min_recharge: 2_001 * UNIT,
        max_recharge: 15_001 * UNIT,
        rate_bps: 700,
        _reserved: [0; 6],
    },
    CommissionBracket {
        min_recharge: 15_001 * UNIT,
        max_recharge: u64::MAX,
        rate_bps: 900,
        _reserved: [0; 6],
    },
];

/// v2 commission schedule: 5% / 10% / 15%.
pub const BRACKETS_V2: [CommissionBracket; 4] = [
    CommissionBracket {
        min_recharge: 0,
        max_recharge: 500 * UNIT,
        rate_bps: 0,
        _reserved: [0; 6],
    },
    CommissionBracket {
        min_recharge: 500 * UNIT,
        max_recharge: 2_001 * UNIT,
        rate_bps: 500,
        _reserved: [0; 6],
    },
    CommissionBracket {
        min_recharge: 2_001 * UNIT,
        max_recharge: 15_001 * UNIT,
        rate_bps: 1_000,
        _reserved: [0; 6],
    },
    CommissionBracket {
        min_recharge: 15_001 * UNIT,
        max_recharge: u64::MAX,
        rate_bps: 1_500,
        _reserved: [0; 6],
    },
];
