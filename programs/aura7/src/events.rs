use anchor_lang::prelude::*;

/// Event emitted when the cashier oracle records a recharge.
#[event]
pub struct RechargeRecordedEvent {
    /// The player wallet credited.
    pub player: Pubkey,

    /// Recharge amount in lamports.
    pub amount: u64,

    /// Player's cumulative deposit after this recharge.
    pub total_deposit: u64,

    /// VIP level re-derived after this recharge.
    pub vip_level: u8,

    /// Unix timestamp when event occurred.
    pub timestamp: i64,
}

/// Event emitted when a player binds to a referring agent at signup.
#[event]
pub struct ReferralBoundEvent {
    pub agent: Pubkey,
    pub player: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a referred user crosses the valid-user threshold.
#[event]
pub struct ReferralValidatedEvent {
    pub agent: Pubkey,
    pub player: Pubkey,

    /// Flat invitation reward credited (0 if the agent hit the cap).
    pub invitation_reward: u64,

    /// The agent's valid-referral count after the flip.
    pub valid_referrals: u32,

    pub timestamp: i64,
}

/// Event emitted when a periodic or upgrade VIP bonus is paid.
#[event]
pub struct BonusClaimedEvent {
    pub player: Pubkey,

    /// 0 = weekly, 1 = monthly, 2 = upgrade.
    pub kind: u8,

    pub vip_level: u8,

    /// Bonus lamports paid from the treasury.
    pub amount: u64,

    /// Turnover the cashier must see before the bonus becomes withdrawable.
    /// Policy data only; enforcement lives in the cashier ledger.
    pub wagering_required: u64,

    /// Week or month index the claim is booked against (0 for upgrades).
    pub period_index: u32,

    pub timestamp: i64,
}

/// Event emitted when an agent claims their reward balance.
#[event]
pub struct CommissionClaimedEvent {
    pub agent: Pubkey,

    /// Invitation-reward portion of the payout.
    pub invitation_amount: u64,

    /// Commission portion of the payout.
    pub commission_amount: u64,

    /// Total lamports paid from the treasury.
    pub total: u64,

    pub timestamp: i64,
}

pub const BONUS_KIND_WEEKLY: u8 = 0;
pub const BONUS_KIND_MONTHLY: u8 = 1;
pub const BONUS_KIND_UPGRADE: u8 = 2;
