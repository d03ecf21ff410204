use anchor_lang::prelude::*;

#[error_code]
pub enum Aura7ErrorCode {
    // ─────────────────────────────
    // Configuration tables
    // ─────────────────────────────
    #[msg("Empty tier table")]
    EmptyTierTable,

    TooManyTiers,
    TierLevelsNotSequential,

    #[msg("Tier thresholds must be strictly increasing")]
    TierThresholdsNotAscending,

    FirstTierThresholdNotZero,

    #[msg("Empty bracket table")]
    EmptyBracketTable,

    TooManyBrackets,
    FirstBracketMinNotZero,

    #[msg("Brackets must partition the amount range without gaps or overlaps")]
    BracketsNotContiguous,

    LastBracketNotOpenEnded,

    #[msg("Invalid percentage")]
    BracketRateTooHigh,

    BracketRatesDecreasing,
    UnknownProgramVersion,
    InvalidAuthorityTarget,
    InvalidWageringMultiplier,

    // ─────────────────────────────
    // General / Access Control
    // ─────────────────────────────
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid amount")]
    InvalidAmount,

    InvalidTimestamp,

    // ─────────────────────────────
    // Tier / bracket lookup
    // ─────────────────────────────
    UnknownTier,

    #[msg("No bracket matches the amount")]
    BracketNotFound,

    // ─────────────────────────────
    // Recharge recording
    // ─────────────────────────────
    #[msg("Recharge recording paused")]
    RechargePaused,

    #[msg("Player has a referrer; use the referred recharge path")]
    MissingReferralAccounts,

    ReferralMismatch,

    // ─────────────────────────────
    // Referral binding
    // ─────────────────────────────
    #[msg("Cannot refer yourself")]
    CannotReferYourself,

    #[msg("Player already has a referrer")]
    AlreadyReferred,

    #[msg("Referrals bind at signup, before the first recharge")]
    PlayerHasDeposits,

    // ─────────────────────────────
    // Bonus / commission claims
    // ─────────────────────────────
    #[msg("Claims paused")]
    ClaimsPaused,

    #[msg("Already claimed")]
    AlreadyClaimed,

    #[msg("No bonus configured for this tier")]
    BonusNotConfigured,

    #[msg("Recharge below the bonus threshold")]
    NotEligible,

    #[msg("Nothing to claim")]
    NothingToClaim,

    InsufficientTreasuryBalance,
}
