use anchor_lang::prelude::*;

use crate::constants::{
    BRACKETS_V1, BRACKETS_V2, DEFAULT_WAGERING_MULTIPLIER, INVITATION_REWARD_V1,
    INVITATION_REWARD_V2, MAX_COMMISSION_BRACKETS, MAX_REWARDED_REFERRALS, MAX_VIP_TIERS,
    PROGRAM_VERSION_1, PROGRAM_VERSION_2, VALID_USER_THRESHOLD_V1, VALID_USER_THRESHOLD_V2,
    VIP_TABLE,
};
use crate::errors::Aura7ErrorCode;
use crate::state::brackets::CommissionBracket;
use crate::state::config::Config;
use crate::state::tiers::VipTier;
use crate::state::treasury::Treasury;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Global config PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + Config::SIZE,
        seeds = [Config::SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Treasury PDA holding the payout float.
    #[account(
        init,
        payer = authority,
        space = 8 + Treasury::SIZE,
        seeds = [Treasury::SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Installs one of the reward-program presets and validates its tables.
pub fn initialize_handler(ctx: Context<Initialize>, program_version: u8) -> Result<()> {
    let authority_key = ctx.accounts.authority.key();
    let cfg = &mut ctx.accounts.config;

    let clock = Clock::get()?;
    require!(clock.unix_timestamp >= 0, Aura7ErrorCode::InvalidTimestamp);

    // ────────────────────────────────────────────────
    // Select the reward schedule preset
    // ────────────────────────────────────────────────
    let (valid_user_threshold, invitation_reward, brackets): (u64, u64, &[CommissionBracket]) =
        match program_version {
            PROGRAM_VERSION_1 => (VALID_USER_THRESHOLD_V1, INVITATION_REWARD_V1, &BRACKETS_V1),
            PROGRAM_VERSION_2 => (VALID_USER_THRESHOLD_V2, INVITATION_REWARD_V2, &BRACKETS_V2),
            _ => return err!(Aura7ErrorCode::UnknownProgramVersion),
        };

    // ────────────────────────────────────────────────
    // Initialize config
    // ────────────────────────────────────────────────
    cfg.authority = authority_key;
    cfg.pause_recharge = 0;
    cfg.pause_claims = 0;
    cfg.program_version = program_version;
    cfg.valid_user_threshold = valid_user_threshold;
    cfg.invitation_reward = invitation_reward;
    cfg.max_rewarded_referrals = MAX_REWARDED_REFERRALS;
    cfg.wagering_multiplier = DEFAULT_WAGERING_MULTIPLIER;
    cfg.tiers = [VipTier::EMPTY; MAX_VIP_TIERS];
    cfg.brackets = [CommissionBracket::EMPTY; MAX_COMMISSION_BRACKETS];
    cfg.set_tier_table(&VIP_TABLE)?;
    cfg.set_bracket_table(brackets)?;
    cfg.started_at = clock.unix_timestamp;
    cfg.bump = ctx.bumps.config;
    cfg._reserved = [0; 16];

    // Malformed tables are fatal here, never patched at call time.
    cfg.validate()?;

    // ────────────────────────────────────────────────
    // Initialize treasury
    // ────────────────────────────────────────────────
    let treasury = &mut ctx.accounts.treasury;
    treasury.authority = authority_key;
    treasury.bump = ctx.bumps.treasury;
    treasury.total_in_lamports = 0;
    treasury.total_bonus_out = 0;
    treasury.total_commission_out = 0;
    treasury.version = 1;
    treasury._reserved = [0; 32];

    msg!(
        "AURA7 initialized: reward program v{}, {} tiers, {} brackets",
        program_version,
        cfg.tier_count,
        cfg.bracket_count
    );

    Ok(())
}
