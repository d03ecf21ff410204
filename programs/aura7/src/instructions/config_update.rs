use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::state::brackets::CommissionBracket;
use crate::state::config::Config;
use crate::state::tiers::VipTier;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Global Config PDA.
    /// Only the `authority` stored in Config is allowed to update it.
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ Aura7ErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    /// Current program authority.
    pub authority: Signer<'info>,
}

/// Updates one or more global configuration parameters.
///
/// - Only callable by the `authority` stored in `Config`.
/// - Any argument set to `None` is left unchanged.
/// - `new_tiers` / `new_brackets` replace the whole table when non-empty;
///   the result is re-validated, so a malformed replacement rolls the
///   transaction back instead of ever existing on-chain.
pub fn update_config_handler(
    ctx: Context<UpdateConfig>,
    pause_recharge: Option<u8>,
    pause_claims: Option<u8>,
    new_authority: Option<Pubkey>,
    new_valid_user_threshold: Option<u64>,
    new_invitation_reward: Option<u64>,
    new_max_rewarded_referrals: Option<u16>,
    new_wagering_multiplier: Option<u8>,
    new_tiers: Vec<VipTier>,
    new_brackets: Vec<CommissionBracket>,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    // ─────────────────────────────────────────────
    // Pause flags
    // ─────────────────────────────────────────────
    if let Some(pause) = pause_recharge {
        cfg.pause_recharge = if pause == 1 { 1 } else { 0 };
    }
    if let Some(pause) = pause_claims {
        cfg.pause_claims = if pause == 1 { 1 } else { 0 };
    }

    // ─────────────────────────────────────────────
    // Authority rotation
    // ─────────────────────────────────────────────
    if let Some(new_auth) = new_authority {
        require!(new_auth != Pubkey::default(), Aura7ErrorCode::InvalidAuthorityTarget);
        require!(new_auth != system_program::ID, Aura7ErrorCode::InvalidAuthorityTarget);
        require!(new_auth != *ctx.program_id, Aura7ErrorCode::InvalidAuthorityTarget);
        require!(new_auth != cfg.key(), Aura7ErrorCode::InvalidAuthorityTarget);
        cfg.authority = new_auth;
    }

    // ─────────────────────────────────────────────
    // Reward program parameters
    // ─────────────────────────────────────────────
    if let Some(threshold) = new_valid_user_threshold {
        require!(threshold > 0, Aura7ErrorCode::InvalidAmount);
        cfg.valid_user_threshold = threshold;
    }

    if let Some(reward) = new_invitation_reward {
        cfg.invitation_reward = reward;
    }

    if let Some(max) = new_max_rewarded_referrals {
        cfg.max_rewarded_referrals = max;
    }

    if let Some(multiplier) = new_wagering_multiplier {
        require!(multiplier > 0, Aura7ErrorCode::InvalidWageringMultiplier);
        cfg.wagering_multiplier = multiplier;
    }

    // ─────────────────────────────────────────────
    // Table replacement (whole tables, then re-validate)
    // ─────────────────────────────────────────────
    if !new_tiers.is_empty() {
        cfg.set_tier_table(&new_tiers)?;
    }
    if !new_brackets.is_empty() {
        cfg.set_bracket_table(&new_brackets)?;
    }

    cfg.validate()?;

    Ok(())
}
