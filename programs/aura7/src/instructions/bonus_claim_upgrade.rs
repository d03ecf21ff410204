use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::events::{BonusClaimedEvent, BONUS_KIND_UPGRADE};
use crate::state::config::Config;
use crate::state::player::PlayerAccount;
use crate::state::treasury::Treasury;
use crate::utils::tier::{bonuses_for, resolve_tier};
use crate::utils::transfers::payout_from_treasury;

/// Level-up bonus claim: pays the upgrade bonus for every level reached
/// since the last claim, exactly once per level.
#[derive(Accounts)]
pub struct ClaimUpgradeBonus<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        seeds = [PlayerAccount::SEED_PREFIX, owner.key().as_ref()],
        bump = player.bump,
        constraint = player.owner == owner.key() @ Aura7ErrorCode::Unauthorized
    )]
    pub player: Account<'info, PlayerAccount>,

    /// Wallet receiving the bonus.
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn claim_upgrade_bonus_handler(ctx: Context<ClaimUpgradeBonus>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let player = &mut ctx.accounts.player;

    require!(!cfg.is_claims_paused(), Aura7ErrorCode::ClaimsPaused);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= 0, Aura7ErrorCode::InvalidTimestamp);

    // Re-derive rather than trusting the cache; the table may have changed
    // since the last recharge.
    let level = resolve_tier(player.total_deposit, cfg.tier_table())?.level;
    player.vip_level = level;

    require!(
        level > player.upgrade_claimed_level,
        Aura7ErrorCode::AlreadyClaimed
    );

    // Sum the bonuses of every newly reached level.
    let mut amount = 0u64;
    for l in (player.upgrade_claimed_level + 1)..=level {
        let tier = bonuses_for(l, cfg.tier_table())?;
        amount = amount
            .checked_add(tier.upgrade_bonus)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
    }
    require!(amount > 0, Aura7ErrorCode::NothingToClaim);

    payout_from_treasury(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    player.upgrade_claimed_level = level;
    player.total_bonus_claimed = player
        .total_bonus_claimed
        .checked_add(amount)
        .ok_or(Aura7ErrorCode::MathOverflow)?;

    let treasury = &mut ctx.accounts.treasury;
    treasury.total_bonus_out = treasury
        .total_bonus_out
        .checked_add(amount)
        .ok_or(Aura7ErrorCode::MathOverflow)?;

    emit!(BonusClaimedEvent {
        player: player.owner,
        kind: BONUS_KIND_UPGRADE,
        vip_level: level,
        amount,
        wagering_required: amount.saturating_mul(cfg.wagering_multiplier as u64),
        period_index: 0,
        timestamp: now,
    });

    Ok(())
}
