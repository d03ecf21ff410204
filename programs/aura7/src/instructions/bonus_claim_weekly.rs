use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::events::{BonusClaimedEvent, BONUS_KIND_WEEKLY};
use crate::state::config::Config;
use crate::state::player::PlayerAccount;
use crate::state::treasury::Treasury;
use crate::utils::period::week_index;
use crate::utils::tier::{bonuses_for, is_weekly_bonus_eligible, resolve_tier};
use crate::utils::transfers::payout_from_treasury;

/// Weekly VIP bonus claim: last week's recharge must reach 10x the bonus of
/// the player's current tier, once per calendar week.
#[derive(Accounts)]
pub struct ClaimWeeklyBonus<'info> {
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

pub fn claim_weekly_bonus_handler(ctx: Context<ClaimWeeklyBonus>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let player = &mut ctx.accounts.player;

    require!(!cfg.is_claims_paused(), Aura7ErrorCode::ClaimsPaused);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= 0, Aura7ErrorCode::InvalidTimestamp);

    // Shift the accumulators so `prev_week_recharge` really is last week.
    player.roll_periods(now);
    let current_week = week_index(now);

    // Re-derive the level rather than trusting the cache; the table may have
    // changed since the last recharge.
    let level = resolve_tier(player.total_deposit, cfg.tier_table())?.level;
    player.vip_level = level;

    let tier = bonuses_for(level, cfg.tier_table())?;
    require!(tier.weekly_bonus > 0, Aura7ErrorCode::BonusNotConfigured);
    require!(
        is_weekly_bonus_eligible(player.prev_week_recharge, tier),
        Aura7ErrorCode::NotEligible
    );

    // One claim per calendar week.
    require!(
        player.last_weekly_claim_week < current_week,
        Aura7ErrorCode::AlreadyClaimed
    );

    let amount = tier.weekly_bonus;
    payout_from_treasury(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    player.last_weekly_claim_week = current_week;
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
        kind: BONUS_KIND_WEEKLY,
        vip_level: player.vip_level,
        amount,
        wagering_required: amount.saturating_mul(cfg.wagering_multiplier as u64),
        period_index: current_week,
        timestamp: now,
    });

    Ok(())
}
