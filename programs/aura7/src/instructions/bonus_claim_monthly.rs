use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::events::{BonusClaimedEvent, BONUS_KIND_MONTHLY};
use crate::state::config::Config;
use crate::state::player::PlayerAccount;
use crate::state::treasury::Treasury;
use crate::utils::period::month_index;
use crate::utils::tier::{bonuses_for, is_monthly_bonus_eligible, resolve_tier};
use crate::utils::transfers::payout_from_treasury;

/// Monthly VIP bonus claim; mirrors the weekly rule with the monthly bonus
/// amount and calendar months.
#[derive(Accounts)]
pub struct ClaimMonthlyBonus<'info> {
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

pub fn claim_monthly_bonus_handler(ctx: Context<ClaimMonthlyBonus>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let player = &mut ctx.accounts.player;

    require!(!cfg.is_claims_paused(), Aura7ErrorCode::ClaimsPaused);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= 0, Aura7ErrorCode::InvalidTimestamp);

    player.roll_periods(now);
    let current_month = month_index(now);

    // Re-derive the level rather than trusting the cache; the table may have
    // changed since the last recharge.
    let level = resolve_tier(player.total_deposit, cfg.tier_table())?.level;
    player.vip_level = level;

    let tier = bonuses_for(level, cfg.tier_table())?;
    require!(tier.monthly_bonus > 0, Aura7ErrorCode::BonusNotConfigured);
    require!(
        is_monthly_bonus_eligible(player.prev_month_recharge, tier),
        Aura7ErrorCode::NotEligible
    );

    // One claim per calendar month.
    require!(
        player.last_monthly_claim_month < current_month,
        Aura7ErrorCode::AlreadyClaimed
    );

    let amount = tier.monthly_bonus;
    payout_from_treasury(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    player.last_monthly_claim_month = current_month;
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
        kind: BONUS_KIND_MONTHLY,
        vip_level: player.vip_level,
        amount,
        wagering_required: amount.saturating_mul(cfg.wagering_multiplier as u64),
        period_index: current_month,
        timestamp: now,
    });

    Ok(())
}
