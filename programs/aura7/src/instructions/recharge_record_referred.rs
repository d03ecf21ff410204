use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::events::{RechargeRecordedEvent, ReferralValidatedEvent};
use crate::state::agent::AgentAccount;
use crate::state::config::Config;
use crate::state::player::PlayerAccount;
use crate::state::referral::ReferralRecord;
use crate::utils::commission::commission_delta;
use crate::utils::tier::resolve_tier;

/// Cashier-posted recharge for a referred player.
///
/// On top of the plain recharge path this:
/// - mirrors the amount into the referral's cumulative recharge,
/// - flips the referral valid exactly once at the threshold (crediting the
///   flat invitation reward while the agent is under the cap),
/// - re-rates the cumulative recharge against the bracket schedule and
///   credits the delta to the agent's unclaimed commission,
/// - keeps the agent's daily dashboard rollups current.
#[derive(Accounts)]
pub struct RecordReferredRecharge<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ Aura7ErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    /// Player ledger, addressed by the wallet stored in it.
    #[account(
        mut,
        seeds = [PlayerAccount::SEED_PREFIX, player.owner.as_ref()],
        bump = player.bump,
        constraint = player.referred_by == referral.agent @ Aura7ErrorCode::ReferralMismatch
    )]
    pub player: Account<'info, PlayerAccount>,

    /// The agent -> player relationship being credited.
    #[account(
        mut,
        seeds = [
            ReferralRecord::SEED_PREFIX,
            referral.agent.as_ref(),
            referral.player.as_ref()
        ],
        bump = referral.bump,
        constraint = referral.player == player.owner @ Aura7ErrorCode::ReferralMismatch
    )]
    pub referral: Account<'info, ReferralRecord>,

    #[account(
        mut,
        seeds = [AgentAccount::SEED_PREFIX, agent.owner.as_ref()],
        bump = agent.bump,
        constraint = agent.owner == referral.agent @ Aura7ErrorCode::ReferralMismatch
    )]
    pub agent: Account<'info, AgentAccount>,

    pub authority: Signer<'info>,
}

pub fn record_referred_recharge_handler(
    ctx: Context<RecordReferredRecharge>,
    amount: u64,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let player = &mut ctx.accounts.player;
    let referral = &mut ctx.accounts.referral;
    let agent = &mut ctx.accounts.agent;

    require!(!cfg.is_recharge_paused(), Aura7ErrorCode::RechargePaused);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= 0, Aura7ErrorCode::InvalidTimestamp);

    // ─────────────────────────────────────────────
    // 1) Player ledger
    // ─────────────────────────────────────────────
    player.apply_recharge(amount, now)?;
    player.vip_level = resolve_tier(player.total_deposit, cfg.tier_table())?.level;

    // ─────────────────────────────────────────────
    // 2) Referral cumulative + commission re-rate
    // ─────────────────────────────────────────────
    referral.total_recharge = referral
        .total_recharge
        .checked_add(amount)
        .ok_or(Aura7ErrorCode::MathOverflow)?;

    agent.roll_day(now);
    agent.team_recharge_today = agent
        .team_recharge_today
        .checked_add(amount)
        .ok_or(Aura7ErrorCode::MathOverflow)?;

    let delta = commission_delta(
        referral.total_recharge,
        referral.commission_accrued,
        cfg.bracket_table(),
    )?;
    if delta > 0 {
        agent.accrue_commission(delta)?;
        referral.commission_accrued = referral
            .commission_accrued
            .checked_add(delta)
            .ok_or(Aura7ErrorCode::MathOverflow)?;
    }

    // ─────────────────────────────────────────────
    // 3) One-way valid-user transition
    // ─────────────────────────────────────────────
    if referral.is_valid == 0 && referral.total_recharge >= cfg.valid_user_threshold {
        referral.is_valid = 1;
        agent.valid_referrals = agent
            .valid_referrals
            .checked_add(1)
            .ok_or(Aura7ErrorCode::MathOverflow)?;

        let mut reward = 0u64;
        if agent.rewarded_referrals < cfg.max_rewarded_referrals as u32 {
            reward = cfg.invitation_reward;
            referral.invitation_rewarded = 1;
            agent.accrue_invitation_reward(reward)?;
        }

        emit!(ReferralValidatedEvent {
            agent: agent.owner,
            player: player.owner,
            invitation_reward: reward,
            valid_referrals: agent.valid_referrals,
            timestamp: now,
        });
    }

    emit!(RechargeRecordedEvent {
        player: player.owner,
        amount,
        total_deposit: player.total_deposit,
        vip_level: player.vip_level,
        timestamp: now,
    });

    Ok(())
}
