use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::events::ReferralBoundEvent;
use crate::state::agent::AgentAccount;
use crate::state::player::PlayerAccount;
use crate::state::referral::ReferralRecord;

/// Binds a freshly signed-up player to a referring agent.
///
/// The bind happens before the player's first recharge, so the referral's
/// cumulative recharge always mirrors the player's cumulative deposit.
#[derive(Accounts)]
pub struct BindReferral<'info> {
    /// The referring agent's aggregate account.
    #[account(
        mut,
        seeds = [AgentAccount::SEED_PREFIX, agent.owner.as_ref()],
        bump = agent.bump
    )]
    pub agent: Account<'info, AgentAccount>,

    /// The signing player's ledger account.
    #[account(
        mut,
        seeds = [PlayerAccount::SEED_PREFIX, owner.key().as_ref()],
        bump = player.bump,
        constraint = player.owner == owner.key() @ Aura7ErrorCode::Unauthorized
    )]
    pub player: Account<'info, PlayerAccount>,

    #[account(
        init,
        payer = owner,
        space = 8 + ReferralRecord::SIZE,
        seeds = [
            ReferralRecord::SEED_PREFIX,
            agent.owner.as_ref(),
            owner.key().as_ref()
        ],
        bump
    )]
    pub referral: Account<'info, ReferralRecord>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn bind_referral_handler(ctx: Context<BindReferral>) -> Result<()> {
    let agent = &mut ctx.accounts.agent;
    let player = &mut ctx.accounts.player;
    let referral = &mut ctx.accounts.referral;
    let owner_key = ctx.accounts.owner.key();

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= 0, Aura7ErrorCode::InvalidTimestamp);

    require!(agent.owner != owner_key, Aura7ErrorCode::CannotReferYourself);
    require!(!player.has_referrer(), Aura7ErrorCode::AlreadyReferred);
    require!(player.total_deposit == 0, Aura7ErrorCode::PlayerHasDeposits);

    player.referred_by = agent.owner;

    agent.roll_day(now);
    agent.total_referrals = agent
        .total_referrals
        .checked_add(1)
        .ok_or(Aura7ErrorCode::MathOverflow)?;
    agent.new_subordinates_today = agent
        .new_subordinates_today
        .checked_add(1)
        .ok_or(Aura7ErrorCode::MathOverflow)?;

    referral.agent = agent.owner;
    referral.player = owner_key;
    referral.created_at = now;
    referral.total_recharge = 0;
    referral.is_valid = 0;
    referral.invitation_rewarded = 0;
    referral.commission_accrued = 0;
    referral.bump = ctx.bumps.referral;
    referral._reserved = [0; 8];

    emit!(ReferralBoundEvent {
        agent: agent.owner,
        player: owner_key,
        timestamp: now,
    });

    Ok(())
}
