use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::events::CommissionClaimedEvent;
use crate::state::agent::AgentAccount;
use crate::state::config::Config;
use crate::state::treasury::Treasury;
use crate::utils::transfers::payout_from_treasury;

/// Agent reward claim: pays out the unclaimed invitation-reward and
/// commission pools in one transfer and moves both to claimed.
#[derive(Accounts)]
pub struct ClaimCommission<'info> {
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
        seeds = [AgentAccount::SEED_PREFIX, owner.key().as_ref()],
        bump = agent.bump,
        constraint = agent.owner == owner.key() @ Aura7ErrorCode::Unauthorized
    )]
    pub agent: Account<'info, AgentAccount>,

    /// Wallet receiving the payout.
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn claim_commission_handler(ctx: Context<ClaimCommission>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let agent = &mut ctx.accounts.agent;

    require!(!cfg.is_claims_paused(), Aura7ErrorCode::ClaimsPaused);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= 0, Aura7ErrorCode::InvalidTimestamp);

    agent.roll_day(now);

    let invitation_amount = agent.invitation_unclaimed;
    let commission_amount = agent.commission_unclaimed;
    let total = agent.claim_all()?;

    payout_from_treasury(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        total,
    )?;

    let treasury = &mut ctx.accounts.treasury;
    treasury.total_commission_out = treasury
        .total_commission_out
        .checked_add(total)
        .ok_or(Aura7ErrorCode::MathOverflow)?;

    emit!(CommissionClaimedEvent {
        agent: agent.owner,
        invitation_amount,
        commission_amount,
        total,
        timestamp: now,
    });

    Ok(())
}
