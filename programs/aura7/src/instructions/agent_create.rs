use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::state::agent::AgentAccount;
use crate::utils::period::day_index;
use crate::utils::referral_code::derive_referral_code;

#[derive(Accounts)]
pub struct CreateAgent<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + AgentAccount::SIZE,
        seeds = [AgentAccount::SEED_PREFIX, owner.key().as_ref()],
        bump
    )]
    pub agent: Account<'info, AgentAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn create_agent_handler(ctx: Context<CreateAgent>) -> Result<()> {
    let agent = &mut ctx.accounts.agent;
    let owner_key = ctx.accounts.owner.key();

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= 0, Aura7ErrorCode::InvalidTimestamp);

    agent.owner = owner_key;
    agent.bump = ctx.bumps.agent;
    agent.referral_code = derive_referral_code(&owner_key);

    agent.total_referrals = 0;
    agent.valid_referrals = 0;
    agent.rewarded_referrals = 0;

    agent.invitation_unclaimed = 0;
    agent.invitation_claimed = 0;
    agent.commission_unclaimed = 0;
    agent.commission_claimed = 0;

    agent.day_index = day_index(now);
    agent.new_subordinates_today = 0;
    agent.team_recharge_today = 0;
    agent.commission_today = 0;
    agent.commission_yesterday = 0;

    agent.created_at = now;
    agent._reserved = [0; 16];

    msg!("Agent registered with invite code {}",
        core::str::from_utf8(&agent.referral_code).unwrap_or("<invalid>"));

    Ok(())
}
