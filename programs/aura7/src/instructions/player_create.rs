use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::state::player::PlayerAccount;
use crate::utils::period::{month_index, week_index};

#[derive(Accounts)]
pub struct CreatePlayer<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + PlayerAccount::SIZE,
        seeds = [PlayerAccount::SEED_PREFIX, owner.key().as_ref()],
        bump
    )]
    pub player: Account<'info, PlayerAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn create_player_handler(ctx: Context<CreatePlayer>) -> Result<()> {
    let player = &mut ctx.accounts.player;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= 0, Aura7ErrorCode::InvalidTimestamp);

    player.owner = ctx.accounts.owner.key();
    player.bump = ctx.bumps.player;
    player.referred_by = Pubkey::default();
    player.total_deposit = 0;
    player.vip_level = 0;
    player.created_at = now;
    player.last_recharge_at = 0;

    // Period accumulators start on the current calendar week/month.
    player.week_index = week_index(now);
    player.week_recharge = 0;
    player.prev_week_recharge = 0;
    player.month_index = month_index(now);
    player.month_recharge = 0;
    player.prev_month_recharge = 0;

    player.last_weekly_claim_week = 0;
    player.last_monthly_claim_month = 0;
    player.upgrade_claimed_level = 0;
    player.total_bonus_claimed = 0;
    player._reserved = [0; 16];

    Ok(())
}
