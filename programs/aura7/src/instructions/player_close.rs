use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::state::player::PlayerAccount;

#[derive(Accounts)]
pub struct ClosePlayer<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [PlayerAccount::SEED_PREFIX, owner.key().as_ref()],
        bump = player.bump,
        constraint = player.owner == owner.key() @ Aura7ErrorCode::Unauthorized,
        close = owner
    )]
    pub player: Box<Account<'info, PlayerAccount>>,

    pub system_program: Program<'info, System>,
}

/// Rent recovery for accounts that never recharged. A funded history stays
/// on-chain; closing it would detach the referral and claim audit trail.
pub fn close_player_handler(ctx: Context<ClosePlayer>) -> Result<()> {
    let player = &ctx.accounts.player;
    require!(player.total_deposit == 0, Aura7ErrorCode::PlayerHasDeposits);
    Ok(())
}
