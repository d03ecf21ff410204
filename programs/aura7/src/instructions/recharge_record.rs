use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::events::RechargeRecordedEvent;
use crate::state::config::Config;
use crate::state::player::PlayerAccount;
use crate::utils::tier::resolve_tier;

/// Cashier-posted recharge for a player without a referrer.
///
/// Deposits settle off-chain at the payment gateway; the config authority
/// posts the confirmed amount here, which drives VIP progression and the
/// bonus eligibility windows.
#[derive(Accounts)]
pub struct RecordRecharge<'info> {
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
        bump = player.bump
    )]
    pub player: Account<'info, PlayerAccount>,

    pub authority: Signer<'info>,
}

pub fn record_recharge_handler(ctx: Context<RecordRecharge>, amount: u64) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let player = &mut ctx.accounts.player;

    require!(!cfg.is_recharge_paused(), Aura7ErrorCode::RechargePaused);

    // A referred player's recharges must flow through the referred path so
    // the referral's cumulative recharge can never drift.
    require!(
        !player.has_referrer(),
        Aura7ErrorCode::MissingReferralAccounts
    );

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= 0, Aura7ErrorCode::InvalidTimestamp);

    player.apply_recharge(amount, now)?;
    player.vip_level = resolve_tier(player.total_deposit, cfg.tier_table())?.level;

    emit!(RechargeRecordedEvent {
        player: player.owner,
        amount,
        total_deposit: player.total_deposit,
        vip_level: player.vip_level,
        timestamp: now,
    });

    Ok(())
}
