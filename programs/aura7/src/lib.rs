use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("FDocADJsAuee6Pt4QuBQCjfdsv1sa9ADefJyyDZynZ3o");

security_txt! {
    name: "AURA7",
    project_url: "https://aura7.bet",
    source_code: "https://github.com/aura7bet/aura7-anchor",
    contacts: "mailto:security@aura7.bet",
    policy: "https://github.com/aura7bet/aura7-anchor/blob/main/SECURITY.md",
    preferred_languages: "en"
}


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::brackets::CommissionBracket;
use state::tiers::VipTier;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod aura7 {
    use super::*;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(ctx: Context<Initialize>, program_version: u8) -> Result<()> {
        initialize_handler(ctx, program_version)
    }

    // -------------------------------------------------------------------------
    // update_config
    // -------------------------------------------------------------------------
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        pause_recharge: Option<u8>,
        pause_claims: Option<u8>,
        new_authority: Option<Pubkey>,
        new_valid_user_threshold: Option<u64>,
        new_invitation_reward: Option<u64>,
        new_max_rewarded_referrals: Option<u16>,
        new_wagering_multiplier: Option<u8>,
        new_tiers: Vec<VipTier>,
        new_brackets: Vec<CommissionBracket>,
    ) -> Result<()> {
        update_config_handler(
            ctx,
            pause_recharge,
            pause_claims,
            new_authority,
            new_valid_user_threshold,
            new_invitation_reward,
            new_max_rewarded_referrals,
            new_wagering_multiplier,
            new_tiers,
            new_brackets,
        )
    }

    // -------------------------------------------------------------------------
    // emergency_pause_all
    // -------------------------------------------------------------------------
    pub fn emergency_pause_all(ctx: Context<UpdateConfig>) -> Result<()> {
        update_config_handler(
            ctx,
            Some(1),
            Some(1),
            None,
            None,
            None,
            None,
            None,
            vec![],
            vec![],
        )
    }

    // =====================================================================
    // ACCOUNT LIFECYCLE
    // =====================================================================

    pub fn create_player(ctx: Context<CreatePlayer>) -> Result<()> {
        create_player_handler(ctx)
    }

    pub fn close_player(ctx: Context<ClosePlayer>) -> Result<()> {
        close_player_handler(ctx)
    }

    pub fn create_agent(ctx: Context<CreateAgent>) -> Result<()> {
        create_agent_handler(ctx)
    }

    pub fn bind_referral(ctx: Context<BindReferral>) -> Result<()> {
        bind_referral_handler(ctx)
    }

    // =====================================================================
    // RECHARGE ORACLE
    // =====================================================================

    pub fn record_recharge(ctx: Context<RecordRecharge>, amount: u64) -> Result<()> {
        record_recharge_handler(ctx, amount)
    }

    pub fn record_referred_recharge(
        ctx: Context<RecordReferredRecharge>,
        amount: u64,
    ) -> Result<()> {
        record_referred_recharge_handler(ctx, amount)
    }

    // =====================================================================
    // CLAIMS
    // =====================================================================

    pub fn claim_weekly_bonus(ctx: Context<ClaimWeeklyBonus>) -> Result<()> {
        claim_weekly_bonus_handler(ctx)
    }

    pub fn claim_monthly_bonus(ctx: Context<ClaimMonthlyBonus>) -> Result<()> {
        claim_monthly_bonus_handler(ctx)
    }

    pub fn claim_upgrade_bonus(ctx: Context<ClaimUpgradeBonus>) -> Result<()> {
        claim_upgrade_bonus_handler(ctx)
    }

    pub fn claim_commission(ctx: Context<ClaimCommission>) -> Result<()> {
        claim_commission_handler(ctx)
    }

    // -------------------------------------------------------------------------
    // treasury
    // -------------------------------------------------------------------------
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        fund_treasury_handler(ctx, amount)
    }

    pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
        withdraw_treasury_handler(ctx, amount)
    }
}
