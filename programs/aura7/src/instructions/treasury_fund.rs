use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::state::treasury::Treasury;
use crate::utils::transfers::transfer_lamports;

/// Tops up the payout float. Anyone may fund.
#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn fund_treasury_handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    transfer_lamports(
        &ctx.accounts.funder.to_account_info(),
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    let treasury = &mut ctx.accounts.treasury;
    treasury.total_in_lamports = treasury
        .total_in_lamports
        .checked_add(amount)
        .ok_or(Aura7ErrorCode::MathOverflow)?;

    msg!("Treasury funded with {} lamports", amount);
    Ok(())
}
