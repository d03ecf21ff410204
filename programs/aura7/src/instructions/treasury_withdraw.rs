use anchor_lang::prelude::*;

use crate::errors::Aura7ErrorCode;
use crate::state::treasury::Treasury;

/// Authority-only recovery of excess float. The account must stay
/// rent-exempt so the payout counters survive.
#[derive(Accounts)]
pub struct WithdrawTreasury<'info> {
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        has_one = authority @ Aura7ErrorCode::Unauthorized
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn withdraw_treasury_handler(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, Aura7ErrorCode::InvalidAmount);

    let treasury_info = ctx.accounts.treasury.to_account_info();
    let balance = **treasury_info.lamports.borrow();
    let rent_floor = Rent::get()?.minimum_balance(8 + Treasury::SIZE);

    let available = balance.saturating_sub(rent_floor);
    require!(
        amount <= available,
        Aura7ErrorCode::InsufficientTreasuryBalance
    );

    **treasury_info.try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.authority.to_account_info().try_borrow_mut_lamports()? += amount;

    Ok(())
}
