use anchor_lang::prelude::*;
use crate::errors::Aura7ErrorCode;

/// System-program transfer from a signing wallet (treasury funding).
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, Aura7ErrorCode::InvalidAmount);

    anchor_lang::system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            anchor_lang::system_program::Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Direct lamport move out of the program-owned treasury PDA.
pub fn payout_from_treasury<'info>(
    treasury: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, Aura7ErrorCode::InvalidAmount);

    let balance = **treasury.lamports.borrow();
    require!(
        balance >= amount,
        Aura7ErrorCode::InsufficientTreasuryBalance
    );

    **treasury.try_borrow_mut_lamports()? -= amount;
    **recipient.try_borrow_mut_lamports()? += amount;
    Ok(())
}
