use anchor_lang::prelude::*;

/// ---------------------------------------------------------------------------
/// Treasury
/// ---------------------------------------------------------------------------
///
/// Program-owned PDA holding the lamport float that bonus and commission
/// payouts are drawn from. Counters are monotone, for analytics / audit.
#[account]
pub struct Treasury {
    /// Who funds the float and may withdraw the excess.
    pub authority: Pubkey,

    /// PDA bump for deterministic re-derivation.
    pub bump: u8,

    // ─────────────────────────────
    // Accounting / stats
    // ─────────────────────────────

    /// Total lamports ever funded into this treasury.
    pub total_in_lamports: u64,

    /// Total lamports ever paid out as VIP bonuses.
    pub total_bonus_out: u64,

    /// Total lamports ever paid out as agent rewards (invitation + commission).
    pub total_commission_out: u64,

    /// Versioning for future migrations.
    pub version: u8,

    /// Padding / reserved bytes for future use.
    pub _reserved: [u8; 32],
}

impl Treasury {
    pub const SEED: &'static [u8] = b"treasury";

    /// Serialized size excluding the 8-byte discriminator.
    pub const SIZE: usize =
        32 + // authority
            1  + // bump
            8  + // total_in_lamports
            8  + // total_bonus_out
            8  + // total_commission_out
            1  + // version
            32;  // reserved
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    #[test]
    fn treasury_size_matches_serialization() {
        let t = Treasury {
            authority: Pubkey::default(),
            bump: 0,
            total_in_lamports: 0,
            total_bonus_out: 0,
            total_commission_out: 0,
            version: 0,
            _reserved: [0u8; 32],
        };
        let bytes = t.try_to_vec().unwrap();
        assert_eq!(bytes.len(), Treasury::SIZE);
    }
}
