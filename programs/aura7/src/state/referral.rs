use anchor_lang::prelude::*;

/// One agent → referred-player relationship.
///
/// Created at signup (before the player's first recharge), so
/// `total_recharge` here always equals the player's cumulative deposit.
/// `is_valid` flips once when the valid-user threshold is crossed and never
/// reverts; `commission_accrued` is the quote level already credited to the
/// agent, raised monotonically as the cumulative recharge is re-rated.
#[account]
pub struct ReferralRecord {
    /// The referring agent wallet.
    pub agent: Pubkey, // 32

    /// The referred player wallet.
    pub player: Pubkey, // 32

    /// Timestamp of the signup bind.
    pub created_at: i64, // 8

    /// Referred user's cumulative recharge.
    pub total_recharge: u64, // 8

    /// 1 once `total_recharge` crossed the valid-user threshold.
    pub is_valid: u8, // 1

    /// 1 once this referral earned the agent the flat invitation reward.
    pub invitation_rewarded: u8, // 1

    /// Commission already credited to the agent for this referral.
    pub commission_accrued: u64, // 8

    /// PDA bump.
    pub bump: u8, // 1

    /// Reserved for future upgrades.
    pub _reserved: [u8; 8],
}

impl ReferralRecord {
    pub const SEED_PREFIX: &'static [u8] = b"referral";

    /// Serialized size excluding the 8-byte discriminator.
    pub const SIZE: usize =
        32 // agent
            + 32 // player
            + 8  // created_at
            + 8  // total_recharge
            + 1  // is_valid
            + 1  // invitation_rewarded
            + 8  // commission_accrued
            + 1  // bump
            + 8; // reserved
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    #[test]
    fn referral_size_matches_serialization() {
        let r = ReferralRecord {
            agent: Pubkey::default(),
            player: Pubkey::default(),
            created_at: 0,
            total_recharge: 0,
            is_valid: 0,
            invitation_rewarded: 0,
            commission_accrued: 0,
            bump: 0,
            _reserved: [0; 8],
        };
        let bytes = r.try_to_vec().unwrap();
        assert_eq!(bytes.len(), ReferralRecord::SIZE);
    }
}
