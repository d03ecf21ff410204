use anchor_lang::prelude::*;

/// One row of the VIP ladder.
///
/// Stored as a fixed-size array inside `Config`; the populated prefix is
/// `Config.tier_count` entries long. All amounts are lamports.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VipTier {
    /// Ladder position, 0-based and sequential.
    pub level: u8,

    /// NUL-padded display label ("Bronze", "Gold", ...).
    pub name: [u8; 12],

    /// Minimum cumulative deposit to hold this level.
    pub deposit_threshold: u64,

    /// Flat amount granted when last week's recharge clears the threshold.
    pub weekly_bonus: u64,

    /// Flat amount granted when last month's recharge clears the threshold.
    pub monthly_bonus: u64,

    /// One-time amount granted on promotion into this level.
    pub upgrade_bonus: u64,

    pub max_withdrawals_per_day: u8,

    pub _reserved: [u8; 2],
}

impl VipTier {
    pub const SIZE: usize =
        1  // level
            + 12 // name
            + 8  // deposit_threshold
            + 8  // weekly_bonus
            + 8  // monthly_bonus
            + 8  // upgrade_bonus
            + 1  // max_withdrawals_per_day
            + 2; // _reserved

    /// Unused table slot.
    pub const EMPTY: VipTier = VipTier {
        level: 0,
        name: [0; 12],
        deposit_threshold: 0,
        weekly_bonus: 0,
        monthly_bonus: 0,
        upgrade_bonus: 0,
        max_withdrawals_per_day: 0,
        _reserved: [0; 2],
    };

    /// Display label with the NUL padding stripped.
    pub fn name_str(&self) -> &str {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(self.name.len());
        core::str::from_utf8(&self.name[..end]).unwrap_or("")
    }

    /// Recharge required in a period to unlock the weekly bonus.
    #[inline]
    pub fn weekly_recharge_requirement(&self) -> u64 {
        self.weekly_bonus.saturating_mul(crate::constants::BONUS_RECHARGE_MULTIPLIER)
    }

    #[inline]
    pub fn monthly_recharge_requirement(&self) -> u64 {
        self.monthly_bonus.saturating_mul(crate::constants::BONUS_RECHARGE_MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    #[test]
    fn tier_size_matches_serialization() {
        let bytes = VipTier::EMPTY.try_to_vec().unwrap();
        assert_eq!(bytes.len(), VipTier::SIZE);
    }

    #[test]
    fn name_str_strips_padding() {
        let tier = VipTier {
            name: *b"Gold\0\0\0\0\0\0\0\0",
            ..VipTier::EMPTY
        };
        assert_eq!(tier.name_str(), "Gold");
        assert_eq!(VipTier::EMPTY.name_str(), "");
    }
}
