use anchor_lang::prelude::*;

/// One commission bracket: a half-open recharge range `[min, max)` mapped to
/// a flat rate in basis points.
///
/// The rate applies to the referred user's whole cumulative recharge, not
/// marginally to the slice inside the bracket. `max_recharge == u64::MAX`
/// marks the open-ended top bracket.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommissionBracket {
    pub min_recharge: u64,

    /// Exclusive upper bound; `u64::MAX` = open-ended.
    pub max_recharge: u64,

    pub rate_bps: u16,

    pub _reserved: [u8; 6],
}

impl CommissionBracket {
    pub const SIZE: usize =
        8  // min_recharge
            + 8  // max_recharge
            + 2  // rate_bps
            + 6; // _reserved

    /// Unused table slot.
    pub const EMPTY: CommissionBracket = CommissionBracket {
        min_recharge: 0,
        max_recharge: 0,
        rate_bps: 0,
        _reserved: [0; 6],
    };

    #[inline]
    pub fn is_open_ended(&self) -> bool {
        self.max_recharge == u64::MAX
    }

    #[inline]
    pub fn contains(&self, amount: u64) -> bool {
        amount >= self.min_recharge && (self.is_open_ended() || amount < self.max_recharge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    #[test]
    fn bracket_size_matches_serialization() {
        let bytes = CommissionBracket::EMPTY.try_to_vec().unwrap();
        assert_eq!(bytes.len(), CommissionBracket::SIZE);
    }

    #[test]
    fn contains_is_half_open() {
        let b = CommissionBracket {
            min_recharge: 300,
            max_recharge: 2_001,
            rate_bps: 500,
            _reserved: [0; 6],
        };
        assert!(!b.contains(299));
        assert!(b.contains(300));
        assert!(b.contains(2_000));
        assert!(!b.contains(2_001));

        let top = CommissionBracket {
            min_recharge: 15_001,
            max_recharge: u64::MAX,
            rate_bps: 900,
            _reserved: [0; 6],
        };
        assert!(top.contains(15_001));
        assert!(top.contains(u64::MAX));
    }
}
