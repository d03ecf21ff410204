use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

use crate::constants::REFERRAL_CODE_LEN;

/// Code alphabet without visually ambiguous characters (0/O, 1/I/L).
const CODE_ALPHABET: &[u8] = b"23456789ABCDEFGHJKMNPQRSTUVWXYZ";

const CODE_DOMAIN: &[u8] = b"AURA7_INVITE_V1";

/// Derives an agent's invite code from their wallet key.
///
/// Deterministic so the code can be recomputed anywhere (share links, the
/// signup form, indexers) without storing a mapping.
pub fn derive_referral_code(agent: &Pubkey) -> [u8; REFERRAL_CODE_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(CODE_DOMAIN);
    hasher.update(agent.as_ref());
    let digest = hasher.finalize();

    let mut code = [0u8; REFERRAL_CODE_LEN];
    for (slot, byte) in code.iter_mut().zip(digest.iter()) {
        *slot = CODE_ALPHABET[*byte as usize % CODE_ALPHABET.len()];
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_deterministic() {
        let key = Pubkey::new_unique();
        assert_eq!(derive_referral_code(&key), derive_referral_code(&key));
        assert_ne!(
            derive_referral_code(&key),
            derive_referral_code(&Pubkey::new_unique())
        );
    }

    #[test]
    fn code_uses_the_unambiguous_alphabet() {
        let code = derive_referral_code(&Pubkey::new_unique());
        for byte in code {
            assert!(CODE_ALPHABET.contains(&byte));
        }
    }
}
