pub mod commission;
pub mod period;
pub mod referral_code;
pub mod tier;
pub mod transfers;

pub use commission::*;
pub use referral_code::*;
pub use tier::*;
