pub mod agent_create;
pub mod bonus_claim_monthly;
pub mod bonus_claim_upgrade;
pub mod bonus_claim_weekly;
pub mod commission_claim;
pub mod config_update;
pub mod initialize;
pub mod player_close;
pub mod player_create;
pub mod recharge_record;
pub mod recharge_record_referred;
pub mod referral_bind;
pub mod treasury_fund;
pub mod treasury_withdraw;

pub use agent_create::*;
pub use bonus_claim_monthly::*;
pub use bonus_claim_upgrade::*;
pub use bonus_claim_weekly::*;
pub use commission_claim::*;
pub use config_update::*;
pub use initialize::*;
pub use player_close::*;
pub use player_create::*;
pub use recharge_record::*;
pub use recharge_record_referred::*;
pub use referral_bind::*;
pub use treasury_fund::*;
pub use treasury_withdraw::*;
