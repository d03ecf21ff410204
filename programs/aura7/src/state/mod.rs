pub mod agent;
pub mod brackets;
pub mod config;
pub mod player;
pub mod referral;
pub mod tiers;
pub mod treasury;

pub use agent::*;
pub use brackets::*;
pub use config::*;
pub use player::*;
pub use referral::*;
pub use tiers::*;
