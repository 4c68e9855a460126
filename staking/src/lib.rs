#![no_std]

multiversx_sc::imports!();

pub mod cache;
pub mod config;
pub mod rewards;
pub mod stake;
pub mod storage;
pub mod views;

use common_constants::DEFAULT_UPDATE_REWARD_RATIO;
pub use common_errors::*;
pub use common_structs::*;

/// Staking ledger of the protocol token. Stakers hold scaled stake and earn the reward
/// streams funded by the pod manager reserve, paid in the debt token.
#[multiversx_sc::contract]
pub trait Staking:
    storage::Storage
    + stake::StakeModule
    + rewards::RewardsModule
    + config::ConfigModule
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
{
    /// # Arguments
    /// - `staked_token`: Token accepted by `stake`; it can never be a reward token.
    #[init]
    fn init(&self, staked_token: EgldOrEsdtTokenIdentifier) {
        require!(staked_token.is_valid(), ERROR_INVALID_TOKEN);

        self.staked_token().set(&staked_token);
        self.update_reward_ratio()
            .set(self.to_decimal_bps(BigUint::from(DEFAULT_UPDATE_REWARD_RATIO)));
        self.initialized().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
