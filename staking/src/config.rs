multiversx_sc::imports!();

use common_constants::BPS;
use common_errors::{ERROR_ALREADY_LISTED, ERROR_INVALID_PARAMETER, ERROR_NOT_LISTED};

use crate::storage;

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    #[only_owner]
    #[endpoint(addRewardDepositor)]
    fn add_reward_depositor(&self, depositor: ManagedAddress) {
        require!(
            self.reward_depositors().insert(depositor.clone()),
            ERROR_ALREADY_LISTED
        );

        self.reward_depositor_updated_event(&depositor, true);
    }

    #[only_owner]
    #[endpoint(removeRewardDepositor)]
    fn remove_reward_depositor(&self, depositor: ManagedAddress) {
        require!(
            self.reward_depositors().swap_remove(&depositor),
            ERROR_NOT_LISTED
        );

        self.reward_depositor_updated_event(&depositor, false);
    }

    /// Sets the top-up/distributed ratio above which a top-up restarts the window (BPS, 1..=10000).
    #[only_owner]
    #[endpoint(updateRewardRatio)]
    fn update_reward_ratio_endpoint(&self, new_ratio: BigUint) {
        require!(
            new_ratio > 0 && new_ratio <= BigUint::from(BPS),
            ERROR_INVALID_PARAMETER
        );

        let old_ratio = self.update_reward_ratio().get().into_raw_units().clone();
        self.update_reward_ratio()
            .set(self.to_decimal_bps(new_ratio.clone()));

        self.parameter_updated_event(
            &ManagedBuffer::from(b"update_reward_ratio"),
            &old_ratio,
            &new_ratio,
        );
    }
}
