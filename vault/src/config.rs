multiversx_sc::imports!();

use common_constants::{MAX_BUFFER_RATIO, MAX_RESERVE_RATIO};
use common_errors::{ERROR_ALREADY_LISTED, ERROR_INVALID_PARAMETER, ERROR_NOT_LISTED};

use crate::storage;

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Updates the share of the total assets that can never be rented (max 15%).
    #[only_owner]
    #[endpoint(updateBufferRatio)]
    fn update_buffer_ratio(&self, new_ratio: BigUint) {
        require!(
            new_ratio <= BigUint::from(MAX_BUFFER_RATIO),
            ERROR_INVALID_PARAMETER
        );

        let mut params = self.params().get();
        let old_ratio = params.buffer_ratio.into_raw_units().clone();
        params.buffer_ratio = self.to_decimal_bps(new_ratio.clone());
        self.params().set(&params);

        self.parameter_updated_event(&ManagedBuffer::from(b"buffer_ratio"), &old_ratio, &new_ratio);
    }

    /// Updates the share of the claimed yield kept as reserve (max 20%).
    #[only_owner]
    #[endpoint(updateReserveRatio)]
    fn update_reserve_ratio(&self, new_ratio: BigUint) {
        require!(
            new_ratio <= BigUint::from(MAX_RESERVE_RATIO),
            ERROR_INVALID_PARAMETER
        );

        let mut params = self.params().get();
        let old_ratio = params.reserve_ratio.into_raw_units().clone();
        params.reserve_ratio = self.to_decimal_bps(new_ratio.clone());
        self.params().set(&params);

        self.parameter_updated_event(&ManagedBuffer::from(b"reserve_ratio"), &old_ratio, &new_ratio);
    }

    #[only_owner]
    #[endpoint(addPodManager)]
    fn add_pod_manager(&self, manager: ManagedAddress) {
        let mut managers = self.pod_managers();
        require!(!managers.contains_key(&manager), ERROR_ALREADY_LISTED);

        managers.insert(manager.clone(), true);
        self.new_pod_manager_event(&manager);
    }

    /// Stops a manager from renting; it can still return assets and notify claims.
    #[only_owner]
    #[endpoint(blockPodManager)]
    fn block_pod_manager(&self, manager: ManagedAddress) {
        let mut managers = self.pod_managers();
        require!(managers.contains_key(&manager), ERROR_NOT_LISTED);

        managers.insert(manager.clone(), false);
        self.blocked_pod_manager_event(&manager);
    }
}
