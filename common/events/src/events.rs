#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    // Scaled balance ledgers (vault and staking)

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] scaled_amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] scaled_amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("staked")]
    fn staked_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] scaled_amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("unstaked")]
    fn unstaked_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] scaled_amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("ledger_initialized")]
    fn ledger_initialized_event(&self, #[indexed] seed_amount: &BigUint);

    // Vault rent side and reserve

    #[event("rent_to_manager")]
    fn rent_to_manager_event(
        &self,
        #[indexed] manager: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("notify_rented_amount")]
    fn notify_rented_amount_event(
        &self,
        #[indexed] manager: &ManagedAddress,
        #[indexed] added_amount: &BigUint,
    );

    #[event("pull_from_manager")]
    fn pull_from_manager_event(
        &self,
        #[indexed] manager: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("new_pod_manager")]
    fn new_pod_manager_event(&self, #[indexed] manager: &ManagedAddress);

    #[event("blocked_pod_manager")]
    fn blocked_pod_manager_event(&self, #[indexed] manager: &ManagedAddress);

    #[event("vault_yield_claimed")]
    fn vault_yield_claimed_event(
        &self,
        #[indexed] claimed: &BigUint,
        #[indexed] reserve_part: &BigUint,
    );

    #[event("reserve_deposit")]
    fn reserve_deposit_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("reserve_withdraw")]
    fn reserve_withdraw_event(
        &self,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    // Reward streams

    #[event("new_rewards")]
    fn new_rewards_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] distribution_end: u64,
    );

    #[event("queued_rewards")]
    fn queued_rewards_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] queued_amount: &BigUint,
    );

    #[event("claimed_rewards")]
    fn claimed_rewards_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("set_user_allowed_claimer")]
    fn set_user_allowed_claimer_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] claimer: &ManagedAddress,
    );

    #[event("reward_depositor_updated")]
    fn reward_depositor_updated_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] allowed: bool,
    );

    // Pods, fee ledger and liquidations

    #[event("pod_created")]
    fn pod_created_event(
        &self,
        #[indexed] pod_id: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] collateral: &EgldOrEsdtTokenIdentifier,
    );

    #[event("update_fee_index")]
    fn update_fee_index_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] fee_index: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] fee_per_second: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("update_pod_state")]
    fn update_pod_state_event(&self, #[indexed] pod: &PodRecord<Self::Api>);

    #[event("rented_asset")]
    fn rented_asset_event(&self, #[indexed] pod_id: u64, #[indexed] amount: &BigUint);

    #[event("freed_asset")]
    fn freed_asset_event(&self, #[indexed] pod_id: u64, #[indexed] amount: &BigUint);

    #[event("pod_yield_claimed")]
    fn pod_yield_claimed_event(&self, #[indexed] pod_id: u64, #[indexed] amount: &BigUint);

    #[event("paid_fees")]
    fn paid_fees_event(&self, #[indexed] pod_id: u64, #[indexed] amount: &BigUint);

    #[event("minting_fee")]
    fn minting_fee_event(&self, #[indexed] pod_id: u64, #[indexed] amount: &BigUint);

    #[event("reserve_processed")]
    fn reserve_processed_event(
        &self,
        #[indexed] protocol_amount: &BigUint,
        #[indexed] rewards_amount: &BigUint,
    );

    #[event("liquidated_pod")]
    fn liquidated_pod_event(
        &self,
        #[indexed] pod_id: u64,
        #[indexed] collateral: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral_amount: &BigUint,
        #[indexed] fee_amount: &BigUint,
    );

    #[event("collateral_updated")]
    fn collateral_updated_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] config: &CollateralConfig,
    );

    #[event("fee_per_second_updated")]
    fn fee_per_second_updated_event(
        &self,
        #[indexed] old_fee: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] new_fee: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    // Shared by every `update*` setter: `name` identifies the parameter.
    #[event("parameter_updated")]
    fn parameter_updated_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] old_value: &BigUint,
        #[indexed] new_value: &BigUint,
    );
}
