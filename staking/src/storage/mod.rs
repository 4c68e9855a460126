multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{RewardState, UserRewardState};

#[multiversx_sc::module]
pub trait Storage {
    #[view(getStakedToken)]
    #[storage_mapper("staked_token")]
    fn staked_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(isInitialized)]
    #[storage_mapper("initialized")]
    fn initialized(&self) -> SingleValueMapper<bool>;

    /// Total scaled stake, raw RAY units.
    #[storage_mapper("total_scaled")]
    fn total_scaled(&self) -> SingleValueMapper<BigUint>;

    /// Scaled stake of one holder, raw RAY units.
    #[storage_mapper("user_scaled")]
    fn user_scaled(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reward_tokens")]
    fn reward_tokens(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("reward_state")]
    fn reward_state(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<RewardState<Self::Api>>;

    #[storage_mapper("user_reward_state")]
    fn user_reward_state(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<UserRewardState<Self::Api>>;

    #[storage_mapper("reward_depositors")]
    fn reward_depositors(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Materiality threshold of reward top-ups (BPS).
    #[view(getUpdateRewardRatio)]
    #[storage_mapper("update_reward_ratio")]
    fn update_reward_ratio(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("allowed_claimer")]
    fn allowed_claimer(&self, user: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;
}
