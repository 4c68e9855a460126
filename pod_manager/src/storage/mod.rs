multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{CollateralConfig, FeeIndexState, ManagerParams, PodRecord};

#[multiversx_sc::module]
pub trait Storage {
    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<ManagerParams<Self::Api>>;

    // Collaborators

    #[storage_mapper("vault")]
    fn vault(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("staking")]
    fn staking(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("fee_module")]
    fn fee_module(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("market")]
    fn market(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("oracle")]
    fn oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("yield_source")]
    fn yield_source(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    // Tokens

    /// Asset rented from the vault.
    #[storage_mapper("base_asset")]
    fn base_asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Stable token borrowed on the market; fees are paid in it.
    #[storage_mapper("debt_token")]
    fn debt_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("debt_decimals")]
    fn debt_decimals(&self) -> SingleValueMapper<usize>;

    #[view(getCollateralConfig)]
    #[storage_mapper("collateral_config")]
    fn collateral_config(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<CollateralConfig>;

    // Fee ledger

    #[storage_mapper("fee_index")]
    fn fee_index(&self) -> SingleValueMapper<FeeIndexState<Self::Api>>;

    /// Settled and minting fees waiting for the next flush, in debt token.
    #[view(reserveAmount)]
    #[storage_mapper("reserve")]
    fn reserve(&self) -> SingleValueMapper<BigUint>;

    // Pods

    #[view(getPodCount)]
    #[storage_mapper("pod_count")]
    fn pod_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pod")]
    fn pod(&self, pod_id: u64) -> SingleValueMapper<PodRecord<Self::Api>>;

    /// `0` when `owner` has no pod for `collateral`.
    #[view(getPodId)]
    #[storage_mapper("pod_id")]
    fn pod_id(
        &self,
        owner: &ManagedAddress,
        collateral: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<u64>;

    #[storage_mapper("owner_pods")]
    fn owner_pods(&self, owner: &ManagedAddress) -> UnorderedSetMapper<u64>;
}
