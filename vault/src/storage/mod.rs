multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::VaultParams;

/// On-chain state of the vault.
///
/// Scaled balances and the total scaled supply are stored as raw RAY units so that
/// accounts that never deposited decode to zero.
#[multiversx_sc::module]
pub trait Storage {
    /// Returns the vault configuration (asset, decimals, reserve and buffer ratios).
    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<VaultParams<Self::Api>>;

    /// Address of the contract paying the base-asset yield.
    #[view(getYieldSource)]
    #[storage_mapper("yield_source")]
    fn yield_source(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isInitialized)]
    #[storage_mapper("initialized")]
    fn initialized(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("total_scaled")]
    fn total_scaled(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("scaled_balance")]
    fn scaled_balance(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Real amount of base asset currently rented by all pod managers.
    #[view(totalRentedAmount)]
    #[storage_mapper("total_rented")]
    fn total_rented(&self) -> SingleValueMapper<BigUint>;

    #[view(managerRentedAmount)]
    #[storage_mapper("manager_rented")]
    fn manager_rented(&self, manager: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Base asset set aside from the claimed yield, excluded from the total assets.
    #[view(reserveAmount)]
    #[storage_mapper("reserve")]
    fn reserve(&self) -> SingleValueMapper<BigUint>;

    /// Listed pod managers; the flag is `false` once a manager is blocked.
    #[storage_mapper("pod_managers")]
    fn pod_managers(&self) -> MapMapper<ManagedAddress, bool>;
}
