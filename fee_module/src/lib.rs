#![no_std]

multiversx_sc::imports!();

use common_errors::{ERROR_ADDRESS_ZERO, ERROR_NULL_AMOUNT};
use common_proxies::proxy_vault;

/// Utilization-driven rent fee rate.
///
/// Below 75% vault utilization the base rate applies; above it the rate grows linearly,
/// reaching 2x base at 100%.
#[multiversx_sc::contract]
pub trait FeeModule:
    common_math::SharedMathModule + common_accrual::AccrualModule + common_events::EventsModule
{
    /// # Arguments
    /// - `vault`: Vault whose utilization drives the rate.
    /// - `base_fee_per_second`: Base fee per second per rented unit (WAD).
    #[init]
    fn init(&self, vault: ManagedAddress, base_fee_per_second: BigUint) {
        require!(!vault.is_zero(), ERROR_ADDRESS_ZERO);
        require!(base_fee_per_second > 0, ERROR_NULL_AMOUNT);

        self.vault().set(&vault);
        self.base_fee_per_second()
            .set(self.to_decimal_wad(base_fee_per_second));
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(updateFeePerSecond)]
    fn update_fee_per_second(&self, new_fee: BigUint) {
        require!(new_fee > 0, ERROR_NULL_AMOUNT);

        let old_fee = self.base_fee_per_second().get();
        let new_fee = self.to_decimal_wad(new_fee);
        self.base_fee_per_second().set(&new_fee);

        self.fee_per_second_updated_event(&old_fee, &new_fee);
    }

    /// Fee per second per rented unit at the vault's current utilization (WAD).
    ///
    /// **Formula**:
    /// - `u < 0.75`: `base`.
    /// - `u >= 0.75`: `base * (1 + 4 * (u - 0.75))`.
    #[view(getCurrentFeePerSecond)]
    fn get_current_fee_per_second(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let vault = self.vault().get();

        let total_rented = self
            .tx()
            .to(&vault)
            .typed(proxy_vault::VaultProxy)
            .total_rented()
            .returns(ReturnsResult)
            .sync_call_readonly();

        let total_assets = self
            .tx()
            .to(&vault)
            .typed(proxy_vault::VaultProxy)
            .total_assets()
            .returns(ReturnsResult)
            .sync_call_readonly();

        let utilization = self.utilization(&total_rented, &total_assets);
        self.fee_per_second_for_utilization(&self.base_fee_per_second().get(), &utilization)
    }

    #[view(getBaseFeePerSecond)]
    #[storage_mapper("base_fee_per_second")]
    fn base_fee_per_second(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getVault)]
    #[storage_mapper("vault")]
    fn vault(&self) -> SingleValueMapper<ManagedAddress>;
}
