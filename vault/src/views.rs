multiversx_sc::imports!();

use common_constants::RAY_PRECISION;

use crate::storage;

/// Read-only endpoints. Values exclude yield the vault has not claimed yet.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage + common_math::SharedMathModule + common_accrual::AccrualModule
{
    #[view(getCurrentIndex)]
    fn get_current_index(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.compute_index(&self.total_assets(), &self.total_scaled_supply())
    }

    /// `balance + total_rented - reserve`.
    #[view(totalAssets)]
    fn total_assets(&self) -> BigUint {
        let gross = self.asset_balance() + self.total_rented().get();
        let reserve = self.reserve().get();
        if gross > reserve {
            gross - reserve
        } else {
            BigUint::zero()
        }
    }

    #[view(totalScaledSupply)]
    fn total_scaled_supply(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(self.total_scaled().get(), RAY_PRECISION)
    }

    #[view(scaledBalanceOf)]
    fn scaled_balance_of_view(
        &self,
        holder: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(self.scaled_balance(&holder).get(), RAY_PRECISION)
    }

    /// Current real balance of `holder`.
    #[view(balanceOf)]
    fn balance_of(&self, holder: ManagedAddress) -> BigUint {
        let scaled = self.scaled_balance_of_view(holder);
        self.real_from_scaled(&scaled, &self.get_current_index())
    }

    #[view(availableForRent)]
    fn available_for_rent(&self) -> BigUint {
        let params = self.params().get();
        let buffer = self.apply_bps_floor(&self.total_assets(), &params.buffer_ratio);
        let liquid = self.asset_balance();
        let reserve = self.reserve().get();

        if liquid > &reserve + &buffer {
            liquid - reserve - buffer
        } else {
            BigUint::zero()
        }
    }

    /// Rented share of the total assets (WAD).
    #[view(utilization)]
    fn get_utilization(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.utilization(&self.total_rented().get(), &self.total_assets())
    }

    #[view(isPodManager)]
    fn is_pod_manager(&self, manager: ManagedAddress) -> bool {
        self.pod_managers().get(&manager).unwrap_or(false)
    }

    fn asset_balance(&self) -> BigUint {
        let params = self.params().get();
        self.blockchain().get_sc_balance(&params.asset_id, 0)
    }
}
