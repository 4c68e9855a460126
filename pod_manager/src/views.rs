multiversx_sc::imports!();

use common_proxies::proxy_fee_module;
use common_structs::{FeeIndexState, LiquidationEstimate, PodRecord};

use crate::{fees, liquidation, rent, reserve, storage};

/// Read-only endpoints. "Current" values are projected to the current block without
/// writing anything.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + fees::FeesModule
    + rent::RentModule
    + liquidation::LiquidationModule
    + reserve::ReserveModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
    + multiversx_sc_modules::pause::PauseModule
{
    #[view(getPod)]
    fn get_pod(&self, pod_id: u64) -> PodRecord<Self::Api> {
        self.get_pod_record(pod_id)
    }

    #[view(getAllPods)]
    fn get_all_pods(&self) -> MultiValueEncoded<PodRecord<Self::Api>> {
        let mut pods = MultiValueEncoded::new();
        for pod_id in 1..=self.pod_count().get() {
            pods.push(self.pod(pod_id).get());
        }
        pods
    }

    #[view(getOwnerPods)]
    fn get_owner_pods(&self, owner: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut pod_ids = MultiValueEncoded::new();
        for pod_id in self.owner_pods(&owner).iter() {
            pod_ids.push(pod_id);
        }
        pod_ids
    }

    /// Owed fees including what accrued since the pod was last touched.
    #[view(podCurrentOwedFees)]
    fn pod_current_owed_fees(&self, pod_id: u64) -> BigUint {
        self.projected_pod(pod_id).accrued_fees
    }

    /// Owed fees as of the pod's last touch.
    #[view(podOwedFees)]
    fn pod_owed_fees(&self, pod_id: u64) -> BigUint {
        self.get_pod_record(pod_id).accrued_fees
    }

    #[view(getCurrentIndex)]
    fn get_current_index(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.projected_fee_index().last_updated_index
    }

    #[view(lastUpdatedIndex)]
    fn last_updated_index(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.fee_index().get().last_updated_index
    }

    #[view(lastIndexUpdate)]
    fn last_index_update(&self) -> u64 {
        self.fee_index().get().last_index_update
    }

    #[view(isPodLiquidable)]
    fn is_pod_liquidable(&self, pod_id: u64) -> bool {
        let pod = self.projected_pod(pod_id);
        self.is_liquidable_state(&pod, &self.market_debt(pod_id))
    }

    /// Collateral and fee of a liquidation in the current block; empty when nothing is owed.
    #[view(estimatePodLiquidation)]
    fn estimate_pod_liquidation(&self, pod_id: u64) -> LiquidationEstimate<Self::Api> {
        let pod = self.projected_pod(pod_id);
        self.estimate_for_pod(&pod, &self.params().get())
    }

    #[view(neededRentForDebt)]
    fn needed_rent_for_debt_view(&self, debt: BigUint) -> BigUint {
        self.needed_rent_for_debt(&debt, &self.params().get().discount_ratio)
    }

    fn projected_fee_index(&self) -> FeeIndexState<Self::Api> {
        let state = self.fee_index().get();
        let now = self.blockchain().get_block_timestamp();
        if now <= state.last_index_update {
            return state;
        }

        let fee_per_second = self
            .tx()
            .to(self.fee_module().get())
            .typed(proxy_fee_module::FeeModuleProxy)
            .get_current_fee_per_second()
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.accrue_fee_index(state, &fee_per_second, now)
    }

    fn projected_pod(&self, pod_id: u64) -> PodRecord<Self::Api> {
        let pod = self.get_pod_record(pod_id);
        let state = self.projected_fee_index();
        self.accrue_pod_fees(pod, &state.last_updated_index, state.last_index_update)
    }
}
