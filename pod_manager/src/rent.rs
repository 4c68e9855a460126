multiversx_sc::imports!();

use common_errors::{ERROR_CALLER_NOT_ALLOWED, ERROR_INVALID_POD};
use common_proxies::{proxy_vault, proxy_yield};
use common_structs::{PodRecord, RentAdjustment};

use crate::{cache::Cache, fees, reserve, storage};

/// Base asset rented from the vault on behalf of the pods.
///
/// A pod's rent tracks its market debt through the discount ratio. Rented asset stays in
/// this contract and earns base-asset yield under the pod's account at the yield source.
#[multiversx_sc::module]
pub trait RentModule:
    storage::Storage
    + fees::FeesModule
    + reserve::ReserveModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Rents what the pod needs for its debt plus `added_debt`. Pod owner only.
    ///
    /// # Returns
    /// - `BigUint`: Amount rented by this call, capped at the vault availability.
    #[endpoint(getRent)]
    fn get_rent(&self, pod_id: u64, added_debt: BigUint) -> BigUint {
        self.require_not_paused();
        let pod = self.get_pod_record(pod_id);
        self.require_pod_owner(&pod);

        let mut cache = Cache::new(self);
        let pod = self.settle_pod(&mut cache, pod);
        let (pod, rented) = self.rent_for_pod(pod, &added_debt);
        self.pod(pod_id).set(&pod);

        rented
    }

    /// Gives back to the vault what the pod no longer needs; everything once its debt is
    /// repaid. Callable by anyone.
    ///
    /// # Returns
    /// - `BigUint`: Amount returned to the vault.
    #[endpoint(freeRent)]
    fn free_rent(&self, pod_id: u64) -> BigUint {
        let mut cache = Cache::new(self);
        let pod = self.settle_pod(&mut cache, self.get_pod_record(pod_id));
        let (pod, freed) = self.free_for_pod(pod);
        self.pod(pod_id).set(&pod);

        freed
    }

    /// Claims the pod's base-asset yield and adds it to the pod's rented amount.
    ///
    /// The vault is notified so its rented total keeps matching the pods. Pods with nothing
    /// rented have no yield account to claim.
    fn claim_pod_yield(&self, pod: &mut PodRecord<Self::Api>) -> BigUint {
        if !pod.has_rented() {
            return BigUint::zero();
        }

        let claimed = self
            .tx()
            .to(self.yield_source().get())
            .typed(proxy_yield::YieldMockProxy)
            .claim_rewards(pod.id)
            .returns(ReturnsResult)
            .sync_call();

        if claimed > 0 {
            pod.rented_amount += &claimed;

            self.tx()
                .to(self.vault().get())
                .typed(proxy_vault::VaultProxy)
                .notify_rented_amount(claimed.clone())
                .sync_call();

            self.pod_yield_claimed_event(pod.id, &claimed);
        }

        claimed
    }

    /// Rents the missing part of the pod's needed rent. The pod must already be settled.
    fn rent_for_pod(
        &self,
        mut pod: PodRecord<Self::Api>,
        added_debt: &BigUint,
    ) -> (PodRecord<Self::Api>, BigUint) {
        self.claim_pod_yield(&mut pod);

        let amount = match self.pod_rent_adjustment(&pod, added_debt) {
            RentAdjustment::Rent(amount) => amount,
            _ => return (pod, BigUint::zero()),
        };

        let rented = self
            .tx()
            .to(self.vault().get())
            .typed(proxy_vault::VaultProxy)
            .rent_asset(amount)
            .returns(ReturnsResult)
            .sync_call();

        if rented > 0 {
            pod.rented_amount += &rented;
            self.rented_asset_event(pod.id, &rented);
        }

        (pod, rented)
    }

    /// Returns the pod's excess rent to the vault. The pod must already be settled.
    fn free_for_pod(&self, mut pod: PodRecord<Self::Api>) -> (PodRecord<Self::Api>, BigUint) {
        self.claim_pod_yield(&mut pod);

        let amount = match self.pod_rent_adjustment(&pod, &BigUint::zero()) {
            RentAdjustment::Free(amount) => amount,
            _ => return (pod, BigUint::zero()),
        };

        pod.rented_amount -= &amount;
        self.freed_asset_event(pod.id, &amount);

        self.tx()
            .to(self.vault().get())
            .typed(proxy_vault::VaultProxy)
            .pull_rented_asset()
            .payment(EgldOrEsdtTokenPayment::new(
                self.base_asset().get(),
                0,
                amount.clone(),
            ))
            .sync_call();

        (pod, amount)
    }

    fn pod_rent_adjustment(
        &self,
        pod: &PodRecord<Self::Api>,
        added_debt: &BigUint,
    ) -> RentAdjustment<Self::Api> {
        let debt = self.market_debt(pod.id) + added_debt;
        let discount_ratio = self.params().get().discount_ratio;
        let needed = self.needed_rent_for_debt(&debt, &discount_ratio);

        let available = self
            .tx()
            .to(self.vault().get())
            .typed(proxy_vault::VaultProxy)
            .available_for_rent()
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.rent_adjustment(&needed, &pod.rented_amount, &debt, &available)
    }

    fn require_pod_owner(&self, pod: &PodRecord<Self::Api>) {
        require!(pod.id > 0, ERROR_INVALID_POD);
        let caller = self.blockchain().get_caller();
        require!(pod.is_owned_by(&caller), ERROR_CALLER_NOT_ALLOWED);
    }
}
