multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_POD, ERROR_INVALID_TOKEN, ERROR_NULL_AMOUNT};
use common_proxies::{proxy_fee_module, proxy_market};
use common_structs::PodRecord;

use crate::{cache::Cache, reserve, storage};

/// Global fee index and per-pod fee settlement.
#[multiversx_sc::module]
pub trait FeesModule:
    storage::Storage
    + reserve::ReserveModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
{
    /// Moves the global fee index to the current block. Callable by anyone.
    #[endpoint(updateGlobalState)]
    fn update_global_state(&self) {
        let mut cache = Cache::new(self);
        self.sync_fee_index(&mut cache);
    }

    /// Settles the fees of one pod. Callable by anyone.
    #[endpoint(updatePodState)]
    fn update_pod_state(&self, pod_id: u64) {
        let mut cache = Cache::new(self);
        let pod = self.settle_pod(&mut cache, self.get_pod_record(pod_id));
        self.pod(pod_id).set(&pod);
    }

    /// Pays the owed fees of a pod in debt token. Callable by anyone.
    ///
    /// **Process**:
    /// 1. Settles the pod.
    /// 2. Moves up to the owed amount into the reserve.
    /// 3. Repays the pod's market debt with the excess and refunds what is left.
    /// 4. Flushes the reserve when it reached the threshold.
    #[payable("*")]
    #[endpoint(payFee)]
    fn pay_fee(&self, pod_id: u64) {
        let payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new(self);
        require!(
            cache.is_debt_token(&payment.token_identifier),
            ERROR_INVALID_TOKEN
        );
        require!(payment.amount > 0, ERROR_NULL_AMOUNT);

        let pod = self.settle_pod(&mut cache, self.get_pod_record(pod_id));
        let (pod, excess) = self.apply_fee_payment(&mut cache, pod, &payment.amount);
        self.pod(pod_id).set(&pod);

        self.repay_market_debt(&cache, pod_id, &caller, excess);
        self.process_reserve_if_due(&mut cache);
    }

    /// Pulls the current rate from the fee module and accrues the global index.
    ///
    /// A second call within the same block is a no-op.
    fn sync_fee_index(&self, cache: &mut Cache<Self>) {
        if cache.timestamp <= cache.fee_index.last_index_update {
            return;
        }

        let fee_per_second = self
            .tx()
            .to(self.fee_module().get())
            .typed(proxy_fee_module::FeeModuleProxy)
            .get_current_fee_per_second()
            .returns(ReturnsResult)
            .sync_call();

        cache.fee_index =
            self.accrue_fee_index(cache.fee_index.clone(), &fee_per_second, cache.timestamp);

        self.update_fee_index_event(
            cache.timestamp,
            &cache.fee_index.last_updated_index,
            &fee_per_second,
        );
    }

    /// Syncs the global index, then accrues the pod's fees against it.
    fn settle_pod(
        &self,
        cache: &mut Cache<Self>,
        pod: PodRecord<Self::Api>,
    ) -> PodRecord<Self::Api> {
        self.sync_fee_index(cache);

        let pod = self.accrue_pod_fees(pod, &cache.fee_index.last_updated_index, cache.timestamp);
        self.update_pod_state_event(&pod);
        pod
    }

    /// Routes up to the owed fees of a settled pod into the reserve.
    ///
    /// # Returns
    /// - `(PodRecord<Self::Api>, BigUint)`: The updated pod and the part of `amount` left over.
    fn apply_fee_payment(
        &self,
        cache: &mut Cache<Self>,
        mut pod: PodRecord<Self::Api>,
        amount: &BigUint,
    ) -> (PodRecord<Self::Api>, BigUint) {
        let paid = if amount > &pod.accrued_fees {
            pod.accrued_fees.clone()
        } else {
            amount.clone()
        };

        if paid > 0 {
            pod.accrued_fees -= &paid;
            cache.reserve += &paid;
            self.paid_fees_event(pod.id, &paid);
        }

        (pod, amount - &paid)
    }

    /// Repays up to the pod's market debt with `amount` and refunds the rest to `payer`.
    fn repay_market_debt(
        &self,
        cache: &Cache<Self>,
        pod_id: u64,
        payer: &ManagedAddress,
        amount: BigUint,
    ) {
        if amount == 0 {
            return;
        }

        let debt = self.market_debt(pod_id);
        let repaid = if amount > debt { debt } else { amount.clone() };

        if repaid > 0 {
            self.tx()
                .to(self.market().get())
                .typed(proxy_market::MarketMockProxy)
                .repay(pod_id)
                .payment(EgldOrEsdtTokenPayment::new(
                    cache.debt_token.clone(),
                    0,
                    repaid.clone(),
                ))
                .sync_call();
        }

        let refund = amount - repaid;
        self.tx()
            .to(payer)
            .payment(EgldOrEsdtTokenPayment::new(cache.debt_token.clone(), 0, refund))
            .transfer_if_not_empty();
    }

    fn market_debt(&self, pod_id: u64) -> BigUint {
        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .debt(pod_id)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn get_pod_record(&self, pod_id: u64) -> PodRecord<Self::Api> {
        let mapper = self.pod(pod_id);
        require!(!mapper.is_empty(), ERROR_INVALID_POD);
        mapper.get()
    }
}
