multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_BALANCE, ERROR_INVALID_PRICE, ERROR_INVALID_TOKEN, ERROR_NOT_LIQUIDABLE,
};
use common_proxies::{proxy_market, proxy_oracle};
use common_structs::{LiquidationEstimate, ManagerParams, PodRecord};

use crate::{cache::Cache, fees, rent, reserve, storage};

/// Settlement of fee-delinquent pods by third parties.
///
/// A pod is liquidable once its market debt is gone while fees are still owed: nothing
/// else backs the fees but the collateral left on the market.
#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::Storage
    + fees::FeesModule
    + rent::RentModule
    + reserve::ReserveModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Pays the owed fees of a delinquent pod in debt token and takes its collateral.
    ///
    /// **Process**:
    /// 1. Settles the pod and checks it is liquidable.
    /// 2. Prices the owed fees in collateral, plus the liquidation penalty.
    /// 3. Takes the fee from the payment into the reserve and refunds the excess.
    /// 4. Clears the pod's fees and sends the seized collateral to the caller.
    /// 5. Returns the pod's rent to the vault.
    ///
    /// # Returns
    /// - `LiquidationEstimate<Self::Api>`: Collateral seized and fee taken.
    ///
    /// **Security Tip**: With too little collateral left, the fee is scaled down to what
    /// the remaining collateral covers and the rest of the owed fees is written off.
    #[payable("*")]
    #[endpoint(liquidatePod)]
    fn liquidate_pod(&self, pod_id: u64) -> LiquidationEstimate<Self::Api> {
        self.require_not_paused();
        let payment = self.call_value().egld_or_single_esdt();
        let liquidator = self.blockchain().get_caller();

        let mut cache = Cache::new(self);
        require!(
            cache.is_debt_token(&payment.token_identifier),
            ERROR_INVALID_TOKEN
        );

        let mut pod = self.settle_pod(&mut cache, self.get_pod_record(pod_id));
        let market_debt = self.market_debt(pod_id);
        require!(
            self.is_liquidable_state(&pod, &market_debt),
            ERROR_NOT_LIQUIDABLE
        );

        let estimate = self.estimate_for_pod(&pod, &cache.params);
        require!(
            payment.amount >= estimate.fee_amount,
            ERROR_INSUFFICIENT_BALANCE
        );

        cache.reserve += &estimate.fee_amount;
        pod.accrued_fees = BigUint::zero();

        self.liquidated_pod_event(
            pod_id,
            &pod.collateral_token,
            &estimate.collateral_amount,
            &estimate.fee_amount,
        );

        let refund = &payment.amount - &estimate.fee_amount;
        self.tx()
            .to(&liquidator)
            .payment(EgldOrEsdtTokenPayment::new(cache.debt_token.clone(), 0, refund))
            .transfer_if_not_empty();

        if estimate.collateral_amount > 0 {
            self.tx()
                .to(self.market().get())
                .typed(proxy_market::MarketMockProxy)
                .seize(pod_id, estimate.collateral_amount.clone(), liquidator)
                .sync_call();
        }

        let (pod, _) = self.free_for_pod(pod);
        self.pod(pod_id).set(&pod);

        self.process_reserve_if_due(&mut cache);

        estimate
    }

    fn is_liquidable_state(&self, pod: &PodRecord<Self::Api>, market_debt: &BigUint) -> bool {
        pod.has_owed_fees() && market_debt == &BigUint::zero()
    }

    /// Prices the pod's accrued fees against its remaining market collateral.
    fn estimate_for_pod(
        &self,
        pod: &PodRecord<Self::Api>,
        params: &ManagerParams<Self::Api>,
    ) -> LiquidationEstimate<Self::Api> {
        let remaining = self
            .tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .collateral(pod.id)
            .returns(ReturnsResult)
            .sync_call_readonly();

        let collateral_decimals = self.collateral_config(&pod.collateral_token).get().decimals;

        self.estimate_liquidation(
            &pod.accrued_fees,
            &self.asset_price(&self.debt_token().get()),
            self.debt_decimals().get(),
            &self.asset_price(&pod.collateral_token),
            collateral_decimals,
            &params.extra_liquidation_ratio,
            &remaining,
        )
    }

    /// Oracle price of `token` (WAD).
    fn asset_price(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let price = self
            .tx()
            .to(self.oracle().get())
            .typed(proxy_oracle::OracleMockProxy)
            .get_asset_price(token)
            .returns(ReturnsResult)
            .sync_call_readonly();

        require!(price > 0, ERROR_INVALID_PRICE);
        self.to_decimal_wad(price)
    }
}
