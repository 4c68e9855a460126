multiversx_sc::imports!();

use common_constants::MIN_MINT_AMOUNT;
use common_errors::{
    ERROR_COLLATERAL_BLOCKED, ERROR_COLLATERAL_NOT_ALLOWED, ERROR_INVALID_TOKEN,
    ERROR_MINT_AMOUNT_UNDER_MINIMUM, ERROR_NULL_AMOUNT, ERROR_POD_ALREADY_EXISTS,
};
use common_proxies::proxy_market;
use common_structs::PodRecord;

use crate::{cache::Cache, fees, rent, reserve, storage};

/// Pod factory and the owner-side pod actions.
#[multiversx_sc::module]
pub trait PodsModule:
    storage::Storage
    + fees::FeesModule
    + rent::RentModule
    + reserve::ReserveModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Opens a pod for the caller on an allowed collateral. One pod per (owner, collateral).
    ///
    /// # Returns
    /// - `u64`: The new pod id; ids start at 1.
    #[endpoint(createPod)]
    fn create_pod(&self, collateral: EgldOrEsdtTokenIdentifier) -> u64 {
        self.require_not_paused();

        let config_mapper = self.collateral_config(&collateral);
        require!(
            !config_mapper.is_empty() && config_mapper.get().can_open_pod(),
            ERROR_COLLATERAL_NOT_ALLOWED
        );

        let caller = self.blockchain().get_caller();
        let pod_id_mapper = self.pod_id(&caller, &collateral);
        require!(pod_id_mapper.is_empty(), ERROR_POD_ALREADY_EXISTS);

        let mut cache = Cache::new(self);
        self.sync_fee_index(&mut cache);

        let pod_id = self.pod_count().update(|count| {
            *count += 1;
            *count
        });

        let pod = PodRecord {
            id: pod_id,
            owner: caller.clone(),
            collateral_token: collateral.clone(),
            rented_amount: BigUint::zero(),
            last_index: cache.fee_index.last_updated_index.clone(),
            last_update: cache.timestamp,
            accrued_fees: BigUint::zero(),
        };

        self.pod(pod_id).set(&pod);
        pod_id_mapper.set(pod_id);
        self.owner_pods(&caller).insert(pod_id);

        self.pod_created_event(pod_id, &caller, &collateral);

        pod_id
    }

    #[payable("*")]
    #[endpoint(depositCollateral)]
    fn deposit_collateral(&self, pod_id: u64) {
        self.require_not_paused();
        let pod = self.get_pod_record(pod_id);
        self.require_pod_owner(&pod);

        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == pod.collateral_token,
            ERROR_INVALID_TOKEN
        );
        require!(payment.amount > 0, ERROR_NULL_AMOUNT);

        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .deposit(pod_id)
            .payment(payment.clone())
            .sync_call();
    }

    /// Withdraws collateral from the market to `receiver` (the owner by default).
    /// Blocked while the pod still owes fees.
    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(
        &self,
        pod_id: u64,
        amount: BigUint,
        receiver: OptionalValue<ManagedAddress>,
    ) {
        self.require_not_paused();
        let pod = self.get_pod_record(pod_id);
        self.require_pod_owner(&pod);
        require!(amount > 0, ERROR_NULL_AMOUNT);

        let receiver = receiver.into_option().unwrap_or_else(|| pod.owner.clone());

        let mut cache = Cache::new(self);
        let pod = self.settle_pod(&mut cache, pod);
        require!(!pod.has_owed_fees(), ERROR_COLLATERAL_BLOCKED);
        self.pod(pod_id).set(&pod);

        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .withdraw(pod_id, amount, receiver)
            .sync_call();
    }

    /// Borrows `amount` of debt token for the pod and sends it net of the minting fee.
    /// `amount` must be at least `MIN_MINT_AMOUNT`.
    ///
    /// **Process**:
    /// 1. Settles the pod.
    /// 2. Rents the base asset needed for the new total debt.
    /// 3. Borrows on the market.
    /// 4. Keeps `amount * mint_fee_ratio` in the reserve and sends the rest to `receiver`.
    ///
    /// # Returns
    /// - `BigUint`: Amount sent to `receiver`.
    #[endpoint(mintDebt)]
    fn mint_debt(
        &self,
        pod_id: u64,
        amount: BigUint,
        receiver: OptionalValue<ManagedAddress>,
    ) -> BigUint {
        self.require_not_paused();
        let pod = self.get_pod_record(pod_id);
        self.require_pod_owner(&pod);
        require!(amount > 0, ERROR_NULL_AMOUNT);
        require!(
            amount >= BigUint::from(MIN_MINT_AMOUNT),
            ERROR_MINT_AMOUNT_UNDER_MINIMUM
        );

        let receiver = receiver.into_option().unwrap_or_else(|| pod.owner.clone());

        let mut cache = Cache::new(self);
        let pod = self.settle_pod(&mut cache, pod);
        let (pod, _) = self.rent_for_pod(pod, &amount);
        self.pod(pod_id).set(&pod);

        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .borrow(pod_id, amount.clone())
            .sync_call();

        let minting_fee = self.apply_bps_floor(&amount, &cache.params.mint_fee_ratio);
        if minting_fee > 0 {
            cache.reserve += &minting_fee;
            self.minting_fee_event(pod_id, &minting_fee);
        }

        let net_amount = amount - minting_fee;
        self.tx()
            .to(&receiver)
            .payment(EgldOrEsdtTokenPayment::new(
                cache.debt_token.clone(),
                0,
                net_amount.clone(),
            ))
            .transfer_if_not_empty();

        self.process_reserve_if_due(&mut cache);

        net_amount
    }

    /// Repays the pod with a debt token payment: owed fees first, then market debt.
    /// Anything above both is refunded, and rent no longer needed goes back to the vault.
    #[payable("*")]
    #[endpoint(repayDebt)]
    fn repay_debt(&self, pod_id: u64) {
        let pod = self.get_pod_record(pod_id);
        self.require_pod_owner(&pod);

        let payment = self.call_value().egld_or_single_esdt();
        let mut cache = Cache::new(self);
        require!(
            cache.is_debt_token(&payment.token_identifier),
            ERROR_INVALID_TOKEN
        );
        require!(payment.amount > 0, ERROR_NULL_AMOUNT);

        let pod = self.settle_pod(&mut cache, pod);
        let (pod, excess) = self.apply_fee_payment(&mut cache, pod, &payment.amount);
        self.repay_market_debt(&cache, pod_id, &pod.owner, excess);

        let (pod, _) = self.free_for_pod(pod);
        self.pod(pod_id).set(&pod);

        self.process_reserve_if_due(&mut cache);
    }

    /// Claims the pod's base-asset yield into its rent.
    ///
    /// # Returns
    /// - `BigUint`: Amount claimed.
    #[endpoint(compoundPod)]
    fn compound_pod(&self, pod_id: u64) -> BigUint {
        let pod = self.get_pod_record(pod_id);
        self.require_pod_owner(&pod);

        let mut cache = Cache::new(self);
        let mut pod = self.settle_pod(&mut cache, pod);
        let claimed = self.claim_pod_yield(&mut pod);
        self.pod(pod_id).set(&pod);

        claimed
    }
}
