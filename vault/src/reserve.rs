multiversx_sc::imports!();

use common_constants::VAULT_YIELD_ACCOUNT;
use common_errors::{ERROR_INVALID_TOKEN, ERROR_NULL_AMOUNT, ERROR_RESERVE_TOO_LOW};
use common_proxies::proxy_yield;

use crate::{cache::Cache, storage};

/// Base-asset yield claiming and the vault reserve.
#[multiversx_sc::module]
pub trait ReserveModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
{
    /// Claims the yield earned by the vault's own base asset. Callable by anyone.
    #[endpoint(updateYield)]
    fn update_yield(&self) {
        let mut cache = Cache::new(self);
        self.claim_vault_yield(&mut cache);
    }

    #[only_owner]
    #[payable("*")]
    #[endpoint(depositToReserve)]
    fn deposit_to_reserve(&self) {
        let payment = self.call_value().egld_or_single_esdt();
        let mut cache = Cache::new(self);
        require!(
            cache.is_same_asset(&payment.token_identifier),
            ERROR_INVALID_TOKEN
        );
        require!(payment.amount > 0, ERROR_NULL_AMOUNT);

        cache.reserve += &payment.amount;

        let caller = self.blockchain().get_caller();
        self.reserve_deposit_event(&caller, &payment.amount);
    }

    #[only_owner]
    #[endpoint(withdrawFromReserve)]
    fn withdraw_from_reserve(&self, amount: BigUint, receiver: ManagedAddress) {
        require!(amount > 0, ERROR_NULL_AMOUNT);

        let mut cache = Cache::new(self);
        require!(amount <= cache.reserve, ERROR_RESERVE_TOO_LOW);

        cache.reserve -= &amount;
        cache.balance -= &amount;

        self.reserve_withdraw_event(&receiver, &amount);

        let payment = EgldOrEsdtTokenPayment::new(cache.params.asset_id.clone(), 0, amount);
        self.tx().to(&receiver).payment(payment).transfer();
    }

    /// Claims the pending vault yield and splits it between the reserve and the depositors.
    ///
    /// **Formula**:
    /// - `reserve += claimed * reserve_ratio`.
    /// - The remainder stays in the balance and raises the index.
    fn claim_vault_yield(&self, cache: &mut Cache<Self>) {
        let claimed = self
            .tx()
            .to(self.yield_source().get())
            .typed(proxy_yield::YieldMockProxy)
            .claim_rewards(VAULT_YIELD_ACCOUNT)
            .returns(ReturnsResult)
            .sync_call();

        if claimed == 0 {
            return;
        }

        let reserve_part = self.apply_bps_floor(&claimed, &cache.params.reserve_ratio);
        cache.balance += &claimed;
        cache.reserve += &reserve_part;

        self.vault_yield_claimed_event(&claimed, &reserve_part);
    }
}
