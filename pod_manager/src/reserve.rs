multiversx_sc::imports!();

use common_proxies::proxy_staking;

use crate::{cache::Cache, storage};

/// Flushing of the fee reserve to the treasury and the staking reward stream.
#[multiversx_sc::module]
pub trait ReserveModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
{
    /// Flushes the whole reserve regardless of the threshold. Callable by anyone.
    #[endpoint(processReserve)]
    fn process_reserve(&self) {
        let mut cache = Cache::new(self);
        self.flush_reserve(&mut cache);
    }

    fn process_reserve_if_due(&self, cache: &mut Cache<Self>) {
        if cache.reserve_is_due() {
            self.flush_reserve(cache);
        }
    }

    /// **Formula**:
    /// - `protocol = reserve * protocol_fee_ratio`, sent to the treasury.
    /// - `rewards = reserve - protocol`, queued as a staking reward in debt token.
    fn flush_reserve(&self, cache: &mut Cache<Self>) {
        if cache.reserve == 0 {
            return;
        }

        let reserve = core::mem::replace(&mut cache.reserve, BigUint::zero());
        let (protocol_part, rewards_part) =
            self.split_reserve(&reserve, &cache.params.protocol_fee_ratio);

        self.reserve_processed_event(&protocol_part, &rewards_part);

        self.tx()
            .to(self.treasury().get())
            .payment(EgldOrEsdtTokenPayment::new(
                cache.debt_token.clone(),
                0,
                protocol_part,
            ))
            .transfer_if_not_empty();

        if rewards_part > 0 {
            self.tx()
                .to(self.staking().get())
                .typed(proxy_staking::StakingProxy)
                .queue_rewards()
                .payment(EgldOrEsdtTokenPayment::new(
                    cache.debt_token.clone(),
                    0,
                    rewards_part,
                ))
                .sync_call();
        }
    }
}
