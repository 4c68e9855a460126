multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_EXCEEDS_DEBT, ERROR_CALLER_NOT_ALLOWED, ERROR_INVALID_TOKEN,
    ERROR_NO_RENTED_AMOUNT, ERROR_NULL_AMOUNT,
};

use crate::{cache::Cache, reserve, storage};

/// Renting side of the vault: pod managers borrow base asset and give it back.
#[multiversx_sc::module]
pub trait RentModule:
    storage::Storage
    + reserve::ReserveModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Sends up to `amount` of base asset to the calling pod manager.
    ///
    /// The amount is capped at what the vault can rent out; a call with nothing available
    /// transfers nothing and emits no event.
    ///
    /// # Returns
    /// - `BigUint`: Amount actually rented.
    #[endpoint(rentAsset)]
    fn rent_asset(&self, amount: BigUint) -> BigUint {
        self.require_not_paused();
        let manager = self.blockchain().get_caller();
        require!(self.is_active_manager(&manager), ERROR_CALLER_NOT_ALLOWED);
        require!(amount > 0, ERROR_NULL_AMOUNT);

        let mut cache = Cache::new(self);
        self.claim_vault_yield(&mut cache);

        let available = self.available_for_rent_in(&cache);
        let rented = if amount > available { available } else { amount };
        if rented == 0 {
            return rented;
        }

        cache.total_rented += &rented;
        cache.balance -= &rented;
        self.manager_rented(&manager)
            .update(|total| *total += &rented);

        self.rent_to_manager_event(&manager, &rented);

        let payment = EgldOrEsdtTokenPayment::new(cache.params.asset_id.clone(), 0, rented.clone());
        self.tx().to(&manager).payment(payment).transfer();

        rented
    }

    /// Records yield claimed by a manager on rented asset as additional rented amount.
    #[endpoint(notifyRentedAmount)]
    fn notify_rented_amount(&self, amount: BigUint) {
        let manager = self.blockchain().get_caller();
        require!(self.is_listed_manager(&manager), ERROR_CALLER_NOT_ALLOWED);
        require!(amount > 0, ERROR_NULL_AMOUNT);

        let rented_mapper = self.manager_rented(&manager);
        require!(rented_mapper.get() > 0, ERROR_NO_RENTED_AMOUNT);

        let mut cache = Cache::new(self);
        cache.total_rented += &amount;
        rented_mapper.update(|total| *total += &amount);

        self.notify_rented_amount_event(&manager, &amount);
    }

    /// Takes back rented base asset from the calling manager. Blocked managers can still return.
    #[payable("*")]
    #[endpoint(pullRentedAsset)]
    fn pull_rented_asset(&self) {
        let manager = self.blockchain().get_caller();
        require!(self.is_listed_manager(&manager), ERROR_CALLER_NOT_ALLOWED);

        let payment = self.call_value().egld_or_single_esdt();
        let mut cache = Cache::new(self);
        require!(
            cache.is_same_asset(&payment.token_identifier),
            ERROR_INVALID_TOKEN
        );
        require!(payment.amount > 0, ERROR_NULL_AMOUNT);

        let rented_mapper = self.manager_rented(&manager);
        let manager_rented = rented_mapper.get();
        require!(payment.amount <= manager_rented, ERROR_AMOUNT_EXCEEDS_DEBT);

        rented_mapper.set(&manager_rented - &payment.amount);
        cache.total_rented -= &payment.amount;

        self.pull_from_manager_event(&manager, &payment.amount);
    }

    /// Base asset that can still be rented out.
    ///
    /// **Formula**:
    /// - `balance - reserve - total_assets * buffer_ratio`, floored at zero.
    fn available_for_rent_in(&self, cache: &Cache<Self>) -> BigUint {
        let buffer = self.apply_bps_floor(&cache.total_assets(), &cache.params.buffer_ratio);
        let liquid = cache.liquid_balance();

        if liquid > buffer {
            liquid - buffer
        } else {
            BigUint::zero()
        }
    }

    fn is_listed_manager(&self, manager: &ManagedAddress) -> bool {
        self.pod_managers().contains_key(manager)
    }

    fn is_active_manager(&self, manager: &ManagedAddress) -> bool {
        self.pod_managers().get(manager).unwrap_or(false)
    }
}
