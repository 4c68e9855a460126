multiversx_sc::imports!();

use common_errors::{
    ERROR_ALREADY_INITIALIZED, ERROR_INSUFFICIENT_BALANCE, ERROR_INVALID_TOKEN,
    ERROR_NOT_INITIALIZED, ERROR_NULL_AMOUNT,
};

use crate::{cache::Cache, rewards, storage};

/// Scaled stake ledger. The index grows with staked token sent to the contract outside of `stake`.
#[multiversx_sc::module]
pub trait StakeModule:
    storage::Storage
    + rewards::RewardsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
{
    /// Seeds the ledger with a first stake credited to the owner.
    #[only_owner]
    #[payable("*")]
    #[endpoint(initializeStaking)]
    fn initialize_staking(&self) {
        require!(!self.initialized().get(), ERROR_ALREADY_INITIALIZED);

        let caller = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        let amount = self.get_staked_payment(&cache);

        self.initialized().set(true);
        self.ledger_initialized_event(&amount);

        self.mint_stake(&mut cache, &caller, &caller, &amount);
    }

    /// Stakes the payment for `receiver` (the caller by default).
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Scaled amount credited (RAY).
    #[payable("*")]
    #[endpoint(stake)]
    fn stake(
        &self,
        receiver: OptionalValue<ManagedAddress>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_initialized();

        let caller = self.blockchain().get_caller();
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());

        let mut cache = Cache::new(self);
        let amount = self.get_staked_payment(&cache);

        self.mint_stake(&mut cache, &caller, &receiver, &amount)
    }

    /// Burns `scaled_amount` of the caller's stake (everything when omitted) and sends
    /// the matching staked token to `receiver`.
    ///
    /// # Returns
    /// - `BigUint`: Real amount sent.
    #[endpoint(unstake)]
    fn unstake(
        &self,
        scaled_amount: OptionalValue<BigUint>,
        receiver: OptionalValue<ManagedAddress>,
    ) -> BigUint {
        self.require_initialized();

        let caller = self.blockchain().get_caller();
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());

        let mut cache = Cache::new(self);
        let user_scaled = self.user_scaled_balance(&caller);
        let scaled = match scaled_amount.into_option() {
            Some(raw) => self.to_decimal_ray(raw),
            None => user_scaled.clone(),
        };

        require!(scaled > self.ray_zero(), ERROR_NULL_AMOUNT);
        require!(scaled <= user_scaled, ERROR_INSUFFICIENT_BALANCE);

        self.checkpoint_user(&caller, &cache.total_scaled, &user_scaled, cache.timestamp);

        let index = self.compute_index(&cache.balance, &cache.total_scaled);
        let mut amount = self.real_from_scaled(&scaled, &index);
        if amount > cache.balance {
            amount = cache.balance.clone();
        }

        cache.total_scaled -= &scaled;
        cache.balance -= &amount;
        self.user_scaled(&caller)
            .set((user_scaled - scaled.clone()).into_raw_units());

        self.unstaked_event(&caller, &receiver, &amount, &scaled);

        let payment = EgldOrEsdtTokenPayment::new(cache.staked_token.clone(), 0, amount.clone());
        self.tx().to(&receiver).payment(payment).transfer_if_not_empty();

        amount
    }

    /// Credits `amount` of already received staked token to `receiver`.
    ///
    /// The payment is already part of the contract balance, so it is taken out before
    /// the index is computed.
    fn mint_stake(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        receiver: &ManagedAddress,
        amount: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        cache.balance -= amount;

        let user_scaled = self.user_scaled_balance(receiver);
        self.checkpoint_user(receiver, &cache.total_scaled, &user_scaled, cache.timestamp);

        let index = self.compute_index(&cache.balance, &cache.total_scaled);
        let scaled = self.credited_scaled(
            self.scaled_from_real(amount, &index),
            &cache.balance,
            &cache.total_scaled,
        );
        require!(scaled > self.ray_zero(), ERROR_NULL_AMOUNT);

        cache.total_scaled += &scaled;
        cache.balance += amount;
        self.user_scaled(receiver)
            .set((user_scaled + scaled.clone()).into_raw_units());

        self.staked_event(caller, receiver, amount, &scaled);

        scaled
    }

    fn user_scaled_balance(&self, user: &ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(self.user_scaled(user).get())
    }

    fn get_staked_payment(&self, cache: &Cache<Self>) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == cache.staked_token,
            ERROR_INVALID_TOKEN
        );
        require!(payment.amount > 0, ERROR_NULL_AMOUNT);

        payment.amount.clone()
    }

    fn require_initialized(&self) {
        require!(self.initialized().get(), ERROR_NOT_INITIALIZED);
    }
}
