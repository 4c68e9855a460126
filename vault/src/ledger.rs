multiversx_sc::imports!();

use common_errors::{
    ERROR_ALREADY_INITIALIZED, ERROR_INSUFFICIENT_BALANCE, ERROR_INVALID_TOKEN,
    ERROR_NOT_ENOUGH_AVAILABLE_FUNDS, ERROR_NOT_INITIALIZED, ERROR_NULL_AMOUNT,
};

use crate::{cache::Cache, reserve, storage};

/// Scaled share accounting of the vault depositors.
#[multiversx_sc::module]
pub trait LedgerModule:
    storage::Storage
    + reserve::ReserveModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Seeds the vault with a first deposit credited to the owner and opens it to users.
    #[only_owner]
    #[payable("*")]
    #[endpoint(initializeVault)]
    fn initialize_vault(&self) {
        require!(!self.initialized().get(), ERROR_ALREADY_INITIALIZED);

        let caller = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        let amount = self.get_asset_payment(&cache);

        self.initialized().set(true);
        self.ledger_initialized_event(&amount);

        self.mint_shares(&mut cache, &caller, &caller, &amount);
    }

    /// Deposits the base asset and credits scaled shares to `receiver` (the caller by default).
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Scaled amount minted (RAY).
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(
        &self,
        receiver: OptionalValue<ManagedAddress>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();
        self.require_initialized();

        let caller = self.blockchain().get_caller();
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());

        let mut cache = Cache::new(self);
        let amount = self.get_asset_payment(&cache);

        self.mint_shares(&mut cache, &caller, &receiver, &amount)
    }

    /// Withdraws `amount` of base asset, or the caller's full balance when omitted.
    ///
    /// **Process**:
    /// 1. Claims the pending vault yield so the index is current.
    /// 2. Converts the requested real amount into scaled units (half-up).
    /// 3. Checks the caller's scaled balance and the unrented, unreserved cash.
    /// 4. Burns the shares and sends the asset to `receiver`.
    ///
    /// # Returns
    /// - `BigUint`: Real amount sent.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        amount: OptionalValue<BigUint>,
        receiver: OptionalValue<ManagedAddress>,
    ) -> BigUint {
        self.require_not_paused();
        self.require_initialized();

        let caller = self.blockchain().get_caller();
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());

        let mut cache = Cache::new(self);
        self.claim_vault_yield(&mut cache);

        let index = self.current_index(&cache);
        let holder_scaled = self.scaled_balance_of(&caller);

        let (real_amount, scaled_amount) = match amount.into_option() {
            Some(requested) => {
                let scaled = self.scaled_from_real(&requested, &index);
                (requested, scaled)
            },
            None => (
                self.real_from_scaled(&holder_scaled, &index),
                holder_scaled.clone(),
            ),
        };

        require!(real_amount > 0, ERROR_NULL_AMOUNT);
        require!(scaled_amount <= holder_scaled, ERROR_INSUFFICIENT_BALANCE);
        require!(
            real_amount <= cache.liquid_balance(),
            ERROR_NOT_ENOUGH_AVAILABLE_FUNDS
        );

        cache.total_scaled -= &scaled_amount;
        cache.balance -= &real_amount;
        let remaining = holder_scaled - scaled_amount.clone();
        self.scaled_balance(&caller).set(remaining.into_raw_units());

        self.withdraw_event(&caller, &receiver, &real_amount, &scaled_amount);

        let payment = EgldOrEsdtTokenPayment::new(
            cache.params.asset_id.clone(),
            0,
            real_amount.clone(),
        );
        self.tx().to(&receiver).payment(payment).transfer();

        real_amount
    }

    /// Mints shares for an amount already received by the contract.
    ///
    /// The index is computed without `amount`, after the pending yield is claimed. Shares
    /// left without any asset behind them are absorbed by this mint.
    fn mint_shares(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        receiver: &ManagedAddress,
        amount: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        cache.balance -= amount;
        self.claim_vault_yield(cache);

        let index = self.current_index(cache);
        let scaled_amount = self.credited_scaled(
            self.scaled_from_real(amount, &index),
            &cache.total_assets(),
            &cache.total_scaled,
        );
        require!(scaled_amount > self.ray_zero(), ERROR_NULL_AMOUNT);

        cache.total_scaled += &scaled_amount;
        cache.balance += amount;
        self.scaled_balance(receiver)
            .update(|scaled| *scaled += scaled_amount.into_raw_units());

        self.deposit_event(caller, receiver, amount, &scaled_amount);

        scaled_amount
    }

    fn current_index(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.compute_index(&cache.total_assets(), &cache.total_scaled)
    }

    fn scaled_balance_of(&self, holder: &ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(self.scaled_balance(holder).get())
    }

    fn get_asset_payment(&self, cache: &Cache<Self>) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            cache.is_same_asset(&payment.token_identifier),
            ERROR_INVALID_TOKEN
        );
        require!(payment.amount > 0, ERROR_NULL_AMOUNT);

        payment.amount.clone()
    }

    fn require_initialized(&self) {
        require!(self.initialized().get(), ERROR_NOT_INITIALIZED);
    }
}
