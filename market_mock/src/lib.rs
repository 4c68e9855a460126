#![no_std]

use common_errors::{ERROR_AMOUNT_EXCEEDS_DEBT, ERROR_INSUFFICIENT_BALANCE, ERROR_INVALID_TOKEN};

multiversx_sc::imports!();

/// Minimal debt market keyed by pod id. Every call comes from the pod manager,
/// which holds the positions on behalf of its pods.
#[multiversx_sc::contract]
pub trait MarketMock {
    #[init]
    fn init(&self, debt_token: EgldOrEsdtTokenIdentifier) {
        self.debt_token().set(&debt_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self, pod_id: u64) {
        let payment = self.call_value().egld_or_single_esdt();
        let token_mapper = self.collateral_token(pod_id);
        if token_mapper.is_empty() {
            token_mapper.set(&payment.token_identifier);
        } else {
            require!(token_mapper.get() == payment.token_identifier, ERROR_INVALID_TOKEN);
        }

        self.collateral(pod_id)
            .update(|collateral| *collateral += &payment.amount);
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, pod_id: u64, amount: BigUint, to: ManagedAddress) {
        self.send_collateral(pod_id, amount, &to);
    }

    #[endpoint(seize)]
    fn seize(&self, pod_id: u64, amount: BigUint, to: ManagedAddress) {
        self.send_collateral(pod_id, amount, &to);
    }

    #[endpoint(borrow)]
    fn borrow(&self, pod_id: u64, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.debt(pod_id).update(|debt| *debt += &amount);

        let payment = EgldOrEsdtTokenPayment::new(self.debt_token().get(), 0, amount);
        self.tx().to(&caller).payment(payment).transfer();
    }

    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, pod_id: u64) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.debt_token().get(),
            ERROR_INVALID_TOKEN
        );

        let debt = self.debt(pod_id).get();
        require!(payment.amount <= debt, ERROR_AMOUNT_EXCEEDS_DEBT);
        self.debt(pod_id).set(debt - &payment.amount);
    }

    // Test helper: debt token liquidity lent out by `borrow`
    #[payable("*")]
    #[endpoint(supplyLiquidity)]
    fn supply_liquidity(&self) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.debt_token().get(),
            ERROR_INVALID_TOKEN
        );
    }

    // Test helper: simulates the market closing the debt of a pod on its own
    #[endpoint(clearDebt)]
    fn clear_debt(&self, pod_id: u64, burned_collateral: BigUint) {
        self.debt(pod_id).clear();
        let collateral = self.collateral(pod_id).get();
        require!(burned_collateral <= collateral, ERROR_INSUFFICIENT_BALANCE);
        self.collateral(pod_id).set(collateral - burned_collateral);
    }

    fn send_collateral(&self, pod_id: u64, amount: BigUint, to: &ManagedAddress) {
        let collateral = self.collateral(pod_id).get();
        require!(amount <= collateral, ERROR_INSUFFICIENT_BALANCE);
        self.collateral(pod_id).set(&collateral - &amount);

        let payment = EgldOrEsdtTokenPayment::new(self.collateral_token(pod_id).get(), 0, amount);
        self.tx().to(to).payment(payment).transfer_if_not_empty();
    }

    #[view(getDebt)]
    #[storage_mapper("debt")]
    fn debt(&self, pod_id: u64) -> SingleValueMapper<BigUint>;

    #[view(getCollateral)]
    #[storage_mapper("collateral")]
    fn collateral(&self, pod_id: u64) -> SingleValueMapper<BigUint>;

    #[view(getCollateralToken)]
    #[storage_mapper("collateral_token")]
    fn collateral_token(&self, pod_id: u64) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getDebtToken)]
    #[storage_mapper("debt_token")]
    fn debt_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;
}
