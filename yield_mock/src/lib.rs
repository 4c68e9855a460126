#![no_std]

use common_errors::ERROR_INVALID_TOKEN;

multiversx_sc::imports!();

/// Base-asset yield source. Pending rewards are funded per (beneficiary, account id)
/// and claimed by the beneficiary itself.
#[multiversx_sc::contract]
pub trait YieldMock {
    #[init]
    fn init(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.asset().set(&asset);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // Test helper: funds rewards that `beneficiary` can later claim for `account_id`
    #[payable("*")]
    #[endpoint(setPendingRewards)]
    fn set_pending_rewards(&self, beneficiary: ManagedAddress, account_id: u64) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.token_identifier == self.asset().get(), ERROR_INVALID_TOKEN);

        self.pending(&beneficiary, account_id)
            .update(|pending| *pending += &payment.amount);
    }

    #[endpoint(claimRewards)]
    fn claim_rewards(&self, account_id: u64) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.pending(&caller, account_id).take();
        sc_print!("claimRewards: account {} amount {}", account_id, amount);

        let payment = EgldOrEsdtTokenPayment::new(self.asset().get(), 0, amount.clone());
        self.tx().to(&caller).payment(payment).transfer_if_not_empty();

        amount
    }

    #[view(getPendingRewards)]
    fn get_pending_rewards(&self, beneficiary: ManagedAddress, account_id: u64) -> BigUint {
        self.pending(&beneficiary, account_id).get()
    }

    #[view(getAsset)]
    #[storage_mapper("asset")]
    fn asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("pending")]
    fn pending(&self, beneficiary: &ManagedAddress, account_id: u64) -> SingleValueMapper<BigUint>;
}
