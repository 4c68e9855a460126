#![no_std]

use common_errors::ERROR_INVALID_PRICE;

multiversx_sc::imports!();

/// Price feed returning WAD prices in a common quote currency.
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setAssetPrice)]
    fn set_asset_price(&self, token: EgldOrEsdtTokenIdentifier, price: BigUint) {
        require!(price > 0, ERROR_INVALID_PRICE);
        self.prices(&token).set(price);
    }

    #[view(getAssetPrice)]
    fn get_asset_price(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        let price_mapper = self.prices(&token);
        require!(!price_mapper.is_empty(), ERROR_INVALID_PRICE);
        price_mapper.get()
    }

    #[storage_mapper("prices")]
    fn prices(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;
}
