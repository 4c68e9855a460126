use common_constants::RAY_PRECISION;

multiversx_sc::imports!();

/// Snapshot of the staking ledger totals, committed back on drop.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub staked_token: EgldOrEsdtTokenIdentifier<C::Api>,
    /// Staked token held by the contract.
    pub balance: BigUint<C::Api>,
    pub total_scaled: ManagedDecimal<C::Api, NumDecimals>,
    pub timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let staked_token = sc_ref.staked_token().get();
        Cache {
            balance: sc_ref.blockchain().get_sc_balance(&staked_token, 0),
            total_scaled: ManagedDecimal::from_raw_units(
                sc_ref.total_scaled().get(),
                RAY_PRECISION,
            ),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            staked_token,
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        self.sc_ref
            .total_scaled()
            .set(self.total_scaled.into_raw_units());
    }
}
