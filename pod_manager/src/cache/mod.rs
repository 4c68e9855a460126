use common_structs::{FeeIndexState, ManagerParams};

multiversx_sc::imports!();

/// Fee ledger snapshot of one call. The fee index and the reserve are written back on drop.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub params: ManagerParams<C::Api>,
    pub fee_index: FeeIndexState<C::Api>,
    pub reserve: BigUint<C::Api>,
    pub debt_token: EgldOrEsdtTokenIdentifier<C::Api>,
    pub timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            params: sc_ref.params().get(),
            fee_index: sc_ref.fee_index().get(),
            reserve: sc_ref.reserve().get(),
            debt_token: sc_ref.debt_token().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            sc_ref,
        }
    }

    pub fn is_debt_token(&self, token: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        &self.debt_token == token
    }

    /// Whether the reserve reached the flush threshold.
    pub fn reserve_is_due(&self) -> bool {
        self.reserve > 0 && self.reserve >= self.params.process_threshold
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        self.sc_ref.fee_index().set(&self.fee_index);
        self.sc_ref.reserve().set(&self.reserve);
    }
}
