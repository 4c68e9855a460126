use common_constants::RAY_PRECISION;
use common_structs::VaultParams;

multiversx_sc::imports!();

/// A snapshot of the vault accounting, read once per call and committed back on drop.
///
/// **Fields**:
/// - `balance` is the base asset held by the contract. Endpoints receiving the base asset
///   remove their own payment from it until the payment is accounted for.
/// - `total_scaled` is the total scaled supply (RAY).
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub params: VaultParams<C::Api>,
    pub balance: BigUint<C::Api>,
    pub total_scaled: ManagedDecimal<C::Api, NumDecimals>,
    pub total_rented: BigUint<C::Api>,
    pub reserve: BigUint<C::Api>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let params = sc_ref.params().get();
        Cache {
            balance: sc_ref.blockchain().get_sc_balance(&params.asset_id, 0),
            total_scaled: ManagedDecimal::from_raw_units(
                sc_ref.total_scaled().get(),
                RAY_PRECISION,
            ),
            total_rented: sc_ref.total_rented().get(),
            reserve: sc_ref.reserve().get(),
            params,
            sc_ref,
        }
    }

    /// `balance + total_rented - reserve`, floored at zero.
    pub fn total_assets(&self) -> BigUint<C::Api> {
        let gross = &self.balance + &self.total_rented;
        if gross > self.reserve {
            gross - &self.reserve
        } else {
            BigUint::zero()
        }
    }

    /// Base asset held by the vault and not set aside as reserve.
    pub fn liquid_balance(&self) -> BigUint<C::Api> {
        if self.balance > self.reserve {
            &self.balance - &self.reserve
        } else {
            BigUint::zero()
        }
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.params.asset_id == *asset
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
        self.sc_ref.total_rented().set(&self.total_rented);
        self.sc_ref.reserve().set(&self.reserve);
    }
}
