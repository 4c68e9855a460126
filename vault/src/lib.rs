#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod ledger;
pub mod rent;
pub mod reserve;
pub mod storage;
pub mod views;

use common_constants::{MAX_BUFFER_RATIO, MAX_RESERVE_RATIO};
pub use common_errors::*;
pub use common_structs::*;

/// Pool of the yield-bearing base asset. Depositors hold scaled shares whose value grows
/// with the claimed yield; registered pod managers rent part of the pool.
#[multiversx_sc::contract]
pub trait Vault:
    storage::Storage
    + ledger::LedgerModule
    + rent::RentModule
    + reserve::ReserveModule
    + config::ConfigModule
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Configures the vault. Deposits stay closed until `initializeVault` seeds it.
    ///
    /// # Arguments
    /// - `asset`: Base asset identifier.
    /// - `asset_decimals`: Decimals of the base asset.
    /// - `yield_source`: Contract paying the base-asset yield.
    /// - `reserve_ratio`: Share of the claimed yield kept as reserve (BPS).
    /// - `buffer_ratio`: Share of the total assets never rented (BPS).
    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
        yield_source: ManagedAddress,
        reserve_ratio: BigUint,
        buffer_ratio: BigUint,
    ) {
        require!(asset.is_valid(), ERROR_INVALID_TOKEN);
        require!(!yield_source.is_zero(), ERROR_ADDRESS_ZERO);
        require!(
            reserve_ratio <= BigUint::from(MAX_RESERVE_RATIO),
            ERROR_INVALID_PARAMETER
        );
        require!(
            buffer_ratio <= BigUint::from(MAX_BUFFER_RATIO),
            ERROR_INVALID_PARAMETER
        );

        self.params().set(VaultParams {
            asset_id: asset,
            asset_decimals,
            reserve_ratio: self.to_decimal_bps(reserve_ratio),
            buffer_ratio: self.to_decimal_bps(buffer_ratio),
        });
        self.yield_source().set(&yield_source);
        self.initialized().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
