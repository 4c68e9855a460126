#![no_std]

multiversx_sc::imports!();

pub mod cache;
pub mod config;
pub mod fees;
pub mod liquidation;
pub mod pods;
pub mod rent;
pub mod reserve;
pub mod storage;
pub mod views;

use common_constants::{
    DEFAULT_DISCOUNT_RATIO, MAX_EXTRA_LIQUIDATION_RATIO, MAX_MINT_FEE_RATIO,
    MAX_PROTOCOL_FEE_RATIO,
};
pub use common_errors::*;
pub use common_structs::*;

/// Pod factory and fee ledger.
///
/// Each pod borrows debt token on the market against its collateral and rents base asset
/// from the vault in proportion to its debt. Fees accrue on the rented amount against a
/// global fee index; settled fees collect in a reserve that is flushed to the treasury and
/// the staking reward stream.
#[multiversx_sc::contract]
pub trait PodManager:
    storage::Storage
    + pods::PodsModule
    + fees::FeesModule
    + rent::RentModule
    + liquidation::LiquidationModule
    + reserve::ReserveModule
    + config::ConfigModule
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// # Arguments
    /// - `vault` / `staking` / `fee_module` / `market` / `oracle` / `yield_source`: Collaborators.
    /// - `treasury`: Receiver of the protocol share of the reserve.
    /// - `base_asset`: Asset rented from the vault.
    /// - `debt_token` / `debt_decimals`: Stable token borrowed on the market.
    /// - `mint_fee_ratio` / `protocol_fee_ratio` / `extra_liquidation_ratio`: BPS ratios.
    /// - `process_threshold`: Reserve amount that triggers a flush, in raw debt token units.
    #[init]
    fn init(
        &self,
        vault: ManagedAddress,
        staking: ManagedAddress,
        fee_module: ManagedAddress,
        market: ManagedAddress,
        oracle: ManagedAddress,
        yield_source: ManagedAddress,
        treasury: ManagedAddress,
        base_asset: EgldOrEsdtTokenIdentifier,
        debt_token: EgldOrEsdtTokenIdentifier,
        debt_decimals: usize,
        mint_fee_ratio: BigUint,
        protocol_fee_ratio: BigUint,
        extra_liquidation_ratio: BigUint,
        process_threshold: BigUint,
    ) {
        for address in [
            &vault,
            &staking,
            &fee_module,
            &market,
            &oracle,
            &yield_source,
            &treasury,
        ] {
            require!(!address.is_zero(), ERROR_ADDRESS_ZERO);
        }
        require!(
            base_asset.is_valid() && debt_token.is_valid() && base_asset != debt_token,
            ERROR_INVALID_TOKEN
        );
        require!(
            mint_fee_ratio <= BigUint::from(MAX_MINT_FEE_RATIO),
            ERROR_INVALID_PARAMETER
        );
        require!(
            protocol_fee_ratio <= BigUint::from(MAX_PROTOCOL_FEE_RATIO),
            ERROR_INVALID_PARAMETER
        );
        require!(
            extra_liquidation_ratio <= BigUint::from(MAX_EXTRA_LIQUIDATION_RATIO),
            ERROR_INVALID_PARAMETER
        );

        self.vault().set(&vault);
        self.staking().set(&staking);
        self.fee_module().set(&fee_module);
        self.market().set(&market);
        self.oracle().set(&oracle);
        self.yield_source().set(&yield_source);
        self.treasury().set(&treasury);
        self.base_asset().set(&base_asset);
        self.debt_token().set(&debt_token);
        self.debt_decimals().set(debt_decimals);

        require!(
            process_threshold >= self.min_process_threshold(),
            ERROR_INVALID_PARAMETER
        );

        self.params().set(ManagerParams {
            mint_fee_ratio: self.to_decimal_bps(mint_fee_ratio),
            protocol_fee_ratio: self.to_decimal_bps(protocol_fee_ratio),
            extra_liquidation_ratio: self.to_decimal_bps(extra_liquidation_ratio),
            process_threshold,
            discount_ratio: self.to_decimal_wad(BigUint::from(DEFAULT_DISCOUNT_RATIO)),
        });
        self.fee_index().set(FeeIndexState {
            last_updated_index: self.wad_zero(),
            last_index_update: self.blockchain().get_block_timestamp(),
        });
    }

    #[upgrade]
    fn upgrade(&self) {}
}
