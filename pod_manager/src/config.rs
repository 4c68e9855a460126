multiversx_sc::imports!();

use common_constants::{
    MAX_EXTRA_LIQUIDATION_RATIO, MAX_MINT_FEE_RATIO, MAX_PROTOCOL_FEE_RATIO,
    MIN_PROCESS_THRESHOLD,
};
use common_errors::{
    ERROR_ALREADY_LISTED, ERROR_INVALID_PARAMETER, ERROR_INVALID_TOKEN, ERROR_NOT_LISTED,
    ERROR_NULL_AMOUNT,
};
use common_structs::CollateralConfig;

use crate::storage;

/// Owner-side configuration: collateral listing and the pod manager parameters.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    #[only_owner]
    #[endpoint(addCollateral)]
    fn add_collateral(&self, token: EgldOrEsdtTokenIdentifier, decimals: usize) {
        require!(token.is_valid(), ERROR_INVALID_TOKEN);

        let mapper = self.collateral_config(&token);
        require!(mapper.is_empty(), ERROR_ALREADY_LISTED);

        let config = CollateralConfig {
            allowed: true,
            decimals,
        };
        mapper.set(&config);

        self.collateral_updated_event(&token, &config);
    }

    /// Allows or disallows new pods on `token`. Existing pods keep working.
    #[only_owner]
    #[endpoint(updateCollateral)]
    fn update_collateral(&self, token: EgldOrEsdtTokenIdentifier, allowed: bool) {
        let mapper = self.collateral_config(&token);
        require!(!mapper.is_empty(), ERROR_NOT_LISTED);

        let config = mapper.update(|config| {
            config.allowed = allowed;
            config.clone()
        });

        self.collateral_updated_event(&token, &config);
    }

    /// Max 5%.
    #[only_owner]
    #[endpoint(updateMintFeeRatio)]
    fn update_mint_fee_ratio(&self, new_ratio: BigUint) {
        require!(
            new_ratio <= BigUint::from(MAX_MINT_FEE_RATIO),
            ERROR_INVALID_PARAMETER
        );

        let mut params = self.params().get();
        let old_ratio = params.mint_fee_ratio.into_raw_units().clone();
        params.mint_fee_ratio = self.to_decimal_bps(new_ratio.clone());
        self.params().set(&params);

        self.parameter_updated_event(&ManagedBuffer::from(b"mint_fee_ratio"), &old_ratio, &new_ratio);
    }

    /// Max 30%.
    #[only_owner]
    #[endpoint(updateProtocolFeeRatio)]
    fn update_protocol_fee_ratio(&self, new_ratio: BigUint) {
        require!(
            new_ratio <= BigUint::from(MAX_PROTOCOL_FEE_RATIO),
            ERROR_INVALID_PARAMETER
        );

        let mut params = self.params().get();
        let old_ratio = params.protocol_fee_ratio.into_raw_units().clone();
        params.protocol_fee_ratio = self.to_decimal_bps(new_ratio.clone());
        self.params().set(&params);

        self.parameter_updated_event(
            &ManagedBuffer::from(b"protocol_fee_ratio"),
            &old_ratio,
            &new_ratio,
        );
    }

    /// Max 25%.
    #[only_owner]
    #[endpoint(updateExtraLiquidationRatio)]
    fn update_extra_liquidation_ratio(&self, new_ratio: BigUint) {
        require!(
            new_ratio <= BigUint::from(MAX_EXTRA_LIQUIDATION_RATIO),
            ERROR_INVALID_PARAMETER
        );

        let mut params = self.params().get();
        let old_ratio = params.extra_liquidation_ratio.into_raw_units().clone();
        params.extra_liquidation_ratio = self.to_decimal_bps(new_ratio.clone());
        self.params().set(&params);

        self.parameter_updated_event(
            &ManagedBuffer::from(b"extra_liquidation_ratio"),
            &old_ratio,
            &new_ratio,
        );
    }

    /// At least 500 whole debt tokens.
    #[only_owner]
    #[endpoint(updateProcessThreshold)]
    fn update_process_threshold(&self, new_threshold: BigUint) {
        require!(
            new_threshold >= self.min_process_threshold(),
            ERROR_INVALID_PARAMETER
        );

        let mut params = self.params().get();
        let old_threshold = core::mem::replace(&mut params.process_threshold, new_threshold.clone());
        self.params().set(&params);

        self.parameter_updated_event(
            &ManagedBuffer::from(b"process_threshold"),
            &old_threshold,
            &new_threshold,
        );
    }

    /// Debt covered by one unit of rent (WAD).
    #[only_owner]
    #[endpoint(updateDiscountRatio)]
    fn update_discount_ratio(&self, new_ratio: BigUint) {
        require!(new_ratio > 0, ERROR_NULL_AMOUNT);

        let mut params = self.params().get();
        let old_ratio = params.discount_ratio.into_raw_units().clone();
        params.discount_ratio = self.to_decimal_wad(new_ratio.clone());
        self.params().set(&params);

        self.parameter_updated_event(&ManagedBuffer::from(b"discount_ratio"), &old_ratio, &new_ratio);
    }

    fn min_process_threshold(&self) -> BigUint {
        BigUint::from(MIN_PROCESS_THRESHOLD) * BigUint::from(10u64).pow(self.debt_decimals().get() as u32)
    }
}
