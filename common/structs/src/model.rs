#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Streaming state of one reward token.
///
/// `rate_per_second` is kept at WAD precision in token units per second and
/// `reward_per_token` is the RAY accumulator of reward per scaled staked unit.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RewardState<M: ManagedTypeApi> {
    pub rate_per_second: ManagedDecimal<M, NumDecimals>,
    pub current_reward_amount: BigUint<M>,
    pub queued_reward_amount: BigUint<M>,
    pub last_update: u64,
    pub distribution_end: u64,
    pub reward_per_token: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> RewardState<M> {
    pub fn is_active_at(&self, timestamp: u64) -> bool {
        timestamp < self.distribution_end
    }

    pub fn window_start(&self, duration: u64) -> u64 {
        self.distribution_end.saturating_sub(duration)
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct UserRewardState<M: ManagedTypeApi> {
    pub last_reward_per_token: ManagedDecimal<M, NumDecimals>,
    pub accrued_rewards: BigUint<M>,
}

/// Global fee index of the pod manager.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct FeeIndexState<M: ManagedTypeApi> {
    pub last_updated_index: ManagedDecimal<M, NumDecimals>,
    pub last_index_update: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PodRecord<M: ManagedTypeApi> {
    pub id: u64,
    pub owner: ManagedAddress<M>,
    pub collateral_token: EgldOrEsdtTokenIdentifier<M>,
    /// Real units of the base asset currently rented from the vault.
    pub rented_amount: BigUint<M>,
    /// Fee index snapshot at the last touch.
    pub last_index: ManagedDecimal<M, NumDecimals>,
    pub last_update: u64,
    /// Fees owed and not yet paid, in debt token units.
    pub accrued_fees: BigUint<M>,
}

impl<M: ManagedTypeApi> PodRecord<M> {
    pub fn has_owed_fees(&self) -> bool {
        self.accrued_fees > 0u64
    }

    pub fn has_rented(&self) -> bool {
        self.rented_amount > 0u64
    }

    pub fn is_owned_by(&self, address: &ManagedAddress<M>) -> bool {
        &self.owner == address
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug, PartialEq, Eq)]
pub struct CollateralConfig {
    pub allowed: bool,
    pub decimals: usize,
}

impl CollateralConfig {
    pub fn can_open_pod(&self) -> bool {
        self.allowed
    }
}

/// Collateral seized from a pod and fee paid by the liquidator, in raw token units.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LiquidationEstimate<M: ManagedTypeApi> {
    pub collateral_amount: BigUint<M>,
    pub fee_amount: BigUint<M>,
}

impl<M: ManagedTypeApi> LiquidationEstimate<M> {
    pub fn is_empty(&self) -> bool {
        self.collateral_amount == 0u64 && self.fee_amount == 0u64
    }
}

/// Outcome of a rent or free computation for a pod.
#[derive(Clone)]
pub enum RentAdjustment<M: ManagedTypeApi> {
    None,
    Rent(BigUint<M>),
    Free(BigUint<M>),
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct VaultParams<M: ManagedTypeApi> {
    pub asset_id: EgldOrEsdtTokenIdentifier<M>,
    pub asset_decimals: usize,
    /// Share of the claimed base-asset yield kept as reserve (BPS).
    pub reserve_ratio: ManagedDecimal<M, NumDecimals>,
    /// Share of the total assets that can never be rented (BPS).
    pub buffer_ratio: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ManagerParams<M: ManagedTypeApi> {
    pub mint_fee_ratio: ManagedDecimal<M, NumDecimals>,
    pub protocol_fee_ratio: ManagedDecimal<M, NumDecimals>,
    pub extra_liquidation_ratio: ManagedDecimal<M, NumDecimals>,
    pub process_threshold: BigUint<M>,
    /// Debt token amount covered by one unit of rented asset (WAD).
    pub discount_ratio: ManagedDecimal<M, NumDecimals>,
}
