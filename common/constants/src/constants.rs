#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Unit of the fee index and of reward rates.
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Length of a reward distribution window (7 days).
pub const DISTRIBUTION_DURATION: u64 = 604_800;

/// Top-ups whose queued amount is below this share of the already distributed
/// amount are queued instead of restarting the window (85%).
pub const DEFAULT_UPDATE_REWARD_RATIO: usize = 8_500;

/// Maximum share of the vault assets kept unrentable (15%).
pub const MAX_BUFFER_RATIO: usize = 1_500;

/// Maximum share of the claimed base-asset yield kept as vault reserve (20%).
pub const MAX_RESERVE_RATIO: usize = 2_000;

/// Maximum minting fee taken on newly minted debt (5%).
pub const MAX_MINT_FEE_RATIO: usize = 500;

/// Maximum share of the flushed reserve sent to the protocol treasury (30%).
pub const MAX_PROTOCOL_FEE_RATIO: usize = 3_000;

/// Maximum liquidation penalty on top of the seized collateral (25%).
pub const MAX_EXTRA_LIQUIDATION_RATIO: usize = 2_500;

/// Minimum reserve processing threshold, in whole debt tokens.
pub const MIN_PROCESS_THRESHOLD: u64 = 500;

/// Utilization above which the fee per second starts to increase (75%).
pub const UTILIZATION_KINK: u128 = 750_000_000_000_000_000;

/// Fee multiplier applied to the utilization above the kink.
pub const FEE_KINK_MULTIPLIER: u64 = 4;

/// Debt token amount covered by one unit of rented asset.
pub const DEFAULT_DISCOUNT_RATIO: u128 = 100_000_000_000_000_000_000;

/// Smallest debt amount minted at once, in raw debt token units.
pub const MIN_MINT_AMOUNT: u128 = 1_000_000_000;

/// Debts below this amount do not need any rented asset.
pub const MIN_DEBT_FOR_RENT: u128 = WAD;

/// Rent needs below this amount are rounded down to zero.
pub const MIN_RENT_AMOUNT: u128 = WAD;

/// Account id used by the vault when claiming its own base-asset yield.
pub const VAULT_YIELD_ACCOUNT: u64 = 0;
