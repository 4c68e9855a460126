#![no_std]

use common_constants::{
    BPS_PRECISION, DISTRIBUTION_DURATION, FEE_KINK_MULTIPLIER, MIN_DEBT_FOR_RENT,
    MIN_RENT_AMOUNT, RAY_PRECISION, UTILIZATION_KINK, WAD_PRECISION,
};
use common_structs::{
    FeeIndexState, LiquidationEstimate, PodRecord, RentAdjustment, RewardState, UserRewardState,
};

multiversx_sc::imports!();

/// The Accrual module holds the pure math of every ledger in the workspace: scaled balances,
/// reward streams, the fee index, rent sizing and liquidation payouts.
///
/// **Scope**: Functions take the current state by value and return the next state; storage
/// reads and writes stay in the contracts.
///
/// **Goal**: Keep every rounding decision in one place so that all contracts round the same way.
#[multiversx_sc::module]
pub trait AccrualModule: common_math::SharedMathModule {
    /// Computes the current index of a scaled balance ledger.
    ///
    /// **Formula**:
    /// - `index = total_assets / total_scaled` (RAY).
    /// - A ledger with no shares or no assets reports `1.0`; the next mint restarts it there.
    ///
    /// # Arguments
    /// - `total_assets`: Real assets backing the ledger, in raw token units.
    /// - `total_scaled`: Total scaled supply (RAY).
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The ledger index (RAY).
    fn compute_index(
        &self,
        total_assets: &BigUint,
        total_scaled: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if total_scaled.into_raw_units() == &BigUint::zero() || total_assets == &BigUint::zero() {
            return self.ray();
        }

        self.div_half_up(
            &self.to_decimal_units(total_assets.clone()),
            total_scaled,
            RAY_PRECISION,
        )
    }

    /// Converts a real amount into scaled units, rounding half-up.
    fn scaled_from_real(
        &self,
        amount: &BigUint,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_half_up(&self.to_decimal_units(amount.clone()), index, RAY_PRECISION)
    }

    /// Scaled amount credited for a mint of `minted` units.
    ///
    /// When the ledger holds shares but no assets, the orphaned shares are absorbed by the
    /// minter so the total supply restarts at exactly `minted` and the index at `1.0`.
    ///
    /// # Arguments
    /// - `minted`: Scaled amount of the deposit at the current index (RAY).
    /// - `total_assets`: Real assets before the deposit.
    /// - `total_scaled`: Total scaled supply before the deposit (RAY).
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Scaled amount to credit; zero when the
    ///   deposit does not cover the orphaned shares.
    fn credited_scaled(
        &self,
        minted: ManagedDecimal<Self::Api, NumDecimals>,
        total_assets: &BigUint,
        total_scaled: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if total_assets > &BigUint::zero() || total_scaled.into_raw_units() == &BigUint::zero() {
            return minted;
        }

        if &minted <= total_scaled {
            return self.ray_zero();
        }

        minted - total_scaled.clone()
    }

    /// Converts scaled units back into raw token units, rounding half-up.
    fn real_from_scaled(
        &self,
        scaled: &ManagedDecimal<Self::Api, NumDecimals>,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let real = self.mul_half_up(scaled, index, RAY_PRECISION);
        self.rescale_half_up(&real, 0).into_raw_units().clone()
    }

    /// Settles the reward-per-token accumulator of one reward token up to `now`.
    ///
    /// **Formula**:
    /// - `applicable = min(now, distribution_end)`.
    /// - `reward_per_token += rate_per_second * (applicable - last_update) / total_scaled`.
    /// - `last_update = applicable`.
    ///
    /// Rewards streamed while nothing is staked are not attributed to anyone.
    /// The accumulator is kept at RAY so low-decimal reward tokens streamed over
    /// a large stake still move it every second.
    ///
    /// # Arguments
    /// - `state`: Current reward state.
    /// - `now`: Current block timestamp.
    /// - `total_scaled`: Total scaled stake (RAY).
    ///
    /// # Returns
    /// - `RewardState<Self::Api>`: The settled state.
    ///
    /// **Security Tip**: Floors the increment so the sum of user claims never exceeds the streamed amount.
    fn accrue_reward_state(
        &self,
        mut state: RewardState<Self::Api>,
        now: u64,
        total_scaled: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> RewardState<Self::Api> {
        let applicable = core::cmp::min(now, state.distribution_end);
        if applicable <= state.last_update {
            return state;
        }

        if total_scaled.into_raw_units() > &BigUint::zero() {
            let elapsed = self.to_decimal_units(BigUint::from(applicable - state.last_update));
            let distributed = self.mul_floor(&state.rate_per_second, &elapsed, WAD_PRECISION);
            let increment = self.div_floor(&distributed, total_scaled, RAY_PRECISION);

            state.reward_per_token += increment;
        }

        state.last_update = applicable;
        state
    }

    /// Applies a reward top-up to a settled reward state.
    ///
    /// **Scope**: Decides between queuing the top-up and restarting the distribution window.
    ///
    /// **Formula**:
    /// - `distributed = rate_per_second * (now - window_start)`.
    /// - While the window is running and `(amount + queued) / distributed < update_ratio`, the top-up is queued.
    /// - Otherwise `current = amount + queued + rate_per_second * (end - now)`,
    ///   `rate_per_second = current / DISTRIBUTION_DURATION` and `end = now + DISTRIBUTION_DURATION`.
    ///
    /// # Arguments
    /// - `state`: Reward state already settled to `now`.
    /// - `amount`: Newly deposited reward amount.
    /// - `now`: Current block timestamp.
    /// - `update_ratio`: Materiality threshold (BPS).
    ///
    /// # Returns
    /// - `(RewardState<Self::Api>, bool)`: The new state and whether the window was restarted.
    fn queue_reward_amount(
        &self,
        mut state: RewardState<Self::Api>,
        amount: &BigUint,
        now: u64,
        update_ratio: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (RewardState<Self::Api>, bool) {
        let total_queued = amount + &state.queued_reward_amount;
        let active = state.is_active_at(now);

        if active {
            let elapsed = now - state.window_start(DISTRIBUTION_DURATION);
            let distributed = self.mul_floor(
                &state.rate_per_second,
                &self.to_decimal_units(BigUint::from(elapsed)),
                WAD_PRECISION,
            );

            if distributed.into_raw_units() > &BigUint::zero() {
                let ratio = self.div_floor(
                    &self.to_decimal_units(total_queued.clone()),
                    &distributed,
                    WAD_PRECISION,
                );
                if ratio < update_ratio.rescale(WAD_PRECISION) {
                    state.queued_reward_amount = total_queued;
                    return (state, false);
                }
            }
        }

        let remaining = if active {
            let left = self.mul_floor(
                &state.rate_per_second,
                &self.to_decimal_units(BigUint::from(state.distribution_end - now)),
                WAD_PRECISION,
            );
            self.rescale_floor(&left, 0).into_raw_units().clone()
        } else {
            BigUint::zero()
        };

        let current = total_queued + remaining;
        state.rate_per_second = self.div_floor(
            &self.to_decimal_units(current.clone()),
            &self.to_decimal_units(BigUint::from(DISTRIBUTION_DURATION)),
            WAD_PRECISION,
        );
        state.current_reward_amount = current;
        state.queued_reward_amount = BigUint::zero();
        state.last_update = now;
        state.distribution_end = now + DISTRIBUTION_DURATION;

        (state, true)
    }

    /// Realizes the rewards earned by a holder since its last snapshot.
    ///
    /// **Formula**:
    /// - `accrued += scaled_balance * (reward_per_token - last_reward_per_token)`, floored to token units.
    fn accrue_user_rewards(
        &self,
        mut user: UserRewardState<Self::Api>,
        reward_per_token: &ManagedDecimal<Self::Api, NumDecimals>,
        scaled_balance: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> UserRewardState<Self::Api> {
        if reward_per_token > &user.last_reward_per_token {
            let delta = reward_per_token.clone() - user.last_reward_per_token.clone();
            let earned = self.mul_floor(scaled_balance, &delta, RAY_PRECISION);
            user.accrued_rewards += self.rescale_floor(&earned, 0).into_raw_units();
        }

        user.last_reward_per_token = reward_per_token.clone();
        user
    }

    /// Moves the global fee index forward with the rate in force at call time.
    ///
    /// **Formula**:
    /// - `last_updated_index += fee_per_second * (now - last_index_update)`.
    ///
    /// # Arguments
    /// - `state`: Current fee index state.
    /// - `fee_per_second`: Fee rate returned by the fee collaborator (WAD).
    /// - `now`: Current block timestamp.
    ///
    /// # Returns
    /// - `FeeIndexState<Self::Api>`: The updated state; unchanged when no time elapsed.
    fn accrue_fee_index(
        &self,
        mut state: FeeIndexState<Self::Api>,
        fee_per_second: &ManagedDecimal<Self::Api, NumDecimals>,
        now: u64,
    ) -> FeeIndexState<Self::Api> {
        if now <= state.last_index_update {
            return state;
        }

        let elapsed = self.to_decimal_units(BigUint::from(now - state.last_index_update));
        state.last_updated_index += self.mul_floor(fee_per_second, &elapsed, WAD_PRECISION);
        state.last_index_update = now;
        state
    }

    /// Accrues a pod's fees against the global fee index.
    ///
    /// **Formula**:
    /// - `accrued_fees += rented_amount * (index - pod.last_index)`, floored to token units.
    /// - `pod.last_index = index`, `pod.last_update = now`.
    fn accrue_pod_fees(
        &self,
        mut pod: PodRecord<Self::Api>,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
        now: u64,
    ) -> PodRecord<Self::Api> {
        if index > &pod.last_index && pod.has_rented() {
            let delta = index.clone() - pod.last_index.clone();
            let fees = self.mul_floor(
                &self.to_decimal_units(pod.rented_amount.clone()),
                &delta,
                WAD_PRECISION,
            );
            pod.accrued_fees += self.rescale_floor(&fees, 0).into_raw_units();
        }

        pod.last_index = index.clone();
        pod.last_update = now;
        pod
    }

    /// Share of the vault assets currently rented (WAD); zero for an empty vault.
    fn utilization(
        &self,
        total_rented: &BigUint,
        total_assets: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if total_assets == &BigUint::zero() {
            return self.wad_zero();
        }

        self.div_floor(
            &self.to_decimal_units(total_rented.clone()),
            &self.to_decimal_units(total_assets.clone()),
            WAD_PRECISION,
        )
    }

    /// Applies the utilization kink to the base fee.
    ///
    /// **Formula**:
    /// - `utilization < 0.75`: `base_fee`.
    /// - otherwise: `base_fee * (1 + 4 * (utilization - 0.75))`.
    fn fee_per_second_for_utilization(
        &self,
        base_fee: &ManagedDecimal<Self::Api, NumDecimals>,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let kink = self.to_decimal_wad(BigUint::from(UTILIZATION_KINK));
        if utilization < &kink {
            return base_fee.clone();
        }

        let excess = utilization.clone() - kink;
        let slope = self.mul_floor(
            &excess,
            &self.to_decimal_units(BigUint::from(FEE_KINK_MULTIPLIER)),
            WAD_PRECISION,
        );
        let multiplier = self.wad() + slope;

        self.mul_floor(base_fee, &multiplier, WAD_PRECISION)
    }

    /// Amount of base asset a pod must rent to cover `debt`.
    ///
    /// **Formula**:
    /// - `needed = debt / discount_ratio`, rounded half-up.
    /// - Debts below one whole token and needs below one whole token map to zero.
    fn needed_rent_for_debt(
        &self,
        debt: &BigUint,
        discount_ratio: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        if debt < &BigUint::from(MIN_DEBT_FOR_RENT) {
            return BigUint::zero();
        }

        let needed = self.div_half_up(
            &self.to_decimal_units(debt.clone()),
            discount_ratio,
            WAD_PRECISION,
        );
        let needed = self.rescale_half_up(&needed, 0).into_raw_units().clone();

        if needed < BigUint::from(MIN_RENT_AMOUNT) {
            return BigUint::zero();
        }

        needed
    }

    /// Decides whether a pod must rent more or can give some of its rent back.
    ///
    /// # Arguments
    /// - `needed`: Rent required for the pod's current debt.
    /// - `held`: Amount the pod currently holds.
    /// - `debt`: Current debt of the pod on the market.
    /// - `available`: Amount the vault can still rent out.
    ///
    /// # Returns
    /// - `RentAdjustment<Self::Api>`: `Rent` capped at `available`, `Free` down to `needed`
    ///   (everything when the debt is zero), or `None`.
    fn rent_adjustment(
        &self,
        needed: &BigUint,
        held: &BigUint,
        debt: &BigUint,
        available: &BigUint,
    ) -> RentAdjustment<Self::Api> {
        if debt == &BigUint::zero() {
            if held > &BigUint::zero() {
                return RentAdjustment::Free(held.clone());
            }
            return RentAdjustment::None;
        }

        if needed > held {
            let delta = needed - held;
            let capped = if &delta > available {
                available.clone()
            } else {
                delta
            };
            if capped == BigUint::zero() {
                return RentAdjustment::None;
            }
            return RentAdjustment::Rent(capped);
        }

        if held > needed {
            return RentAdjustment::Free(held - needed);
        }

        RentAdjustment::None
    }

    /// Computes the collateral seized and the fee a liquidator pays for a delinquent pod.
    ///
    /// **Scope**: Converts owed fees into collateral through oracle prices and adds the liquidation penalty.
    ///
    /// **Formula**:
    /// - `collateral_for_fees = owed_fees * fee_price / collateral_price`, in collateral decimals.
    /// - `collateral_amount = collateral_for_fees * (1 + extra_ratio)`.
    /// - When `remaining_collateral < collateral_amount`, everything is seized and
    ///   `fee_amount = (remaining / (1 + extra_ratio)) * collateral_price / fee_price`.
    ///
    /// # Arguments
    /// - `owed_fees`: Fees owed by the pod, in raw debt token units.
    /// - `fee_price` / `collateral_price`: Oracle prices (WAD).
    /// - `fee_decimals` / `collateral_decimals`: Token decimals.
    /// - `extra_ratio`: Liquidation penalty (BPS).
    /// - `remaining_collateral`: Collateral still backing the pod.
    ///
    /// # Returns
    /// - `LiquidationEstimate<Self::Api>`: Seized collateral and fee, both in raw units.
    ///
    /// **Security Tip**: All conversions truncate, so the liquidator never receives more collateral than the fee covers.
    fn estimate_liquidation(
        &self,
        owed_fees: &BigUint,
        fee_price: &ManagedDecimal<Self::Api, NumDecimals>,
        fee_decimals: usize,
        collateral_price: &ManagedDecimal<Self::Api, NumDecimals>,
        collateral_decimals: usize,
        extra_ratio: &ManagedDecimal<Self::Api, NumDecimals>,
        remaining_collateral: &BigUint,
    ) -> LiquidationEstimate<Self::Api> {
        if owed_fees == &BigUint::zero() {
            return LiquidationEstimate {
                collateral_amount: BigUint::zero(),
                fee_amount: BigUint::zero(),
            };
        }

        let fee_value = self.mul_floor(
            &self.to_decimal(owed_fees.clone(), fee_decimals),
            fee_price,
            WAD_PRECISION,
        );
        let collateral_for_fees = self.div_floor(&fee_value, collateral_price, WAD_PRECISION);
        let collateral_for_fees = self
            .rescale_floor(&collateral_for_fees, collateral_decimals)
            .into_raw_units()
            .clone();
        let penalty = self.apply_bps_floor(&collateral_for_fees, extra_ratio);
        let collateral_amount = collateral_for_fees + penalty;

        if remaining_collateral >= &collateral_amount {
            return LiquidationEstimate {
                collateral_amount,
                fee_amount: owed_fees.clone(),
            };
        }

        let one_plus_extra = self.bps() + extra_ratio.clone();
        let collateral_after_penalty = self.div_floor(
            &self.to_decimal_units(remaining_collateral.clone()),
            &one_plus_extra,
            BPS_PRECISION,
        );
        let collateral_after_penalty = self.to_decimal(
            self.rescale_floor(&collateral_after_penalty, 0)
                .into_raw_units()
                .clone(),
            collateral_decimals,
        );
        let value = self.mul_floor(&collateral_after_penalty, collateral_price, WAD_PRECISION);
        let fee_amount = self.div_floor(&value, fee_price, WAD_PRECISION);

        LiquidationEstimate {
            collateral_amount: remaining_collateral.clone(),
            fee_amount: self
                .rescale_floor(&fee_amount, fee_decimals)
                .into_raw_units()
                .clone(),
        }
    }

    /// Splits a flushed reserve into the protocol part and the part streamed to stakers.
    fn split_reserve(
        &self,
        reserve: &BigUint,
        protocol_fee_ratio: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (BigUint, BigUint) {
        let protocol_part = self.apply_bps_floor(reserve, protocol_fee_ratio);
        let rewards_part = reserve - &protocol_part;
        (protocol_part, rewards_part)
    }

    /// `amount * ratio`, truncated to raw units. `ratio` is a BPS decimal.
    fn apply_bps_floor(
        &self,
        amount: &BigUint,
        ratio: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let product = self.mul_floor(&self.to_decimal_units(amount.clone()), ratio, BPS_PRECISION);
        self.rescale_floor(&product, 0).into_raw_units().clone()
    }
}
