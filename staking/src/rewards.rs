multiversx_sc::imports!();

use common_errors::{ERROR_CALLER_NOT_ALLOWED, ERROR_INVALID_TOKEN, ERROR_NULL_AMOUNT};
use common_structs::{RewardState, UserRewardState};

use crate::storage;

/// Reward streams paid to stakers, one per reward token.
#[multiversx_sc::module]
pub trait RewardsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
{
    /// Adds the payment to the reward stream of its token. Restricted to reward depositors.
    ///
    /// **Process**:
    /// 1. Lists the token on its first top-up.
    /// 2. Settles the stream up to now.
    /// 3. Either queues the amount or restarts a full distribution window with it.
    ///
    /// **Security Tip**: The staked token can never be a reward token, it would inflate the index.
    #[payable("*")]
    #[endpoint(queueRewards)]
    fn queue_rewards(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.reward_depositors().contains(&caller),
            ERROR_CALLER_NOT_ALLOWED
        );

        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier != self.staked_token().get(),
            ERROR_INVALID_TOKEN
        );
        require!(payment.amount > 0, ERROR_NULL_AMOUNT);

        let token = payment.token_identifier.clone();
        let now = self.blockchain().get_block_timestamp();
        if self.reward_tokens().insert(token.clone()) {
            self.reward_state(&token).set(self.empty_reward_state(now));
        }

        let state = self.settled_reward_state(&token, &self.total_scaled_decimal(), now);
        let ratio = self.update_reward_ratio().get();
        let (state, restarted) = self.queue_reward_amount(state, &payment.amount, now, &ratio);

        if restarted {
            self.new_rewards_event(&token, &state.current_reward_amount, state.distribution_end);
        } else {
            self.queued_rewards_event(&token, &state.queued_reward_amount);
        }

        self.reward_state(&token).set(state);
    }

    /// Settles the accumulator of one reward token. Callable by anyone.
    #[endpoint(updateRewardState)]
    fn update_reward_state(&self, token: EgldOrEsdtTokenIdentifier) {
        self.require_reward_token(&token);

        let now = self.blockchain().get_block_timestamp();
        let state = self.settled_reward_state(&token, &self.total_scaled_decimal(), now);
        self.reward_state(&token).set(state);
    }

    #[endpoint(updateAllRewardState)]
    fn update_all_reward_state(&self) {
        let now = self.blockchain().get_block_timestamp();
        let total_scaled = self.total_scaled_decimal();
        for token in self.reward_tokens().iter() {
            let state = self.settled_reward_state(&token, &total_scaled, now);
            self.reward_state(&token).set(state);
        }
    }

    /// Pays the caller's accrued rewards of `token` to `receiver` (the caller by default).
    ///
    /// # Returns
    /// - `BigUint`: Amount paid; zero pays nothing and emits nothing.
    #[endpoint(claimRewards)]
    fn claim_rewards(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        receiver: OptionalValue<ManagedAddress>,
    ) -> BigUint {
        let caller = self.blockchain().get_caller();
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());

        self.claim_for(&token, &caller, &receiver)
    }

    /// Claims on behalf of `user`. Only the claimer registered by `user` may call it.
    #[endpoint(claimRewardsForUser)]
    fn claim_rewards_for_user(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
        receiver: ManagedAddress,
    ) -> BigUint {
        self.require_allowed_claimer(&user);

        self.claim_for(&token, &user, &receiver)
    }

    #[endpoint(claimAllRewards)]
    fn claim_all_rewards(
        &self,
        receiver: OptionalValue<ManagedAddress>,
    ) -> MultiValueEncoded<EgldOrEsdtTokenPayment> {
        let caller = self.blockchain().get_caller();
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());

        self.claim_all_for(&caller, &receiver)
    }

    #[endpoint(claimAllRewardsForUser)]
    fn claim_all_rewards_for_user(
        &self,
        user: ManagedAddress,
        receiver: ManagedAddress,
    ) -> MultiValueEncoded<EgldOrEsdtTokenPayment> {
        self.require_allowed_claimer(&user);

        self.claim_all_for(&user, &receiver)
    }

    /// Lets `claimer` claim the caller's rewards to any receiver.
    #[endpoint(setUserAllowedClaimer)]
    fn set_user_allowed_claimer(&self, claimer: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.allowed_claimer(&caller).set(&claimer);

        self.set_user_allowed_claimer_event(&caller, &claimer);
    }

    /// Settles every reward token and realizes what `user` earned with `user_scaled`.
    ///
    /// Must run before any change of the user's scaled balance.
    fn checkpoint_user(
        &self,
        user: &ManagedAddress,
        total_scaled: &ManagedDecimal<Self::Api, NumDecimals>,
        user_scaled: &ManagedDecimal<Self::Api, NumDecimals>,
        now: u64,
    ) {
        for token in self.reward_tokens().iter() {
            let state = self.settled_reward_state(&token, total_scaled, now);
            let user_state = self.accrue_user_rewards(
                self.user_reward_state_or_default(&token, user),
                &state.reward_per_token,
                user_scaled,
            );

            self.user_reward_state(&token, user).set(user_state);
            self.reward_state(&token).set(state);
        }
    }

    fn claim_for(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        receiver: &ManagedAddress,
    ) -> BigUint {
        self.require_reward_token(token);

        let now = self.blockchain().get_block_timestamp();
        let user_scaled = self.to_decimal_ray(self.user_scaled(user).get());
        self.checkpoint_user(user, &self.total_scaled_decimal(), &user_scaled, now);

        self.pay_accrued(token, user, receiver)
    }

    fn claim_all_for(
        &self,
        user: &ManagedAddress,
        receiver: &ManagedAddress,
    ) -> MultiValueEncoded<EgldOrEsdtTokenPayment> {
        let now = self.blockchain().get_block_timestamp();
        let user_scaled = self.to_decimal_ray(self.user_scaled(user).get());
        self.checkpoint_user(user, &self.total_scaled_decimal(), &user_scaled, now);

        let mut claimed = MultiValueEncoded::new();
        for token in self.reward_tokens().iter() {
            let amount = self.pay_accrued(&token, user, receiver);
            if amount > 0 {
                claimed.push(EgldOrEsdtTokenPayment::new(token, 0, amount));
            }
        }

        claimed
    }

    fn pay_accrued(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        receiver: &ManagedAddress,
    ) -> BigUint {
        let mut user_state = self.user_reward_state_or_default(token, user);
        let amount = core::mem::replace(&mut user_state.accrued_rewards, BigUint::zero());
        if amount == 0 {
            return amount;
        }

        self.user_reward_state(token, user).set(user_state);
        self.claimed_rewards_event(token, user, receiver, &amount);

        let payment = EgldOrEsdtTokenPayment::new(token.clone(), 0, amount.clone());
        self.tx().to(receiver).payment(payment).transfer();

        amount
    }

    fn settled_reward_state(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        total_scaled: &ManagedDecimal<Self::Api, NumDecimals>,
        now: u64,
    ) -> RewardState<Self::Api> {
        self.accrue_reward_state(self.reward_state(token).get(), now, total_scaled)
    }

    fn user_reward_state_or_default(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> UserRewardState<Self::Api> {
        let mapper = self.user_reward_state(token, user);
        if mapper.is_empty() {
            UserRewardState {
                last_reward_per_token: self.ray_zero(),
                accrued_rewards: BigUint::zero(),
            }
        } else {
            mapper.get()
        }
    }

    fn empty_reward_state(&self, now: u64) -> RewardState<Self::Api> {
        RewardState {
            rate_per_second: self.wad_zero(),
            current_reward_amount: BigUint::zero(),
            queued_reward_amount: BigUint::zero(),
            last_update: now,
            distribution_end: now,
            reward_per_token: self.ray_zero(),
        }
    }

    fn total_scaled_decimal(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(self.total_scaled().get())
    }

    fn require_reward_token(&self, token: &EgldOrEsdtTokenIdentifier) {
        require!(self.reward_tokens().contains(token), ERROR_INVALID_TOKEN);
    }

    fn require_allowed_claimer(&self, user: &ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let claimer = self.allowed_claimer(user);
        require!(
            !claimer.is_empty() && claimer.get() == caller,
            ERROR_CALLER_NOT_ALLOWED
        );
    }
}
