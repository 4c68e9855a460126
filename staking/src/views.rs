multiversx_sc::imports!();

use common_errors::ERROR_INVALID_TOKEN;
use common_structs::{RewardState, UserRewardState};

use crate::{rewards, storage};

/// Read-only endpoints. Reward figures are projected to the current block.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + rewards::RewardsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_accrual::AccrualModule
{
    #[view(getRewardList)]
    fn get_reward_list(&self) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut tokens = MultiValueEncoded::new();
        for token in self.reward_tokens().iter() {
            tokens.push(token);
        }
        tokens
    }

    #[view(getRewardState)]
    fn get_reward_state(&self, token: EgldOrEsdtTokenIdentifier) -> RewardState<Self::Api> {
        require!(self.reward_tokens().contains(&token), ERROR_INVALID_TOKEN);
        self.reward_state(&token).get()
    }

    #[view(getUserRewardState)]
    fn get_user_reward_state(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> UserRewardState<Self::Api> {
        self.user_reward_state_or_default(&token, &user)
    }

    #[view(lastRewardUpdateTimestamp)]
    fn last_reward_update_timestamp(&self, token: EgldOrEsdtTokenIdentifier) -> u64 {
        self.get_reward_state(token).last_update
    }

    /// Rewards `user` could claim now, including the stream not settled yet.
    #[view(getUserAccruedRewards)]
    fn get_user_accrued_rewards(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> BigUint {
        require!(self.reward_tokens().contains(&token), ERROR_INVALID_TOKEN);

        let now = self.blockchain().get_block_timestamp();
        let state = self.settled_reward_state(&token, &self.total_scaled_decimal(), now);
        let user_state = self.accrue_user_rewards(
            self.user_reward_state_or_default(&token, &user),
            &state.reward_per_token,
            &self.user_scaled_balance_view(user),
        );

        user_state.accrued_rewards
    }

    #[view(userCurrentStakedAmount)]
    fn user_current_staked_amount(&self, user: ManagedAddress) -> BigUint {
        self.real_from_scaled(&self.user_scaled_balance_view(user), &self.get_current_index())
    }

    #[view(userScaledBalance)]
    fn user_scaled_balance_view(
        &self,
        user: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(self.user_scaled(&user).get())
    }

    /// Staked token held by the contract.
    #[view(totalAssets)]
    fn total_assets(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&self.staked_token().get(), 0)
    }

    #[view(totalScaledSupply)]
    fn total_scaled_supply(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.total_scaled_decimal()
    }

    #[view(getCurrentIndex)]
    fn get_current_index(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.compute_index(&self.total_assets(), &self.total_scaled_decimal())
    }

    /// Zero address when `user` never registered a claimer.
    #[view(getUserAllowedClaimer)]
    fn get_user_allowed_claimer(&self, user: ManagedAddress) -> ManagedAddress {
        let mapper = self.allowed_claimer(&user);
        if mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            mapper.get()
        }
    }

    #[view(isRewardDepositor)]
    fn is_reward_depositor(&self, depositor: ManagedAddress) -> bool {
        self.reward_depositors().contains(&depositor)
    }
}
