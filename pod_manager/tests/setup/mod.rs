use crate::constants::*;

use common_proxies::{
    proxy_fee_module, proxy_market, proxy_oracle, proxy_pod_manager, proxy_staking, proxy_vault,
    proxy_yield,
};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, MultiValueEncoded,
    ReturnsNewManagedAddress, ReturnsResult,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, OptionalValue, TestAddress, TestTokenIdentifier},
    ScenarioTxRun, ScenarioWorld,
};
use pod_manager::{LiquidationEstimate, ManagerParams, PodRecord, RewardState};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POD_MANAGER_PATH, pod_manager::ContractBuilder);
    blockchain.register_contract(VAULT_PATH, vault::ContractBuilder);
    blockchain.register_contract(STAKING_PATH, staking::ContractBuilder);
    blockchain.register_contract(FEE_MODULE_PATH, fee_module::ContractBuilder);
    blockchain.register_contract(MARKET_MOCK_PATH, market_mock::ContractBuilder);
    blockchain.register_contract(ORACLE_MOCK_PATH, oracle_mock::ContractBuilder);
    blockchain.register_contract(YIELD_MOCK_PATH, yield_mock::ContractBuilder);

    blockchain
}

/// Whole tokens to raw units.
pub fn units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(DECIMALS as u32)
}

pub fn token_id(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn error_text(error_message: &[u8]) -> &str {
    core::str::from_utf8(error_message).unwrap()
}

pub struct PodManagerTestState {
    pub world: ScenarioWorld,
    pub pod_manager_sc: ManagedAddress<StaticApi>,
    pub vault_sc: ManagedAddress<StaticApi>,
    pub staking_sc: ManagedAddress<StaticApi>,
    pub fee_sc: ManagedAddress<StaticApi>,
    pub market_sc: ManagedAddress<StaticApi>,
    pub oracle_sc: ManagedAddress<StaticApi>,
    pub yield_sc: ManagedAddress<StaticApi>,
}

impl PodManagerTestState {
    /// Deploys every collaborator at timestamp 0, wires the pod manager into the vault and
    /// the staking contract, lists `COLLATERAL_TOKEN` and moves the clock to `START_TIMESTAMP`.
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let yield_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_yield::YieldMockProxy)
            .init(token_id(BASE_TOKEN))
            .code(YIELD_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let vault_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_vault::VaultProxy)
            .init(
                token_id(BASE_TOKEN),
                DECIMALS,
                yield_sc.clone(),
                BigUint::from(VAULT_RESERVE_RATIO),
                BigUint::from(VAULT_BUFFER_RATIO),
            )
            .code(VAULT_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&vault_sc)
            .typed(proxy_vault::VaultProxy)
            .initialize_vault()
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, &units(VAULT_SEED))
            .run();

        let fee_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_fee_module::FeeModuleProxy)
            .init(vault_sc.clone(), BigUint::from(BASE_FEE_PER_SECOND))
            .code(FEE_MODULE_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let market_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_market::MarketMockProxy)
            .init(token_id(DEBT_TOKEN))
            .code(MARKET_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&market_sc)
            .typed(proxy_market::MarketMockProxy)
            .supply_liquidity()
            .single_esdt(&DEBT_TOKEN.to_token_identifier(), 0, &units(MARKET_LIQUIDITY))
            .run();

        let oracle_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_oracle::OracleMockProxy)
            .init()
            .code(ORACLE_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let staking_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_staking::StakingProxy)
            .init(token_id(STAKE_TOKEN))
            .code(STAKING_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&staking_sc)
            .typed(proxy_staking::StakingProxy)
            .initialize_staking()
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &units(STAKING_SEED))
            .run();

        let pod_manager_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_pod_manager::PodManagerProxy)
            .init(
                vault_sc.clone(),
                staking_sc.clone(),
                fee_sc.clone(),
                market_sc.clone(),
                oracle_sc.clone(),
                yield_sc.clone(),
                TREASURY_ADDRESS.to_managed_address(),
                token_id(BASE_TOKEN),
                token_id(DEBT_TOKEN),
                DECIMALS,
                BigUint::from(MINT_FEE_RATIO),
                BigUint::from(PROTOCOL_FEE_RATIO),
                BigUint::from(EXTRA_LIQUIDATION_RATIO),
                units(PROCESS_THRESHOLD),
            )
            .code(POD_MANAGER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            pod_manager_sc,
            vault_sc,
            staking_sc,
            fee_sc,
            market_sc,
            oracle_sc,
            yield_sc,
        };

        state.wire_pod_manager();
        state.set_price(DEBT_TOKEN, DEBT_PRICE);
        state.set_price(COLLATERAL_TOKEN, COLLATERAL_PRICE);
        state.add_collateral(COLLATERAL_TOKEN);
        state.change_timestamp(START_TIMESTAMP);

        state
    }

    fn wire_pod_manager(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .add_pod_manager(self.pod_manager_sc.clone())
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::StakingProxy)
            .add_reward_depositor(self.pod_manager_sc.clone())
            .run();
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn set_price(&mut self, token: TestTokenIdentifier, price: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle_sc)
            .typed(proxy_oracle::OracleMockProxy)
            .set_asset_price(token_id(token), units(price))
            .run();
    }

    /// Funds base-asset yield the pod manager can claim for `pod_id`.
    pub fn add_pod_yield(&mut self, pod_id: u64, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.yield_sc)
            .typed(proxy_yield::YieldMockProxy)
            .set_pending_rewards(self.pod_manager_sc.clone(), pod_id)
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, amount)
            .run();
    }

    /// Market-side closing of a pod's debt, burning `burned_collateral`.
    pub fn clear_market_debt(&mut self, pod_id: u64, burned_collateral: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.market_sc)
            .typed(proxy_market::MarketMockProxy)
            .clear_debt(pod_id, burned_collateral)
            .run();
    }

    /// Pod owned by `BORROWER_ADDRESS` with `collateral` deposited and `debt` minted.
    pub fn open_pod(&mut self, collateral: u64, debt: u64) -> u64 {
        let pod_id = self.create_pod(&BORROWER_ADDRESS, COLLATERAL_TOKEN);
        self.deposit_collateral(&BORROWER_ADDRESS, pod_id, &units(collateral));
        if debt > 0 {
            self.mint_debt(&BORROWER_ADDRESS, pod_id, &units(debt));
        }
        pod_id
    }

    // Pods

    pub fn create_pod(&mut self, from: &TestAddress, collateral: TestTokenIdentifier) -> u64 {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .create_pod(token_id(collateral))
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_pod_error(
        &mut self,
        from: &TestAddress,
        collateral: TestTokenIdentifier,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .create_pod(token_id(collateral))
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn deposit_collateral(&mut self, from: &TestAddress, pod_id: u64, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .deposit_collateral(pod_id)
            .single_esdt(&COLLATERAL_TOKEN.to_token_identifier(), 0, amount)
            .run();
    }

    pub fn withdraw_collateral(&mut self, from: &TestAddress, pod_id: u64, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .withdraw_collateral(pod_id, amount, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .run();
    }

    pub fn withdraw_collateral_error(
        &mut self,
        from: &TestAddress,
        pod_id: u64,
        amount: &BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .withdraw_collateral(pod_id, amount, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn mint_debt(&mut self, from: &TestAddress, pod_id: u64, amount: &BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .mint_debt(pod_id, amount, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .returns(ReturnsResult)
            .run()
    }

    pub fn mint_debt_error(
        &mut self,
        from: &TestAddress,
        pod_id: u64,
        amount: &BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .mint_debt(pod_id, amount, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn repay_debt(&mut self, from: &TestAddress, pod_id: u64, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .repay_debt(pod_id)
            .single_esdt(&DEBT_TOKEN.to_token_identifier(), 0, amount)
            .run();
    }

    pub fn compound_pod(&mut self, from: &TestAddress, pod_id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .compound_pod(pod_id)
            .returns(ReturnsResult)
            .run()
    }

    // Rent

    pub fn get_rent(&mut self, from: &TestAddress, pod_id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .get_rent(pod_id, BigUint::<StaticApi>::zero())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_rent_error(&mut self, from: &TestAddress, pod_id: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .get_rent(pod_id, BigUint::<StaticApi>::zero())
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn free_rent(&mut self, from: &TestAddress, pod_id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .free_rent(pod_id)
            .returns(ReturnsResult)
            .run()
    }

    // Fees and reserve

    pub fn update_global_state(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_global_state()
            .run();
    }

    pub fn update_pod_state(&mut self, pod_id: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_pod_state(pod_id)
            .run();
    }

    pub fn pay_fee(&mut self, from: &TestAddress, pod_id: u64, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .pay_fee(pod_id)
            .single_esdt(&DEBT_TOKEN.to_token_identifier(), 0, amount)
            .run();
    }

    pub fn pay_fee_error(
        &mut self,
        from: &TestAddress,
        pod_id: u64,
        token: TestTokenIdentifier,
        amount: &BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .pay_fee(pod_id)
            .single_esdt(&token.to_token_identifier(), 0, amount)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn process_reserve(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .process_reserve()
            .run();
    }

    // Liquidation

    pub fn liquidate(&mut self, pod_id: u64, amount: &BigUint<StaticApi>) -> LiquidationEstimate<StaticApi> {
        self.world
            .tx()
            .from(LIQUIDATOR_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .liquidate_pod(pod_id)
            .single_esdt(&DEBT_TOKEN.to_token_identifier(), 0, amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidate_error(&mut self, pod_id: u64, amount: &BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(LIQUIDATOR_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .liquidate_pod(pod_id)
            .single_esdt(&DEBT_TOKEN.to_token_identifier(), 0, amount)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn liquidate_from_error(
        &mut self,
        from: &TestAddress,
        pod_id: u64,
        token: TestTokenIdentifier,
        amount: &BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .liquidate_pod(pod_id)
            .single_esdt(&token.to_token_identifier(), 0, amount)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    // Configuration

    pub fn add_collateral(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .add_collateral(token_id(token), DECIMALS)
            .run();
    }

    pub fn add_collateral_error(&mut self, token: TestTokenIdentifier, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .add_collateral(token_id(token), DECIMALS)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn update_collateral(&mut self, token: TestTokenIdentifier, allowed: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_collateral(token_id(token), allowed)
            .run();
    }

    pub fn update_collateral_error(&mut self, token: TestTokenIdentifier, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_collateral(token_id(token), true)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn update_mint_fee_ratio(&mut self, ratio: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_mint_fee_ratio(BigUint::from(ratio))
            .run();
    }

    pub fn update_mint_fee_ratio_error(&mut self, ratio: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_mint_fee_ratio(BigUint::from(ratio))
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn update_protocol_fee_ratio(&mut self, ratio: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_protocol_fee_ratio(BigUint::from(ratio))
            .run();
    }

    pub fn update_protocol_fee_ratio_error(&mut self, ratio: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_protocol_fee_ratio(BigUint::from(ratio))
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn update_extra_liquidation_ratio_error(&mut self, ratio: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_extra_liquidation_ratio(BigUint::from(ratio))
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn update_process_threshold(&mut self, threshold: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_process_threshold(threshold)
            .run();
    }

    pub fn update_process_threshold_error(&mut self, threshold: &BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_process_threshold(threshold)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    /// `ratio` in whole units of debt per unit of rent.
    pub fn update_discount_ratio(&mut self, ratio: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .update_discount_ratio(units(ratio))
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .pause_endpoint()
            .run();
    }

    // Views

    pub fn pod(&mut self, pod_id: u64) -> PodRecord<StaticApi> {
        self.world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .get_pod(pod_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn owner_pods(&mut self, owner: &TestAddress) -> MultiValueEncoded<StaticApi, u64> {
        self.world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .get_owner_pods(owner.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn all_pods(&mut self) -> MultiValueEncoded<StaticApi, PodRecord<StaticApi>> {
        self.world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .get_all_pods()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pod_id(&mut self, owner: &TestAddress, collateral: TestTokenIdentifier) -> u64 {
        self.world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .get_pod_id(owner.to_managed_address(), token_id(collateral))
            .returns(ReturnsResult)
            .run()
    }

    /// Runs as a transaction since the projection reads the fee module.
    pub fn current_owed_fees(&mut self, pod_id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .pod_current_owed_fees(pod_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn owed_fees(&mut self, pod_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .pod_owed_fees(pod_id)
            .returns(ReturnsResult)
            .run()
    }

    /// Raw WAD units, projected to the current block.
    pub fn current_index(&mut self) -> BigUint<StaticApi> {
        let index = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .get_current_index()
            .returns(ReturnsResult)
            .run();

        index.into_raw_units().clone()
    }

    /// Raw WAD units, as stored.
    pub fn last_updated_index(&mut self) -> BigUint<StaticApi> {
        let index = self
            .world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .last_updated_index()
            .returns(ReturnsResult)
            .run();

        index.into_raw_units().clone()
    }

    pub fn last_index_update(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .last_index_update()
            .returns(ReturnsResult)
            .run()
    }

    pub fn reserve(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .reserve()
            .returns(ReturnsResult)
            .run()
    }

    pub fn params(&mut self) -> ManagerParams<StaticApi> {
        self.world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .params()
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_liquidable(&mut self, pod_id: u64) -> bool {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .is_pod_liquidable(pod_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn estimate_liquidation(&mut self, pod_id: u64) -> LiquidationEstimate<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .estimate_pod_liquidation(pod_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn needed_rent(&mut self, debt: &BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pod_manager_sc)
            .typed(proxy_pod_manager::PodManagerProxy)
            .needed_rent_for_debt_view(debt)
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_debt(&mut self, pod_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market_sc)
            .typed(proxy_market::MarketMockProxy)
            .debt(pod_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_collateral(&mut self, pod_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market_sc)
            .typed(proxy_market::MarketMockProxy)
            .collateral(pod_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn vault_total_rented(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .total_rented()
            .returns(ReturnsResult)
            .run()
    }

    pub fn reward_state(&mut self) -> RewardState<StaticApi> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::StakingProxy)
            .get_reward_state(token_id(DEBT_TOKEN))
            .returns(ReturnsResult)
            .run()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, units(100_000))
        .esdt_balance(DEBT_TOKEN, units(MARKET_LIQUIDITY))
        .esdt_balance(STAKE_TOKEN, units(1_000));

    world
        .account(BORROWER_ADDRESS)
        .nonce(1)
        .esdt_balance(COLLATERAL_TOKEN, units(100))
        .esdt_balance(OTHER_COLLATERAL_TOKEN, units(100))
        .esdt_balance(DEBT_TOKEN, units(5_000));

    world
        .account(SECOND_BORROWER_ADDRESS)
        .nonce(1)
        .esdt_balance(COLLATERAL_TOKEN, units(100))
        .esdt_balance(DEBT_TOKEN, units(5_000));

    world
        .account(LIQUIDATOR_ADDRESS)
        .nonce(1)
        .esdt_balance(DEBT_TOKEN, units(10_000));

    world.account(TREASURY_ADDRESS).nonce(1);
}
