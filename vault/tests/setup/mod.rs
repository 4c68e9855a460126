use crate::constants::*;

use common_proxies::{proxy_vault, proxy_yield};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, OptionalValue, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(VAULT_PATH, vault::ContractBuilder);
    blockchain.register_contract(YIELD_MOCK_PATH, yield_mock::ContractBuilder);

    blockchain
}

/// Whole tokens to raw units.
pub fn units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(BASE_DECIMALS as u32)
}

/// Whole tokens to a raw scaled amount at index 1 (RAY precision).
pub fn scaled_units(amount: u64) -> BigUint<StaticApi> {
    units(amount) * BigUint::from(RAY)
}

pub fn error_text(error_message: &[u8]) -> &str {
    core::str::from_utf8(error_message).unwrap()
}

pub struct VaultTestState {
    pub world: ScenarioWorld,
    pub vault_sc: ManagedAddress<StaticApi>,
    pub yield_sc: ManagedAddress<StaticApi>,
}

impl VaultTestState {
    /// Deployed, seeded with `SEED_AMOUNT` by the owner and with one active pod manager.
    pub fn new() -> Self {
        let mut state = Self::deployed();
        state.initialize(&units(SEED_AMOUNT));
        state.add_pod_manager(&POD_MANAGER_ADDRESS);
        state
    }

    /// Deployed but not initialized.
    pub fn deployed() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let yield_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_yield::YieldMockProxy)
            .init(EgldOrEsdtTokenIdentifier::esdt(BASE_TOKEN.to_token_identifier()))
            .code(YIELD_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let vault_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_vault::VaultProxy)
            .init(
                EgldOrEsdtTokenIdentifier::esdt(BASE_TOKEN.to_token_identifier()),
                BASE_DECIMALS,
                yield_sc.clone(),
                BigUint::from(RESERVE_RATIO),
                BigUint::from(BUFFER_RATIO),
            )
            .code(VAULT_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            vault_sc,
            yield_sc,
        }
    }

    pub fn initialize(&mut self, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .initialize_vault()
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, amount)
            .run();
    }

    pub fn initialize_error(&mut self, amount: &BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .initialize_vault()
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, amount)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    // Ledger

    pub fn deposit(
        &mut self,
        from: &TestAddress,
        amount: &BigUint<StaticApi>,
        receiver: OptionalValue<ManagedAddress<StaticApi>>,
    ) -> BigUint<StaticApi> {
        let scaled = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .deposit(receiver)
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, amount)
            .returns(ReturnsResult)
            .run();

        scaled.into_raw_units().clone()
    }

    pub fn deposit_error(
        &mut self,
        from: &TestAddress,
        token: &EgldOrEsdtTokenIdentifier<StaticApi>,
        amount: &BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .deposit(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .egld_or_single_esdt(token, 0, amount)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn withdraw(
        &mut self,
        from: &TestAddress,
        amount: OptionalValue<BigUint<StaticApi>>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .withdraw(amount, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_error(
        &mut self,
        from: &TestAddress,
        amount: OptionalValue<BigUint<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .withdraw(amount, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    // Yield and reserve

    /// Funds yield the vault can claim on its next touch.
    pub fn add_vault_yield(&mut self, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.yield_sc)
            .typed(proxy_yield::YieldMockProxy)
            .set_pending_rewards(self.vault_sc.clone(), 0u64)
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, amount)
            .run();
    }

    pub fn update_yield(&mut self) {
        self.world
            .tx()
            .from(DEPOSITOR_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .update_yield()
            .run();
    }

    pub fn deposit_to_reserve(&mut self, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .deposit_to_reserve()
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, amount)
            .run();
    }

    pub fn withdraw_from_reserve(&mut self, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .withdraw_from_reserve(amount, OWNER_ADDRESS.to_managed_address())
            .run();
    }

    pub fn withdraw_from_reserve_error(&mut self, amount: &BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .withdraw_from_reserve(amount, OWNER_ADDRESS.to_managed_address())
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    // Rent side

    pub fn rent(&mut self, from: &TestAddress, amount: &BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .rent_asset(amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn rent_error(&mut self, from: &TestAddress, amount: &BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .rent_asset(amount)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn notify(&mut self, from: &TestAddress, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .notify_rented_amount(amount)
            .run();
    }

    pub fn notify_error(&mut self, from: &TestAddress, amount: &BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .notify_rented_amount(amount)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn pull(&mut self, from: &TestAddress, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .pull_rented_asset()
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, amount)
            .run();
    }

    pub fn pull_error(&mut self, from: &TestAddress, amount: &BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .pull_rented_asset()
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, amount)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    // Configuration

    pub fn add_pod_manager(&mut self, manager: &TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .add_pod_manager(manager.to_managed_address())
            .run();
    }

    pub fn block_pod_manager(&mut self, manager: &TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .block_pod_manager(manager.to_managed_address())
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .pause_endpoint()
            .run();
    }

    // Views

    pub fn total_assets(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .total_assets()
            .returns(ReturnsResult)
            .run()
    }

    /// Raw RAY units.
    pub fn current_index(&mut self) -> BigUint<StaticApi> {
        let index = self
            .world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .get_current_index()
            .returns(ReturnsResult)
            .run();

        index.into_raw_units().clone()
    }

    /// Raw RAY units.
    pub fn scaled_balance(&mut self, holder: &TestAddress) -> BigUint<StaticApi> {
        let scaled = self
            .world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .scaled_balance_of(holder.to_managed_address())
            .returns(ReturnsResult)
            .run();

        scaled.into_raw_units().clone()
    }

    pub fn balance_of(&mut self, holder: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .balance_of(holder.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn available_for_rent(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .available_for_rent()
            .returns(ReturnsResult)
            .run()
    }

    pub fn reserve(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .reserve()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_rented(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .total_rented()
            .returns(ReturnsResult)
            .run()
    }

    pub fn manager_rented(&mut self, manager: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .manager_rented(manager.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    /// Raw WAD units.
    pub fn utilization(&mut self) -> BigUint<StaticApi> {
        let utilization = self
            .world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .utilization()
            .returns(ReturnsResult)
            .run();

        utilization.into_raw_units().clone()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, units(100_000))
        .esdt_balance(OTHER_TOKEN, units(100_000));

    world
        .account(DEPOSITOR_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, units(10_000))
        .esdt_balance(OTHER_TOKEN, units(10_000));

    world
        .account(SECOND_DEPOSITOR_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, units(10_000));

    world
        .account(POD_MANAGER_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, units(10));
}
