use crate::constants::*;

use common_proxies::{proxy_fee_module, proxy_vault, proxy_yield};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(FEE_MODULE_PATH, fee_module::ContractBuilder);
    blockchain.register_contract(VAULT_PATH, vault::ContractBuilder);
    blockchain.register_contract(YIELD_MOCK_PATH, yield_mock::ContractBuilder);

    blockchain
}

pub fn units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(BASE_DECIMALS as u32)
}

pub fn error_text(error_message: &[u8]) -> &str {
    core::str::from_utf8(error_message).unwrap()
}

pub struct FeeModuleTestState {
    pub world: ScenarioWorld,
    pub fee_sc: ManagedAddress<StaticApi>,
    pub vault_sc: ManagedAddress<StaticApi>,
}

impl FeeModuleTestState {
    /// Vault seeded with `SEED_AMOUNT`, one EOA pod manager and the fee module reading it.
    pub fn new() -> Self {
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
                yield_sc,
                BigUint::from(RESERVE_RATIO),
                BigUint::from(BUFFER_RATIO),
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
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, &units(SEED_AMOUNT))
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&vault_sc)
            .typed(proxy_vault::VaultProxy)
            .add_pod_manager(POD_MANAGER_ADDRESS.to_managed_address())
            .run();

        let fee_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_fee_module::FeeModuleProxy)
            .init(vault_sc.clone(), BigUint::from(BASE_FEE_PER_SECOND))
            .code(FEE_MODULE_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            fee_sc,
            vault_sc,
        }
    }

    pub fn rent(&mut self, amount: u64) {
        self.world
            .tx()
            .from(POD_MANAGER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .rent_asset(units(amount))
            .run();
    }

    pub fn update_fee_per_second(&mut self, new_fee: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.fee_sc)
            .typed(proxy_fee_module::FeeModuleProxy)
            .update_fee_per_second(new_fee)
            .run();
    }

    pub fn update_fee_per_second_error(
        &mut self,
        from: &TestAddress,
        new_fee: &BigUint<StaticApi>,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.fee_sc)
            .typed(proxy_fee_module::FeeModuleProxy)
            .update_fee_per_second(new_fee)
            .returns(ExpectMessage(error_message))
            .run();
    }

    /// Raw WAD units. Runs as a transaction since the view reads the vault.
    pub fn current_fee_per_second(&mut self) -> BigUint<StaticApi> {
        let fee = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.fee_sc)
            .typed(proxy_fee_module::FeeModuleProxy)
            .get_current_fee_per_second()
            .returns(ReturnsResult)
            .run();

        fee.into_raw_units().clone()
    }

    /// Raw WAD units.
    pub fn base_fee_per_second(&mut self) -> BigUint<StaticApi> {
        let fee = self
            .world
            .query()
            .to(&self.fee_sc)
            .typed(proxy_fee_module::FeeModuleProxy)
            .base_fee_per_second()
            .returns(ReturnsResult)
            .run();

        fee.into_raw_units().clone()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, units(100_000));

    world
        .account(POD_MANAGER_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, units(10));
}
