#![no_std]

pub mod proxy_fee_module;
pub mod proxy_market;
pub mod proxy_oracle;
pub mod proxy_pod_manager;
pub mod proxy_staking;
pub mod proxy_vault;
pub mod proxy_yield;
