#![no_std]
mod contract;
mod error;
mod msg;
mod rewards;
mod storage;

pub use crate::contract::{Staking, StakingClient};
pub use crate::error::ContractError;
pub use crate::storage::RewardFunding;

// The reward token is driven through the standard token interface, except for
// minting on claim which is specific to our token contract.
pub mod reward_token {
    use soroban_sdk::{contractclient, Address, Env};

    #[allow(dead_code)]
    #[contractclient(name = "MintClient")]
    pub trait MintInterface {
        fn mint(env: Env, minter: Address, to: Address, amount: i128);
    }
}
