use soroban_sdk::{
    contracttype, log, panic_with_error, symbol_short, Address, ConversionError, Env, Symbol,
    TryFromVal, Val,
};
use stakeflow::{
    ttl::{
        INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL, PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    },
    Role,
};

use crate::error::ContractError;

/// Where the tokens paid out on claim come from.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RewardFunding {
    /// Claims are paid from the reward tokens already held by the pool and
    /// fail once that balance runs out.
    Prefunded = 0,
    /// Claims mint fresh reward tokens; the pool must be a minter on the
    /// reward token.
    Minted = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Only address allowed to change the reward rate and recover stray assets
    pub admin: Address,
    /// Token deposited by stakers
    pub stake_token: Address,
    /// Token distributed as reward
    pub reward_token: Address,
    /// Stellar Asset Contract of the native asset, recoverable by the admin
    pub native_token: Address,
    pub funding: RewardFunding,
}
const CONFIG: Symbol = symbol_short!("CONFIG");

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
    env.storage().instance().get(&CONFIG).unwrap_or_else(|| {
        log!(env, "Staking: Config not set");
        panic_with_error!(env, ContractError::ConfigNotSet)
    })
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&CONFIG, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

/// Only the configured admin holds `Role::Admin` on the pool; nobody mints here.
pub fn is_authorized(env: &Env, caller: &Address, role: Role) -> bool {
    match role {
        Role::Admin => get_config(env).admin == *caller,
        Role::Minter => false,
    }
}

/// Global state of the reward accumulator.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RewardState {
    /// Reward units released per second, shared by all stakers pro rata
    pub reward_rate: i128,
    /// Reward accrued per staked unit since inception, scaled by `REWARD_PRECISION`
    pub reward_per_token_stored: i128,
    /// Ledger timestamp of the last accumulator update
    pub last_update_time: u64,
}

/// Per-account checkpoint and balance.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakerInfo {
    /// Amount of stake tokens currently deposited
    pub staked: i128,
    /// Accumulator value at the account's last checkpoint
    pub reward_per_token_paid: i128,
    /// Reward settled at checkpoints and not yet claimed
    pub rewards: i128,
}

#[derive(Clone, Copy)]
#[repr(u32)]
pub enum DataKey {
    TotalStaked = 0,
    RewardState = 1,
}

impl TryFromVal<Env, DataKey> for Val {
    type Error = ConversionError;

    fn try_from_val(_env: &Env, v: &DataKey) -> Result<Self, Self::Error> {
        Ok((*v as u32).into())
    }
}

#[contracttype]
#[derive(Clone)]
pub enum StakerDataKey {
    Staker(Address),
}

pub fn get_reward_state(env: &Env) -> RewardState {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
    env.storage()
        .instance()
        .get(&DataKey::RewardState)
        .unwrap_or_default()
}

pub fn save_reward_state(env: &Env, state: &RewardState) {
    env.storage().instance().set(&DataKey::RewardState, state);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

pub fn get_total_staked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
    env.storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0)
}

fn save_total_staked(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalStaked, &amount);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

pub fn init_total_staked(env: &Env) {
    save_total_staked(env, 0);
}

pub fn increase_total_staked(env: &Env, amount: i128) -> Result<(), ContractError> {
    let total = get_total_staked(env)
        .checked_add(amount)
        .ok_or(ContractError::ContractMathError)?;
    save_total_staked(env, total);

    Ok(())
}

pub fn decrease_total_staked(env: &Env, amount: i128) -> Result<(), ContractError> {
    let total = get_total_staked(env)
        .checked_sub(amount)
        .filter(|total| *total >= 0)
        .ok_or(ContractError::ContractMathError)?;
    save_total_staked(env, total);

    Ok(())
}

pub fn get_staker_info(env: &Env, staker: &Address) -> StakerInfo {
    let key = StakerDataKey::Staker(staker.clone());
    let info = env.storage().persistent().get(&key).unwrap_or_default();
    env.storage().persistent().has(&key).then(|| {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        );
    });

    info
}

pub fn save_staker_info(env: &Env, staker: &Address, info: &StakerInfo) {
    let key = StakerDataKey::Staker(staker.clone());
    env.storage().persistent().set(&key, info);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}
