use soroban_sdk::{log, panic_with_error, Address, Env};
use stakeflow::ttl::{
    INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL, PERSISTENT_RENEWAL_THRESHOLD,
    PERSISTENT_TARGET_TTL,
};

use crate::{error::TokenError, storage_types::DataKey};

pub fn read_balance(e: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            e.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_RENEWAL_THRESHOLD,
                PERSISTENT_TARGET_TTL,
            );
            balance
        }
        None => 0,
    }
}

fn write_balance(e: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}

fn checked(e: &Env, value: Option<i128>) -> i128 {
    value.unwrap_or_else(|| {
        log!(e, "Token: balance or supply out of range");
        panic_with_error!(e, TokenError::MathOverflow)
    })
}

pub fn receive_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    write_balance(e, addr, checked(e, balance.checked_add(amount)));
}

pub fn spend_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    if balance < amount {
        log!(
            e,
            "Token: Spend balance: balance {} of {} is lower than the requested {}",
            balance,
            addr,
            amount
        );
        panic_with_error!(e, TokenError::InsufficientBalance);
    }
    write_balance(e, addr, balance - amount);
}

pub fn read_total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::TotalSupply, &amount);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

pub fn increase_total_supply(e: &Env, amount: i128) {
    let supply = read_total_supply(e);
    write_total_supply(e, checked(e, supply.checked_add(amount)));
}

pub fn decrease_total_supply(e: &Env, amount: i128) {
    let supply = read_total_supply(e);
    write_total_supply(e, checked(e, supply.checked_sub(amount)));
}
