use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::{
    error::TokenError,
    storage_types::{AllowanceDataKey, AllowanceValue, DataKey},
};

pub fn read_allowance(e: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match e.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger < e.ledger().sequence() => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        Some(allowance) => allowance,
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let current_ledger = e.ledger().sequence();
    if amount > 0 && expiration_ledger < current_ledger {
        log!(
            e,
            "Token: Approve: expiration ledger {} is before the current ledger {}",
            expiration_ledger,
            current_ledger
        );
        panic_with_error!(e, TokenError::InvalidExpiration);
    }

    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    e.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - current_ledger;
        e.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

pub fn spend_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = read_allowance(e, from, spender);
    if allowance.amount < amount {
        log!(
            e,
            "Token: Spend allowance: {} allowed to spend {} but {} was requested",
            spender,
            allowance.amount,
            amount
        );
        panic_with_error!(e, TokenError::InsufficientAllowance);
    }
    write_allowance(
        e,
        from,
        spender,
        allowance.amount - amount,
        allowance.expiration_ledger,
    );
}
