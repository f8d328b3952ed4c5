use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error,
    token::{self, TokenInterface as _},
    Address, Env, String,
};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};
use stakeflow::{
    is_null_address,
    ttl::{INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL},
    Role,
};

use crate::{
    access::{self, require_role, write_role},
    allowance::{read_allowance, spend_allowance, write_allowance},
    balance::{
        decrease_total_supply, increase_total_supply, read_balance, read_total_supply,
        receive_balance, spend_balance, write_total_supply,
    },
    error::TokenError,
    metadata::{read_decimal, read_name, read_symbol, write_metadata},
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Stakeflow fungible asset with role-gated minting"
);

const MAX_DECIMALS: u32 = 18;

fn check_positive_amount(e: &Env, amount: i128) {
    if amount <= 0 {
        log!(e, "Token: amount must be greater than zero, got {}", amount);
        panic_with_error!(e, TokenError::InvalidAmount);
    }
}

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        log!(e, "Token: amount can not be negative, got {}", amount);
        panic_with_error!(e, TokenError::InvalidAmount);
    }
}

fn check_not_null(e: &Env, address: &Address) {
    if is_null_address(e, address) {
        log!(e, "Token: the null address can not send or receive tokens");
        panic_with_error!(e, TokenError::InvalidAddress);
    }
}

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

#[contract]
pub struct Token;

#[contractimpl]
impl Token {
    pub fn __constructor(
        e: Env,
        admin: Address,
        minter: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) {
        if decimal > MAX_DECIMALS {
            log!(
                &e,
                "Token: Initialize: decimals must not be greater than {}",
                MAX_DECIMALS
            );
            panic_with_error!(&e, TokenError::InvalidDecimals);
        }
        check_not_null(&e, &admin);
        check_not_null(&e, &minter);

        write_role(&e, Role::Admin, &admin, true);
        write_role(&e, Role::Minter, &minter, true);
        write_total_supply(&e, 0);
        write_metadata(
            &e,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );

        e.events().publish(("initialize", "admin"), &admin);
        e.events().publish(("initialize", "minter"), &minter);
    }

    pub fn mint(e: Env, minter: Address, to: Address, amount: i128) {
        require_role(&e, &minter, Role::Minter);
        check_positive_amount(&e, amount);
        check_not_null(&e, &to);

        bump_instance(&e);

        receive_balance(&e, &to, amount);
        increase_total_supply(&e, amount);
        TokenUtils::new(&e).events().mint(minter, to, amount);
    }

    pub fn grant_role(e: Env, admin: Address, role: Role, account: Address) {
        require_role(&e, &admin, Role::Admin);
        check_not_null(&e, &account);

        write_role(&e, role, &account, true);
        e.events().publish(("grant_role", role), account);
    }

    pub fn revoke_role(e: Env, admin: Address, role: Role, account: Address) {
        require_role(&e, &admin, Role::Admin);

        write_role(&e, role, &account, false);
        e.events().publish(("revoke_role", role), account);
    }

    pub fn has_role(e: Env, role: Role, account: Address) -> bool {
        access::has_role(&e, role, &account)
    }

    pub fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }
}

#[contractimpl]
impl token::TokenInterface for Token {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&e);
        read_allowance(&e, &from, &spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);
        check_not_null(&e, &from);
        check_not_null(&e, &spender);

        bump_instance(&e);

        write_allowance(&e, &from, &spender, amount, expiration_ledger);
        TokenUtils::new(&e)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        bump_instance(&e);
        read_balance(&e, &id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        check_positive_amount(&e, amount);
        check_not_null(&e, &from);
        check_not_null(&e, &to);

        bump_instance(&e);

        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        check_positive_amount(&e, amount);
        check_not_null(&e, &from);
        check_not_null(&e, &to);

        bump_instance(&e);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_positive_amount(&e, amount);
        check_not_null(&e, &from);

        bump_instance(&e);

        spend_balance(&e, &from, amount);
        decrease_total_supply(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        check_positive_amount(&e, amount);
        check_not_null(&e, &from);

        bump_instance(&e);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        decrease_total_supply(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }
}
