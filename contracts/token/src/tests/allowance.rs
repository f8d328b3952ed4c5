use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};
use stakeflow::null_address;

use super::setup::{deploy_token_contract, ONE};
use crate::error::TokenError;

#[test]
fn transfer_from_spends_allowance() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let minter = Address::generate(&env);
    let user = Address::generate(&env);
    let spender = Address::generate(&env);
    let token = deploy_token_contract(&env, &owner, &minter);

    token.mint(&minter, &user, &(100 * ONE));
    token.approve(&user, &spender, &(60 * ONE), &200);
    assert_eq!(token.allowance(&user, &spender), 60 * ONE);

    token.transfer_from(&spender, &user, &owner, &(40 * ONE));

    assert_eq!(token.allowance(&user, &spender), 20 * ONE);
    assert_eq!(token.balance(&user), 60 * ONE);
    assert_eq!(token.balance(&owner), 40 * ONE);

    assert_eq!(
        token.try_transfer_from(&spender, &user, &owner, &(21 * ONE)),
        Err(Ok(TokenError::InsufficientAllowance.into()))
    );
}

#[test]
fn transfer_from_with_zero_amount_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let minter = Address::generate(&env);
    let user = Address::generate(&env);
    let token = deploy_token_contract(&env, &owner, &minter);

    assert_eq!(
        token.try_transfer_from(&user, &user, &owner, &0),
        Err(Ok(TokenError::InvalidAmount.into()))
    );
}

#[test]
fn transfer_from_null_address_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let minter = Address::generate(&env);
    let token = deploy_token_contract(&env, &owner, &minter);

    assert_eq!(
        token.try_transfer_from(&owner, &null_address(&env), &owner, &(100 * ONE)),
        Err(Ok(TokenError::InvalidAddress.into()))
    );
}

#[test]
fn approve_with_past_expiration_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let minter = Address::generate(&env);
    let spender = Address::generate(&env);
    let token = deploy_token_contract(&env, &owner, &minter);

    env.ledger().with_mut(|li| {
        li.sequence_number = 100;
    });
    assert_eq!(
        token.try_approve(&owner, &spender, &ONE, &99),
        Err(Ok(TokenError::InvalidExpiration.into()))
    );
    // clearing an allowance is allowed regardless of the expiration
    token.approve(&owner, &spender, &0, &0);
    assert_eq!(token.allowance(&owner, &spender), 0);
}

#[test]
fn burn_from_spends_allowance_and_supply() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let minter = Address::generate(&env);
    let user = Address::generate(&env);
    let spender = Address::generate(&env);
    let token = deploy_token_contract(&env, &owner, &minter);

    token.mint(&minter, &user, &(10 * ONE));
    token.approve(&user, &spender, &(3 * ONE), &1_000);
    token.burn_from(&spender, &user, &(3 * ONE));

    assert_eq!(token.balance(&user), 7 * ONE);
    assert_eq!(token.total_supply(), 7 * ONE);
    assert_eq!(token.allowance(&user, &spender), 0);
}
