use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address};
use stakeflow::null_address;
use test_case::test_case;

use super::setup::{setup_pool, ONE, REWARD_RATE};
use crate::{error::ContractError, storage::RewardFunding};

#[test]
fn stake_moves_tokens_into_the_pool() {
    let pool = setup_pool(RewardFunding::Minted);
    let user = pool.staker(10 * ONE);

    pool.staking.stake(&user, &(10 * ONE));

    assert_eq!(pool.staking.query_staked(&user), 10 * ONE);
    assert_eq!(pool.staking.query_total_staked(), 10 * ONE);
    assert_eq!(pool.stake_token.balance(&user), 0);
    assert_eq!(pool.stake_token.balance(&pool.staking.address), 10 * ONE);
}

#[test]
fn withdraw_returns_tokens_and_keeps_settled_rewards() {
    let pool = setup_pool(RewardFunding::Minted);
    let user = pool.staker(10 * ONE);

    pool.staking.stake(&user, &(10 * ONE));
    pool.advance(100);
    pool.staking.withdraw(&user, &(5 * ONE));

    let info = pool.staking.query_staker_info(&user);
    assert_eq!(info.staked, 5 * ONE);
    assert_eq!(info.rewards, REWARD_RATE * 100);
    assert_eq!(pool.staking.query_total_staked(), 5 * ONE);
    assert_eq!(pool.stake_token.balance(&user), 5 * ONE);

    // sole staker keeps receiving the whole rate on the smaller balance
    pool.advance(100);
    assert_eq!(pool.staking.check_reward_amount(&user), REWARD_RATE * 200);
}

#[test]
fn full_withdraw_stops_accrual() {
    let pool = setup_pool(RewardFunding::Minted);
    let user = pool.staker(10 * ONE);

    pool.staking.stake(&user, &(10 * ONE));
    pool.advance(50);
    pool.staking.withdraw(&user, &(10 * ONE));
    pool.advance(1_000);

    assert_eq!(pool.staking.check_reward_amount(&user), REWARD_RATE * 50);
    assert_eq!(pool.staking.query_total_staked(), 0);
}

#[test_case(0 ; "zero")]
#[test_case(-ONE ; "negative")]
fn stake_with_non_positive_amount_fails(amount: i128) {
    let pool = setup_pool(RewardFunding::Minted);
    let user = pool.staker(10 * ONE);

    assert_eq!(
        pool.staking.try_stake(&user, &amount),
        Err(Ok(ContractError::InvalidAmount))
    );
    assert_eq!(pool.staking.query_total_staked(), 0);
}

#[test_case(0 ; "zero")]
#[test_case(-ONE ; "negative")]
fn withdraw_with_non_positive_amount_fails(amount: i128) {
    let pool = setup_pool(RewardFunding::Minted);
    let user = pool.staker(10 * ONE);
    pool.staking.stake(&user, &(10 * ONE));

    assert_eq!(
        pool.staking.try_withdraw(&user, &amount),
        Err(Ok(ContractError::InvalidAmount))
    );
    assert_eq!(pool.staking.query_staked(&user), 10 * ONE);
}

#[test]
fn withdraw_more_than_staked_fails() {
    let pool = setup_pool(RewardFunding::Minted);
    let user = pool.staker(10 * ONE);
    let stranger = Address::generate(&pool.env);
    pool.staking.stake(&user, &(10 * ONE));

    assert_eq!(
        pool.staking.try_withdraw(&user, &(10 * ONE + 1)),
        Err(Ok(ContractError::InsufficientStake))
    );
    assert_eq!(
        pool.staking.try_withdraw(&stranger, &1),
        Err(Ok(ContractError::InsufficientStake))
    );
    assert_eq!(pool.staking.query_staked(&user), 10 * ONE);
    assert_eq!(pool.stake_token.balance(&pool.staking.address), 10 * ONE);
}

#[test]
#[should_panic(expected = "Error(Contract, #302)")]
fn stake_without_enough_tokens_fails() {
    let pool = setup_pool(RewardFunding::Minted);
    let user = pool.staker(ONE);

    pool.staking.stake(&user, &(2 * ONE));
}

#[test]
fn stake_from_null_address_fails() {
    let pool = setup_pool(RewardFunding::Minted);

    assert_eq!(
        pool.staking.try_stake(&null_address(&pool.env), &ONE),
        Err(Ok(ContractError::InvalidAddress))
    );
}

#[test]
fn total_staked_matches_sum_of_stakes() {
    let pool = setup_pool(RewardFunding::Minted);
    let alice = pool.staker(100 * ONE);
    let bob = pool.staker(100 * ONE);
    let carol = pool.staker(100 * ONE);

    pool.staking.stake(&alice, &(30 * ONE));
    pool.staking.stake(&bob, &(50 * ONE));
    pool.advance(10);
    pool.staking.withdraw(&alice, &(10 * ONE));
    pool.staking.stake(&carol, &(7 * ONE));
    pool.advance(10);
    pool.staking.withdraw(&bob, &(50 * ONE));
    pool.staking.stake(&alice, &(ONE + 1));

    let sum: i128 = [&alice, &bob, &carol]
        .into_iter()
        .map(|staker| pool.staking.query_staked(staker))
        .sum();
    assert_eq!(sum, 28 * ONE + 1);
    assert_eq!(pool.staking.query_total_staked(), sum);
    assert_eq!(pool.stake_token.balance(&pool.staking.address), sum);
}
