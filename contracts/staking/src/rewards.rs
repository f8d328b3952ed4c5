use soroban_sdk::{Address, Env, U256};

use crate::{
    error::ContractError,
    storage::{
        get_reward_state, get_staker_info, get_total_staked, save_reward_state, save_staker_info,
        RewardState, StakerInfo,
    },
};

/// Fixed-point scale of the reward-per-token accumulator. Without it a large
/// total stake would round every per-second increment down to zero.
pub const REWARD_PRECISION: i128 = 1_000_000_000_000_000_000;

fn to_u256(env: &Env, value: i128) -> Result<U256, ContractError> {
    u128::try_from(value)
        .map(|value| U256::from_u128(env, value))
        .map_err(|_| ContractError::ContractMathError)
}

fn to_i128(value: U256) -> Result<i128, ContractError> {
    value
        .to_u128()
        .and_then(|value| i128::try_from(value).ok())
        .ok_or(ContractError::ContractMathError)
}

/// `a * b / denominator` with a 256-bit intermediate product.
fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, ContractError> {
    if denominator <= 0 {
        return Err(ContractError::ContractMathError);
    }
    let product = to_u256(env, a)?.mul(&to_u256(env, b)?);
    to_i128(product.div(&to_u256(env, denominator)?))
}

/// Value of the accumulator at `now`.
///
/// Nothing accrues while the pool is empty, and a timestamp that does not move
/// forward leaves the accumulator untouched.
pub fn reward_per_token(
    env: &Env,
    state: &RewardState,
    total_staked: i128,
    now: u64,
) -> Result<i128, ContractError> {
    let elapsed = now.saturating_sub(state.last_update_time);
    if total_staked == 0 || elapsed == 0 || state.reward_rate == 0 {
        return Ok(state.reward_per_token_stored);
    }

    let released = state
        .reward_rate
        .checked_mul(elapsed as i128)
        .ok_or(ContractError::ContractMathError)?;
    let increment = mul_div(env, released, REWARD_PRECISION, total_staked)?;

    state
        .reward_per_token_stored
        .checked_add(increment)
        .ok_or(ContractError::ContractMathError)
}

/// Reward owned by `staker` once settled against `reward_per_token`.
pub fn earned(
    env: &Env,
    staker: &StakerInfo,
    reward_per_token: i128,
) -> Result<i128, ContractError> {
    let unpaid = reward_per_token
        .checked_sub(staker.reward_per_token_paid)
        .filter(|unpaid| *unpaid >= 0)
        .ok_or(ContractError::ContractMathError)?;
    if unpaid == 0 || staker.staked == 0 {
        return Ok(staker.rewards);
    }

    let pending = mul_div(env, staker.staked, unpaid, REWARD_PRECISION)?;
    staker
        .rewards
        .checked_add(pending)
        .ok_or(ContractError::ContractMathError)
}

/// Moves the global accumulator up to the current ledger time.
///
/// Must run before anything changes the total stake, otherwise the elapsed
/// period would be credited at the new total.
pub fn update_reward_per_token(env: &Env) -> Result<RewardState, ContractError> {
    let mut state = get_reward_state(env);
    let now = env.ledger().timestamp();

    state.reward_per_token_stored = reward_per_token(env, &state, get_total_staked(env), now)?;
    state.last_update_time = state.last_update_time.max(now);
    save_reward_state(env, &state);

    Ok(state)
}

/// Checkpoints `account`: settles what it earned since its last checkpoint
/// against its balance *before* the current call changes it.
///
/// An account with neither stake nor settled reward is not written; its
/// checkpoint has no effect on what it earns.
pub fn update_reward(env: &Env, account: &Address) -> Result<StakerInfo, ContractError> {
    let state = update_reward_per_token(env)?;

    let mut staker = get_staker_info(env, account);
    staker.rewards = earned(env, &staker, state.reward_per_token_stored)?;
    staker.reward_per_token_paid = state.reward_per_token_stored;
    if staker.staked != 0 || staker.rewards != 0 {
        save_staker_info(env, account, &staker);
    }

    Ok(staker)
}

/// Read-only projection of `update_reward`: the `rewards` value the account
/// would have if it were checkpointed now.
pub fn pending_reward(env: &Env, account: &Address) -> Result<i128, ContractError> {
    let state = get_reward_state(env);
    let current = reward_per_token(
        env,
        &state,
        get_total_staked(env),
        env.ledger().timestamp(),
    )?;

    earned(env, &get_staker_info(env, account), current)
}
