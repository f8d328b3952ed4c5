use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env,
};
use stakeflow::{is_null_address, Role};

use crate::{
    error::ContractError,
    msg::{ConfigResponse, RewardStateResponse, StakerResponse},
    reward_token::MintClient,
    rewards::{pending_reward, update_reward, update_reward_per_token},
    storage::{
        decrease_total_staked, get_config, get_reward_state, get_staker_info, get_total_staked,
        increase_total_staked, init_total_staked, is_authorized, save_config, save_reward_state,
        save_staker_info, Config, RewardFunding, RewardState, StakerInfo,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Stakeflow time-weighted staking rewards"
);

#[contract]
pub struct Staking;

pub trait StakingTrait {
    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    /// Settles the account's pending reward and pays it out. Returns the amount paid,
    /// zero when there was nothing to pay.
    fn update_rewards(env: Env, account: Address) -> Result<i128, ContractError>;

    /// Amount `update_rewards` would pay right now, without writing anything.
    fn check_reward_amount(env: Env, account: Address) -> Result<i128, ContractError>;

    fn claim(env: Env, sender: Address) -> Result<i128, ContractError>;

    fn update_reward_rate(env: Env, sender: Address, reward_rate: i128)
        -> Result<(), ContractError>;

    fn withdraw_excess_tokens(
        env: Env,
        sender: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError>;

    fn withdraw_excess_native(env: Env, sender: Address, amount: i128)
        -> Result<(), ContractError>;

    // QUERIES

    fn query_config(env: Env) -> Result<ConfigResponse, ContractError>;

    fn query_admin(env: Env) -> Result<Address, ContractError>;

    fn query_staked(env: Env, address: Address) -> Result<i128, ContractError>;

    fn query_total_staked(env: Env) -> Result<i128, ContractError>;

    fn query_reward_rate(env: Env) -> Result<i128, ContractError>;

    fn query_reward_state(env: Env) -> Result<RewardStateResponse, ContractError>;

    fn query_staker_info(env: Env, address: Address) -> Result<StakerResponse, ContractError>;
}

#[contractimpl]
impl StakingTrait for Staking {
    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        check_positive_amount(&env, amount)?;
        check_not_null(&env, &sender)?;

        let config = get_config(&env);

        let mut staker = update_reward(&env, &sender)?;
        staker.staked = staker
            .staked
            .checked_add(amount)
            .ok_or(ContractError::ContractMathError)?;
        save_staker_info(&env, &sender, &staker);
        increase_total_staked(&env, amount)?;

        token::Client::new(&env, &config.stake_token).transfer(
            &sender,
            &env.current_contract_address(),
            &amount,
        );

        env.events().publish(("stake", "user"), &sender);
        env.events().publish(("stake", "amount"), amount);

        Ok(())
    }

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        check_positive_amount(&env, amount)?;

        let staked = get_staker_info(&env, &sender).staked;
        if staked < amount {
            log!(
                &env,
                "Staking: Withdraw: trying to withdraw {} with only {} staked",
                amount,
                staked
            );
            return Err(ContractError::InsufficientStake);
        }

        let config = get_config(&env);

        let mut staker = update_reward(&env, &sender)?;
        staker.staked -= amount;
        save_staker_info(&env, &sender, &staker);
        decrease_total_staked(&env, amount)?;

        token::Client::new(&env, &config.stake_token).transfer(
            &env.current_contract_address(),
            &sender,
            &amount,
        );

        env.events().publish(("withdraw", "user"), &sender);
        env.events().publish(("withdraw", "amount"), amount);

        Ok(())
    }

    fn update_rewards(env: Env, account: Address) -> Result<i128, ContractError> {
        if is_null_address(&env, &account) {
            update_reward_per_token(&env)?;
            return Ok(0);
        }

        let staker = update_reward(&env, &account)?;
        if staker.rewards == 0 {
            return Ok(0);
        }

        pay_reward(&env, &account, staker)
    }

    fn check_reward_amount(env: Env, account: Address) -> Result<i128, ContractError> {
        pending_reward(&env, &account)
    }

    fn claim(env: Env, sender: Address) -> Result<i128, ContractError> {
        sender.require_auth();

        let staker = update_reward(&env, &sender)?;
        if staker.rewards == 0 {
            log!(&env, "Staking: Claim: no rewards to claim");
            return Err(ContractError::NothingToClaim);
        }

        pay_reward(&env, &sender, staker)
    }

    fn update_reward_rate(
        env: Env,
        sender: Address,
        reward_rate: i128,
    ) -> Result<(), ContractError> {
        sender.require_auth();

        if !is_authorized(&env, &sender, Role::Admin) {
            log!(&env, "Staking: Update reward rate: you are not authorized!");
            return Err(ContractError::Unauthorized);
        }
        check_reward_rate(&env, reward_rate)?;

        // accrue everything up to now at the old rate
        let mut state = update_reward_per_token(&env)?;
        state.reward_rate = reward_rate;
        save_reward_state(&env, &state);

        env.events()
            .publish(("update_reward_rate", "reward_rate"), reward_rate);

        Ok(())
    }

    fn withdraw_excess_tokens(
        env: Env,
        sender: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        sender.require_auth();

        withdraw_excess(&env, &sender, &token, amount)
    }

    fn withdraw_excess_native(
        env: Env,
        sender: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        sender.require_auth();

        let native_token = get_config(&env).native_token;
        withdraw_excess(&env, &sender, &native_token, amount)
    }

    // QUERIES

    fn query_config(env: Env) -> Result<ConfigResponse, ContractError> {
        Ok(ConfigResponse {
            config: get_config(&env),
        })
    }

    fn query_admin(env: Env) -> Result<Address, ContractError> {
        Ok(get_config(&env).admin)
    }

    fn query_staked(env: Env, address: Address) -> Result<i128, ContractError> {
        Ok(get_staker_info(&env, &address).staked)
    }

    fn query_total_staked(env: Env) -> Result<i128, ContractError> {
        Ok(get_total_staked(&env))
    }

    fn query_reward_rate(env: Env) -> Result<i128, ContractError> {
        Ok(get_reward_state(&env).reward_rate)
    }

    fn query_reward_state(env: Env) -> Result<RewardStateResponse, ContractError> {
        Ok(RewardStateResponse {
            state: get_reward_state(&env),
            total_staked: get_total_staked(&env),
        })
    }

    fn query_staker_info(env: Env, address: Address) -> Result<StakerResponse, ContractError> {
        let StakerInfo {
            staked,
            reward_per_token_paid,
            rewards,
        } = get_staker_info(&env, &address);

        Ok(StakerResponse {
            staked,
            rewards,
            reward_per_token_paid,
            pending_reward: pending_reward(&env, &address)?,
        })
    }
}

#[contractimpl]
impl Staking {
    pub fn __constructor(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        native_token: Address,
        reward_rate: i128,
        funding: RewardFunding,
    ) {
        if let Err(err) = check_reward_rate(&env, reward_rate) {
            panic_with_error!(&env, err);
        }
        if stake_token == reward_token {
            log!(
                &env,
                "Staking: Initialize: stake and reward token must be different"
            );
            panic_with_error!(&env, ContractError::SameTokens);
        }
        for address in [&admin, &stake_token, &reward_token, &native_token] {
            if let Err(err) = check_not_null(&env, address) {
                panic_with_error!(&env, err);
            }
        }

        save_config(
            &env,
            &Config {
                admin: admin.clone(),
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
                native_token,
                funding,
            },
        );
        init_total_staked(&env);
        save_reward_state(
            &env,
            &RewardState {
                reward_rate,
                reward_per_token_stored: 0,
                last_update_time: env.ledger().timestamp(),
            },
        );

        env.events().publish(("initialize", "admin"), &admin);
        env.events().publish(("initialize", "stake_token"), &stake_token);
        env.events()
            .publish(("initialize", "reward_token"), &reward_token);
    }
}

fn check_positive_amount(env: &Env, amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        log!(env, "Staking: amount must be greater than zero, got {}", amount);
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

fn check_not_null(env: &Env, address: &Address) -> Result<(), ContractError> {
    if is_null_address(env, address) {
        log!(env, "Staking: the null address is not allowed");
        return Err(ContractError::InvalidAddress);
    }
    Ok(())
}

fn check_reward_rate(env: &Env, reward_rate: i128) -> Result<(), ContractError> {
    if reward_rate < 0 {
        log!(env, "Staking: reward rate can not be negative, got {}", reward_rate);
        return Err(ContractError::InvalidRewardRate);
    }
    Ok(())
}

// Zeroes the settled reward of `account` and pays it through the configured
// funding path. `staker` must already be checkpointed.
fn pay_reward(
    env: &Env,
    account: &Address,
    mut staker: StakerInfo,
) -> Result<i128, ContractError> {
    let config = get_config(env);
    let reward = staker.rewards;

    let contract = env.current_contract_address();
    let reward_token = token::Client::new(env, &config.reward_token);
    if config.funding == RewardFunding::Prefunded {
        let available = reward_token.balance(&contract);
        if available < reward {
            log!(
                env,
                "Staking: Claim: reward of {} exceeds the {} held by the pool",
                reward,
                available
            );
            return Err(ContractError::InsufficientRewardFunds);
        }
    }

    staker.rewards = 0;
    save_staker_info(env, account, &staker);

    match config.funding {
        RewardFunding::Prefunded => reward_token.transfer(&contract, account, &reward),
        RewardFunding::Minted => {
            MintClient::new(env, &config.reward_token).mint(&contract, account, &reward)
        }
    }

    env.events().publish(("claim", "user"), account);
    env.events().publish(("claim", "amount"), reward);

    Ok(reward)
}

// Sends `amount` of a stray asset held by the pool to the admin. Staked
// principal is never part of the excess.
fn withdraw_excess(
    env: &Env,
    sender: &Address,
    token: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if !is_authorized(env, sender, Role::Admin) {
        log!(env, "Staking: Withdraw excess: you are not authorized!");
        return Err(ContractError::Unauthorized);
    }
    check_positive_amount(env, amount)?;

    let config = get_config(env);
    let token_client = token::Client::new(env, token);
    let contract = env.current_contract_address();

    let mut excess = token_client.balance(&contract);
    if *token == config.stake_token {
        excess -= get_total_staked(env);
    }
    if excess < amount {
        log!(
            env,
            "Staking: Withdraw excess: requested {} but only {} is recoverable",
            amount,
            excess
        );
        return Err(ContractError::InsufficientBalance);
    }

    token_client.transfer(&contract, &config.admin, &amount);

    env.events().publish(("withdraw_excess", "token"), token);
    env.events().publish(("withdraw_excess", "amount"), amount);

    Ok(())
}
