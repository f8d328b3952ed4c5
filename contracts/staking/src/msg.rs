use soroban_sdk::contracttype;

use crate::storage::{Config, RewardState};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardStateResponse {
    pub state: RewardState,
    pub total_staked: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerResponse {
    pub staked: i128,
    /// Reward settled at the last checkpoint
    pub rewards: i128,
    pub reward_per_token_paid: i128,
    /// What `rewards` would be if the account were checkpointed now
    pub pending_reward: i128,
}
