use soroban_sdk::contracttype;

/// Capabilities checked at the top of every privileged entry point.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    /// Manages roles on a token and configuration on the staking pool.
    Admin = 0,
    /// Allowed to create new token supply.
    Minter = 1,
}
