use soroban_sdk::{Address, Env, String};

/// Strkey of the all-zero ed25519 account. Nobody holds its secret key, so it
/// plays the part of the "zero address" that transfers must never touch.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

pub fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == null_address(env)
}
