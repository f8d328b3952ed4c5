use soroban_sdk::{log, panic_with_error, Address, Env};
use stakeflow::{
    ttl::{PERSISTENT_RENEWAL_THRESHOLD, PERSISTENT_TARGET_TTL},
    Role,
};

use crate::{error::TokenError, storage_types::DataKey};

pub fn has_role(e: &Env, role: Role, account: &Address) -> bool {
    let key = DataKey::Role(role, account.clone());
    let granted = e.storage().persistent().get(&key).unwrap_or(false);
    if granted {
        e.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        );
    }

    granted
}

pub fn write_role(e: &Env, role: Role, account: &Address, granted: bool) {
    let key = DataKey::Role(role, account.clone());
    if granted {
        e.storage().persistent().set(&key, &true);
        e.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        );
    } else {
        e.storage().persistent().remove(&key);
    }
}

/// Capability check consulted before any privileged operation runs.
pub fn is_authorized(e: &Env, caller: &Address, role: Role) -> bool {
    has_role(e, role, caller)
}

/// Authenticates `caller` and makes sure it holds `role`.
pub fn require_role(e: &Env, caller: &Address, role: Role) {
    caller.require_auth();

    if !is_authorized(e, caller, role) {
        log!(e, "Token: caller {} does not hold role {}", caller, role as u32);
        panic_with_error!(e, TokenError::Unauthorized);
    }
}
