// Ledger closes roughly every 5 seconds
pub const DAY_IN_LEDGERS: u32 = 17280;

// Instance entries (config, totals, accumulator) are bumped back to a week
// whenever fewer than six days remain.
pub const INSTANCE_TARGET_TTL: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_RENEWAL_THRESHOLD: u32 = INSTANCE_TARGET_TTL - DAY_IN_LEDGERS;

// Per-account entries (balances, roles, staker checkpoints) live for 30 days
// and are renewed once they drop under 29 days.
pub const PERSISTENT_TARGET_TTL: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_RENEWAL_THRESHOLD: u32 = PERSISTENT_TARGET_TTL - DAY_IN_LEDGERS;
