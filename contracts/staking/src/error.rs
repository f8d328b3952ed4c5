use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidAmount = 700,
    InvalidAddress = 701,
    InsufficientBalance = 702,
    InsufficientStake = 703,
    Unauthorized = 704,
    NothingToClaim = 705,
    InvalidRewardRate = 706,
    SameTokens = 707,
    InsufficientRewardFunds = 708,
    ContractMathError = 709,
    ConfigNotSet = 710,
}
