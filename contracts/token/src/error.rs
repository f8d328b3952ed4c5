use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    InvalidAmount = 300,
    InvalidAddress = 301,
    InsufficientBalance = 302,
    InsufficientAllowance = 303,
    InvalidExpiration = 304,
    Unauthorized = 305,
    InvalidDecimals = 306,
    MathOverflow = 307,
}
