#![no_std]

mod access;
mod allowance;
mod balance;
mod contract;
mod error;
mod metadata;
mod storage_types;


pub use crate::contract::{Token, TokenClient};
pub use crate::error::TokenError;
