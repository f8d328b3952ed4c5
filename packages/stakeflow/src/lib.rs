#![no_std]

pub mod address;
pub mod role;
pub mod ttl;

pub use address::{is_null_address, null_address};
pub use role::Role;
