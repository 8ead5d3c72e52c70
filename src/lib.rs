//! Constant-product AMM exchange contracts
//!
//! - `token`: fungible asset ledger and the interface pairs use to move assets
//! - `dex`: pairs, the pair registry and the exchange facade
//! - `math`: checked arithmetic and swap pricing
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

pub mod dex;
pub mod errors;
pub mod events;
pub mod math;
pub mod token;
