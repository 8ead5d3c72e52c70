//! DEX module containing all exchange contracts
//!
//! This module implements a constant-product AMM with:
//! - Pair: Individual liquidity pools for asset pairs
//! - PairRegistry: Creates pairs and deduplicates them per unordered asset pair
//! - Exchange: User-facing contract routing liquidity and swaps to pairs

pub mod pair;
pub mod registry;
pub mod exchange;


pub use pair::Pair;
pub use registry::PairRegistry;
pub use exchange::Exchange;
