//! Events emitted by the exchange contracts
use odra::prelude::*;
use odra::casper_types::U256;

/// A new pair was created for two assets
#[odra::event]
pub struct PairCreated {
    pub asset_a: Address,
    pub asset_b: Address,
    pub pair: Address,
}

/// Liquidity was deposited.
/// `account` is the provider when emitted by a pair, the pair when emitted by the exchange.
#[odra::event]
pub struct LiquidityAdded {
    pub account: Address,
    pub amount_a: U256,
    pub amount_b: U256,
}

/// Liquidity was withdrawn. Same `account` convention as [`LiquidityAdded`].
#[odra::event]
pub struct LiquidityRemoved {
    pub account: Address,
    pub amount_a: U256,
    pub amount_b: U256,
}

/// A trade executed against a pair
#[odra::event]
pub struct TokenSwapped {
    pub trader: Address,
    pub asset_in: Address,
    pub asset_out: Address,
    pub amount_in: U256,
    pub amount_out: U256,
}

/// A trade routed through the exchange
#[odra::event]
pub struct SwapExecuted {
    pub trader: Address,
    pub pair: Address,
    pub asset_in: Address,
    pub asset_out: Address,
    pub amount_in: U256,
    pub amount_out: U256,
}

/// Reserves after an update
#[odra::event]
pub struct Sync {
    pub reserve_a: U256,
    pub reserve_b: U256,
}

/// Asset transfer; `None` stands for mint (`from`) or burn (`to`)
#[odra::event]
pub struct Transfer {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub value: U256,
}

/// Asset allowance change
#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
}
