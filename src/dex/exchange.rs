//! Exchange contract for the DEX
//!
//! The Exchange is the user-facing entry point:
//! - Creating pairs through the registry and tracking the ones it created
//! - Adding/removing liquidity on behalf of the caller
//! - Swapping through a single registry-resolved pair
//!
//! Pairs pull funds from the caller, so the caller approves the pair
//! address (not the exchange) before depositing or swapping.
use odra::prelude::*;
use odra::casper_types::U256;
use odra::List;
use crate::dex::pair::PairContractRef;
use crate::dex::registry::PairRegistryContractRef;
use crate::errors::DexError;
use crate::events::{LiquidityAdded, LiquidityRemoved, PairCreated, SwapExecuted};

/// Exchange contract for user interactions
#[odra::module(events = [PairCreated, LiquidityAdded, LiquidityRemoved, SwapExecuted])]
pub struct Exchange {
    /// Registry contract address
    registry: Var<Address>,
    /// Pairs created through this exchange, in creation order
    registered_pairs: List<Address>,
}

#[odra::module]
impl Exchange {
    /// Initialize the exchange with the registry address
    pub fn init(&mut self, registry: Address) {
        self.registry.set(registry);
    }

    /// Get the registry address
    pub fn registry(&self) -> Address {
        self.registry.get_or_revert_with(DexError::NotInitialized)
    }

    /// Pairs created through this exchange
    pub fn get_registered_pairs(&self) -> Vec<Address> {
        self.registered_pairs.iter().collect()
    }

    /// Pair for two assets as known to the registry
    pub fn get_pair(&self, asset_a: Address, asset_b: Address) -> Option<Address> {
        PairRegistryContractRef::new(self.env(), self.registry()).get_pair(asset_a, asset_b)
    }

    // ============ Pair Functions ============

    /// Create a pair in the registry and record it here
    pub fn create_and_register_pair(&mut self, asset_a: Address, asset_b: Address) -> Address {
        let mut registry = PairRegistryContractRef::new(self.env(), self.registry());
        let pair = registry.create_pair(asset_a, asset_b);

        self.registered_pairs.push(pair);

        self.env().emit_event(PairCreated {
            asset_a,
            asset_b,
            pair,
        });
        pair
    }

    // ============ Liquidity Functions ============

    /// Deposit `amount_a` of `asset_a` and `amount_b` of `asset_b` from the caller
    pub fn add_liquidity(
        &mut self,
        asset_a: Address,
        asset_b: Address,
        amount_a: U256,
        amount_b: U256,
    ) {
        let pair = self.resolve_pair(asset_a, asset_b).unwrap_or_revert(&self.env());
        let mut pair_ref = PairContractRef::new(self.env(), pair);
        let (pair_amount_a, pair_amount_b) =
            orient(pair_ref.asset_a(), asset_a, amount_a, amount_b);

        pair_ref.add_liquidity(self.env().caller(), pair_amount_a, pair_amount_b);

        self.env().emit_event(LiquidityAdded {
            account: pair,
            amount_a,
            amount_b,
        });
    }

    /// Withdraw from the caller's recorded contribution
    pub fn remove_liquidity(
        &mut self,
        asset_a: Address,
        asset_b: Address,
        amount_a: U256,
        amount_b: U256,
    ) {
        let pair = self.resolve_pair(asset_a, asset_b).unwrap_or_revert(&self.env());
        let mut pair_ref = PairContractRef::new(self.env(), pair);
        let (pair_amount_a, pair_amount_b) =
            orient(pair_ref.asset_a(), asset_a, amount_a, amount_b);

        pair_ref.remove_liquidity(self.env().caller(), pair_amount_a, pair_amount_b);

        self.env().emit_event(LiquidityRemoved {
            account: pair,
            amount_a,
            amount_b,
        });
    }

    // ============ Swap Functions ============

    /// Sell `input_amount` of `asset_a` for `asset_b`; returns the amount received
    pub fn swap(&mut self, asset_a: Address, asset_b: Address, input_amount: U256) -> U256 {
        let pair = self.resolve_pair(asset_a, asset_b).unwrap_or_revert(&self.env());
        let trader = self.env().caller();

        let mut pair_ref = PairContractRef::new(self.env(), pair);
        let amount_out = pair_ref.swap(trader, asset_a, input_amount);

        self.env().emit_event(SwapExecuted {
            trader,
            pair,
            asset_in: asset_a,
            asset_out: asset_b,
            amount_in: input_amount,
            amount_out,
        });
        amount_out
    }

    /// Quote selling `input_amount` of `asset_in` for `asset_out`
    pub fn get_swap_amount(
        &self,
        asset_in: Address,
        asset_out: Address,
        input_amount: U256,
    ) -> U256 {
        let pair = self.resolve_pair(asset_in, asset_out).unwrap_or_revert(&self.env());
        PairContractRef::new(self.env(), pair).get_swap_amount(asset_in, input_amount)
    }

    // ============ Internal Functions ============

    fn resolve_pair(&self, asset_a: Address, asset_b: Address) -> Result<Address, DexError> {
        self.get_pair(asset_a, asset_b).ok_or(DexError::PairNotFound)
    }
}

/// Reorder caller amounts to the pair's stored asset order
fn orient(pair_asset_a: Address, asset_a: Address, amount_a: U256, amount_b: U256) -> (U256, U256) {
    if pair_asset_a == asset_a {
        (amount_a, amount_b)
    } else {
        (amount_b, amount_a)
    }
}
