//! Pair registry contract
//!
//! Creates at most one Pair per unordered asset pair. Pairs are keyed by the
//! sorted `(min, max)` asset tuple, so a lookup answers the same for either
//! argument order without storing the pair twice.
use odra::prelude::*;
use odra::List;
use crate::dex::pair::PairFactoryContractRef;
use crate::errors::DexError;
use crate::events::PairCreated;

/// Pair registry contract
#[odra::module(events = [PairCreated])]
pub struct PairRegistry {
    /// Factory contract deploying Pair instances
    pair_factory: Var<Address>,
    /// Canonical (sorted) asset tuple -> pair address
    pairs: Mapping<(Address, Address), Address>,
    /// Every pair ever created, in creation order
    all_pairs: List<Address>,
}

#[odra::module]
impl PairRegistry {
    /// Initialize the registry with the address of the generated `PairFactory`
    pub fn init(&mut self, pair_factory: Address) {
        self.pair_factory.set(pair_factory);
    }

    pub fn pair_factory(&self) -> Address {
        self.pair_factory.get_or_revert_with(DexError::NotInitialized)
    }

    /// Pair for two assets, in either order
    pub fn get_pair(&self, asset_a: Address, asset_b: Address) -> Option<Address> {
        self.pairs.get(&pair_key(asset_a, asset_b))
    }

    /// All pairs in creation order
    pub fn get_all_pairs(&self) -> Vec<Address> {
        self.all_pairs.iter().collect()
    }

    pub fn all_pairs_length(&self) -> u32 {
        self.all_pairs.len()
    }

    /// Create the pair for `asset_a`/`asset_b` and return its address
    pub fn create_pair(&mut self, asset_a: Address, asset_b: Address) -> Address {
        self.try_create(asset_a, asset_b).unwrap_or_revert(&self.env())
    }

    // ============ Internal Functions ============

    fn try_create(&mut self, asset_a: Address, asset_b: Address) -> Result<Address, DexError> {
        if asset_a == asset_b {
            return Err(DexError::IdenticalAssets);
        }

        let key = pair_key(asset_a, asset_b);
        if self.pairs.get(&key).is_some() {
            return Err(DexError::PairExists);
        }

        let contract_name = alloc::format!("pair_{}", self.all_pairs.len());
        let mut factory = PairFactoryContractRef::new(self.env(), self.pair_factory());
        let (pair, _) = factory.new_contract(
            contract_name,
            asset_a,
            asset_b,
            self.env().self_address(),
        );

        self.pairs.set(&key, pair);
        self.all_pairs.push(pair);

        self.env().emit_event(PairCreated {
            asset_a,
            asset_b,
            pair,
        });
        Ok(pair)
    }
}

/// Order-independent storage key
fn pair_key(asset_a: Address, asset_b: Address) -> (Address, Address) {
    if asset_a < asset_b {
        (asset_a, asset_b)
    } else {
        (asset_b, asset_a)
    }
}
