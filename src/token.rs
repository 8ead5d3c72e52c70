//! Fungible asset contract and the interface pairs use to move assets
//!
//! `Asset` is a CEP-18 style ledger: balances, allowances, transfer,
//! approve, transfer_from and burn. Pairs never depend on it directly;
//! they talk to any asset through [`FungibleAsset`].
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::AssetError;
use crate::events::{Approval, Transfer};

/// Asset contract
#[odra::module(events = [Transfer, Approval])]
pub struct Asset {
    /// Asset name
    name: Var<String>,
    /// Asset symbol
    symbol: Var<String>,
    /// Asset decimals
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: (owner, spender) -> amount
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl Asset {
    /// Initialize the asset, minting the whole supply to the deployer
    pub fn init(&mut self, name: String, symbol: String, initial_supply: U256) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(18);
        self.total_supply.set(initial_supply);

        let owner = self.env().caller();
        self.balances.set(&owner, initial_supply);

        self.env().emit_event(Transfer {
            from: None,
            to: Some(owner),
            value: initial_supply,
        });
    }

    // ============ View Functions ============

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    // ============ Write Functions ============

    /// Transfer tokens from the caller
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Approve a spender to move the caller's tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Move pre-approved tokens of `owner`; the caller is the spender
    pub fn transfer_from(&mut self, owner: Address, to: Address, amount: U256) -> bool {
        let spender = self.env().caller();
        let current_allowance = self.allowance(owner, spender);

        if current_allowance < amount {
            self.env().revert(AssetError::InsufficientAllowance);
        }

        self.approve_internal(owner, spender, current_allowance - amount);
        self.transfer_internal(owner, to, amount);
        true
    }

    /// Destroy tokens held by the caller
    pub fn burn(&mut self, amount: U256) {
        let owner = self.env().caller();
        let balance = self.balance_of(owner);
        if balance < amount {
            self.env().revert(AssetError::BurnExceedsBalance);
        }

        let supply = self.total_supply();
        self.balances.set(&owner, balance - amount);
        self.total_supply.set(supply - amount);

        self.env().emit_event(Transfer {
            from: Some(owner),
            to: None,
            value: amount,
        });
    }

    // ============ Internal Functions ============

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(AssetError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from: Some(from),
            to: Some(to),
            value: amount,
        });
    }

    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);
        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }
}

/// Transfer capability a pair needs from an asset
#[odra::external_contract]
pub trait FungibleAsset {
    fn balance_of(&self, owner: Address) -> U256;
    fn transfer(&mut self, to: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, to: Address, amount: U256) -> bool;
}
