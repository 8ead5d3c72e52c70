//! Liquidity Pair contract for the exchange
//!
//! Each Pair holds reserves of two assets and, per provider, the amounts of
//! each asset they deposited. It allows:
//! - Adding liquidity (establishing the price on the first deposit)
//! - Removing liquidity up to the provider's recorded contribution
//! - Swapping one asset for the other at the fee-adjusted constant-product price
//!
//! Every mutating entry point holds the reentrancy lock and finishes its own
//! bookkeeping before calling out to the asset contracts.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::DexError;
use crate::events::{LiquidityAdded, LiquidityRemoved, Sync, TokenSwapped};
use crate::math::{AmmMath, SafeMath};
use crate::token::FungibleAssetContractRef;

/// Liquidity Pair contract
#[odra::module(factory = on, events = [LiquidityAdded, LiquidityRemoved, TokenSwapped, Sync])]
pub struct Pair {
    /// Address of asset A
    asset_a: Var<Address>,
    /// Address of asset B
    asset_b: Var<Address>,
    /// Reserve of asset A
    reserve_a: Var<U256>,
    /// Reserve of asset B
    reserve_b: Var<U256>,
    /// Provider -> deposited amount of asset A
    contributions_a: Mapping<Address, U256>,
    /// Provider -> deposited amount of asset B
    contributions_b: Mapping<Address, U256>,
    /// Registry that created this pair
    registry: Var<Address>,
    /// Reentrancy lock
    locked: Var<bool>,
}

/// Reserves of a pair seen from the input side of a swap
struct SwapSide {
    asset_out: Address,
    reserve_in: U256,
    reserve_out: U256,
    input_is_a: bool,
}

#[odra::module]
impl Pair {
    /// Initialize the pair with its two assets and the creating registry
    pub fn init(&mut self, asset_a: Address, asset_b: Address, registry: Address) {
        if asset_a == asset_b {
            self.env().revert(DexError::IdenticalAssets);
        }

        self.asset_a.set(asset_a);
        self.asset_b.set(asset_b);
        self.registry.set(registry);
        self.reserve_a.set(U256::zero());
        self.reserve_b.set(U256::zero());
        self.locked.set(false);
    }

    // ============ View Functions ============

    pub fn asset_a(&self) -> Address {
        self.asset_a.get_or_revert_with(DexError::NotInitialized)
    }

    pub fn asset_b(&self) -> Address {
        self.asset_b.get_or_revert_with(DexError::NotInitialized)
    }

    pub fn registry(&self) -> Address {
        self.registry.get_or_revert_with(DexError::NotInitialized)
    }

    /// Current reserves as `(reserve_a, reserve_b)`
    pub fn get_reserves(&self) -> (U256, U256) {
        (
            self.reserve_a.get_or_default(),
            self.reserve_b.get_or_default(),
        )
    }

    /// Recorded contribution of a provider as `(amount_a, amount_b)`
    pub fn liquidity_of(&self, provider: Address) -> (U256, U256) {
        (
            self.contributions_a.get(&provider).unwrap_or_default(),
            self.contributions_b.get(&provider).unwrap_or_default(),
        )
    }

    /// A pair is active once both reserves are non-zero
    pub fn is_active(&self) -> bool {
        let (reserve_a, reserve_b) = self.get_reserves();
        !reserve_a.is_zero() && !reserve_b.is_zero()
    }

    /// Output amount for swapping `input_amount` of `input_asset`
    pub fn get_swap_amount(&self, input_asset: Address, input_amount: U256) -> U256 {
        self.quote_swap(input_asset, input_amount)
            .unwrap_or_revert(&self.env())
    }

    // ============ Write Functions ============

    /// Pull both amounts from `provider` (pre-approved to this pair) into the reserves
    pub fn add_liquidity(&mut self, provider: Address, amount_a: U256, amount_b: U256) {
        self.lock();
        self.deposit(provider, amount_a, amount_b)
            .unwrap_or_revert(&self.env());
        self.unlock();
    }

    /// Return up to the provider's recorded contribution of each asset
    pub fn remove_liquidity(&mut self, provider: Address, amount_a: U256, amount_b: U256) {
        self.lock();
        self.withdraw(provider, amount_a, amount_b)
            .unwrap_or_revert(&self.env());
        self.unlock();
    }

    /// Sell `input_amount` of `input_asset` from `trader` for the other asset.
    /// Returns the amount sent back to the trader.
    pub fn swap(&mut self, trader: Address, input_asset: Address, input_amount: U256) -> U256 {
        self.lock();
        let amount_out = self
            .execute_swap(trader, input_asset, input_amount)
            .unwrap_or_revert(&self.env());
        self.unlock();
        amount_out
    }

    // ============ Internal Functions ============

    fn deposit(&mut self, provider: Address, amount_a: U256, amount_b: U256) -> Result<(), DexError> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(DexError::InsufficientAmount);
        }

        let (reserve_a, reserve_b) = self.get_reserves();
        if self.is_active()
            && !AmmMath::is_balanced_deposit(amount_a, amount_b, reserve_a, reserve_b)?
        {
            return Err(DexError::UnbalancedDeposit);
        }

        let (contributed_a, contributed_b) = self.liquidity_of(provider);
        let new_contribution_a = SafeMath::add(contributed_a, amount_a)?;
        let new_contribution_b = SafeMath::add(contributed_b, amount_b)?;
        let new_reserve_a = SafeMath::add(reserve_a, amount_a)?;
        let new_reserve_b = SafeMath::add(reserve_b, amount_b)?;

        self.contributions_a.set(&provider, new_contribution_a);
        self.contributions_b.set(&provider, new_contribution_b);
        self.update_reserves(new_reserve_a, new_reserve_b);

        self.pull(self.asset_a(), provider, amount_a)?;
        self.pull(self.asset_b(), provider, amount_b)?;

        self.env().emit_event(LiquidityAdded {
            account: provider,
            amount_a,
            amount_b,
        });
        Ok(())
    }

    fn withdraw(&mut self, provider: Address, amount_a: U256, amount_b: U256) -> Result<(), DexError> {
        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(DexError::InsufficientAmount);
        }

        let (contributed_a, contributed_b) = self.liquidity_of(provider);
        if contributed_a < amount_a {
            return Err(DexError::InsufficientLiquidityA);
        }
        if contributed_b < amount_b {
            return Err(DexError::InsufficientLiquidityB);
        }

        // Swaps move reserves away from the recorded contributions
        let (reserve_a, reserve_b) = self.get_reserves();
        let new_reserve_a = reserve_a
            .checked_sub(amount_a)
            .ok_or(DexError::InsufficientLiquidityA)?;
        let new_reserve_b = reserve_b
            .checked_sub(amount_b)
            .ok_or(DexError::InsufficientLiquidityB)?;

        self.contributions_a.set(&provider, contributed_a - amount_a);
        self.contributions_b.set(&provider, contributed_b - amount_b);
        self.update_reserves(new_reserve_a, new_reserve_b);

        if !amount_a.is_zero() {
            self.push(self.asset_a(), provider, amount_a)?;
        }
        if !amount_b.is_zero() {
            self.push(self.asset_b(), provider, amount_b)?;
        }

        self.env().emit_event(LiquidityRemoved {
            account: provider,
            amount_a,
            amount_b,
        });
        Ok(())
    }

    fn execute_swap(
        &mut self,
        trader: Address,
        input_asset: Address,
        input_amount: U256,
    ) -> Result<U256, DexError> {
        let side = self.swap_side(input_asset)?;
        if input_amount.is_zero() {
            return Err(DexError::InsufficientInputAmount);
        }

        let amount_out = AmmMath::get_amount_out(input_amount, side.reserve_in, side.reserve_out)?;
        if amount_out.is_zero() {
            return Err(DexError::InsufficientOutputAmount);
        }

        let new_reserve_in = SafeMath::add(side.reserve_in, input_amount)?;
        let new_reserve_out = SafeMath::sub(side.reserve_out, amount_out)?;
        if side.input_is_a {
            self.update_reserves(new_reserve_in, new_reserve_out);
        } else {
            self.update_reserves(new_reserve_out, new_reserve_in);
        }

        self.pull(input_asset, trader, input_amount)?;
        self.push(side.asset_out, trader, amount_out)?;

        self.env().emit_event(TokenSwapped {
            trader,
            asset_in: input_asset,
            asset_out: side.asset_out,
            amount_in: input_amount,
            amount_out,
        });
        Ok(amount_out)
    }

    fn quote_swap(&self, input_asset: Address, input_amount: U256) -> Result<U256, DexError> {
        let side = self.swap_side(input_asset)?;
        AmmMath::get_amount_out(input_amount, side.reserve_in, side.reserve_out)
    }

    /// Resolve reserves by the input asset's position in the pair
    fn swap_side(&self, input_asset: Address) -> Result<SwapSide, DexError> {
        let asset_a = self.asset_a();
        let asset_b = self.asset_b();
        let (reserve_a, reserve_b) = self.get_reserves();

        if input_asset == asset_a {
            Ok(SwapSide {
                asset_out: asset_b,
                reserve_in: reserve_a,
                reserve_out: reserve_b,
                input_is_a: true,
            })
        } else if input_asset == asset_b {
            Ok(SwapSide {
                asset_out: asset_a,
                reserve_in: reserve_b,
                reserve_out: reserve_a,
                input_is_a: false,
            })
        } else {
            Err(DexError::InvalidAsset)
        }
    }

    /// Update reserves and emit Sync event
    fn update_reserves(&mut self, reserve_a: U256, reserve_b: U256) {
        self.reserve_a.set(reserve_a);
        self.reserve_b.set(reserve_b);

        self.env().emit_event(Sync {
            reserve_a,
            reserve_b,
        });
    }

    /// Pull pre-approved assets from `owner` into this pair
    fn pull(&self, asset: Address, owner: Address, amount: U256) -> Result<(), DexError> {
        let mut asset_ref = FungibleAssetContractRef::new(self.env(), asset);
        if !asset_ref.transfer_from(owner, self.env().self_address(), amount) {
            return Err(DexError::TransferFailed);
        }
        Ok(())
    }

    /// Push assets held by this pair to `to`
    fn push(&self, asset: Address, to: Address, amount: U256) -> Result<(), DexError> {
        let mut asset_ref = FungibleAssetContractRef::new(self.env(), asset);
        if !asset_ref.transfer(to, amount) {
            return Err(DexError::TransferFailed);
        }
        Ok(())
    }

    /// Reentrancy lock
    fn lock(&mut self) {
        if self.locked.get_or_default() {
            self.env().revert(DexError::Locked);
        }
        self.locked.set(true);
    }

    /// Reentrancy unlock
    fn unlock(&mut self) {
        self.locked.set(false);
    }
}
