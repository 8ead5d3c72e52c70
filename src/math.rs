//! Checked arithmetic and constant-product pricing
use odra::casper_types::U256;
use crate::errors::DexError;

/// Swap fee numerator (0.3%)
pub const FEE_NUMERATOR: u64 = 3;
/// Swap fee denominator
pub const FEE_DENOMINATOR: u64 = 1000;

/// Checked U256 arithmetic mapped onto [`DexError`]
pub struct SafeMath;

impl SafeMath {
    pub fn add(a: U256, b: U256) -> Result<U256, DexError> {
        a.checked_add(b).ok_or(DexError::Overflow)
    }

    pub fn sub(a: U256, b: U256) -> Result<U256, DexError> {
        a.checked_sub(b).ok_or(DexError::Underflow)
    }

    pub fn mul(a: U256, b: U256) -> Result<U256, DexError> {
        a.checked_mul(b).ok_or(DexError::Overflow)
    }

    pub fn div(a: U256, b: U256) -> Result<U256, DexError> {
        a.checked_div(b).ok_or(DexError::DivisionByZero)
    }
}

/// Constant-product pool math
pub struct AmmMath;

impl AmmMath {
    /// Output of a swap after the pool fee.
    ///
    /// `out = in * (D - N) * reserve_out / (reserve_in * D + in * (D - N))`
    ///
    /// All products are taken before the single division, so the result is
    /// strictly below `reserve_out` and the reserve product never shrinks.
    pub fn get_amount_out(
        amount_in: U256,
        reserve_in: U256,
        reserve_out: U256,
    ) -> Result<U256, DexError> {
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(DexError::EmptyPool);
        }

        let amount_in_with_fee =
            SafeMath::mul(amount_in, U256::from(FEE_DENOMINATOR - FEE_NUMERATOR))?;
        let numerator = SafeMath::mul(amount_in_with_fee, reserve_out)?;
        let denominator = SafeMath::add(
            SafeMath::mul(reserve_in, U256::from(FEE_DENOMINATOR))?,
            amount_in_with_fee,
        )?;

        SafeMath::div(numerator, denominator)
    }

    /// Amount of B worth `amount_a` at the current reserve ratio
    pub fn quote(amount_a: U256, reserve_a: U256, reserve_b: U256) -> Result<U256, DexError> {
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(DexError::EmptyPool);
        }
        SafeMath::div(SafeMath::mul(amount_a, reserve_b)?, reserve_a)
    }

    /// Whether a deposit keeps the reserve ratio, up to floor rounding in
    /// either direction.
    pub fn is_balanced_deposit(
        amount_a: U256,
        amount_b: U256,
        reserve_a: U256,
        reserve_b: U256,
    ) -> Result<bool, DexError> {
        if Self::quote(amount_a, reserve_a, reserve_b)? == amount_b {
            return Ok(true);
        }
        Ok(Self::quote(amount_b, reserve_b, reserve_a)? == amount_a)
    }
}
