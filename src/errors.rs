//! Error definitions for the exchange contracts
use odra::prelude::*;

/// Errors raised by pairs, the registry and the exchange
#[odra::odra_error]
pub enum DexError {
    /// Both sides of a pair are the same asset
    IdenticalAssets = 1,

    /// A pair already exists for this unordered asset pair
    PairExists = 2,

    /// No pair is registered for the requested assets
    PairNotFound = 3,

    /// Provider record or reserve of asset A does not cover the request
    InsufficientLiquidityA = 4,

    /// Provider record or reserve of asset B does not cover the request
    InsufficientLiquidityB = 5,

    /// Asset is not one of the pair's two assets
    InvalidAsset = 6,

    /// Asset contract reported an unsuccessful transfer
    TransferFailed = 7,

    /// One of the reserves is zero
    EmptyPool = 8,

    /// Swap input is zero
    InsufficientInputAmount = 9,

    /// Swap output rounds down to zero
    InsufficientOutputAmount = 10,

    /// Zero deposit or withdrawal
    InsufficientAmount = 11,

    /// Deposit does not match the current reserve ratio
    UnbalancedDeposit = 12,

    /// Overflow error
    Overflow = 13,

    /// Underflow error
    Underflow = 14,

    /// Division by zero
    DivisionByZero = 15,

    /// Locked - reentrancy guard
    Locked = 16,

    /// Required storage was never initialized
    NotInitialized = 17,
}

impl DexError {
    /// Human readable revert reason.
    pub fn reason(&self) -> &'static str {
        match self {
            DexError::IdenticalAssets => "Factory: IDENTICAL_ADDRESSES",
            DexError::PairExists => "Factory: PAIR_EXISTS",
            DexError::PairNotFound => "Pair does not exist",
            DexError::InsufficientLiquidityA => "Insufficient token A liquidity",
            DexError::InsufficientLiquidityB => "Insufficient token B liquidity",
            DexError::InvalidAsset => "Invalid token",
            DexError::TransferFailed => "Transfer failed",
            DexError::EmptyPool => "Pair: EMPTY_RESERVES",
            DexError::InsufficientInputAmount => "Pair: INSUFFICIENT_INPUT_AMOUNT",
            DexError::InsufficientOutputAmount => "Pair: INSUFFICIENT_OUTPUT_AMOUNT",
            DexError::InsufficientAmount => "Pair: INSUFFICIENT_AMOUNT",
            DexError::UnbalancedDeposit => "Pair: UNBALANCED_DEPOSIT",
            DexError::Overflow => "Math: OVERFLOW",
            DexError::Underflow => "Math: UNDERFLOW",
            DexError::DivisionByZero => "Math: DIVISION_BY_ZERO",
            DexError::Locked => "Pair: LOCKED",
            DexError::NotInitialized => "Contract not initialized",
        }
    }
}

/// Errors raised by the fungible asset ledger
#[odra::odra_error]
pub enum AssetError {
    /// Sender balance is lower than the transferred amount
    InsufficientBalance = 40_000,

    /// Spender allowance is lower than the transferred amount
    InsufficientAllowance = 40_001,

    /// Burn amount is larger than the owner's balance
    BurnExceedsBalance = 40_002,
}

impl AssetError {
    /// Human readable revert reason.
    pub fn reason(&self) -> &'static str {
        match self {
            AssetError::InsufficientBalance => "ERC20: transfer amount exceeds balance",
            AssetError::InsufficientAllowance => "ERC20: insufficient allowance",
            AssetError::BurnExceedsBalance => "ERC20: burn amount exceeds balance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_reasons() {
        assert_eq!(DexError::IdenticalAssets.reason(), "Factory: IDENTICAL_ADDRESSES");
        assert_eq!(DexError::PairExists.reason(), "Factory: PAIR_EXISTS");
        assert_eq!(DexError::PairNotFound.reason(), "Pair does not exist");
    }

    #[test]
    fn test_liquidity_reasons_name_the_asset() {
        assert_eq!(
            DexError::InsufficientLiquidityA.reason(),
            "Insufficient token A liquidity"
        );
        assert_eq!(
            DexError::InsufficientLiquidityB.reason(),
            "Insufficient token B liquidity"
        );
    }

    #[test]
    fn test_asset_reasons() {
        assert_eq!(
            AssetError::BurnExceedsBalance.reason(),
            "ERC20: burn amount exceeds balance"
        );
        assert_eq!(
            AssetError::InsufficientBalance.reason(),
            "ERC20: transfer amount exceeds balance"
        );
    }

    #[test]
    fn test_errors_convert_to_distinct_odra_errors() {
        let not_found: odra::OdraError = DexError::PairNotFound.into();
        let exists: odra::OdraError = DexError::PairExists.into();
        assert_ne!(not_found, exists);
    }
}
