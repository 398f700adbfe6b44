//! Program error type

use pinocchio::program_error::ProgramError;

/// Errors returned by the pool program
///
/// Discriminants are stable: they are the `ProgramError::Custom` codes
/// observed by clients, so variants must not be reordered.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmmError {
    /// Instruction data is malformed or the discriminator is unknown
    InvalidInstruction = 0,
    /// An account has the wrong address, owner, size, or flags
    InvalidAccount = 1,
    /// A required signature is missing or the signer is not the authority
    Unauthorized = 2,
    /// Zero or otherwise nonsensical amount
    InvalidAmount = 3,
    /// Fee rate outside 0..=10000 basis points at pool creation
    InvalidFee = 4,
    /// Pool with this (seed, mint_x, mint_y) identity already initialized
    AlreadyExists = 5,
    /// Pool is locked for deposits, withdrawals, and swaps
    PoolLocked = 6,
    /// Computed amount violates the caller's slippage bound
    SlippageExceeded = 7,
    /// Caller holds fewer LP shares than requested
    InsufficientShares = 8,
    /// Caller holds fewer tokens than the operation requires
    InsufficientBalance = 9,
    /// Swap would drain a reserve
    InsufficientLiquidity = 10,
    /// Arithmetic overflow
    Overflow = 11,
}

impl From<AmmError> for ProgramError {
    fn from(e: AmmError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

// Convert pure-model errors to program errors
impl From<pool_model::PoolError> for AmmError {
    fn from(e: pool_model::PoolError) -> Self {
        match e {
            pool_model::PoolError::InvalidAmount => AmmError::InvalidAmount,
            pool_model::PoolError::InvalidFee => AmmError::InvalidFee,
            pool_model::PoolError::PoolLocked => AmmError::PoolLocked,
            pool_model::PoolError::SlippageExceeded => AmmError::SlippageExceeded,
            pool_model::PoolError::InsufficientShares => AmmError::InsufficientShares,
            pool_model::PoolError::InsufficientLiquidity => AmmError::InsufficientLiquidity,
            pool_model::PoolError::Overflow => AmmError::Overflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AmmError::InvalidInstruction as u32, 0);
        assert_eq!(AmmError::InvalidFee as u32, 4);
        assert_eq!(AmmError::AlreadyExists as u32, 5);
        assert_eq!(AmmError::PoolLocked as u32, 6);
        assert_eq!(AmmError::SlippageExceeded as u32, 7);
        assert_eq!(AmmError::Overflow as u32, 11);
    }

    #[test]
    fn test_conversion_to_program_error() {
        let err: ProgramError = AmmError::SlippageExceeded.into();
        assert_eq!(err, ProgramError::Custom(7));
    }

    #[test]
    fn test_model_error_mapping() {
        assert_eq!(
            AmmError::from(pool_model::PoolError::SlippageExceeded),
            AmmError::SlippageExceeded
        );
        assert_eq!(
            AmmError::from(pool_model::PoolError::InsufficientLiquidity),
            AmmError::InsufficientLiquidity
        );
        assert_eq!(AmmError::from(pool_model::PoolError::Overflow), AmmError::Overflow);
    }
}
