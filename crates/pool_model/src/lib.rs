//! Pool Model - Pure constant product pool state machine (x·y=k)
//!
//! This crate contains the deposit/withdraw/swap math for the AMM pool,
//! extracted from the production program so it can be exercised by unit
//! tests, property-based fuzzing, and Kani proofs with no runtime
//! dependencies.
//!
//! Every operation is a total function `(Pool, request) -> Result<quote>`:
//! the quote carries the per-token amounts to move and the post-operation
//! pool state, and the caller applies them atomically. Nothing here mutates.

#![no_std]

#[cfg(kani)]
extern crate kani;

pub mod deposit;
pub mod math;
pub mod swap;
pub mod withdraw;

pub use deposit::{quote_deposit, DepositQuote};
pub use swap::{quote_swap, SwapDirection, SwapQuote};
pub use withdraw::{quote_withdraw, WithdrawQuote};

/// Basis points scale (10,000 bps = 100%)
pub const BPS_SCALE: u64 = 10_000;

/// Maximum fee rate a pool can be created with
pub const MAX_FEE_BPS: u16 = 10_000;

/// Error types for pool operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// Zero or otherwise nonsensical amount
    InvalidAmount,
    /// Fee rate outside 0..=10000 basis points
    InvalidFee,
    /// Pool is locked
    PoolLocked,
    /// Computed amount violates the caller's slippage bound
    SlippageExceeded,
    /// More shares requested than exist
    InsufficientShares,
    /// Swap would drain a reserve
    InsufficientLiquidity,
    /// Arithmetic overflow
    Overflow,
}

/// Pool state snapshot
///
/// Reserves and share supply are in the smallest token unit. The pool is
/// either fully empty (`total_shares == 0`, both reserves zero) or funded on
/// both sides; see [`Pool::reserves_consistent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    /// Token X reserve held by the pool vault
    pub reserve_x: u64,
    /// Token Y reserve held by the pool vault
    pub reserve_y: u64,
    /// Outstanding LP shares (mint supply)
    pub total_shares: u64,
    /// Swap fee in basis points, fixed at creation
    pub fee_bps: u16,
    /// Pause flag; deposits, withdrawals and swaps are rejected while set
    pub locked: bool,
}

impl Pool {
    /// Create an empty pool with the given fee rate
    pub fn new(fee_bps: u16) -> Result<Self, PoolError> {
        if fee_bps > MAX_FEE_BPS {
            return Err(PoolError::InvalidFee);
        }
        Ok(Self {
            reserve_x: 0,
            reserve_y: 0,
            total_shares: 0,
            fee_bps,
            locked: false,
        })
    }

    /// Constant product of the reserves
    pub fn k(&self) -> u128 {
        (self.reserve_x as u128) * (self.reserve_y as u128)
    }

    /// reserve_x == 0 ⇔ reserve_y == 0 ⇔ total_shares == 0
    ///
    /// Holds for every state reachable through the quote functions.
    pub fn reserves_consistent(&self) -> bool {
        let empty = self.total_shares == 0;
        (self.reserve_x == 0) == empty && (self.reserve_y == 0) == empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_is_empty() {
        let pool = Pool::new(30).unwrap();
        assert_eq!(pool.reserve_x, 0);
        assert_eq!(pool.reserve_y, 0);
        assert_eq!(pool.total_shares, 0);
        assert!(!pool.locked);
        assert!(pool.reserves_consistent());
    }

    #[test]
    fn test_fee_range() {
        assert!(Pool::new(0).is_ok());
        assert!(Pool::new(10_000).is_ok());
        assert_eq!(Pool::new(10_001), Err(PoolError::InvalidFee));
        assert_eq!(Pool::new(u16::MAX), Err(PoolError::InvalidFee));
    }

    #[test]
    fn test_consistency_predicate() {
        let mut pool = Pool::new(30).unwrap();
        assert!(pool.reserves_consistent());

        pool.reserve_x = 100;
        assert!(!pool.reserves_consistent());

        pool.reserve_y = 100;
        pool.total_shares = 100;
        assert!(pool.reserves_consistent());
    }
}
