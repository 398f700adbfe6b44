//! Withdraw: burn shares for a proportional slice of both reserves

use crate::math::mul_div_floor;
use crate::{Pool, PoolError};

/// Result of a withdraw quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawQuote {
    /// Token X paid out to the withdrawer
    pub amount_x: u64,
    /// Token Y paid out to the withdrawer
    pub amount_y: u64,
    /// Pool state after the withdrawal is applied
    pub pool: Pool,
}

/// Quote a withdrawal of `shares` LP shares
///
/// Pays out `floor(shares * reserve / total_shares)` per side, the mirror of
/// the deposit rounding: dust stays in the pool. Burning the entire supply
/// drains both reserves to exactly zero, returning the pool to its empty
/// state. `min_x` / `min_y` are the withdrawer's slippage floors.
pub fn quote_withdraw(
    pool: &Pool,
    shares: u64,
    min_x: u64,
    min_y: u64,
) -> Result<WithdrawQuote, PoolError> {
    if pool.locked {
        return Err(PoolError::PoolLocked);
    }
    // shares must be in 1..=total_shares
    if shares == 0 || shares > pool.total_shares {
        return Err(PoolError::InsufficientShares);
    }

    let amount_x = mul_div_floor(shares, pool.reserve_x, pool.total_shares)?;
    let amount_y = mul_div_floor(shares, pool.reserve_y, pool.total_shares)?;

    if amount_x < min_x || amount_y < min_y {
        return Err(PoolError::SlippageExceeded);
    }

    // amount <= reserve per side since shares <= total_shares
    Ok(WithdrawQuote {
        amount_x,
        amount_y,
        pool: Pool {
            reserve_x: pool.reserve_x - amount_x,
            reserve_y: pool.reserve_y - amount_y,
            total_shares: pool.total_shares - shares,
            ..*pool
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote_deposit;

    fn funded_pool() -> Pool {
        Pool {
            reserve_x: 100_000_000,
            reserve_y: 100_000_000,
            total_shares: 100_000_000,
            fee_bps: 30,
            locked: false,
        }
    }

    #[test]
    fn test_proportional_withdraw() {
        let pool = funded_pool();
        let quote = quote_withdraw(&pool, 25_000_000, 0, 0).unwrap();

        assert_eq!(quote.amount_x, 25_000_000);
        assert_eq!(quote.amount_y, 25_000_000);
        assert_eq!(quote.pool.total_shares, 75_000_000);
        assert!(quote.pool.reserves_consistent());
    }

    #[test]
    fn test_full_drain_zeroes_reserves() {
        let pool = Pool {
            reserve_x: 99_999_937,
            reserve_y: 100_003_211,
            total_shares: 77_000_001,
            fee_bps: 30,
            locked: false,
        };
        let quote = quote_withdraw(&pool, pool.total_shares, 0, 0).unwrap();

        assert_eq!(quote.amount_x, pool.reserve_x);
        assert_eq!(quote.amount_y, pool.reserve_y);
        assert_eq!(quote.pool.reserve_x, 0);
        assert_eq!(quote.pool.reserve_y, 0);
        assert_eq!(quote.pool.total_shares, 0);
        assert!(quote.pool.reserves_consistent());
    }

    #[test]
    fn test_over_withdraw_rejected() {
        let pool = funded_pool();
        assert_eq!(
            quote_withdraw(&pool, pool.total_shares + 1, 0, 0),
            Err(PoolError::InsufficientShares)
        );
    }

    #[test]
    fn test_zero_shares_rejected() {
        let pool = funded_pool();
        assert_eq!(
            quote_withdraw(&pool, 0, 0, 0),
            Err(PoolError::InsufficientShares)
        );
    }

    #[test]
    fn test_slippage_floor() {
        let pool = funded_pool();
        assert_eq!(
            quote_withdraw(&pool, 25_000_000, 25_000_001, 0),
            Err(PoolError::SlippageExceeded)
        );
    }

    #[test]
    fn test_empty_pool_rejected() {
        let pool = Pool::new(30).unwrap();
        assert_eq!(
            quote_withdraw(&pool, 1, 0, 0),
            Err(PoolError::InsufficientShares)
        );
    }

    #[test]
    fn test_locked_pool_rejected() {
        let mut pool = funded_pool();
        pool.locked = true;
        assert_eq!(quote_withdraw(&pool, 1, 0, 0), Err(PoolError::PoolLocked));
    }

    #[test]
    fn test_round_trip_never_profits() {
        // Deposit then withdraw the same shares on an uneven pool: the
        // rounding loss stays with the pool
        let pool = Pool {
            reserve_x: 1_000_003,
            reserve_y: 999_983,
            total_shares: 900_001,
            fee_bps: 30,
            locked: false,
        };
        let deposit = quote_deposit(&pool, 12_345, u64::MAX, u64::MAX).unwrap();
        let withdraw = quote_withdraw(&deposit.pool, 12_345, 0, 0).unwrap();

        assert!(withdraw.amount_x <= deposit.required_x);
        assert!(withdraw.amount_y <= deposit.required_y);
    }
}

#[cfg(kani)]
mod proofs {
    use super::*;

    fn bounded_pool() -> Pool {
        let reserve_x: u64 = kani::any();
        let reserve_y: u64 = kani::any();
        let total_shares: u64 = kani::any();

        kani::assume(reserve_x <= 1 << 40);
        kani::assume(reserve_y <= 1 << 40);
        kani::assume(total_shares <= 1 << 40);
        kani::assume((total_shares == 0) == (reserve_x == 0));
        kani::assume((total_shares == 0) == (reserve_y == 0));

        Pool {
            reserve_x,
            reserve_y,
            total_shares,
            fee_bps: 0,
            locked: false,
        }
    }

    /// Withdrawal burns exactly the requested shares and never pays out more
    /// than the proportional slice
    #[kani::proof]
    fn proof_withdraw_exact_and_bounded() {
        let pool = bounded_pool();
        let shares: u64 = kani::any();
        kani::assume(shares > 0 && shares <= pool.total_shares);

        if let Ok(quote) = quote_withdraw(&pool, shares, 0, 0) {
            assert!(quote.pool.total_shares == pool.total_shares - shares);
            assert!(quote.amount_x <= pool.reserve_x);
            assert!(quote.amount_y <= pool.reserve_y);
            // floor rounding: payout * total <= shares * reserve
            assert!(
                (quote.amount_x as u128) * (pool.total_shares as u128)
                    <= (shares as u128) * (pool.reserve_x as u128)
            );
        }
    }

    /// Burning the whole supply leaves the pool fully empty
    #[kani::proof]
    fn proof_full_drain_is_exact() {
        let pool = bounded_pool();
        kani::assume(pool.total_shares > 0);

        if let Ok(quote) = quote_withdraw(&pool, pool.total_shares, 0, 0) {
            assert!(quote.pool.reserve_x == 0);
            assert!(quote.pool.reserve_y == 0);
            assert!(quote.pool.total_shares == 0);
            assert!(quote.pool.reserves_consistent());
        }
    }
}
