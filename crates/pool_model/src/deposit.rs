//! Deposit: mint shares against a proportional contribution of both tokens

use crate::math::mul_div_ceil;
use crate::{Pool, PoolError};

/// Result of a deposit quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    /// Token X the depositor must contribute
    pub required_x: u64,
    /// Token Y the depositor must contribute
    pub required_y: u64,
    /// Pool state after the deposit is applied
    pub pool: Pool,
}

/// Quote a deposit of `desired_shares` LP shares
///
/// The first deposit into an empty pool fixes the exchange rate at 1:1 in
/// raw token units: minting `n` shares costs `n` of X and `n` of Y. Every
/// later deposit is priced proportionally to the current reserves,
/// `required = ceil(desired_shares * reserve / total_shares)` per side, so
/// rounding dust always lands in the pool and the X:Y ratio is preserved.
///
/// `max_x` / `max_y` are the depositor's slippage ceilings; exceeding either
/// rejects the whole operation with no state change.
pub fn quote_deposit(
    pool: &Pool,
    desired_shares: u64,
    max_x: u64,
    max_y: u64,
) -> Result<DepositQuote, PoolError> {
    if pool.locked {
        return Err(PoolError::PoolLocked);
    }
    if desired_shares == 0 {
        return Err(PoolError::InvalidAmount);
    }

    let (required_x, required_y) = if pool.total_shares == 0 {
        (desired_shares, desired_shares)
    } else {
        (
            mul_div_ceil(desired_shares, pool.reserve_x, pool.total_shares)?,
            mul_div_ceil(desired_shares, pool.reserve_y, pool.total_shares)?,
        )
    };

    if required_x > max_x || required_y > max_y {
        return Err(PoolError::SlippageExceeded);
    }

    let new_reserve_x = pool
        .reserve_x
        .checked_add(required_x)
        .ok_or(PoolError::Overflow)?;
    let new_reserve_y = pool
        .reserve_y
        .checked_add(required_y)
        .ok_or(PoolError::Overflow)?;
    let new_total_shares = pool
        .total_shares
        .checked_add(desired_shares)
        .ok_or(PoolError::Overflow)?;

    Ok(DepositQuote {
        required_x,
        required_y,
        pool: Pool {
            reserve_x: new_reserve_x,
            reserve_y: new_reserve_y,
            total_shares: new_total_shares,
            ..*pool
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_bootstrap_deposit_is_one_to_one() {
        let pool = Pool::new(30).unwrap();
        let quote = quote_deposit(&pool, 100_000_000, 100_000_000, 100_000_000).unwrap();

        assert_eq!(quote.required_x, 100_000_000);
        assert_eq!(quote.required_y, 100_000_000);
        assert_eq!(quote.pool.reserve_x, 100_000_000);
        assert_eq!(quote.pool.reserve_y, 100_000_000);
        assert_eq!(quote.pool.total_shares, 100_000_000);
        assert!(quote.pool.reserves_consistent());
    }

    #[test]
    fn test_proportional_deposit() {
        let pool = funded_pool();
        let quote = quote_deposit(&pool, 50_000_000, 60_000_000, 60_000_000).unwrap();

        // Half the supply costs exactly half the reserves
        assert_eq!(quote.required_x, 50_000_000);
        assert_eq!(quote.required_y, 50_000_000);
        assert_eq!(quote.pool.total_shares, 150_000_000);
    }

    #[test]
    fn test_rounding_favors_pool() {
        let pool = Pool {
            reserve_x: 100,
            reserve_y: 101,
            total_shares: 100,
            fee_bps: 0,
            locked: false,
        };
        let quote = quote_deposit(&pool, 33, u64::MAX, u64::MAX).unwrap();

        // 33 * 101 / 100 = 33.33 -> pool charges 34
        assert_eq!(quote.required_x, 33);
        assert_eq!(quote.required_y, 34);
    }

    #[test]
    fn test_zero_shares_rejected() {
        let pool = funded_pool();
        assert_eq!(
            quote_deposit(&pool, 0, u64::MAX, u64::MAX),
            Err(PoolError::InvalidAmount)
        );
    }

    #[test]
    fn test_slippage_ceiling() {
        let pool = funded_pool();
        assert_eq!(
            quote_deposit(&pool, 50_000_000, 49_999_999, 60_000_000),
            Err(PoolError::SlippageExceeded)
        );
        assert_eq!(
            quote_deposit(&pool, 50_000_000, 60_000_000, 49_999_999),
            Err(PoolError::SlippageExceeded)
        );
    }

    #[test]
    fn test_locked_pool_rejected() {
        let mut pool = funded_pool();
        pool.locked = true;
        assert_eq!(
            quote_deposit(&pool, 1, u64::MAX, u64::MAX),
            Err(PoolError::PoolLocked)
        );
    }

    #[test]
    fn test_reserve_overflow_rejected() {
        let pool = Pool {
            reserve_x: u64::MAX,
            reserve_y: u64::MAX,
            total_shares: u64::MAX,
            fee_bps: 0,
            locked: false,
        };
        assert_eq!(
            quote_deposit(&pool, 2, u64::MAX, u64::MAX),
            Err(PoolError::Overflow)
        );
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
        // Either fully empty or funded on both sides
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

    /// Shares grow by exactly the requested amount; consistency is preserved
    #[kani::proof]
    fn proof_deposit_exact_share_increase() {
        let pool = bounded_pool();
        let desired: u64 = kani::any();
        kani::assume(desired > 0 && desired <= 1 << 40);

        if let Ok(quote) = quote_deposit(&pool, desired, u64::MAX, u64::MAX) {
            assert!(quote.pool.total_shares == pool.total_shares + desired);
            assert!(quote.pool.reserve_x == pool.reserve_x + quote.required_x);
            assert!(quote.pool.reserve_y == pool.reserve_y + quote.required_y);
            assert!(quote.pool.reserves_consistent());
        }
    }

    /// The depositor never pays less than the true proportional share
    #[kani::proof]
    fn proof_deposit_rounds_against_depositor() {
        let pool = bounded_pool();
        let desired: u64 = kani::any();
        kani::assume(desired > 0 && desired <= 1 << 40);
        kani::assume(pool.total_shares > 0);

        if let Ok(quote) = quote_deposit(&pool, desired, u64::MAX, u64::MAX) {
            // required * total >= desired * reserve, per side
            assert!(
                (quote.required_x as u128) * (pool.total_shares as u128)
                    >= (desired as u128) * (pool.reserve_x as u128)
            );
            assert!(
                (quote.required_y as u128) * (pool.total_shares as u128)
                    >= (desired as u128) * (pool.reserve_y as u128)
            );
        }
    }
}
