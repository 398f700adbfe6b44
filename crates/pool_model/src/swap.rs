//! Swap: constant product exchange with the fee retained in the reserves

use crate::{Pool, PoolError, BPS_SCALE};

/// Which token the trader sends in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    /// Trader sends X, receives Y
    XtoY,
    /// Trader sends Y, receives X
    YtoX,
}

/// Result of a swap quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    /// Output tokens paid to the trader
    pub amount_out: u64,
    /// Pool state after the swap is applied
    pub pool: Pool,
}

/// Quote a swap of `amount_in` along the bonding curve
///
/// The fee is taken on the input side and stays in the pool: only
/// `amount_in * (10000 - fee_bps) / 10000` moves the price, but the full
/// `amount_in` is credited to the input reserve. Both that truncation and
/// the flooring of `amount_out` round against the trader, so the post-swap
/// product x·y never drops below the pre-swap product.
pub fn quote_swap(
    pool: &Pool,
    direction: SwapDirection,
    amount_in: u64,
    min_amount_out: u64,
) -> Result<SwapQuote, PoolError> {
    if pool.locked {
        return Err(PoolError::PoolLocked);
    }
    if amount_in == 0 {
        return Err(PoolError::InvalidAmount);
    }

    let (reserve_in, reserve_out) = match direction {
        SwapDirection::XtoY => (pool.reserve_x, pool.reserve_y),
        SwapDirection::YtoX => (pool.reserve_y, pool.reserve_x),
    };
    if reserve_in == 0 || reserve_out == 0 {
        return Err(PoolError::InsufficientLiquidity);
    }
    if pool.fee_bps as u64 > BPS_SCALE {
        return Err(PoolError::InvalidFee);
    }

    let fee_factor = BPS_SCALE as u128 - pool.fee_bps as u128;
    let after_fee = (amount_in as u128) * fee_factor / (BPS_SCALE as u128);

    // amount_out < reserve_out always holds here, so the u64 cast is safe
    let amount_out =
        (after_fee * reserve_out as u128 / (reserve_in as u128 + after_fee)) as u64;

    if amount_out < min_amount_out {
        return Err(PoolError::SlippageExceeded);
    }
    if amount_out >= reserve_out {
        // Unreachable for the formula above; safety net against pathological
        // reserve states
        return Err(PoolError::InsufficientLiquidity);
    }

    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(PoolError::Overflow)?;
    let new_reserve_out = reserve_out - amount_out;

    let (reserve_x, reserve_y) = match direction {
        SwapDirection::XtoY => (new_reserve_in, new_reserve_out),
        SwapDirection::YtoX => (new_reserve_out, new_reserve_in),
    };

    Ok(SwapQuote {
        amount_out,
        pool: Pool {
            reserve_x,
            reserve_y,
            ..*pool
        },
    })
}


#[cfg(kani)]
mod proofs {
    use super::*;

    fn bounded_pool() -> Pool {
        let reserve_x: u64 = kani::any();
        let reserve_y: u64 = kani::any();
        let fee_bps: u16 = kani::any();

        kani::assume(reserve_x > 0 && reserve_x <= 1 << 40);
        kani::assume(reserve_y > 0 && reserve_y <= 1 << 40);
        kani::assume(fee_bps <= 10_000);

        Pool {
            reserve_x,
            reserve_y,
            total_shares: 1,
            fee_bps,
            locked: false,
        }
    }

    /// The product of the reserves never decreases across a swap
    #[kani::proof]
    fn proof_swap_k_non_decreasing() {
        let pool = bounded_pool();
        let amount_in: u64 = kani::any();
        kani::assume(amount_in > 0 && amount_in <= 1 << 40);

        if let Ok(quote) = quote_swap(&pool, SwapDirection::XtoY, amount_in, 0) {
            assert!(quote.pool.k() >= pool.k());
        }
    }

    /// A successful swap leaves both reserves strictly positive
    #[kani::proof]
    fn proof_swap_reserves_positive() {
        let pool = bounded_pool();
        let amount_in: u64 = kani::any();
        kani::assume(amount_in > 0 && amount_in <= 1 << 40);

        if let Ok(quote) = quote_swap(&pool, SwapDirection::XtoY, amount_in, 0) {
            assert!(quote.pool.reserve_x > 0);
            assert!(quote.pool.reserve_y > 0);
        }
    }
}
