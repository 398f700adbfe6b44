//! Overflow-safe multiply-divide helpers
//!
//! All proportional-share arithmetic goes through these two functions so the
//! rounding direction is explicit at every call site: `ceil` when the pool
//! charges, `floor` when the pool pays out.

use crate::PoolError;

/// floor(a * b / d) with a u128 intermediate
pub fn mul_div_floor(a: u64, b: u64, d: u64) -> Result<u64, PoolError> {
    if d == 0 {
        return Err(PoolError::Overflow);
    }
    let wide = (a as u128) * (b as u128) / (d as u128);
    u64::try_from(wide).map_err(|_| PoolError::Overflow)
}

/// ceil(a * b / d) with a u128 intermediate
pub fn mul_div_ceil(a: u64, b: u64, d: u64) -> Result<u64, PoolError> {
    if d == 0 {
        return Err(PoolError::Overflow);
    }
    let num = (a as u128) * (b as u128);
    let wide = num.div_ceil(d as u128);
    u64::try_from(wide).map_err(|_| PoolError::Overflow)
}


#[cfg(kani)]
mod proofs {
    use super::*;

    /// ceil >= floor, and they differ by at most one
    #[kani::proof]
    fn proof_ceil_floor_adjacent() {
        let a: u64 = kani::any();
        let b: u64 = kani::any();
        let d: u64 = kani::any();
        kani::assume(d > 0);

        if let (Ok(lo), Ok(hi)) = (mul_div_floor(a, b, d), mul_div_ceil(a, b, d)) {
            assert!(hi >= lo);
            assert!(hi - lo <= 1);
        }
    }

    /// floor result times denominator never exceeds the true product
    #[kani::proof]
    fn proof_floor_rounds_down() {
        let a: u64 = kani::any();
        let b: u64 = kani::any();
        let d: u64 = kani::any();
        kani::assume(d > 0);

        if let Ok(q) = mul_div_floor(a, b, d) {
            assert!((q as u128) * (d as u128) <= (a as u128) * (b as u128));
        }
    }
}
