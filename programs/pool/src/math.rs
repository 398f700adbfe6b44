//! Pool math - imports the verified model functions
//!
//! All pricing math lives in `pool_model` so it can be fuzzed and proven
//! without the runtime. This module re-exports it for the instruction
//! handlers and pins the on-chain-facing behavior with scenario tests.

/// Re-export verified functions and types
pub use pool_model::{
    quote_deposit, quote_swap, quote_withdraw, DepositQuote, Pool, PoolError, SwapDirection,
    SwapQuote, WithdrawQuote, BPS_SCALE, MAX_FEE_BPS,
};
