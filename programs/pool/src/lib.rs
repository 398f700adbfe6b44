//! Constant-product AMM pool program
//!
//! One pool per `(seed, mint_x, mint_y)` identity. Liquidity providers mint
//! and burn LP shares against proportional slices of the two vault reserves;
//! traders swap along the x·y=k curve with the fee retained in the pool.
//! All pricing math lives in the verified `pool_model` crate; this program
//! is the account-validation and token-transfer shell around it.

pub mod entrypoint;
pub mod instructions;
pub mod math;
pub mod pda;
pub mod state;
pub mod token;

pinocchio_pubkey::declare_id!("7WbSMmaa2BW9PiieiGtwcxbXmBducsw3apxH6oLn9rie");
