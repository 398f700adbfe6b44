//! Shared utilities for the AMM pool program
//!
//! Error type, account validation helpers, zero-copy account borrows, and
//! bounds-checked instruction decoding. Everything here is runtime plumbing;
//! the pool math itself lives in the `pool_model` crate.

pub mod error;
pub mod reader;
pub mod validation;

pub use error::AmmError;
pub use reader::InstructionReader;
pub use validation::*;
