//! PDA derivation for pool accounts
//!
//! Pool identity is the config PDA, derived from `(seed, mint_x, mint_y)`:
//! the same triple always resolves to the same pool, so a duplicate pool
//! cannot be created. The LP mint hangs off the config address.

use pinocchio::pubkey::{find_program_address, Pubkey};

/// Seed prefix for the pool config account
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix for the LP share mint
pub const LP_SEED: &[u8] = b"lp";

/// Derive the config PDA for a pool identity
pub fn derive_config_pda(
    program_id: &Pubkey,
    seed: u64,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
) -> (Pubkey, u8) {
    find_program_address(
        &[
            CONFIG_SEED,
            &seed.to_le_bytes(),
            mint_x.as_ref(),
            mint_y.as_ref(),
        ],
        program_id,
    )
}

/// Derive the LP mint PDA for a pool config
pub fn derive_lp_mint_pda(program_id: &Pubkey, config: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[LP_SEED, config.as_ref()], program_id)
}
