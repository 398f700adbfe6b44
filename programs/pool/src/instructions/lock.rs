//! Lock instruction
//!
//! Allows the pause authority to halt deposits, withdrawals, and swaps.
//! While locked, every mutating instruction is rejected with PoolLocked.

use crate::state::PoolConfig;
use amm_common::*;
use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};

/// Process lock instruction
///
/// Only the authority recorded at pool creation can lock; a pool created
/// without an authority can never be locked.
///
/// # Arguments
/// * `config_account` - The pool config PDA (mut)
/// * `authority` - The pause authority, must sign
pub fn process_lock(
    program_id: &Pubkey,
    config_account: &AccountInfo,
    authority: &AccountInfo,
) -> ProgramResult {
    validate_owner(config_account, program_id)?;
    validate_writable(config_account)?;
    validate_signer(authority)?;

    let config = unsafe { borrow_account_data_mut::<PoolConfig>(config_account)? };
    if !config.is_initialized() {
        return Err(AmmError::InvalidAccount.into());
    }
    if !config.has_authority() || authority.key() != &config.authority {
        msg!("Error: only the pool authority can lock");
        return Err(AmmError::Unauthorized.into());
    }

    config.locked = 1;
    msg!("Pool locked");

    Ok(())
}
