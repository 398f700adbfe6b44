//! Unlock instruction
//!
//! Allows the pause authority to resume deposits, withdrawals, and swaps.

use crate::state::PoolConfig;
use amm_common::*;
use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};

/// Process unlock instruction
///
/// # Arguments
/// * `config_account` - The pool config PDA (mut)
/// * `authority` - The pause authority, must sign
pub fn process_unlock(
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
        msg!("Error: only the pool authority can unlock");
        return Err(AmmError::Unauthorized.into());
    }

    config.locked = 0;
    msg!("Pool unlocked");

    Ok(())
}
