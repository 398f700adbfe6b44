pub mod deposit;
pub mod initialize;
pub mod lock;
pub mod swap;
pub mod unlock;
pub mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use lock::*;
pub use swap::*;
pub use unlock::*;
pub use withdraw::*;

use crate::state::PoolConfig;
use crate::token;
use amm_common::{borrow_account_data, validate_owner, AmmError};
use pinocchio::{account_info::AccountInfo, pubkey::Pubkey};
use crate::math::Pool;

/// Instruction discriminator
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolInstruction {
    /// Create a pool for a (seed, mint_x, mint_y) identity
    Initialize = 0,
    /// Mint LP shares against a proportional token contribution
    Deposit = 1,
    /// Burn LP shares for a proportional slice of the reserves
    Withdraw = 2,
    /// Trade one token for the other along the curve
    Swap = 3,
    /// Pause the pool (authority only)
    Lock = 4,
    /// Resume the pool (authority only)
    Unlock = 5,
}

/// Load and sanity-check an initialized pool config
pub(crate) fn load_config<'a>(
    program_id: &Pubkey,
    config_account: &'a AccountInfo,
) -> Result<&'a PoolConfig, AmmError> {
    validate_owner(config_account, program_id)?;
    let config = unsafe { borrow_account_data::<PoolConfig>(config_account)? };
    if !config.is_initialized() {
        return Err(AmmError::InvalidAccount);
    }
    Ok(config)
}

/// Verify the vault/LP-mint accounts are the ones recorded in the config and
/// snapshot the live balances into a pure model state
pub(crate) fn load_pool(
    config: &PoolConfig,
    vault_x: &AccountInfo,
    vault_y: &AccountInfo,
    lp_mint: &AccountInfo,
) -> Result<Pool, AmmError> {
    if vault_x.key() != &config.vault_x
        || vault_y.key() != &config.vault_y
        || lp_mint.key() != &config.lp_mint
    {
        return Err(AmmError::InvalidAccount);
    }

    let reserve_x = token::expect_token_account(vault_x, &config.mint_x)?;
    let reserve_y = token::expect_token_account(vault_y, &config.mint_y)?;
    let total_shares = token::mint_supply(lp_mint)?;

    Ok(Pool {
        reserve_x,
        reserve_y,
        total_shares,
        fee_bps: config.fee_bps,
        locked: config.is_locked(),
    })
}
