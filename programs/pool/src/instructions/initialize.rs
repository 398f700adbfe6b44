//! Initialize instruction - create a pool for a (seed, mint_x, mint_y) identity

use crate::pda::{derive_config_pda, derive_lp_mint_pda};
use crate::state::PoolConfig;
use crate::token;
use amm_common::*;
use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};
use crate::math::MAX_FEE_BPS;

/// Process initialize instruction
///
/// Writes the pool configuration into a pre-created config account. The
/// config address is the PDA of `("config", seed, mint_x, mint_y)`, so the
/// same identity can never produce two pools. The LP mint must be the
/// `("lp", config)` PDA with zero supply and the config PDA as its mint
/// authority; both vaults must be empty token accounts of the pool's mints
/// owned by the config PDA. The accounts themselves are created externally
/// before this instruction runs.
///
/// # Arguments
/// * `program_id` - The pool program ID
/// * `config_account` - The pool config PDA (pre-created, zeroed)
/// * `mint_x` / `mint_y` - The two tradable token mints
/// * `lp_mint` - The LP share mint PDA
/// * `vault_x` / `vault_y` - The pool's reserve token accounts
/// * `payer` - Transaction fee payer, must sign
/// * `seed` - Pool-distinguishing seed
/// * `fee_bps` - Swap fee in basis points, 0..=10000
/// * `authority` - Pause authority; all-zero disables locking forever
#[allow(clippy::too_many_arguments)]
pub fn process_initialize(
    program_id: &Pubkey,
    config_account: &AccountInfo,
    mint_x: &AccountInfo,
    mint_y: &AccountInfo,
    lp_mint: &AccountInfo,
    vault_x: &AccountInfo,
    vault_y: &AccountInfo,
    payer: &AccountInfo,
    seed: u64,
    fee_bps: u16,
    authority: Pubkey,
) -> ProgramResult {
    validate_signer(payer)?;

    if fee_bps > MAX_FEE_BPS {
        msg!("Error: fee rate out of range");
        return Err(AmmError::InvalidFee.into());
    }

    if mint_x.key() == mint_y.key() {
        msg!("Error: pool mints must differ");
        return Err(AmmError::InvalidAccount.into());
    }

    // Both sides must be real token mints
    token::mint_supply(mint_x)?;
    token::mint_supply(mint_y)?;

    // The config address is the pool identity; a wrong account here is
    // either spoofed or belongs to a different pool
    let (config_pda, config_bump) = derive_config_pda(program_id, seed, mint_x.key(), mint_y.key());
    if config_account.key() != &config_pda {
        msg!("Error: config account does not match pool identity");
        return Err(AmmError::InvalidAccount.into());
    }

    validate_owner(config_account, program_id)?;
    validate_writable(config_account)?;
    if config_account.data_len() != PoolConfig::LEN {
        msg!("Error: config account has incorrect size");
        return Err(AmmError::InvalidAccount.into());
    }

    let config = unsafe { borrow_account_data_mut::<PoolConfig>(config_account)? };
    if config.is_initialized() {
        msg!("Error: pool already exists for this identity");
        return Err(AmmError::AlreadyExists.into());
    }

    // LP mint: the ("lp", config) PDA, fresh, minted only by the config PDA
    let (lp_pda, lp_bump) = derive_lp_mint_pda(program_id, config_account.key());
    if lp_mint.key() != &lp_pda {
        msg!("Error: LP mint does not match derivation");
        return Err(AmmError::InvalidAccount.into());
    }
    if token::mint_supply(lp_mint)? != 0 {
        msg!("Error: LP mint has existing supply");
        return Err(AmmError::InvalidAccount.into());
    }
    match token::mint_authority(lp_mint)? {
        Some(auth) if auth == config_pda => {}
        _ => {
            msg!("Error: LP mint authority must be the config PDA");
            return Err(AmmError::InvalidAccount.into());
        }
    }

    // Vaults: empty token accounts of the pool mints, owned by the config PDA
    for (vault, mint) in [(vault_x, mint_x), (vault_y, mint_y)] {
        if token::expect_token_account(vault, mint.key())? != 0 {
            msg!("Error: vault has existing balance");
            return Err(AmmError::InvalidAccount.into());
        }
        if token::token_account_owner(vault)? != config_pda {
            msg!("Error: vault must be owned by the config PDA");
            return Err(AmmError::InvalidAccount.into());
        }
    }

    config.initialize_in_place(
        seed,
        authority,
        *mint_x.key(),
        *mint_y.key(),
        *lp_mint.key(),
        *vault_x.key(),
        *vault_y.key(),
        fee_bps,
        config_bump,
        lp_bump,
    );

    msg!("Pool initialized");
    Ok(())
}
