//! Withdraw instruction - burn LP shares for both tokens

use crate::instructions::{load_config, load_pool};
use crate::pda::CONFIG_SEED;
use crate::token;
use amm_common::*;
use pinocchio::{
    account_info::AccountInfo, instruction::Seed, msg, pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;
use crate::math::quote_withdraw;

/// Process withdraw instruction
///
/// Quotes the proportional payout through the verified pool model, transfers
/// both tokens out of the vaults (config PDA signs), and burns the shares
/// from the withdrawer's LP account. Checks all run before the first CPI.
///
/// # Arguments
/// * `config_account` - The pool config PDA
/// * `lp_mint` - LP share mint recorded in the config
/// * `vault_x` / `vault_y` - Pool reserve token accounts, debited
/// * `user_x` / `user_y` - Withdrawer's token accounts, credited
/// * `user_lp` - Withdrawer's LP share account, burned from
/// * `user` - The withdrawer, must sign
/// * `shares` - LP shares to burn
/// * `min_x` / `min_y` - Slippage floors on the payout
#[allow(clippy::too_many_arguments)]
pub fn process_withdraw(
    program_id: &Pubkey,
    config_account: &AccountInfo,
    lp_mint: &AccountInfo,
    vault_x: &AccountInfo,
    vault_y: &AccountInfo,
    user_x: &AccountInfo,
    user_y: &AccountInfo,
    user_lp: &AccountInfo,
    user: &AccountInfo,
    shares: u64,
    min_x: u64,
    min_y: u64,
) -> ProgramResult {
    validate_signer(user)?;
    let config = load_config(program_id, config_account)?;
    let pool = load_pool(config, vault_x, vault_y, lp_mint)?;

    let quote = quote_withdraw(&pool, shares, min_x, min_y).map_err(AmmError::from)?;

    let lp_balance = token::expect_token_account(user_lp, &config.lp_mint)?;
    if lp_balance < shares {
        msg!("Error: withdrawer holds too few shares");
        return Err(AmmError::InsufficientShares.into());
    }
    token::expect_token_account(user_x, &config.mint_x)?;
    token::expect_token_account(user_y, &config.mint_y)?;

    let seed_bytes = config.seed.to_le_bytes();
    let bump = [config.config_bump];
    let signer_seeds = [
        Seed::from(CONFIG_SEED),
        Seed::from(&seed_bytes),
        Seed::from(config.mint_x.as_ref()),
        Seed::from(config.mint_y.as_ref()),
        Seed::from(&bump),
    ];
    token::transfer_signed(vault_x, user_x, config_account, quote.amount_x, &signer_seeds)?;
    token::transfer_signed(vault_y, user_y, config_account, quote.amount_y, &signer_seeds)?;
    token::burn(user_lp, lp_mint, user, shares)?;

    log!("withdraw: shares={}", shares);
    log!("withdraw: amount_x={}", quote.amount_x);
    log!("withdraw: amount_y={}", quote.amount_y);

    Ok(())
}
