//! Deposit instruction - mint LP shares against both tokens

use crate::instructions::{load_config, load_pool};
use crate::pda::CONFIG_SEED;
use crate::token;
use amm_common::*;
use pinocchio::{
    account_info::AccountInfo, instruction::Seed, msg, pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;
use crate::math::quote_deposit;

/// Process deposit instruction
///
/// Quotes the required contribution through the verified pool model, then
/// moves both tokens into the vaults and mints `desired_shares` LP shares to
/// the depositor. Every check runs before the first CPI, so a rejected
/// deposit leaves all balances untouched.
///
/// # Arguments
/// * `config_account` - The pool config PDA
/// * `lp_mint` - LP share mint recorded in the config
/// * `vault_x` / `vault_y` - Pool reserve token accounts
/// * `user_x` / `user_y` - Depositor's token accounts, debited
/// * `user_lp` - Depositor's LP share account, credited
/// * `user` - The depositor, must sign
/// * `desired_shares` - LP shares to mint
/// * `max_x` / `max_y` - Slippage ceilings on the contribution
#[allow(clippy::too_many_arguments)]
pub fn process_deposit(
    program_id: &Pubkey,
    config_account: &AccountInfo,
    lp_mint: &AccountInfo,
    vault_x: &AccountInfo,
    vault_y: &AccountInfo,
    user_x: &AccountInfo,
    user_y: &AccountInfo,
    user_lp: &AccountInfo,
    user: &AccountInfo,
    desired_shares: u64,
    max_x: u64,
    max_y: u64,
) -> ProgramResult {
    validate_signer(user)?;
    let config = load_config(program_id, config_account)?;
    let pool = load_pool(config, vault_x, vault_y, lp_mint)?;

    let quote = quote_deposit(&pool, desired_shares, max_x, max_y).map_err(AmmError::from)?;

    // The depositor pays from their own accounts of the pool mints
    let user_x_balance = token::expect_token_account(user_x, &config.mint_x)?;
    let user_y_balance = token::expect_token_account(user_y, &config.mint_y)?;
    token::expect_token_account(user_lp, &config.lp_mint)?;

    if user_x_balance < quote.required_x || user_y_balance < quote.required_y {
        msg!("Error: depositor balance too low");
        return Err(AmmError::InsufficientBalance.into());
    }

    token::transfer(user_x, vault_x, user, quote.required_x)?;
    token::transfer(user_y, vault_y, user, quote.required_y)?;

    let seed_bytes = config.seed.to_le_bytes();
    let bump = [config.config_bump];
    let signer_seeds = [
        Seed::from(CONFIG_SEED),
        Seed::from(&seed_bytes),
        Seed::from(config.mint_x.as_ref()),
        Seed::from(config.mint_y.as_ref()),
        Seed::from(&bump),
    ];
    token::mint_to_signed(lp_mint, user_lp, config_account, desired_shares, &signer_seeds)?;

    log!("deposit: shares={}", desired_shares);
    log!("deposit: required_x={}", quote.required_x);
    log!("deposit: required_y={}", quote.required_y);

    Ok(())
}
