//! Swap instruction - trade along the constant product curve

use crate::instructions::{load_config, load_pool};
use crate::pda::CONFIG_SEED;
use crate::token;
use amm_common::*;
use pinocchio::{
    account_info::AccountInfo, instruction::Seed, msg, pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;
use crate::math::{quote_swap, SwapDirection};

/// Process swap instruction
///
/// Quotes the output through the verified pool model, moves the full input
/// amount (fee included) into the matching vault, and pays the output from
/// the opposite vault with the config PDA signing. The truncation directions
/// in the model are what keep the x·y product from ever decreasing.
///
/// # Arguments
/// * `config_account` - The pool config PDA
/// * `lp_mint` - LP share mint recorded in the config (supply snapshot only)
/// * `vault_x` / `vault_y` - Pool reserve token accounts
/// * `user_x` / `user_y` - Trader's token accounts
/// * `user` - The trader, must sign
/// * `direction` - Which token goes in
/// * `amount_in` - Input tokens, fee included
/// * `min_amount_out` - Slippage floor on the output
#[allow(clippy::too_many_arguments)]
pub fn process_swap(
    program_id: &Pubkey,
    config_account: &AccountInfo,
    lp_mint: &AccountInfo,
    vault_x: &AccountInfo,
    vault_y: &AccountInfo,
    user_x: &AccountInfo,
    user_y: &AccountInfo,
    user: &AccountInfo,
    direction: SwapDirection,
    amount_in: u64,
    min_amount_out: u64,
) -> ProgramResult {
    validate_signer(user)?;
    let config = load_config(program_id, config_account)?;
    let pool = load_pool(config, vault_x, vault_y, lp_mint)?;

    let quote = quote_swap(&pool, direction, amount_in, min_amount_out).map_err(AmmError::from)?;

    let user_x_balance = token::expect_token_account(user_x, &config.mint_x)?;
    let user_y_balance = token::expect_token_account(user_y, &config.mint_y)?;

    let (user_in, vault_in, vault_out, user_out, in_balance) = match direction {
        SwapDirection::XtoY => (user_x, vault_x, vault_y, user_y, user_x_balance),
        SwapDirection::YtoX => (user_y, vault_y, vault_x, user_x, user_y_balance),
    };

    if in_balance < amount_in {
        msg!("Error: trader balance too low");
        return Err(AmmError::InsufficientBalance.into());
    }

    token::transfer(user_in, vault_in, user, amount_in)?;

    let seed_bytes = config.seed.to_le_bytes();
    let bump = [config.config_bump];
    let signer_seeds = [
        Seed::from(CONFIG_SEED),
        Seed::from(&seed_bytes),
        Seed::from(config.mint_x.as_ref()),
        Seed::from(config.mint_y.as_ref()),
        Seed::from(&bump),
    ];
    token::transfer_signed(vault_out, user_out, config_account, quote.amount_out, &signer_seeds)?;

    log!("swap: amount_in={}", amount_in);
    log!("swap: amount_out={}", quote.amount_out);

    Ok(())
}
