//! Pool program entrypoint

use pinocchio::{
    account_info::AccountInfo, entrypoint, msg, pubkey::Pubkey, ProgramResult,
};

use crate::instructions::{
    process_deposit, process_initialize, process_lock, process_swap, process_unlock,
    process_withdraw, PoolInstruction,
};
use crate::token::TOKEN_PROGRAM_ID;
use amm_common::{validate_writable, AmmError, InstructionReader};
use crate::math::SwapDirection;

entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Check minimum instruction data length
    if instruction_data.is_empty() {
        msg!("Error: Instruction data is empty");
        return Err(AmmError::InvalidInstruction.into());
    }

    // Parse instruction discriminator
    let discriminator = instruction_data[0];
    let instruction = match discriminator {
        0 => PoolInstruction::Initialize,
        1 => PoolInstruction::Deposit,
        2 => PoolInstruction::Withdraw,
        3 => PoolInstruction::Swap,
        4 => PoolInstruction::Lock,
        5 => PoolInstruction::Unlock,
        _ => {
            msg!("Error: Unknown instruction");
            return Err(AmmError::InvalidInstruction.into());
        }
    };

    // Dispatch to instruction handler
    match instruction {
        PoolInstruction::Initialize => {
            msg!("Instruction: Initialize");
            process_initialize_inner(program_id, accounts, &instruction_data[1..])
        }
        PoolInstruction::Deposit => {
            msg!("Instruction: Deposit");
            process_deposit_inner(program_id, accounts, &instruction_data[1..])
        }
        PoolInstruction::Withdraw => {
            msg!("Instruction: Withdraw");
            process_withdraw_inner(program_id, accounts, &instruction_data[1..])
        }
        PoolInstruction::Swap => {
            msg!("Instruction: Swap");
            process_swap_inner(program_id, accounts, &instruction_data[1..])
        }
        PoolInstruction::Lock => {
            msg!("Instruction: Lock");
            process_lock_inner(program_id, accounts)
        }
        PoolInstruction::Unlock => {
            msg!("Instruction: Unlock");
            process_unlock_inner(program_id, accounts)
        }
    }
}

// Instruction processors with account validation

/// Process initialize instruction
///
/// Expected accounts:
/// 0. `[writable]` Config account (PDA of ("config", seed, mint_x, mint_y), pre-created)
/// 1. `[]` Mint X
/// 2. `[]` Mint Y
/// 3. `[]` LP mint (PDA of ("lp", config), zero supply)
/// 4. `[]` Vault X (token account owned by config PDA, empty)
/// 5. `[]` Vault Y (token account owned by config PDA, empty)
/// 6. `[signer]` Payer account
///
/// Expected data layout (43 bytes):
/// - seed: u64 (8 bytes)
/// - fee_bps: u16 (2 bytes)
/// - has_authority: u8 (1 byte)
/// - authority: Pubkey (32 bytes, ignored when has_authority == 0)
fn process_initialize_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if accounts.len() < 7 {
        msg!("Error: Initialize instruction requires at least 7 accounts");
        return Err(AmmError::InvalidInstruction.into());
    }

    let config_account = &accounts[0];
    let mint_x = &accounts[1];
    let mint_y = &accounts[2];
    let lp_mint = &accounts[3];
    let vault_x = &accounts[4];
    let vault_y = &accounts[5];
    let payer = &accounts[6];

    let mut reader = InstructionReader::new(data);
    let seed = reader.read_u64()?;
    let fee_bps = reader.read_u16()?;
    let has_authority = reader.read_u8()?;
    let authority_bytes = reader.read_bytes::<32>()?;
    let authority = if has_authority != 0 {
        Pubkey::from(authority_bytes)
    } else {
        Pubkey::default()
    };

    process_initialize(
        program_id,
        config_account,
        mint_x,
        mint_y,
        lp_mint,
        vault_x,
        vault_y,
        payer,
        seed,
        fee_bps,
        authority,
    )?;

    msg!("Initialize processed successfully");
    Ok(())
}

/// Process deposit instruction
///
/// Expected accounts:
/// 0. `[]` Config account
/// 1. `[writable]` LP mint
/// 2. `[writable]` Vault X
/// 3. `[writable]` Vault Y
/// 4. `[writable]` User token X account
/// 5. `[writable]` User token Y account
/// 6. `[writable]` User LP account
/// 7. `[signer]` User
/// 8. `[]` Token program
///
/// Expected data layout (24 bytes):
/// - desired_shares: u64 (8 bytes)
/// - max_x: u64 (8 bytes)
/// - max_y: u64 (8 bytes)
fn process_deposit_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if accounts.len() < 9 {
        msg!("Error: Deposit instruction requires at least 9 accounts");
        return Err(AmmError::InvalidInstruction.into());
    }

    let config_account = &accounts[0];
    let lp_mint = &accounts[1];
    let vault_x = &accounts[2];
    let vault_y = &accounts[3];
    let user_x = &accounts[4];
    let user_y = &accounts[5];
    let user_lp = &accounts[6];
    let user = &accounts[7];
    let token_program = &accounts[8];

    if token_program.key() != &TOKEN_PROGRAM_ID {
        msg!("Error: wrong token program");
        return Err(AmmError::InvalidAccount.into());
    }
    for account in [lp_mint, vault_x, vault_y, user_x, user_y, user_lp] {
        validate_writable(account)?;
    }

    let mut reader = InstructionReader::new(data);
    let desired_shares = reader.read_u64()?;
    let max_x = reader.read_u64()?;
    let max_y = reader.read_u64()?;

    process_deposit(
        program_id,
        config_account,
        lp_mint,
        vault_x,
        vault_y,
        user_x,
        user_y,
        user_lp,
        user,
        desired_shares,
        max_x,
        max_y,
    )?;

    msg!("Deposit processed successfully");
    Ok(())
}

/// Process withdraw instruction
///
/// Expected accounts: same as Deposit.
///
/// Expected data layout (24 bytes):
/// - shares: u64 (8 bytes)
/// - min_x: u64 (8 bytes)
/// - min_y: u64 (8 bytes)
fn process_withdraw_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if accounts.len() < 9 {
        msg!("Error: Withdraw instruction requires at least 9 accounts");
        return Err(AmmError::InvalidInstruction.into());
    }

    let config_account = &accounts[0];
    let lp_mint = &accounts[1];
    let vault_x = &accounts[2];
    let vault_y = &accounts[3];
    let user_x = &accounts[4];
    let user_y = &accounts[5];
    let user_lp = &accounts[6];
    let user = &accounts[7];
    let token_program = &accounts[8];

    if token_program.key() != &TOKEN_PROGRAM_ID {
        msg!("Error: wrong token program");
        return Err(AmmError::InvalidAccount.into());
    }
    for account in [lp_mint, vault_x, vault_y, user_x, user_y, user_lp] {
        validate_writable(account)?;
    }

    let mut reader = InstructionReader::new(data);
    let shares = reader.read_u64()?;
    let min_x = reader.read_u64()?;
    let min_y = reader.read_u64()?;

    process_withdraw(
        program_id,
        config_account,
        lp_mint,
        vault_x,
        vault_y,
        user_x,
        user_y,
        user_lp,
        user,
        shares,
        min_x,
        min_y,
    )?;

    msg!("Withdraw processed successfully");
    Ok(())
}

/// Process swap instruction
///
/// Expected accounts:
/// 0. `[]` Config account
/// 1. `[]` LP mint
/// 2. `[writable]` Vault X
/// 3. `[writable]` Vault Y
/// 4. `[writable]` User token X account
/// 5. `[writable]` User token Y account
/// 6. `[signer]` User
/// 7. `[]` Token program
///
/// Expected data layout (17 bytes):
/// - direction: u8 (0 = X in / Y out, 1 = Y in / X out)
/// - amount_in: u64 (8 bytes)
/// - min_amount_out: u64 (8 bytes)
fn process_swap_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if accounts.len() < 8 {
        msg!("Error: Swap instruction requires at least 8 accounts");
        return Err(AmmError::InvalidInstruction.into());
    }

    let config_account = &accounts[0];
    let lp_mint = &accounts[1];
    let vault_x = &accounts[2];
    let vault_y = &accounts[3];
    let user_x = &accounts[4];
    let user_y = &accounts[5];
    let user = &accounts[6];
    let token_program = &accounts[7];

    if token_program.key() != &TOKEN_PROGRAM_ID {
        msg!("Error: wrong token program");
        return Err(AmmError::InvalidAccount.into());
    }
    for account in [vault_x, vault_y, user_x, user_y] {
        validate_writable(account)?;
    }

    let mut reader = InstructionReader::new(data);
    let direction = match reader.read_u8()? {
        0 => SwapDirection::XtoY,
        1 => SwapDirection::YtoX,
        _ => {
            msg!("Error: Invalid swap direction");
            return Err(AmmError::InvalidInstruction.into());
        }
    };
    let amount_in = reader.read_u64()?;
    let min_amount_out = reader.read_u64()?;

    process_swap(
        program_id,
        config_account,
        lp_mint,
        vault_x,
        vault_y,
        user_x,
        user_y,
        user,
        direction,
        amount_in,
        min_amount_out,
    )?;

    msg!("Swap processed successfully");
    Ok(())
}

/// Process lock instruction
///
/// Expected accounts:
/// 0. `[writable]` Config account
/// 1. `[signer]` Pause authority
fn process_lock_inner(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: Lock instruction requires at least 2 accounts");
        return Err(AmmError::InvalidInstruction.into());
    }

    process_lock(program_id, &accounts[0], &accounts[1])?;

    msg!("Lock processed successfully");
    Ok(())
}

/// Process unlock instruction
///
/// Expected accounts:
/// 0. `[writable]` Config account
/// 1. `[signer]` Pause authority
fn process_unlock_inner(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: Unlock instruction requires at least 2 accounts");
        return Err(AmmError::InvalidInstruction.into());
    }

    process_unlock(program_id, &accounts[0], &accounts[1])?;

    msg!("Unlock processed successfully");
    Ok(())
}
