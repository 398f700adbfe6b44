//! Token-program interface: zero-copy account reads and hand-built CPIs
//!
//! The pool consumes the token program as its balance-accounting service:
//! vault reserves and LP supply are read straight out of the token/mint
//! account data, and every balance change is a Transfer/MintTo/Burn CPI.

use amm_common::AmmError;
use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Seed, Signer},
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    ProgramResult,
};

/// SPL token program
pub const TOKEN_PROGRAM_ID: Pubkey =
    pinocchio_pubkey::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// spl_token::state::Account packed length
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// spl_token::state::Mint packed length
pub const MINT_LEN: usize = 82;

// spl_token instruction tags
const TRANSFER_TAG: u8 = 3;
const MINT_TO_TAG: u8 = 7;
const BURN_TAG: u8 = 8;

fn check_token_account(account: &AccountInfo) -> Result<(), AmmError> {
    if !account.is_owned_by(&TOKEN_PROGRAM_ID) || account.data_len() != TOKEN_ACCOUNT_LEN {
        return Err(AmmError::InvalidAccount);
    }
    Ok(())
}

fn read_pubkey(data: &[u8], offset: usize) -> Pubkey {
    let mut out = [0u8; 32];
    out.copy_from_slice(&data[offset..offset + 32]);
    out
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut out = [0u8; 8];
    out.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(out)
}

/// The mint a token account holds
pub fn token_account_mint(account: &AccountInfo) -> Result<Pubkey, AmmError> {
    check_token_account(account)?;
    let data = account
        .try_borrow_data()
        .map_err(|_| AmmError::InvalidAccount)?;
    Ok(read_pubkey(&data, 0))
}

/// The wallet that owns a token account
pub fn token_account_owner(account: &AccountInfo) -> Result<Pubkey, AmmError> {
    check_token_account(account)?;
    let data = account
        .try_borrow_data()
        .map_err(|_| AmmError::InvalidAccount)?;
    Ok(read_pubkey(&data, 32))
}

/// Current balance of a token account
pub fn token_account_amount(account: &AccountInfo) -> Result<u64, AmmError> {
    check_token_account(account)?;
    let data = account
        .try_borrow_data()
        .map_err(|_| AmmError::InvalidAccount)?;
    Ok(read_u64(&data, 64))
}

/// Validate a token account's mint and return its balance
pub fn expect_token_account(account: &AccountInfo, mint: &Pubkey) -> Result<u64, AmmError> {
    check_token_account(account)?;
    let data = account
        .try_borrow_data()
        .map_err(|_| AmmError::InvalidAccount)?;
    if &read_pubkey(&data, 0) != mint {
        return Err(AmmError::InvalidAccount);
    }
    Ok(read_u64(&data, 64))
}

/// Outstanding supply of a mint
pub fn mint_supply(account: &AccountInfo) -> Result<u64, AmmError> {
    if !account.is_owned_by(&TOKEN_PROGRAM_ID) || account.data_len() != MINT_LEN {
        return Err(AmmError::InvalidAccount);
    }
    let data = account
        .try_borrow_data()
        .map_err(|_| AmmError::InvalidAccount)?;
    Ok(read_u64(&data, 36))
}

/// Mint authority of a mint, if one is set
pub fn mint_authority(account: &AccountInfo) -> Result<Option<Pubkey>, AmmError> {
    if !account.is_owned_by(&TOKEN_PROGRAM_ID) || account.data_len() != MINT_LEN {
        return Err(AmmError::InvalidAccount);
    }
    let data = account
        .try_borrow_data()
        .map_err(|_| AmmError::InvalidAccount)?;
    let tag = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    if tag == 1 {
        Ok(Some(read_pubkey(&data, 4)))
    } else {
        Ok(None)
    }
}

/// Transfer tokens with the caller's wallet as authority
pub fn transfer(
    from: &AccountInfo,
    to: &AccountInfo,
    authority: &AccountInfo,
    amount: u64,
) -> ProgramResult {
    let mut data = [0u8; 9];
    data[0] = TRANSFER_TAG;
    data[1..9].copy_from_slice(&amount.to_le_bytes());

    let instruction = Instruction {
        program_id: &TOKEN_PROGRAM_ID,
        accounts: &[
            AccountMeta {
                pubkey: from.key(),
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: to.key(),
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: authority.key(),
                is_signer: true,
                is_writable: false,
            },
        ],
        data: &data,
    };

    invoke(&instruction, &[from, to, authority])
}

/// Transfer tokens out of a vault, signed by the config PDA
pub fn transfer_signed(
    from: &AccountInfo,
    to: &AccountInfo,
    authority: &AccountInfo,
    amount: u64,
    signer_seeds: &[Seed],
) -> ProgramResult {
    let mut data = [0u8; 9];
    data[0] = TRANSFER_TAG;
    data[1..9].copy_from_slice(&amount.to_le_bytes());

    let instruction = Instruction {
        program_id: &TOKEN_PROGRAM_ID,
        accounts: &[
            AccountMeta {
                pubkey: from.key(),
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: to.key(),
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: authority.key(),
                is_signer: true,
                is_writable: false,
            },
        ],
        data: &data,
    };

    let signers = [Signer::from(signer_seeds)];
    invoke_signed(&instruction, &[from, to, authority], &signers)
}

/// Mint LP shares to a holder, signed by the config PDA (mint authority)
pub fn mint_to_signed(
    mint: &AccountInfo,
    to: &AccountInfo,
    authority: &AccountInfo,
    amount: u64,
    signer_seeds: &[Seed],
) -> ProgramResult {
    let mut data = [0u8; 9];
    data[0] = MINT_TO_TAG;
    data[1..9].copy_from_slice(&amount.to_le_bytes());

    let instruction = Instruction {
        program_id: &TOKEN_PROGRAM_ID,
        accounts: &[
            AccountMeta {
                pubkey: mint.key(),
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: to.key(),
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: authority.key(),
                is_signer: true,
                is_writable: false,
            },
        ],
        data: &data,
    };

    let signers = [Signer::from(signer_seeds)];
    invoke_signed(&instruction, &[mint, to, authority], &signers)
}

/// Burn LP shares from the holder's account, holder signs
pub fn burn(
    from: &AccountInfo,
    mint: &AccountInfo,
    authority: &AccountInfo,
    amount: u64,
) -> ProgramResult {
    let mut data = [0u8; 9];
    data[0] = BURN_TAG;
    data[1..9].copy_from_slice(&amount.to_le_bytes());

    let instruction = Instruction {
        program_id: &TOKEN_PROGRAM_ID,
        accounts: &[
            AccountMeta {
                pubkey: from.key(),
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: mint.key(),
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: authority.key(),
                is_signer: true,
                is_writable: false,
            },
        ],
        data: &data,
    };

    invoke(&instruction, &[from, mint, authority])
}
