//! Account validation helpers and zero-copy state borrows

use crate::error::AmmError;
use pinocchio::{account_info::AccountInfo, pubkey::Pubkey};

/// Verify the account is owned by the given program
pub fn validate_owner(account: &AccountInfo, program_id: &Pubkey) -> Result<(), AmmError> {
    if !account.is_owned_by(program_id) {
        return Err(AmmError::InvalidAccount);
    }
    Ok(())
}

/// Verify the account is writable
pub fn validate_writable(account: &AccountInfo) -> Result<(), AmmError> {
    if !account.is_writable() {
        return Err(AmmError::InvalidAccount);
    }
    Ok(())
}

/// Verify the account signed the transaction
pub fn validate_signer(account: &AccountInfo) -> Result<(), AmmError> {
    if !account.is_signer() {
        return Err(AmmError::Unauthorized);
    }
    Ok(())
}

/// Borrow account data as a reference to `T`
///
/// # Safety
/// `T` must be `#[repr(C)]` with a layout matching the account data, and the
/// caller must ensure no other live borrow of the same account data exists
/// for the lifetime of the returned reference.
pub unsafe fn borrow_account_data<T>(account: &AccountInfo) -> Result<&T, AmmError> {
    let data = account.borrow_data_unchecked();
    if data.len() < core::mem::size_of::<T>() {
        return Err(AmmError::InvalidAccount);
    }
    Ok(&*(data.as_ptr() as *const T))
}

/// Borrow account data as a mutable reference to `T`
///
/// # Safety
/// Same requirements as [`borrow_account_data`], plus the account must be
/// writable in this transaction.
pub unsafe fn borrow_account_data_mut<T>(account: &AccountInfo) -> Result<&mut T, AmmError> {
    let data = account.borrow_mut_data_unchecked();
    if data.len() < core::mem::size_of::<T>() {
        return Err(AmmError::InvalidAccount);
    }
    Ok(&mut *(data.as_mut_ptr() as *mut T))
}
