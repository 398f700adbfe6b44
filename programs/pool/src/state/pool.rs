//! Pool configuration account

use pinocchio::pubkey::Pubkey;

/// Per-pool configuration, written once at initialization
///
/// Layout is `#[repr(C)]` for zero-copy access; the account data must be
/// exactly [`PoolConfig::LEN`] bytes. The pool's PDA is derived from
/// `(seed, mint_x, mint_y)`, so one configuration exists per identity.
/// Reserves and share supply are NOT mirrored here: they are read from the
/// vault and LP-mint accounts on every operation.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    /// Pool-distinguishing seed, part of the PDA derivation
    pub seed: u64,
    /// Pause authority; all-zero means the pool can never be locked
    pub authority: Pubkey,
    /// Token X mint
    pub mint_x: Pubkey,
    /// Token Y mint
    pub mint_y: Pubkey,
    /// LP share mint (PDA, mint authority is the config PDA)
    pub lp_mint: Pubkey,
    /// Vault token account holding the X reserve
    pub vault_x: Pubkey,
    /// Vault token account holding the Y reserve
    pub vault_y: Pubkey,
    /// Swap fee in basis points, fixed at creation
    pub fee_bps: u16,
    /// Pause flag (0 = open, 1 = locked)
    pub locked: u8,
    /// PDA bump for this config account
    pub config_bump: u8,
    /// PDA bump for the LP mint
    pub lp_bump: u8,
    /// Explicit padding to an 8-byte boundary
    pub padding: [u8; 3],
}

impl PoolConfig {
    /// Size of the config account data
    pub const LEN: usize = core::mem::size_of::<Self>();

    /// A written config always carries real mints; the zero pubkey marks a
    /// freshly created, never-initialized account
    pub fn is_initialized(&self) -> bool {
        self.mint_x != Pubkey::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked != 0
    }

    /// Whether a pause authority was set at creation
    pub fn has_authority(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Write all fields in place (avoids a stack copy of the struct)
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_in_place(
        &mut self,
        seed: u64,
        authority: Pubkey,
        mint_x: Pubkey,
        mint_y: Pubkey,
        lp_mint: Pubkey,
        vault_x: Pubkey,
        vault_y: Pubkey,
        fee_bps: u16,
        config_bump: u8,
        lp_bump: u8,
    ) {
        self.seed = seed;
        self.authority = authority;
        self.mint_x = mint_x;
        self.mint_y = mint_y;
        self.lp_mint = lp_mint;
        self.vault_x = vault_x;
        self.vault_y = vault_y;
        self.fee_bps = fee_bps;
        self.locked = 0;
        self.config_bump = config_bump;
        self.lp_bump = lp_bump;
        self.padding = [0; 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_size() {
        use core::mem::size_of;

        // 8 (seed) + 6 * 32 (pubkeys) + 2 + 1 + 1 + 1 + 3 padding
        assert_eq!(size_of::<PoolConfig>(), 208);
        assert_eq!(size_of::<PoolConfig>(), PoolConfig::LEN);
    }

    #[test]
    fn test_initialize_in_place() {
        let mut config = unsafe { core::mem::zeroed::<PoolConfig>() };
        assert!(!config.is_initialized());
        assert!(!config.has_authority());

        let mint_x = [1u8; 32];
        let mint_y = [2u8; 32];
        let lp_mint = [3u8; 32];
        let vault_x = [4u8; 32];
        let vault_y = [5u8; 32];
        let authority = [6u8; 32];

        config.initialize_in_place(
            42, authority, mint_x, mint_y, lp_mint, vault_x, vault_y, 30, 254, 253,
        );

        assert!(config.is_initialized());
        assert!(config.has_authority());
        assert_eq!(config.seed, 42);
        assert_eq!(config.fee_bps, 30);
        assert_eq!(config.locked, 0);
        assert!(!config.is_locked());
        assert_eq!(config.config_bump, 254);
        assert_eq!(config.lp_bump, 253);

        config.locked = 1;
        assert!(config.is_locked());
    }
}
