use anchor_lang::prelude::*;

#[account]
#[derive(Default)]
pub struct Pool {
    /// Pool creator; the only signer allowed to change the pool status.
    pub creator: Pubkey,

    /// Mint of token A
    pub token_a_mint: Pubkey,
    /// Mint of token B
    pub token_b_mint: Pubkey,

    /// Vault holding the token A reserve (PDA owned by the pool authority)
    pub token_a_vault: Pubkey,
    /// Vault holding the token B reserve (PDA owned by the pool authority)
    pub token_b_vault: Pubkey,

    /// LP share mint (PDA, authority = pool authority)
    pub lp_mint: Pubkey,

    /// Trading fee in basis points, in [0, 10000)
    pub fee_bps: u16,

    /// Caller-supplied salt; part of the pool PDA seeds, so one pool exists
    /// per (token_a_mint, token_b_mint, pool_id).
    pub pool_id: [u8; 32],

    /// Mirror of the live LP mint supply, kept equal at every commit.
    pub total_shares: u64,

    pub status: u8,
    pub last_updated_at: i64,

    pub bump: u8,
    pub authority_bump: u8,
    pub lp_mint_bump: u8,
    pub token_a_vault_bump: u8,
    pub token_b_vault_bump: u8,
}

impl Pool {
    pub const STATUS_ACTIVE: u8 = 0;
    pub const STATUS_PAUSED: u8 = 1;

    // Discriminator (8) + Pubkey (32 * 6) + u16 + [u8; 32] + u64 + u8 + i64 + u8 (5)
    pub const SIZE: usize = 8 + (32 * 6) + 2 + 32 + 8 + 1 + 8 + 5;

    pub fn is_active(&self) -> bool {
        self.status == Self::STATUS_ACTIVE
    }
}

/// Swap direction: which side of the pair the trader pays in.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    AtoB,
    BtoA,
}
