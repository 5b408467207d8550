use anchor_lang::prelude::*;

#[constant]
pub const POOL_SEED: &str = "pool";

#[constant]
pub const AUTHORITY_SEED: &str = "authority";

#[constant]
pub const VAULT_A_SEED: &str = "vault_a";

#[constant]
pub const VAULT_B_SEED: &str = "vault_b";

#[constant]
pub const LP_MINT_SEED: &str = "lp_mint";

/// Fees are expressed in basis points; a valid pool fee is in [0, 10000).
#[constant]
pub const FEE_DENOMINATOR: u64 = 10_000;

#[constant]
pub const LP_MINT_DECIMALS: u8 = 6;
