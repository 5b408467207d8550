use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{
        AUTHORITY_SEED, FEE_DENOMINATOR, LP_MINT_DECIMALS, LP_MINT_SEED, POOL_SEED, VAULT_A_SEED,
        VAULT_B_SEED,
    },
    errors::AmmError,
    events::PoolCreated,
    state::Pool,
};

pub fn create_pool(ctx: Context<CreatePool>, fee_bps: u16, pool_id: [u8; 32]) -> Result<()> {
    let clock = Clock::get()?;
    let pool = &mut ctx.accounts.pool;

    pool.creator = ctx.accounts.payer.key();
    pool.token_a_mint = ctx.accounts.token_a_mint.key();
    pool.token_b_mint = ctx.accounts.token_b_mint.key();
    pool.token_a_vault = ctx.accounts.token_a_vault.key();
    pool.token_b_vault = ctx.accounts.token_b_vault.key();
    pool.lp_mint = ctx.accounts.lp_mint.key();
    pool.fee_bps = fee_bps;
    pool.pool_id = pool_id;
    pool.total_shares = 0;
    pool.status = Pool::STATUS_ACTIVE;
    pool.last_updated_at = clock.unix_timestamp;
    pool.bump = ctx.bumps.pool;
    pool.authority_bump = ctx.bumps.pool_authority;
    pool.lp_mint_bump = ctx.bumps.lp_mint;
    pool.token_a_vault_bump = ctx.bumps.token_a_vault;
    pool.token_b_vault_bump = ctx.bumps.token_b_vault;

    emit!(PoolCreated {
        pool: pool.key(),
        creator: pool.creator,
        token_a_mint: pool.token_a_mint,
        token_b_mint: pool.token_b_mint,
        fee_bps,
        pool_id,
        timestamp: clock.unix_timestamp,
    });
    msg!("Pool created: fee_bps={}", fee_bps);

    Ok(())
}

#[derive(Accounts)]
#[instruction(fee_bps: u16, pool_id: [u8; 32])]
pub struct CreatePool<'info> {
    #[account(
        init,
        payer = payer,
        space = Pool::SIZE,
        seeds = [
            POOL_SEED.as_bytes(),
            token_a_mint.key().as_ref(),
            token_b_mint.key().as_ref(),
            pool_id.as_ref(),
        ],
        bump,
        constraint = token_a_mint.key() != token_b_mint.key() @ AmmError::InvalidTokenPair,
        constraint = (fee_bps as u64) < FEE_DENOMINATOR @ AmmError::InvalidFeeConfiguration,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: Per-pool signing authority PDA, derived from the pool address.
    /// Never holds data; only signs vault and mint CPIs.
    #[account(
        seeds = [AUTHORITY_SEED.as_bytes(), pool.key().as_ref()],
        bump,
    )]
    pub pool_authority: AccountInfo<'info>,

    pub token_a_mint: Box<Account<'info, Mint>>,

    pub token_b_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        token::mint = token_a_mint,
        token::authority = pool_authority,
        seeds = [VAULT_A_SEED.as_bytes(), pool.key().as_ref()],
        bump,
    )]
    pub token_a_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        token::mint = token_b_mint,
        token::authority = pool_authority,
        seeds = [VAULT_B_SEED.as_bytes(), pool.key().as_ref()],
        bump,
    )]
    pub token_b_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        seeds = [LP_MINT_SEED.as_bytes(), pool.key().as_ref()],
        bump,
        mint::decimals = LP_MINT_DECIMALS,
        mint::authority = pool_authority,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    /// The account paying for all rents
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
